use super::color::hsl_to_rgb;
use super::config::SceneConfig;
use super::theme::Theme;
use glam::{Mat4, Vec2, Vec3};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Decorative point cloud behind the navigation scene.
///
/// Positions are drawn once. Colors live in a single buffer that `recolor`
/// overwrites in place; `color_generation` bumps once per recolor so the
/// renderer knows to re-upload.
pub struct ParticleField<R: Rng = StdRng> {
    positions: Vec<Vec3>,
    colors: Vec<[f32; 3]>,
    hue: f32,
    saturation: f32,
    spin_per_frame: Vec2,
    rotation: Vec2,
    color_generation: u64,
    rng: R,
}

impl ParticleField<StdRng> {
    /// Field seeded from the platform entropy source.
    pub fn new(config: &SceneConfig, theme: Theme) -> Self {
        Self::with_rng(config, theme, StdRng::from_entropy())
    }
}

impl<R: Rng> ParticleField<R> {
    pub fn with_rng(config: &SceneConfig, theme: Theme, mut rng: R) -> Self {
        let half = config.particle_cube_size * 0.5;
        let positions = (0..config.particle_count)
            .map(|_| {
                Vec3::new(
                    rng.gen_range(-half..half),
                    rng.gen_range(-half..half),
                    rng.gen_range(-half..half),
                )
            })
            .collect::<Vec<_>>();
        let mut field = Self {
            colors: vec![[0.0; 3]; positions.len()],
            positions,
            hue: config.particle_hue,
            saturation: config.particle_saturation,
            spin_per_frame: config.particle_spin_per_frame,
            rotation: Vec2::ZERO,
            color_generation: 0,
            rng,
        };
        field.recolor(theme);
        field
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    #[inline]
    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    #[inline]
    pub fn colors(&self) -> &[[f32; 3]] {
        &self.colors
    }

    #[inline]
    pub fn color_generation(&self) -> u64 {
        self.color_generation
    }

    /// Accumulated rotation about X and Y in radians.
    #[inline]
    pub fn rotation(&self) -> Vec2 {
        self.rotation
    }

    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_rotation_y(self.rotation.y) * Mat4::from_rotation_x(self.rotation.x)
    }

    /// Redraw every color for `theme` with fresh randomness.
    pub fn recolor(&mut self, theme: Theme) {
        let band = theme.particle_lightness_band();
        let (hue, sat) = (self.hue, self.saturation);
        for c in self.colors.iter_mut() {
            let l = self.rng.gen_range(band.clone());
            *c = hsl_to_rgb(hue, sat, l);
        }
        self.color_generation += 1;
    }

    pub fn advance_frame(&mut self) {
        self.rotation += self.spin_per_frame;
    }
}

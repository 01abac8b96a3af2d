// Host-side tests for the particle field.

use orbit_folio::core::color::lightness;
use orbit_folio::core::{ParticleField, SceneConfig, Theme};
use rand::rngs::StdRng;
use rand::SeedableRng;

const EPS: f32 = 1e-5;

fn field(theme: Theme, seed: u64) -> ParticleField<StdRng> {
    ParticleField::with_rng(&SceneConfig::default(), theme, StdRng::seed_from_u64(seed))
}

fn assert_in_band(field: &ParticleField<StdRng>, theme: Theme) {
    let band = theme.particle_lightness_band();
    for (i, c) in field.colors().iter().enumerate() {
        let l = lightness(*c);
        assert!(
            l >= band.start - EPS && l < band.end + EPS,
            "color {i} lightness {l} outside {:?} for {:?}",
            band,
            theme
        );
    }
}

#[test]
fn initialize_produces_count_positions_and_colors() {
    let f = field(Theme::Light, 1);
    assert_eq!(f.len(), 2000);
    assert_eq!(f.positions().len(), 2000);
    assert_eq!(f.colors().len(), 2000);
}

#[test]
fn positions_stay_inside_cube() {
    let config = SceneConfig::default();
    let half = config.particle_cube_size * 0.5;
    let f = field(Theme::Dark, 2);
    for p in f.positions() {
        for v in p.to_array() {
            assert!((-half..half).contains(&v), "coordinate {v} outside cube");
        }
    }
}

#[test]
fn custom_count_is_honored() {
    let config = SceneConfig {
        particle_count: 17,
        ..SceneConfig::default()
    };
    let f = ParticleField::with_rng(&config, Theme::Light, StdRng::seed_from_u64(3));
    assert_eq!(f.positions().len(), 17);
    assert_eq!(f.colors().len(), 17);
}

#[test]
fn light_theme_draws_from_dim_band() {
    let f = field(Theme::Light, 4);
    assert_in_band(&f, Theme::Light);
}

#[test]
fn dark_theme_draws_from_bright_band() {
    let f = field(Theme::Dark, 5);
    assert_in_band(&f, Theme::Dark);
}

#[test]
fn recolor_overwrites_in_place_and_moves_to_new_band() {
    let mut f = field(Theme::Light, 6);
    let before: Vec<[f32; 3]> = f.colors().to_vec();
    let ptr = f.colors().as_ptr();
    let positions: Vec<_> = f.positions().to_vec();
    let generation = f.color_generation();

    f.recolor(Theme::Dark);

    assert_eq!(f.colors().as_ptr(), ptr, "color buffer was reallocated");
    assert_eq!(f.colors().len(), before.len());
    assert!(f.colors().iter().zip(&before).any(|(a, b)| a != b));
    assert_in_band(&f, Theme::Dark);
    assert_eq!(f.positions(), positions.as_slice(), "positions must not move");
    assert_eq!(f.color_generation(), generation + 1);
}

#[test]
fn recolor_same_theme_rerolls() {
    let mut f = field(Theme::Dark, 7);
    let before: Vec<[f32; 3]> = f.colors().to_vec();
    f.recolor(Theme::Dark);
    assert!(f.colors().iter().zip(&before).any(|(a, b)| a != b));
    assert_in_band(&f, Theme::Dark);
}

#[test]
fn same_seed_gives_same_field() {
    let a = field(Theme::Light, 42);
    let b = field(Theme::Light, 42);
    assert_eq!(a.positions(), b.positions());
    assert_eq!(a.colors(), b.colors());
}

#[test]
fn colors_share_one_hue() {
    let f = field(Theme::Dark, 8);
    // With fixed hue and saturation the channel ordering never changes.
    let order = |c: &[f32; 3]| {
        let mut idx = [0usize, 1, 2];
        idx.sort_by(|&i, &j| c[i].partial_cmp(&c[j]).unwrap());
        idx
    };
    let first = order(&f.colors()[0]);
    assert!(f.colors().iter().all(|c| order(c) == first));
}

#[test]
fn advance_frame_applies_fixed_spin() {
    let config = SceneConfig::default();
    let mut f = field(Theme::Light, 9);
    assert_eq!(f.rotation().x, 0.0);
    for _ in 0..100 {
        f.advance_frame();
    }
    let expected = config.particle_spin_per_frame * 100.0;
    assert!((f.rotation().x - expected.x).abs() < 1e-5);
    assert!((f.rotation().y - expected.y).abs() < 1e-5);
}

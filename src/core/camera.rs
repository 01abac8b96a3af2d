use super::config::SceneConfig;
use super::constants::{CAMERA_ZFAR, CAMERA_ZNEAR};
use glam::{Mat4, Vec2, Vec3, Vec4};

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }
    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Compute a world-space ray through pixel (`sx`, `sy`) of a `width` x `height` viewport.
    ///
    /// Returns `(ray_origin, ray_direction)` with a normalized direction.
    pub fn screen_to_world_ray(&self, sx: f32, sy: f32, width: f32, height: f32) -> (Vec3, Vec3) {
        let ndc_x = (2.0 * sx / width.max(1.0)) - 1.0;
        let ndc_y = 1.0 - (2.0 * sy / height.max(1.0));
        let inv = self.view_projection().inverse();
        let p_far = inv * Vec4::new(ndc_x, ndc_y, 1.0, 1.0);
        let p1: Vec3 = p_far.truncate() / p_far.w;
        let ro = self.eye;
        let rd = (p1 - ro).normalize();
        (ro, rd)
    }

    /// Pixel position of `world` in a `width` x `height` viewport, or `None` behind the camera.
    pub fn project_to_screen(&self, world: Vec3, width: f32, height: f32) -> Option<Vec2> {
        let clip = self.view_projection() * world.extend(1.0);
        if clip.w <= 0.0 {
            return None;
        }
        let ndc = clip.truncate() / clip.w;
        Some(Vec2::new(
            (ndc.x + 1.0) * 0.5 * width,
            (1.0 - ndc.y) * 0.5 * height,
        ))
    }
}

/// Fixed-distance camera that drifts toward the pointer.
#[derive(Clone, Debug)]
pub struct CameraRig {
    pub camera: Camera,
    home: Vec3,
    pointer_ndc: Vec2,
    strength: f32,
    smoothing: f32,
}

impl CameraRig {
    pub fn new(config: &SceneConfig, aspect: f32) -> Self {
        let home = Vec3::new(0.0, 0.0, config.camera_z);
        Self {
            camera: Camera {
                eye: home,
                target: Vec3::ZERO,
                up: Vec3::Y,
                aspect: aspect.max(1e-3),
                fovy_radians: config.camera_fov_deg.to_radians(),
                znear: CAMERA_ZNEAR,
                zfar: CAMERA_ZFAR,
            },
            home,
            pointer_ndc: Vec2::ZERO,
            strength: config.parallax_strength,
            smoothing: config.parallax_smoothing,
        }
    }

    pub fn set_viewport(&mut self, width: f32, height: f32) {
        if width > 0.0 && height > 0.0 {
            self.camera.aspect = width / height;
        }
    }

    /// Pointer in normalized device coordinates, each axis in \[-1, 1\] with +Y up.
    pub fn point_at(&mut self, ndc: Vec2) {
        self.pointer_ndc = ndc.clamp(Vec2::splat(-1.0), Vec2::splat(1.0));
    }

    pub fn advance_frame(&mut self) {
        let goal = self.home + (self.pointer_ndc * self.strength).extend(0.0);
        self.camera.eye += (goal - self.camera.eye) * self.smoothing;
    }
}

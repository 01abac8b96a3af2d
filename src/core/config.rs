use super::constants::*;
use glam::Vec2;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("particle count must be at least 1")]
    NoParticles,
    #[error("{name} must be positive, got {value}")]
    NotPositive { name: &'static str, value: f32 },
    #[error("{name} must be finite and not negative, got {value}")]
    Negative { name: &'static str, value: f32 },
    #[error("{name} must lie in [0, 1], got {value}")]
    OutOfUnitRange { name: &'static str, value: f32 },
}

/// Named tuning values for the landing scene.
///
/// Every per-frame increment and duration the scene uses lives here so the
/// behavior can be reproduced without a live renderer.
#[derive(Clone, Debug, PartialEq)]
pub struct SceneConfig {
    pub particle_count: usize,
    pub particle_cube_size: f32,
    pub particle_hue: f32,
    pub particle_saturation: f32,
    /// Radians added to the field rotation about X and Y every frame.
    pub particle_spin_per_frame: Vec2,
    pub orbit_rotation_per_frame: f32,
    pub hover_scale: f32,
    pub hover_tween_sec: f32,
    pub modal_tween_sec: f32,
    pub modal_offset_px: f32,
    pub camera_z: f32,
    pub camera_fov_deg: f32,
    pub parallax_strength: f32,
    pub parallax_smoothing: f32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            particle_count: PARTICLE_COUNT,
            particle_cube_size: PARTICLE_CUBE_SIZE,
            particle_hue: PARTICLE_HUE,
            particle_saturation: PARTICLE_SATURATION,
            particle_spin_per_frame: Vec2::new(
                PARTICLE_SPIN_X_PER_FRAME,
                PARTICLE_SPIN_Y_PER_FRAME,
            ),
            orbit_rotation_per_frame: ORBIT_ROTATION_PER_FRAME,
            hover_scale: HOVER_SCALE,
            hover_tween_sec: HOVER_TWEEN_SEC,
            modal_tween_sec: MODAL_TWEEN_SEC,
            modal_offset_px: MODAL_OFFSET_PX,
            camera_z: CAMERA_Z,
            camera_fov_deg: CAMERA_FOV_DEG,
            parallax_strength: PARALLAX_STRENGTH,
            parallax_smoothing: PARALLAX_SMOOTHING,
        }
    }
}

impl SceneConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.particle_count == 0 {
            return Err(ConfigError::NoParticles);
        }
        positive("particle_cube_size", self.particle_cube_size)?;
        positive("hover_scale", self.hover_scale)?;
        positive("camera_z", self.camera_z)?;
        positive("camera_fov_deg", self.camera_fov_deg)?;
        unit("particle_hue", self.particle_hue)?;
        unit("particle_saturation", self.particle_saturation)?;
        unit("parallax_smoothing", self.parallax_smoothing)?;
        // Zero durations are allowed and snap straight to the target.
        non_negative("hover_tween_sec", self.hover_tween_sec)?;
        non_negative("modal_tween_sec", self.modal_tween_sec)?;
        Ok(())
    }
}

fn positive(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NotPositive { name, value })
    }
}

fn non_negative(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if value >= 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::Negative { name, value })
    }
}

fn unit(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::OutOfUnitRange { name, value })
    }
}

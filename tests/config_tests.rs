// Host-side tests for scene tuning constants and config validation.

use orbit_folio::core::constants::*;
use orbit_folio::core::{ConfigError, SceneConfig};

#[test]
fn default_config_is_valid() {
    assert_eq!(SceneConfig::default().validate(), Ok(()));
}

#[test]
fn constants_are_sane() {
    assert_eq!(PARTICLE_COUNT, 2000);
    assert!(PARTICLE_CUBE_SIZE > 0.0);
    assert!((0.0..=1.0).contains(&PARTICLE_HUE));
    assert!(HOVER_SCALE > REST_SCALE);
    assert!(NODE_RADIUS < HUB_RADIUS);
    assert!(MODAL_TWEEN_SEC > HOVER_TWEEN_SEC);
    assert!(DARK_LIGHTNESS_MIN + LIGHTNESS_SPAN <= 1.0);
    assert!(LIGHT_LIGHTNESS_MIN + LIGHTNESS_SPAN <= DARK_LIGHTNESS_MIN + 1e-6);
    assert!(CAMERA_ZNEAR < CAMERA_Z && CAMERA_Z < CAMERA_ZFAR);
}

#[test]
fn nodes_sit_clear_of_hub() {
    for p in NODE_POSITIONS {
        let d = (p[0] * p[0] + p[1] * p[1] + p[2] * p[2]).sqrt();
        assert!(d > HUB_RADIUS + NODE_RADIUS * HOVER_SCALE);
    }
}

#[test]
fn empty_field_rejected() {
    let config = SceneConfig {
        particle_count: 0,
        ..SceneConfig::default()
    };
    assert_eq!(config.validate(), Err(ConfigError::NoParticles));
}

#[test]
fn non_positive_values_rejected() {
    let config = SceneConfig {
        camera_z: 0.0,
        ..SceneConfig::default()
    };
    assert!(matches!(
        config.validate(),
        Err(ConfigError::NotPositive { name: "camera_z", .. })
    ));

    let config = SceneConfig {
        modal_tween_sec: -1.0,
        ..SceneConfig::default()
    };
    assert!(matches!(
        config.validate(),
        Err(ConfigError::Negative { name: "modal_tween_sec", .. })
    ));
}

#[test]
fn nan_durations_rejected() {
    for config in [
        SceneConfig {
            hover_tween_sec: f32::NAN,
            ..SceneConfig::default()
        },
        SceneConfig {
            modal_tween_sec: f32::INFINITY,
            ..SceneConfig::default()
        },
    ] {
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Negative { .. })
        ));
    }
}

#[test]
fn zero_durations_allowed() {
    let config = SceneConfig {
        hover_tween_sec: 0.0,
        modal_tween_sec: 0.0,
        ..SceneConfig::default()
    };
    assert_eq!(config.validate(), Ok(()));
}

#[test]
fn unit_range_enforced() {
    let config = SceneConfig {
        particle_hue: 1.5,
        ..SceneConfig::default()
    };
    let err = config.validate().unwrap_err();
    assert_eq!(err.to_string(), "particle_hue must lie in [0, 1], got 1.5");
}

// Host-side tests for the camera, screen picking and parallax rig.

use glam::{Vec2, Vec3};
use orbit_folio::core::picking::ray_sphere;
use orbit_folio::core::{CameraRig, SceneConfig};

fn rig() -> CameraRig {
    CameraRig::new(&SceneConfig::default(), 800.0 / 600.0)
}

#[test]
fn ray_hits_sphere_in_front() {
    let t = ray_sphere(Vec3::ZERO, Vec3::Z, Vec3::new(0.0, 0.0, 5.0), 1.0);
    let t = t.expect("should hit");
    assert!((t - 4.0).abs() < 1e-5);
}

#[test]
fn ray_misses_sphere_off_axis_and_behind() {
    assert!(ray_sphere(Vec3::ZERO, Vec3::Z, Vec3::new(3.0, 0.0, 5.0), 1.0).is_none());
    assert!(ray_sphere(Vec3::ZERO, Vec3::Z, Vec3::new(0.0, 0.0, -5.0), 1.0).is_none());
}

#[test]
fn center_pixel_ray_points_down_negative_z() {
    let r = rig();
    let (ro, rd) = r.camera.screen_to_world_ray(400.0, 300.0, 800.0, 600.0);
    assert_eq!(ro, Vec3::new(0.0, 0.0, 8.0));
    assert!((rd - Vec3::NEG_Z).length() < 1e-4);
}

#[test]
fn corner_ray_leans_toward_corner() {
    let r = rig();
    let (_, rd) = r.camera.screen_to_world_ray(0.0, 0.0, 800.0, 600.0);
    assert!(rd.x < 0.0 && rd.y > 0.0 && rd.z < 0.0);
    assert!((rd.length() - 1.0).abs() < 1e-5);
}

#[test]
fn origin_projects_to_viewport_center() {
    let r = rig();
    let p = r
        .camera
        .project_to_screen(Vec3::ZERO, 800.0, 600.0)
        .expect("in front");
    assert!((p - Vec2::new(400.0, 300.0)).length() < 1e-3);
}

#[test]
fn point_behind_camera_does_not_project() {
    let r = rig();
    assert!(r
        .camera
        .project_to_screen(Vec3::new(0.0, 0.0, 20.0), 800.0, 600.0)
        .is_none());
}

#[test]
fn projection_and_ray_agree() {
    let r = rig();
    let world = Vec3::new(3.0, 0.5, 0.0);
    let px = r.camera.project_to_screen(world, 800.0, 600.0).expect("visible");
    let (ro, rd) = r.camera.screen_to_world_ray(px.x, px.y, 800.0, 600.0);
    let expected = (world - ro).normalize();
    assert!((rd - expected).length() < 1e-3);
}

#[test]
fn parallax_eases_toward_pointer_offset() {
    let config = SceneConfig::default();
    let mut r = rig();
    r.point_at(Vec2::new(1.0, -1.0));
    r.advance_frame();
    let first = r.camera.eye;
    let goal_x = config.parallax_strength;
    assert!((first.x - goal_x * config.parallax_smoothing).abs() < 1e-5);
    assert!(first.y < 0.0);
    assert_eq!(first.z, config.camera_z);

    for _ in 0..500 {
        r.advance_frame();
    }
    assert!((r.camera.eye.x - goal_x).abs() < 1e-3);
    assert!((r.camera.eye.y + config.parallax_strength).abs() < 1e-3);
    assert_eq!(r.camera.target, Vec3::ZERO);
}

#[test]
fn pointer_is_clamped_to_unit_square() {
    let config = SceneConfig::default();
    let mut r = rig();
    r.point_at(Vec2::new(5.0, 0.0));
    for _ in 0..1000 {
        r.advance_frame();
    }
    assert!((r.camera.eye.x - config.parallax_strength).abs() < 1e-3);
}

#[test]
fn viewport_sets_aspect() {
    let mut r = rig();
    r.set_viewport(1000.0, 500.0);
    assert_eq!(r.camera.aspect, 2.0);
    r.set_viewport(0.0, 500.0);
    assert_eq!(r.camera.aspect, 2.0);
}

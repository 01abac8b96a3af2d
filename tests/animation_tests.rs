// Host-side tests for the tween engine.

use orbit_folio::core::{Animated, Easing, TweenEvent};

#[test]
fn easing_endpoints_are_exact() {
    for e in [Easing::Linear, Easing::QuadOut, Easing::CubicOut, Easing::BackOut] {
        assert!(e.apply(0.0).abs() < 1e-6, "{e:?} at 0");
        assert!((e.apply(1.0) - 1.0).abs() < 1e-6, "{e:?} at 1");
    }
    assert_eq!(Easing::default(), Easing::CubicOut);
}

#[test]
fn out_easings_lead_linear() {
    assert!(Easing::QuadOut.apply(0.5) > 0.5);
    assert!(Easing::CubicOut.apply(0.5) > Easing::QuadOut.apply(0.5));
    // BackOut overshoots before settling.
    assert!(Easing::BackOut.apply(0.8) > 1.0);
    assert_eq!(Easing::Linear.apply(2.0), 1.0);
}

#[test]
fn idle_value_reports_idle() {
    let mut a = Animated::new(3.0);
    assert_eq!(a.advance(0.1), TweenEvent::Idle);
    assert_eq!(a.value(), 3.0);
    assert_eq!(a.target(), 3.0);
}

#[test]
fn completion_is_reported_once() {
    let mut a = Animated::new(0.0);
    a.animate_to(10.0, 1.0, Easing::Linear);
    assert_eq!(a.advance(0.25), TweenEvent::Running);
    assert!((a.value() - 2.5).abs() < 1e-5);
    assert_eq!(a.advance(1.0), TweenEvent::Completed);
    assert_eq!(a.value(), 10.0);
    assert!(!a.is_animating());
    assert_eq!(a.advance(1.0), TweenEvent::Idle);
}

#[test]
fn new_tween_replaces_running_one_from_current_value() {
    let mut a = Animated::new(1.0);
    a.animate_to(2.0, 1.0, Easing::Linear);
    a.advance(0.5);
    let mid = a.value();
    assert!((mid - 1.5).abs() < 1e-5);

    a.animate_to(1.0, 1.0, Easing::Linear);
    assert_eq!(a.value(), mid);
    assert_eq!(a.target(), 1.0);
    a.advance(0.5);
    assert!((a.value() - 1.25).abs() < 1e-5);
    assert_eq!(a.advance(0.5), TweenEvent::Completed);
    assert_eq!(a.value(), 1.0);
}

#[test]
fn zero_duration_snaps() {
    let mut a = Animated::new(0.0);
    a.animate_to(5.0, 0.0, Easing::CubicOut);
    assert_eq!(a.value(), 5.0);
    assert!(!a.is_animating());
    assert_eq!(a.advance(0.016), TweenEvent::Idle);
}

#[test]
fn set_cancels_tween() {
    let mut a = Animated::new(0.0);
    a.animate_to(1.0, 1.0, Easing::QuadOut);
    a.set(0.25);
    assert!(!a.is_animating());
    assert_eq!(a.advance(1.0), TweenEvent::Idle);
    assert_eq!(a.value(), 0.25);
}

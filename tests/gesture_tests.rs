// Host-side tests for the pure gesture geometry and transform output.

use card_core::*;
use glam::DVec2;

#[test]
fn tilt_is_zero_at_centre_and_max_at_edges() {
    let rect = CardRect::new(20.0, 40.0, 300.0, 400.0);
    assert_eq!(rect.center(), DVec2::new(170.0, 240.0));

    let (tx, ty) = tilt_for_pointer(&rect, rect.center(), MOUSE_MAX_TILT_DEG);
    assert_eq!((tx, ty), (-0.0, 0.0));

    // right edge, top edge
    let (tx, ty) = tilt_for_pointer(&rect, DVec2::new(320.0, 40.0), MOUSE_MAX_TILT_DEG);
    assert_eq!(ty, MOUSE_MAX_TILT_DEG);
    assert_eq!(tx, MOUSE_MAX_TILT_DEG);

    // left edge, bottom edge
    let (tx, ty) = tilt_for_pointer(&rect, DVec2::new(20.0, 440.0), TOUCH_MAX_TILT_DEG);
    assert_eq!(ty, -TOUCH_MAX_TILT_DEG);
    assert_eq!(tx, -TOUCH_MAX_TILT_DEG);
}

#[test]
fn tilt_is_not_clamped_outside_the_card() {
    let rect = CardRect::new(0.0, 0.0, 100.0, 100.0);
    let (_, ty) = tilt_for_pointer(&rect, DVec2::new(150.0, 50.0), 10.0);
    assert_eq!(ty, 20.0);
}

#[test]
fn profiles_match_input_source() {
    let touch = GestureProfile::for_source(InputSource::Touch);
    assert_eq!(touch.max_tilt_deg, 10.0);
    assert_eq!(touch.swipe_min_px, 20.0);
    assert_eq!(touch.drag_gain, 0.2);

    let mouse = GestureProfile::for_source(InputSource::Mouse);
    assert_eq!(mouse.max_tilt_deg, 15.0);
    assert_eq!(mouse.swipe_min_px, 0.0);
    assert_eq!(mouse.drag_gain, 0.5);
}

#[test]
fn rotating_drag_needs_horizontal_dominance() {
    let mouse = GestureProfile::MOUSE;
    assert!(mouse.is_rotating_drag(DVec2::new(1.0, 0.0)));
    assert!(mouse.is_rotating_drag(DVec2::new(-30.0, 29.0)));
    assert!(!mouse.is_rotating_drag(DVec2::new(30.0, 30.0)));
    assert!(!mouse.is_rotating_drag(DVec2::ZERO));

    let touch = GestureProfile::TOUCH;
    assert!(!touch.is_rotating_drag(DVec2::new(20.0, 0.0)));
    assert!(touch.is_rotating_drag(DVec2::new(21.0, 0.0)));
    assert!(touch.is_rotating_drag(DVec2::new(-21.0, 5.0)));
}

#[test]
fn release_classification() {
    assert_eq!(classify_release(DVec2::ZERO), Release::Tap);
    assert_eq!(classify_release(DVec2::new(9.9, -9.9)), Release::Tap);
    // the slop bound is strict on each axis
    assert_eq!(classify_release(DVec2::new(10.0, 0.0)), Release::Swipe);
    assert_eq!(classify_release(DVec2::new(0.0, 10.0)), Release::Ignored);
    assert_eq!(classify_release(DVec2::new(-40.0, 12.0)), Release::Swipe);
    assert_eq!(classify_release(DVec2::new(12.0, 12.0)), Release::Ignored);
    assert_eq!(classify_release(DVec2::new(3.0, -80.0)), Release::Ignored);
}

#[test]
fn transform_applies_yaw_pitch_yaw_in_order() {
    let t = CardTransform {
        rotation_y: 30.0,
        tilt_x: -4.5,
        tilt_y: 9.0,
    };
    assert_eq!(t.to_css(), "rotateY(30deg) rotateX(-4.5deg) rotateY(9deg)");
}

#[test]
fn transform_prints_negative_zero_as_zero() {
    let t = CardTransform {
        rotation_y: -0.0,
        tilt_x: -0.0,
        tilt_y: 0.25,
    };
    assert_eq!(t.to_string(), "rotateY(0deg) rotateX(0deg) rotateY(0.25deg)");
    assert_eq!(
        CardTransform::default().to_css(),
        "rotateY(0deg) rotateX(0deg) rotateY(0deg)"
    );
}

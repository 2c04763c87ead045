use approx::assert_relative_eq;

use imgview_core::geometry::Point;
use imgview_core::session::{clamp_index, Cursor, RotateDirection, Session, Transform};
use imgview_core::ViewerConfig;

fn gallery(len: usize, index: i64) -> Session {
    let data: Vec<String> = (0..len).map(|i| format!("img{i}.png")).collect();
    Session::new(&ViewerConfig::gallery(data, index))
}

// ---------------------------------------------------------------------------
// Index clamping
// ---------------------------------------------------------------------------

#[test]
fn test_clamp_index_below_range() {
    assert_eq!(clamp_index(-3, 5), 0);
}

#[test]
fn test_clamp_index_above_range() {
    assert_eq!(clamp_index(7, 5), 4);
}

#[test]
fn test_clamp_index_always_in_range() {
    for n in -20..20 {
        let i = clamp_index(n, 5);
        assert!(i <= 4, "clamp_index({n}) = {i}");
    }
}

#[test]
fn test_clamp_index_empty_set_is_zero() {
    assert_eq!(clamp_index(3, 0), 0);
    assert_eq!(clamp_index(-3, 0), 0);
}

#[test]
fn test_session_clamps_initial_index() {
    assert_eq!(gallery(5, 9).current_index(), 4);
    assert_eq!(gallery(5, -1).current_index(), 0);
}

#[test]
fn test_single_image_session_is_first_and_last() {
    let session = Session::new(&ViewerConfig::single("a.png"));
    assert_eq!(session.current_index(), 0);
    assert!(session.is_first());
    assert!(session.is_last());
}

// ---------------------------------------------------------------------------
// Scale
// ---------------------------------------------------------------------------

#[test]
fn test_zoom_in_clamps_to_max_scale() {
    let mut session = gallery(2, 0);
    for _ in 0..10 {
        session.zoom_in();
    }
    assert_eq!(session.scale(), 3.0);
}

#[test]
fn test_zoom_out_clamps_to_min_scale() {
    let mut session = gallery(2, 0);
    for _ in 0..10 {
        session.zoom_out();
    }
    assert_eq!(session.scale(), 0.5);
}

#[test]
fn test_mixed_zoom_sequence_stays_in_bounds() {
    let mut session = gallery(2, 0);
    let steps = [true, true, false, true, true, true, true, false, false, false, false, false, false];
    for zoom_in in steps {
        let s = if zoom_in { session.zoom_in() } else { session.zoom_out() };
        assert!((0.5..=3.0).contains(&s), "scale {s} out of bounds");
    }
}

#[test]
fn test_single_zoom_in_step() {
    let mut session = gallery(2, 0);
    assert_relative_eq!(session.zoom_in(), 1.35, epsilon = 1e-6);
    assert_eq!(session.cursor(), Cursor::Move);
}

#[test]
fn test_set_scale_nan_falls_back_to_one() {
    let mut session = gallery(2, 0);
    assert_eq!(session.set_scale(f32::NAN), 1.0);
}

#[test]
fn test_inverted_scale_bounds_do_not_panic() {
    let config = ViewerConfig {
        min_scale: 2.0,
        max_scale: 0.5,
        ..ViewerConfig::single("a.png")
    };
    let mut session = Session::new(&config);
    assert_eq!(session.set_scale(1.0), 0.5);
    assert_eq!(session.zoom_in(), 0.5);
}

#[test]
fn test_reset_transform_keeps_rotation() {
    let mut session = gallery(2, 0);
    session.zoom_in();
    session.rotate(RotateDirection::Left);
    session.reset_transform();
    assert_eq!(session.scale(), 1.0);
    assert_eq!(session.pan_offset(), Point::ZERO);
    assert_eq!(session.rotation_degrees(), 90);
    assert_eq!(session.cursor(), Cursor::Default);
}

// ---------------------------------------------------------------------------
// Rotation
// ---------------------------------------------------------------------------

#[test]
fn test_rotation_accumulates_without_normalizing() {
    let mut left = gallery(2, 0);
    let mut right = gallery(2, 0);
    for _ in 0..5 {
        left.rotate(RotateDirection::Left);
        right.rotate(RotateDirection::Right);
    }
    assert_eq!(left.rotation_degrees(), 450);
    assert_eq!(right.rotation_degrees(), -450);
}

#[test]
fn test_transform_composes_scale_and_rotation() {
    let t = Transform {
        scale: 2.0,
        rotation_degrees: -90,
    };
    assert_eq!(t.to_string(), "scale3d(2, 2, 1) rotate(-90deg)");
    assert!(t.is_quarter_turned());
}

#[test]
fn test_half_turn_is_not_quarter_turned() {
    let t = Transform {
        scale: 1.0,
        rotation_degrees: 540,
    };
    assert!(!t.is_quarter_turned());
}

// ---------------------------------------------------------------------------
// Rebuild
// ---------------------------------------------------------------------------

#[test]
fn test_rebuilt_session_resets_zoom_and_keeps_rotation() {
    let mut session = gallery(3, 0);
    session.zoom_in();
    session.rotate(RotateDirection::Right);
    let next = session.rebuilt(1);
    assert_eq!(next.current_index(), 1);
    assert_eq!(next.scale(), 1.0);
    assert_eq!(next.pan_offset(), Point::ZERO);
    assert_eq!(next.rotation_degrees(), -90);
    assert!(!next.drag().active);
}

#[test]
fn test_rebuilt_session_clamps_index() {
    let session = gallery(3, 0);
    assert_eq!(session.rebuilt(10).current_index(), 2);
}

use imgview_core::fit::{fit_image, FitSize, Viewport};
use imgview_core::geometry::Size;

// ---------------------------------------------------------------------------
// Viewport
// ---------------------------------------------------------------------------

#[test]
fn test_viewport_wide_client_uses_sixty_percent() {
    let vp = Viewport::from_client(Size::new(1920.0, 1080.0));
    assert_eq!(vp.width, 1052.0);
    assert_eq!(vp.height, 980.0);
}

#[test]
fn test_viewport_threshold_client_uses_eighty_percent() {
    let vp = Viewport::from_client(Size::new(1200.0, 900.0));
    assert_eq!(vp.width, 860.0);
    assert_eq!(vp.height, 800.0);
}

#[test]
fn test_viewport_tiny_client_never_negative() {
    let vp = Viewport::from_client(Size::new(50.0, 40.0));
    assert_eq!(vp.width, 0.0);
    assert_eq!(vp.height, 0.0);
}

// ---------------------------------------------------------------------------
// Fit
// ---------------------------------------------------------------------------

#[test]
fn test_landscape_fills_viewport_width() {
    let vp = Viewport::from_client(Size::new(1000.0, 800.0));
    let fit = fit_image(Size::new(1600.0, 1000.0), vp).unwrap();
    assert_eq!(fit, FitSize::FullWidth { width: 700.0 });
    assert_eq!(fit.displayed(Size::new(1600.0, 1000.0)), Size::new(700.0, 437.5));
}

#[test]
fn test_square_counts_as_landscape() {
    let vp = Viewport::from_client(Size::new(1000.0, 800.0));
    let fit = fit_image(Size::new(500.0, 500.0), vp).unwrap();
    assert_eq!(fit, FitSize::FullWidth { width: 700.0 });
}

#[test]
fn test_portrait_within_height() {
    let vp = Viewport::from_client(Size::new(1000.0, 800.0));
    let fit = fit_image(Size::new(600.0, 1200.0), vp).unwrap();
    assert_eq!(fit, FitSize::Exact(Size::new(350.0, 700.0)));
}

#[test]
fn test_portrait_taller_than_viewport_is_shrunk_to_height() {
    let vp = Viewport::from_client(Size::new(1920.0, 1080.0));
    let fit = fit_image(Size::new(300.0, 900.0), vp).unwrap();
    assert_eq!(fit, FitSize::Exact(Size::new(326.0, 980.0)));
}

#[test]
fn test_fitted_portrait_never_exceeds_viewport() {
    let vp = Viewport::from_client(Size::new(1440.0, 700.0));
    for (w, h) in [(100.0, 1000.0), (999.0, 1000.0), (10.0, 4000.0), (300.0, 301.0)] {
        let displayed = fit_image(Size::new(w, h), vp).unwrap().displayed(Size::new(w, h));
        assert!(displayed.height <= vp.height, "{w}x{h} -> {displayed:?}");
        assert!(displayed.width <= vp.width, "{w}x{h} -> {displayed:?}");
    }
}

#[test]
fn test_zero_dimension_aborts_fit() {
    let vp = Viewport::from_client(Size::new(1000.0, 800.0));
    assert_eq!(fit_image(Size::new(0.0, 100.0), vp), None);
    assert_eq!(fit_image(Size::new(100.0, 0.0), vp), None);
    assert_eq!(fit_image(Size::new(f32::NAN, 100.0), vp), None);
}

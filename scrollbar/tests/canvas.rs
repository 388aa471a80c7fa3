use std::time::{Duration, Instant};

use scrollbar::{
    Animation, Canvas, Color, Easing, Extent, Part, Point, Property, PropertyValue, Surface,
};

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 0.001
}

fn ms(millis: u64) -> Duration {
    Duration::from_millis(millis)
}

// =============================================================================
// Direct setters
// =============================================================================

#[test]
fn test_canvas_defaults() {
    let canvas = Canvas::new();
    assert_eq!(canvas.size(Part::Thumb), Extent::ZERO);
    assert_eq!(canvas.opacity(Part::Thumb), 1.0);
    assert!(!canvas.is_attached(Part::Track));
    assert!(!canvas.has_running_animations());
}

#[test]
fn test_canvas_set_property_routes_by_kind() {
    let mut canvas = Canvas::new();
    canvas.set_property(Part::Track, PropertyValue::Extent(Extent::new(4.0, 9.0)));
    canvas.set_property(Part::Track, PropertyValue::Point(Point::new(-1.0, 2.0)));
    canvas.set_property(Part::Track, PropertyValue::Scalar(2.0));

    assert_eq!(canvas.size(Part::Track), Extent::new(4.0, 9.0));
    assert_eq!(canvas.position(Part::Track), Point::new(-1.0, 2.0));
    // Opacity is clamped.
    assert_eq!(canvas.opacity(Part::Track), 1.0);
}

#[test]
fn test_canvas_clones_share_scene() {
    let mut canvas = Canvas::new();
    let reader = canvas.clone();
    canvas.attach(Part::Thumb);
    assert!(reader.is_attached(Part::Thumb));
}

// =============================================================================
// Tweens
// =============================================================================

#[test]
fn test_tween_interpolates_linearly() {
    let mut canvas = Canvas::new();
    let mut tween = canvas.create_animation();
    tween.animate_property(
        Part::Thumb,
        Property::Size,
        PropertyValue::Extent(Extent::new(10.0, 20.0)),
        Duration::ZERO,
        ms(100),
        Easing::Linear,
    );

    let start = Instant::now();
    tween.play_at(start);
    assert!(tween.is_playing());

    assert!(canvas.tick_at(start + ms(50)));
    let size = canvas.size(Part::Thumb);
    assert!(approx(size.width, 5.0));
    assert!(approx(size.height, 10.0));
    assert!(approx(tween.progress_at(start + ms(50)), 0.5));

    assert!(!canvas.tick_at(start + ms(100)));
    assert_eq!(canvas.size(Part::Thumb), Extent::new(10.0, 20.0));
    assert_eq!(tween.progress_at(start + ms(500)), 1.0);
    assert!(!tween.is_playing());
}

#[test]
fn test_tween_applies_easing() {
    let mut canvas = Canvas::new();
    let mut tween = canvas.create_animation();
    tween.animate_property(
        Part::Thumb,
        Property::Opacity,
        PropertyValue::Scalar(0.0),
        Duration::ZERO,
        ms(100),
        Easing::EaseIn,
    );
    let start = Instant::now();
    tween.play_at(start);

    canvas.tick_at(start + ms(50));
    // 1.0 -> 0.0 with t*t at 0.5
    assert!(approx(canvas.opacity(Part::Thumb), 0.75));
}

#[test]
fn test_tween_respects_delay() {
    let mut canvas = Canvas::new();
    canvas.set_position(Part::Thumb, Point::new(0.0, 10.0));
    let mut tween = canvas.create_animation();
    tween.animate_property(
        Part::Thumb,
        Property::Position,
        PropertyValue::Point(Point::new(0.0, 30.0)),
        ms(100),
        ms(100),
        Easing::Linear,
    );
    let start = Instant::now();
    tween.play_at(start);

    canvas.tick_at(start + ms(50));
    assert_eq!(canvas.position(Part::Thumb), Point::new(0.0, 10.0));

    canvas.tick_at(start + ms(150));
    assert!(approx(canvas.position(Part::Thumb).y, 20.0));
    assert!(approx(tween.progress_at(start + ms(150)), 0.75));
}

#[test]
fn test_tween_stop_freezes_progress() {
    let mut canvas = Canvas::new();
    let mut tween = canvas.create_animation();
    tween.animate_property(
        Part::Track,
        Property::Size,
        PropertyValue::Extent(Extent::new(100.0, 0.0)),
        Duration::ZERO,
        ms(200),
        Easing::Linear,
    );
    let start = Instant::now();
    tween.play_at(start);
    canvas.tick_at(start + ms(50));
    tween.stop_at(start + ms(50));

    assert!(!canvas.has_running_animations());
    assert!(approx(tween.progress_at(start + ms(400)), 0.25));

    canvas.tick_at(start + ms(400));
    assert!(approx(canvas.size(Part::Track).width, 25.0));
}

#[test]
fn test_tween_clear_resets() {
    let mut canvas = Canvas::new();
    let mut tween = canvas.create_animation();
    tween.animate_property(
        Part::Track,
        Property::Opacity,
        PropertyValue::Scalar(0.0),
        Duration::ZERO,
        ms(200),
        Easing::Linear,
    );
    tween.play_at(Instant::now());
    tween.clear();

    assert!(!tween.is_playing());
    assert_eq!(tween.current_progress(), 0.0);
    canvas.tick_at(Instant::now() + ms(500));
    assert_eq!(canvas.opacity(Part::Track), 1.0);
}

#[test]
fn test_tween_ignores_mismatched_value() {
    let mut canvas = Canvas::new();
    let mut tween = canvas.create_animation();
    tween.animate_property(
        Part::Track,
        Property::Size,
        PropertyValue::Scalar(3.0),
        Duration::ZERO,
        ms(100),
        Easing::Linear,
    );
    let start = Instant::now();
    tween.play_at(start);
    canvas.tick_at(start + ms(100));

    assert_eq!(canvas.size(Part::Track), Extent::ZERO);
}

#[test]
fn test_tween_color_interpolation() {
    let mut canvas = Canvas::new();
    canvas.set_background(Part::Thumb, Color::rgb(0, 0, 0));
    let mut tween = canvas.create_animation();
    tween.animate_property(
        Part::Thumb,
        Property::Background,
        PropertyValue::Color(Color::rgb(255, 255, 255)),
        Duration::ZERO,
        ms(100),
        Easing::Linear,
    );
    let start = Instant::now();
    tween.play_at(start);

    canvas.tick_at(start + ms(50));
    let mid = canvas.background(Part::Thumb).to_rgb();
    assert!(mid.r > 20 && mid.r < 235, "mid r = {}", mid.r);

    canvas.tick_at(start + ms(100));
    let end = canvas.background(Part::Thumb).to_rgb();
    assert!(end.r >= 250 && end.g >= 250 && end.b >= 250, "{:?}", end);
}

#[test]
fn test_dropped_tween_leaves_canvas() {
    let mut canvas = Canvas::new();
    {
        let mut tween = canvas.create_animation();
        tween.animate_property(
            Part::Thumb,
            Property::Opacity,
            PropertyValue::Scalar(0.0),
            Duration::ZERO,
            ms(1000),
            Easing::Linear,
        );
        tween.play();
        assert!(canvas.has_running_animations());
    }
    assert!(!canvas.has_running_animations());
}

#[test]
fn test_tween_ids_unique() {
    let mut canvas = Canvas::new();
    let a = canvas.create_animation();
    let b = canvas.create_animation();
    assert_ne!(a.id(), b.id());
}

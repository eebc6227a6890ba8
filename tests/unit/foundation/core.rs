use super::*;
use serde_json::json;

#[test]
fn frame_range_contains_boundaries() {
    let r = FrameRange::new(FrameIndex(2), FrameIndex(5)).unwrap();
    assert!(!r.contains(FrameIndex(1)));
    assert!(r.contains(FrameIndex(2)));
    assert!(r.contains(FrameIndex(4)));
    assert!(!r.contains(FrameIndex(5)));
    assert_eq!(r.len_frames(), 3);
}

#[test]
fn frame_range_rejects_inverted_bounds() {
    assert!(FrameRange::new(FrameIndex(5), FrameIndex(2)).is_err());
    assert!(FrameRange::new(FrameIndex(5), FrameIndex(5)).unwrap().is_empty());
}

#[test]
fn fps_rejects_zero_and_rounds_duration_up() {
    assert!(Fps::new(0).is_err());
    let fps = Fps::new(30).unwrap();
    assert_eq!(fps.frames_for_secs_ceil(60.0), 1800);
    assert_eq!(fps.frames_for_secs_ceil(10.01), 301);
    assert_eq!(fps.frames_for_whole_secs(2), 60);
    assert_eq!(fps.frames_to_secs(45), 1.5);
}

#[test]
fn fps_serde_is_a_bare_integer() {
    let fps: Fps = serde_json::from_value(json!(24)).unwrap();
    assert_eq!(fps.get(), 24);
    assert_eq!(serde_json::to_value(fps).unwrap(), json!(24));
    assert!(serde_json::from_value::<Fps>(json!(0)).is_err());
}

#[test]
fn parses_hex_rgb_and_rgba() {
    assert_eq!(Rgba8::from_hex("#10B981").unwrap(), Rgba8::rgb(0x10, 0xB9, 0x81));
    let c = Rgba8::from_hex("ffffff33").unwrap();
    assert_eq!(c.a, 0x33);
    assert_eq!(c.to_hex(), "#FFFFFF33");
    assert!(Rgba8::from_hex("#12345").is_err());
    assert!(Rgba8::from_hex("#GG0000").is_err());
}

#[test]
fn canvas_defaults_to_vertical_1080p() {
    let c = Canvas::default();
    assert_eq!((c.width, c.height), (1080, 1920));
    assert_eq!(c.center(), kurbo::Point::new(540.0, 960.0));
}

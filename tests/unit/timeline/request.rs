use super::*;
use crate::{theme::palette::NewsTheme, timeline::partition::RemainderPolicy};
use serde_json::json;

fn request(secs: f64) -> TimelineRequest {
    TimelineRequest {
        total_duration_secs: secs,
        fps: Fps::new(30).unwrap(),
        title: "Market Update".to_owned(),
        subtitle: "Your daily market brief".to_owned(),
        content_points: vec!["Point 1".to_owned(), "Point 2".to_owned()],
        theme: Theme::News(NewsTheme::MarketOpen),
    }
}

#[test]
fn total_frames_rounds_up() {
    assert_eq!(request(60.0).total_frames(), 1800);
    assert_eq!(request(52.25).total_frames(), 1568);
}

#[test]
fn validate_rejects_bad_durations() {
    for secs in [0.0, -3.0, f64::NAN, f64::INFINITY] {
        assert!(matches!(
            request(secs).validate(),
            Err(ShortformError::Configuration(_))
        ));
    }
    request(0.5).validate().unwrap();
}

#[test]
fn validate_rejects_empty_content() {
    let mut r = request(60.0);
    r.content_points.clear();
    assert!(matches!(r.validate(), Err(ShortformError::Configuration(_))));
}

#[test]
fn job_config_fills_defaults() {
    let v = json!({
        "request": {
            "total_duration_secs": 45.0,
            "title": "Closing Bell Summary",
            "content_points": ["a", "b", "c"],
            "theme": "market_close"
        }
    });
    let cfg = JobConfig::from_json_str(&v.to_string()).unwrap();
    assert_eq!(cfg.request.fps.get(), 30);
    assert_eq!(cfg.request.subtitle, "");
    assert_eq!(cfg.timing, TimingConfig::default());
    assert_eq!(cfg.canvas, Canvas::VERTICAL_1080P);
}

#[test]
fn job_config_reads_overrides() {
    let v = json!({
        "request": {
            "total_duration_secs": 30.0,
            "fps": 60,
            "title": "t",
            "content_points": ["a"],
            "theme": "space"
        },
        "timing": { "remainder": "truncate" },
        "canvas": { "width": 720, "height": 1280 }
    });
    let cfg = JobConfig::from_json_str(&v.to_string()).unwrap();
    assert_eq!(cfg.request.fps.get(), 60);
    assert_eq!(cfg.timing.remainder, RemainderPolicy::Truncate);
    assert_eq!(cfg.timing.intro_secs, 2);
    assert_eq!(cfg.canvas.width, 720);
}

#[test]
fn job_config_rejects_unknown_theme_and_invalid_request() {
    let v = json!({
        "request": {
            "total_duration_secs": 30.0,
            "title": "t",
            "content_points": ["a"],
            "theme": "weekend"
        }
    });
    assert!(matches!(
        JobConfig::from_json_str(&v.to_string()),
        Err(ShortformError::Serde(_))
    ));

    let v = json!({
        "request": {
            "total_duration_secs": 30.0,
            "title": "t",
            "content_points": [],
            "theme": "midday"
        }
    });
    assert!(matches!(
        JobConfig::from_json_str(&v.to_string()),
        Err(ShortformError::Configuration(_))
    ));
}

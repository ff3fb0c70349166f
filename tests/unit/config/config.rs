use super::*;

#[test]
fn empty_object_yields_defaults() {
    let cfg = PlaybackConfig::from_json("{}").unwrap();
    assert_eq!(cfg, PlaybackConfig::default());
    assert_eq!(cfg.fps, Fps::new(60, 1).unwrap());
    assert_eq!(cfg.max_epicycles, 500);
    assert_eq!(cfg.origin(), Vec2::new(500.0, 500.0));
    assert_eq!(cfg.parse_mode, ParseMode::Strict);
}

#[test]
fn fields_override_defaults() {
    let cfg = PlaybackConfig::from_json(
        r#"{
            "fps": { "num": 30, "den": 1 },
            "max_epicycles": 12,
            "canvas": { "width": 200, "height": 100 },
            "parse_mode": "lenient",
            "lead_in_ms": 3000
        }"#,
    )
    .unwrap();
    assert_eq!(cfg.fps.num, 30);
    assert_eq!(cfg.max_epicycles, 12);
    assert_eq!(cfg.origin(), Vec2::new(100.0, 50.0));
    assert_eq!(cfg.parse_mode, ParseMode::Lenient);
    assert_eq!(cfg.lead_in_ms, 3000);
}

#[test]
fn explicit_origin_wins() {
    let cfg = PlaybackConfig {
        origin: Some(Vec2::new(1.0, 2.0)),
        ..PlaybackConfig::default()
    };
    assert_eq!(cfg.origin(), Vec2::new(1.0, 2.0));
}

#[test]
fn invalid_values_are_rejected() {
    assert!(matches!(
        PlaybackConfig::from_json(r#"{ "max_epicycles": 0 }"#),
        Err(EpicycleError::Validation(_))
    ));
    assert!(matches!(
        PlaybackConfig::from_json(r#"{ "fps": { "num": 0, "den": 1 } }"#),
        Err(EpicycleError::Validation(_))
    ));
    assert!(matches!(
        PlaybackConfig::from_json(r#"{ "unknown": true }"#),
        Err(EpicycleError::Serde(_))
    ));
}

#[test]
fn load_reports_missing_file() {
    let err = PlaybackConfig::load(Path::new("definitely/not/here.json")).unwrap_err();
    assert!(err.to_string().contains("read config"));
}

// Slider quantization, settings validation and key map tests.

use ripple_core::*;

#[test]
fn slider_defaults_match_controls() {
    assert_eq!(SIZE_SLIDER.default, 10.0);
    assert_eq!(SPEED_SLIDER.default, 0.5);
    let s = RippleSettings::default();
    assert_eq!(s.size(), 10.0);
    assert_eq!(s.speed(), 0.5);
    assert_eq!(s.color_mode, ColorMode::Dynamic);
}

#[test]
fn quantize_clamps_and_snaps() {
    assert_eq!(SIZE_SLIDER.quantize(0.0), 1.0);
    assert_eq!(SIZE_SLIDER.quantize(99.0), 20.0);
    assert_eq!(SIZE_SLIDER.quantize(7.4), 7.0);
    assert_eq!(SIZE_SLIDER.quantize(7.6), 8.0);
    assert!((SPEED_SLIDER.quantize(0.73) - 0.7).abs() < 1e-5);
    assert!(SPEED_SLIDER.quantize(5.0) <= 2.0);
}

#[test]
fn fraction_round_trips_to_track_ends() {
    assert_eq!(SIZE_SLIDER.fraction(1.0), 0.0);
    assert_eq!(SIZE_SLIDER.fraction(20.0), 1.0);
    assert_eq!(SIZE_SLIDER.from_fraction(0.0), 1.0);
    assert_eq!(SIZE_SLIDER.from_fraction(1.0), 20.0);
    assert_eq!(SIZE_SLIDER.from_fraction(-3.0), 1.0);
    assert!((SPEED_SLIDER.from_fraction(0.25) - 0.5).abs() < 1e-5);
}

#[test]
fn parse_accepts_slider_strings() {
    assert_eq!(SIZE_SLIDER.parse("size", "12"), Ok(12.0));
    assert_eq!(SIZE_SLIDER.parse("size", " 3 "), Ok(3.0));
    let v = SPEED_SLIDER.parse("speed", "1.3").unwrap();
    assert!((v - 1.3).abs() < 1e-5);
}

#[test]
fn parse_rejects_garbage_and_out_of_range() {
    assert!(matches!(
        SIZE_SLIDER.parse("size", "big"),
        Err(ConfigError::Parse { name: "size", .. })
    ));
    assert!(matches!(
        SPEED_SLIDER.parse("speed", "2.5"),
        Err(ConfigError::OutOfRange { name: "speed", .. })
    ));
    assert!(SIZE_SLIDER.parse("size", "NaN").is_err());
}

#[test]
fn settings_new_validates() {
    assert!(RippleSettings::new(10.0, 0.5, ColorMode::Static).is_ok());
    let err = RippleSettings::new(0.0, 0.5, ColorMode::Static).unwrap_err();
    assert_eq!(
        err.to_string(),
        "size = 0 is outside [1, 20]"
    );
    assert!(RippleSettings::new(10.0, -0.1, ColorMode::Static).is_err());
}

#[test]
fn string_setters_keep_previous_value_on_error() {
    let mut s = RippleSettings::default();
    assert!(s.set_size_str("15").is_ok());
    assert_eq!(s.size(), 15.0);
    assert!(s.set_size_str("").is_err());
    assert_eq!(s.size(), 15.0);
    assert!(s.set_speed_str("9").is_err());
    assert_eq!(s.speed(), 0.5);
}

#[test]
fn keyboard_nudges_saturate_at_slider_bounds() {
    let mut s = RippleSettings::default();
    for _ in 0..30 {
        s.apply(KeyAction::SizeUp);
        s.apply(KeyAction::SpeedUp);
    }
    assert_eq!(s.size(), 20.0);
    assert!((s.speed() - 2.0).abs() < 1e-5);
    for _ in 0..30 {
        s.apply(KeyAction::SizeDown);
        s.apply(KeyAction::SpeedDown);
    }
    assert_eq!(s.size(), 1.0);
    assert_eq!(s.speed(), 0.0);
}

#[test]
fn clear_is_not_a_settings_action() {
    let mut s = RippleSettings::default();
    assert!(!s.apply(KeyAction::Clear));
    assert_eq!(s, RippleSettings::default());
}

#[test]
fn key_map_covers_shortcuts() {
    assert_eq!(action_for_key("c"), Some(KeyAction::ToggleColorMode));
    assert_eq!(action_for_key("C"), Some(KeyAction::ToggleColorMode));
    assert_eq!(action_for_key("w"), Some(KeyAction::CycleWaveform));
    assert_eq!(action_for_key("]"), Some(KeyAction::SizeUp));
    assert_eq!(action_for_key("["), Some(KeyAction::SizeDown));
    assert_eq!(action_for_key("="), Some(KeyAction::SpeedUp));
    assert_eq!(action_for_key("+"), Some(KeyAction::SpeedUp));
    assert_eq!(action_for_key("-"), Some(KeyAction::SpeedDown));
    assert_eq!(action_for_key("Escape"), Some(KeyAction::Clear));
    assert_eq!(action_for_key("x"), None);
    assert_eq!(action_for_key(""), None);
}

#[test]
fn summary_mentions_every_setting() {
    let s = RippleSettings::default();
    assert_eq!(s.summary(), "size 10 | speed 0.5 | dynamic | sine");
}

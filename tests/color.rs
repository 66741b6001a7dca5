use egui::Color32;
use tickfmt::color::*;

#[test]
fn basic_names_resolve() {
    assert_eq!(color_by_name("red"), Some(Color32::from_rgb(255, 0, 0)));
    assert_eq!(color_by_name("navy"), Some(Color32::from_rgb(0, 0, 128)));
    assert_eq!(
        color_by_name("steelblue"),
        Some(Color32::from_rgb(70, 130, 180))
    );
}

#[test]
fn lookup_is_case_insensitive() {
    assert_eq!(color_by_name("RED"), color_by_name("red"));
    assert_eq!(color_by_name("SteelBlue"), color_by_name("steelblue"));
}

#[test]
fn unknown_names_return_none() {
    assert_eq!(color_by_name("notacolor"), None);
    assert_eq!(color_by_name(""), None);
}

#[test]
fn parse_color_accepts_names_and_hex() {
    assert_eq!(parse_color("lime"), Some(Color32::from_rgb(0, 255, 0)));
    assert_eq!(parse_color("#ff0000"), Some(Color32::from_rgb(255, 0, 0)));
    assert_eq!(parse_color("#4682B4"), Some(Color32::from_rgb(70, 130, 180)));
}

#[test]
fn parse_color_expands_short_hex() {
    assert_eq!(parse_color("#f00"), Some(Color32::from_rgb(255, 0, 0)));
    assert_eq!(parse_color("#abc"), Some(Color32::from_rgb(170, 187, 204)));
}

#[test]
fn parse_color_rejects_malformed_input() {
    assert_eq!(parse_color("#gg0000"), None);
    assert_eq!(parse_color("#ffff"), None);
    assert_eq!(parse_color("#"), None);
    assert_eq!(parse_color("not a color"), None);
}

#[test]
fn parse_color_trims_whitespace() {
    assert_eq!(parse_color("  teal  "), Some(Color32::from_rgb(0, 128, 128)));
}

//! Tests for colors and palettes

use super::*;

#[test]
fn test_hex_parsing() {
    let c = Color::from_hex("#1D4ED8").unwrap();
    assert_eq!((c.r, c.g, c.b), (0x1D, 0x4E, 0xD8));
    assert_eq!(c.to_hex(), "#1d4ed8");
    assert!(Color::from_hex("#12345").is_err());
    assert!(Color::from_hex("zz0000").is_err());
}

#[test]
fn test_named_colors() {
    assert_eq!("lightblue".parse::<Color>().unwrap(), Color::LIGHT_BLUE);
    assert_eq!("Blue".parse::<Color>().unwrap(), Color::BLUE);
    assert_eq!("#ff0000".parse::<Color>().unwrap(), Color::RED);
}

#[test]
fn test_ordinal_palette_recycles() {
    assert_eq!(ordinal_color(1), Color::BLACK);
    assert_eq!(ordinal_color(9), Color::BLACK);
    assert_eq!(ordinal_color(2).to_hex(), "#df536b");
}

#[test]
fn test_rainbow_hues() {
    let hues = rainbow(6);
    assert_eq!(hues.len(), 6);
    assert_eq!(hues[0], Color::RED);
    assert_eq!(hues[2], Color::rgb(0, 255, 0));
    assert_eq!(hues[4], Color::BLUE);
}

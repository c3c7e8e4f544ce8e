//! Shared test fixtures for layout and E2E CLI tests.
#![allow(dead_code)] // Not every test binary uses every fixture

use acvs_display::config::{Config, DisplayConfig};
use std::path::PathBuf;
use tempfile::TempDir;

/// Number of squares in every display.
pub const SQUARES: usize = 54;

/// An encoding made of one repeated character.
pub fn uniform_encoding(c: char) -> String {
    std::iter::repeat(c).take(SQUARES).collect()
}

/// A 54-character digit encoding cycling through 0-9 from the start.
///
/// Character `k` is `k % 10`, so square `i` receives digit `(53 - i) % 10`.
pub fn cycling_digits() -> String {
    (0..SQUARES)
        .map(|k| char::from_digit((k % 10) as u32, 10).unwrap())
        .collect()
}

/// Display from the end-to-end example: 3-unit squares, radius 28.5, center (68.5, 28.5).
pub fn example_display(colors: &str, digits: &str) -> DisplayConfig {
    DisplayConfig {
        square_size: 3.0,
        outer_radius: 28.5,
        center_x: 68.5,
        center_y: 28.5,
        ..DisplayConfig::default()
    }
    .with_color_encoding(colors)
    .with_digit_encoding(digits)
}

/// Writes a config with the given display section to a temp directory.
///
/// # Returns
/// The config file path and the `TempDir` keeping it alive.
pub fn temp_config(display: DisplayConfig) -> (PathBuf, TempDir) {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let path = temp.path().join("config.toml");
    let config = Config {
        display,
        ..Config::default()
    };
    config.save_to(&path).expect("Failed to write config");
    (path, temp)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_encodings_have_full_length() {
        assert_eq!(uniform_encoding('0').len(), SQUARES);
        assert_eq!(cycling_digits().len(), SQUARES);
        assert!(cycling_digits().starts_with("0123456789"));
    }

    #[test]
    fn test_fixture_temp_config_loads() {
        let (path, _temp) = temp_config(DisplayConfig::default());
        assert!(Config::load_from(&path).is_ok());
    }
}

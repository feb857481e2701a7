//! Terminal capability detection and utilities

use owo_colors::{colors::css, OwoColorize};
use shelf::domain::config::Colour;

/// Decides whether prompts should be coloured
pub fn colour_enabled(colour: Colour) -> bool {
    match colour {
        Colour::Auto => supports_color::on(supports_color::Stream::Stderr).is_some(),
        Colour::Always => true,
        Colour::Never => false,
    }
}

/// Extension trait for colorizing output
pub trait Colorize {
    /// Color as info (blue)
    fn info(&self) -> String;
}

impl Colorize for str {
    fn info(&self) -> String {
        self.fg::<css::LightBlue>().to_string()
    }
}

#[cfg(test)]
mod tests {
    use shelf::domain::config::Colour;

    use super::{colour_enabled, Colorize};

    #[test]
    fn explicit_settings_override_detection() {
        assert!(colour_enabled(Colour::Always));
        assert!(!colour_enabled(Colour::Never));
    }

    #[test]
    fn info_keeps_the_text() {
        let painted = "Enter book title: ".info();
        assert!(painted.contains("Enter book title: "));
        assert_ne!(painted, "Enter book title: ");
    }
}

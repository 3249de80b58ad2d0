//! Terminal colour support

use owo_colors::{colors::css, OwoColorize};
use recipebook::Tier;

/// Detects whether colored output should be enabled
pub fn supports_color() -> bool {
    supports_color::on(supports_color::Stream::Stdout).is_some()
}

/// Extension trait for colorizing output
pub trait Colorize {
    /// Color as success (green)
    fn success(&self) -> String;
    /// Color as warning (amber)
    fn warning(&self) -> String;
    /// Dim the text
    fn dim(&self) -> String;
}

impl Colorize for str {
    fn success(&self) -> String {
        if supports_color() {
            self.fg::<css::Green>().to_string()
        } else {
            self.to_string()
        }
    }

    fn warning(&self) -> String {
        if supports_color() {
            self.fg::<css::Orange>().to_string()
        } else {
            self.to_string()
        }
    }

    fn dim(&self) -> String {
        if supports_color() {
            self.dimmed().to_string()
        } else {
            self.to_string()
        }
    }
}

impl Colorize for String {
    fn success(&self) -> String {
        self.as_str().success()
    }

    fn warning(&self) -> String {
        self.as_str().warning()
    }

    fn dim(&self) -> String {
        self.as_str().dim()
    }
}

/// The tier name, coloured by rank.
pub fn tier_label(tier: Tier) -> String {
    if !supports_color() {
        return tier.to_string();
    }

    match tier {
        Tier::Basic => tier.dimmed().to_string(),
        Tier::Advanced => tier.fg::<css::Green>().to_string(),
        Tier::Expert => tier.fg::<css::LightBlue>().to_string(),
        Tier::Master => tier.fg::<css::Orange>().to_string(),
        Tier::Mythic => tier.fg::<css::Purple>().bold().to_string(),
    }
}

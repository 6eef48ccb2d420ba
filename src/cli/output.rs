//! Output formatting for CLI commands
//!
//! Provides the color scheme and the pure formatting helpers used by
//! human-readable output. Colored output respects the NO_COLOR env var.

use crate::core::types::{PriceTier, Restaurant};

/// Color scheme for CLI output
pub mod colors {
    use colored::{ColoredString, Colorize};

    /// Style for labels/headers
    pub fn label(s: &str) -> ColoredString {
        s.bold()
    }

    /// Style for section banners
    pub fn banner(s: &str) -> ColoredString {
        s.blue().bold()
    }

    /// Style for step markers
    pub fn step(s: &str) -> ColoredString {
        s.yellow()
    }

    /// Style for "code example" lines
    pub fn code(s: &str) -> ColoredString {
        s.cyan()
    }

    /// Style for restaurant names
    pub fn name(s: &str) -> ColoredString {
        s.green().bold()
    }

    /// Style for ratings
    pub fn rating(s: &str) -> ColoredString {
        s.yellow()
    }

    /// Style for price tiers
    pub fn price(s: &str) -> ColoredString {
        s.magenta()
    }

    /// Style for locations
    pub fn location(s: &str) -> ColoredString {
        s.blue()
    }

    /// Style for success messages
    pub fn success(s: &str) -> ColoredString {
        s.green()
    }

    /// Style for warning messages
    pub fn warning(s: &str) -> ColoredString {
        s.yellow()
    }

    /// Style for error messages
    pub fn error(s: &str) -> ColoredString {
        s.red().bold()
    }

    /// Style for dim/secondary text
    pub fn dim(s: &str) -> ColoredString {
        s.dimmed()
    }
}

/// Format a rating with one decimal place and a star indicator
pub fn format_rating(rating: f32) -> String {
    format!("⭐ {rating:.1}")
}

/// Format a price tier for display
pub fn format_price(price: PriceTier) -> String {
    price.token().to_string()
}

/// Wrap text at a width, breaking on whitespace
///
/// Words longer than the width get their own line rather than being
/// split mid-word.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
        } else if current.chars().count() + 1 + word.chars().count() <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines
}

/// Render a restaurant record as indented human-readable lines
///
/// Layout: name with rating, location and price, then the wrapped
/// description.
pub fn render_restaurant(restaurant: &Restaurant, wrap_width: usize) -> Vec<String> {
    let mut lines = vec![
        format!(
            "   {} {}",
            colors::name(&restaurant.name),
            colors::rating(&format_rating(restaurant.rating))
        ),
        format!(
            "   📍 {} | 💰 {}",
            colors::location(&restaurant.location),
            colors::price(&format_price(restaurant.price))
        ),
    ];

    for line in wrap_text(&restaurant.description, wrap_width) {
        lines.push(format!("   {line}"));
    }

    lines
}

//! Step banners
//!
//! Each step is announced with a border line whose length matches the
//! message, the message itself, and the border again.

/// Border character used for step banners
pub const DEFAULT_BORDER: char = '=';

/// Render a banner for a message: border, message, border.
///
/// The border is exactly as many characters long as the message.
pub fn banner(message: &str, border: char) -> String {
    let width = message.chars().count();
    let line: String = std::iter::repeat(border).take(width).collect();
    format!("{line}\n{message}\n{line}")
}

/// Print a banner with the default border to stdout
pub fn print_banner(message: &str) {
    println!("{}", banner(message, DEFAULT_BORDER));
}

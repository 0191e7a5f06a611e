use colored::Color;

pub const PRIMARY: Color = Color::TrueColor { r: 138, g: 180, b: 248 };
pub const SEPARATOR: Color = Color::BrightBlack;
pub const TEXT_DEFAULT: Color = Color::TrueColor { r: 220, g: 220, b: 220 };

use colored::{Color, Colorize};

/// Visual styles of the verification report, one per block kind.
pub const INPUT: Color = Color::BrightMagenta;
pub const EXPECTED: Color = Color::BrightYellow;
pub const STDOUT: Color = Color::BrightGreen;
pub const STDERR: Color = Color::Magenta;
pub const FATAL: Color = Color::BrightRed;

#[macro_export]
macro_rules! print_success {
    ($fmt:literal $(, $e:expr)* $(,)?) => {{
        use ::colored::Colorize as _;
        println!("{}", format!($fmt $(, $e)*).green())
    }};
}

/// Wraps `text` in a start marker and a single reset marker, leaving every
/// internal newline untouched. When `text` does not end with a newline, one
/// is appended after the reset so subsequent output never joins the block's
/// last line.
pub fn paint_block(text: &str, color: Color) -> String {
    let mut block = text.color(color).to_string();
    if !text.ends_with('\n') {
        block.push('\n');
    }
    block
}

pub fn print_block(text: &str, color: Color) {
    print!("{}", paint_block(text, color));
}

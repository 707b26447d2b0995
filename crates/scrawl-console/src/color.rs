//! Terminal color control.
//!
//! The palette is the classic 16-entry console attribute table; each entry
//! maps to an ANSI SGR sequence. Sequences go through the stdout stream so
//! color changes stay ordered with formatted output.

/// Classic console palette. Discriminants are the legacy attribute values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum TermColor {
    Default = 0x7,
    Black = 0x0,
    DarkBlue = 0x1,
    DarkGreen = 0x2,
    BrightBlue = 0x3,
    Red = 0x4,
    Magenta = 0x5,
    /// Mustard yellow on most palettes.
    Yellow = 0x6,
    DarkGray = 0x8,
    Blue = 0x9,
    BrightGreen = 0xA,
    Cyan = 0xB,
    BrightRed = 0xC,
    BrightMagenta = 0xD,
    BrightYellow = 0xE,
    White = 0xF,
}

impl TermColor {
    /// The ANSI SGR sequence selecting this color. `Default` resets all
    /// attributes.
    #[must_use]
    pub const fn sgr(self) -> &'static str {
        match self {
            TermColor::Default => "\x1b[0m",
            TermColor::Black => "\x1b[30m",
            TermColor::DarkBlue => "\x1b[34m",
            TermColor::DarkGreen => "\x1b[32m",
            TermColor::BrightBlue => "\x1b[36m",
            TermColor::Red => "\x1b[31m",
            TermColor::Magenta => "\x1b[35m",
            TermColor::Yellow => "\x1b[33m",
            TermColor::DarkGray => "\x1b[90m",
            TermColor::Blue => "\x1b[94m",
            TermColor::BrightGreen => "\x1b[92m",
            TermColor::Cyan => "\x1b[96m",
            TermColor::BrightRed => "\x1b[91m",
            TermColor::BrightMagenta => "\x1b[95m",
            TermColor::BrightYellow => "\x1b[93m",
            TermColor::White => "\x1b[97m",
        }
    }
}

/// Switch the terminal foreground color for subsequent stdout output.
pub fn set_terminal_color(color: TermColor) {
    crate::stdout_stream().lock().write_str(color.sgr());
}

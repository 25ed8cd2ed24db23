//! ESC/POS command templates
//!
//! Every template is a fixed hex string in the form the device sink expects:
//! two-digit byte tokens separated by single spaces.

/// Initialize printer (ESC @)
pub const INIT: &str = "1B 40";

// === Alignment (ESC a n) ===
pub const ALIGN_LEFT: &str = "1B 61 00";
pub const ALIGN_CENTER: &str = "1B 61 01";
pub const ALIGN_RIGHT: &str = "1B 61 02";

/// Underline on (FS - 1)
pub const UNDERLINE: &str = "1C 2D 01";

/// Print and line feed (LF)
pub const NEWLINE: &str = "0A";

// === Font (ESC M n / ESC E n / ESC ! n) ===
/// Font B, 9x17
pub const FONT_SMALL: &str = "1B 4D 01";
/// Font A, 12x24
pub const FONT_NORMAL: &str = "1B 4D 00";
pub const FONT_BOLD: &str = "1B 45 01";
pub const FONT_HEIGHT_X2: &str = "1B 21 10";
pub const FONT_WIDTH_X2: &str = "1B 21 20";
pub const FONT_HEIGHT_WIDTH_X2: &str = "1B 21 30";

// === QR code (GS ( k) ===
/// Module size preamble sent before every Meida QR code
pub const QR_PIXEL_SIZE: &str = "1D 28 6B 33 33 31 51 30";
/// Module size 5, shared by both dialects
pub const QR_INIT: &str = "1D 28 6B 03 00 31 43 05";
/// Print stored symbol (Gprinter)
pub const QR_SEND: &str = "1D 28 6B 03 00 31 51 30";
/// Print stored symbol (Meida)
pub const QR_FINALIZE: &str = "1D 28 6B 33 33 31 51 30";

/// Buzzer, 2 beeps of 100ms (ESC B n t)
pub const BUZZER: &str = "1B 42 02 02";

/// Named command template
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Init,
    AlignLeft,
    AlignCenter,
    AlignRight,
    Underline,
    NewLine,
    FontSmall,
    FontNormal,
    FontBold,
    FontHeightX2,
    FontWidthX2,
    FontHeightWidthX2,
    QrPixelSize,
    QrInit,
    QrSend,
    QrFinalize,
    Buzzer,
}

impl Command {
    /// All templates, in vocabulary order
    pub const ALL: [Command; 17] = [
        Command::Init,
        Command::AlignLeft,
        Command::AlignCenter,
        Command::AlignRight,
        Command::Underline,
        Command::NewLine,
        Command::FontSmall,
        Command::FontNormal,
        Command::FontBold,
        Command::FontHeightX2,
        Command::FontWidthX2,
        Command::FontHeightWidthX2,
        Command::QrPixelSize,
        Command::QrInit,
        Command::QrSend,
        Command::QrFinalize,
        Command::Buzzer,
    ];

    /// The hex bytes sent for this command
    pub fn hex(self) -> &'static str {
        match self {
            Command::Init => INIT,
            Command::AlignLeft => ALIGN_LEFT,
            Command::AlignCenter => ALIGN_CENTER,
            Command::AlignRight => ALIGN_RIGHT,
            Command::Underline => UNDERLINE,
            Command::NewLine => NEWLINE,
            Command::FontSmall => FONT_SMALL,
            Command::FontNormal => FONT_NORMAL,
            Command::FontBold => FONT_BOLD,
            Command::FontHeightX2 => FONT_HEIGHT_X2,
            Command::FontWidthX2 => FONT_WIDTH_X2,
            Command::FontHeightWidthX2 => FONT_HEIGHT_WIDTH_X2,
            Command::QrPixelSize => QR_PIXEL_SIZE,
            Command::QrInit => QR_INIT,
            Command::QrSend => QR_SEND,
            Command::QrFinalize => QR_FINALIZE,
            Command::Buzzer => BUZZER,
        }
    }
}

//! QR code payload frames
//!
//! Both supported printer families store QR data with GS ( k function 180
//! (`31 50 30`), prefixed by a length field of payload size + 3. They differ
//! in how that length field is written into the hex command string:
//! - Gprinter writes it as a hex number (`13` bytes -> `"d"`)
//! - Meida writes it as a decimal number (`13` bytes -> `"13"`)
//!
//! The Meida firmware depends on the decimal form, so the two builders stay
//! separate even though they only differ in one token.

use enum_dispatch::enum_dispatch;

use crate::width::to_hex_bytes;

const FRAME_HEADER: &str = "1D 28 6b";
const STORE_FUNCTION: &str = "00 31 50 30";

/// Builds the store-data frame for a QR payload
#[enum_dispatch]
pub trait QrFrameBuilder {
    /// Hex command string storing `payload` in the printer's symbol buffer
    fn build(&self, payload: &str) -> String;
}

/// Gprinter dialect: length field in hex
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HexLengthFrame;

/// Meida dialect: length field in decimal
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecimalLengthFrame;

impl QrFrameBuilder for HexLengthFrame {
    fn build(&self, payload: &str) -> String {
        let len = payload.len() + 3;
        frame(&format!("{:x}", len), payload)
    }
}

impl QrFrameBuilder for DecimalLengthFrame {
    fn build(&self, payload: &str) -> String {
        let len = payload.len() + 3;
        frame(&len.to_string(), payload)
    }
}

fn frame(len_field: &str, payload: &str) -> String {
    let data = to_hex_bytes(payload);
    if data.is_empty() {
        format!("{} {} {}", FRAME_HEADER, len_field, STORE_FUNCTION)
    } else {
        format!("{} {} {} {}", FRAME_HEADER, len_field, STORE_FUNCTION, data)
    }
}

/// QR dialect selected by printer vendor
///
/// Uses enum_dispatch for zero-cost static dispatch.
#[enum_dispatch(QrFrameBuilder)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QrVendor {
    /// Vendor A
    Gprinter(HexLengthFrame),
    /// Vendor B
    Meida(DecimalLengthFrame),
}

impl QrVendor {
    pub const GPRINTER: QrVendor = QrVendor::Gprinter(HexLengthFrame);
    pub const MEIDA: QrVendor = QrVendor::Meida(DecimalLengthFrame);
}

/// Store-data frame for vendor A (hex length field)
pub fn build_vendor_a_qr_frame(payload: &str) -> String {
    HexLengthFrame.build(payload)
}

/// Store-data frame for vendor B (decimal length field)
pub fn build_vendor_b_qr_frame(payload: &str) -> String {
    DecimalLengthFrame.build(payload)
}

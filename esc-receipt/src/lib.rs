//! # esc-receipt
//!
//! ESC/POS receipt formatting for thermal printers.
//!
//! ## Scope
//!
//! This crate handles WHAT goes to the printer:
//! - Width-aware column layouts (Chinese characters take two cells)
//! - ESC/POS command templates as hex strings
//! - QR code frames for Gprinter and Meida dialects
//!
//! The transport (Bluetooth, serial, network) is injected as a
//! [`DeviceSink`]. [`WriterSink`] adapts any `std::io::Write`.
//!
//! ## Example
//!
//! ```
//! use esc_receipt::{QrVendor, ReceiptPrinter, RecordingSink};
//!
//! let mut printer = ReceiptPrinter::new(RecordingSink::new());
//! printer.initialize()?;
//! printer.align_center()?;
//! printer.line("小票")?;
//! printer.align_left()?;
//! let total = printer.left_right("合计", "12.00");
//! printer.line(&total)?;
//! printer.print_qr(QrVendor::GPRINTER, "https://example.com/r/1")?;
//! # Ok::<(), esc_receipt::PrintError>(())
//! ```

pub mod command;
mod config;
mod error;
pub mod layout;
mod printer;
mod qr;
mod sink;
pub mod width;

// Re-exports
pub use command::Command;
pub use config::{ConfigOverrides, PaperWidth, PrintConfig};
pub use error::{PrintError, PrintResult};
pub use layout::{key_value, left_center_right, left_right, separator};
pub use printer::ReceiptPrinter;
pub use qr::{
    DecimalLengthFrame, HexLengthFrame, QrFrameBuilder, QrVendor, build_vendor_a_qr_frame,
    build_vendor_b_qr_frame,
};
pub use sink::{DeviceSink, Emission, RecordingSink, WriterSink, decode_hex};
pub use width::{
    CharWidth, char_width, display_length, display_width, is_double_width, spaces, to_hex_bytes,
    to_hex_bytes_encoded,
};

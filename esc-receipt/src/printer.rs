//! Receipt printer handle
//!
//! [`ReceiptPrinter`] owns the device sink and the print configuration.
//! The sink is a constructor argument, so no command can be emitted before a
//! transport is bound. Reconfiguring needs `&mut self`, which keeps the
//! configuration write-once-then-read even when the handle is shared
//! between threads behind a lock.

use tracing::{debug, instrument, trace};

use crate::command::Command;
use crate::config::{ConfigOverrides, PrintConfig};
use crate::error::PrintResult;
use crate::layout;
use crate::qr::{QrFrameBuilder, QrVendor};
use crate::sink::DeviceSink;
use crate::width::display_length;

/// ESC/POS receipt printer bound to a device sink
pub struct ReceiptPrinter<S: DeviceSink> {
    sink: S,
    config: PrintConfig,
}

impl<S: DeviceSink> ReceiptPrinter<S> {
    /// Bind a sink with the default configuration (58mm paper)
    pub fn new(sink: S) -> Self {
        Self::with_config(sink, PrintConfig::default())
    }

    /// Bind a sink with an explicit configuration
    pub fn with_config(sink: S, config: PrintConfig) -> Self {
        Self { sink, config }
    }

    /// Merge configuration overrides
    pub fn set_config(&mut self, overrides: &ConfigOverrides) {
        self.config.merge(overrides);
        debug!(word_number = self.config.width(), "print config updated");
    }

    pub fn config(&self) -> &PrintConfig {
        &self.config
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Release the sink
    pub fn into_sink(self) -> S {
        self.sink
    }

    // === Layout Helpers ===

    /// [`layout::left_right`] at the configured width
    pub fn left_right(&self, left: &str, right: &str) -> String {
        let width = self.config.width();
        if display_length(left) + display_length(right) > width {
            trace!(width, "left/right line overflows");
        }
        layout::left_right(left, right, width)
    }

    /// [`layout::left_center_right`] at the configured width
    pub fn left_center_right(&self, left: &str, center: &str, right: &str) -> String {
        layout::left_center_right(left, center, right, self.config.width())
    }

    /// [`layout::key_value`] at the configured width
    pub fn key_value(&self, name: &str, value: &str) -> String {
        layout::key_value(name, value, self.config.width())
    }

    /// [`layout::separator`] at the configured width
    pub fn separator(&self, fill: char) -> String {
        layout::separator(fill, self.config.width())
    }

    // === Commands ===

    fn emit(&mut self, cmd: Command) -> PrintResult<()> {
        trace!(command = ?cmd, "emit");
        self.sink.write_hex(cmd.hex())
    }

    /// Initialize printer
    pub fn initialize(&mut self) -> PrintResult<()> {
        self.emit(Command::Init)
    }

    /// Print buffered line and feed
    pub fn print_and_new_line(&mut self) -> PrintResult<()> {
        self.emit(Command::NewLine)
    }

    pub fn align_left(&mut self) -> PrintResult<()> {
        self.emit(Command::AlignLeft)
    }

    pub fn align_center(&mut self) -> PrintResult<()> {
        self.emit(Command::AlignCenter)
    }

    pub fn align_right(&mut self) -> PrintResult<()> {
        self.emit(Command::AlignRight)
    }

    pub fn underline(&mut self) -> PrintResult<()> {
        self.emit(Command::Underline)
    }

    pub fn font_small(&mut self) -> PrintResult<()> {
        self.emit(Command::FontSmall)
    }

    pub fn font_normal(&mut self) -> PrintResult<()> {
        self.emit(Command::FontNormal)
    }

    pub fn font_bold(&mut self) -> PrintResult<()> {
        self.emit(Command::FontBold)
    }

    pub fn font_height_x2(&mut self) -> PrintResult<()> {
        self.emit(Command::FontHeightX2)
    }

    pub fn font_width_x2(&mut self) -> PrintResult<()> {
        self.emit(Command::FontWidthX2)
    }

    pub fn font_height_width_x2(&mut self) -> PrintResult<()> {
        self.emit(Command::FontHeightWidthX2)
    }

    /// Sound the buzzer
    pub fn sound(&mut self) -> PrintResult<()> {
        self.emit(Command::Buzzer)
    }

    // === Text Output ===

    /// Write text unchanged; the sink handles encoding
    pub fn text(&mut self, s: &str) -> PrintResult<()> {
        self.sink.write_text(s)
    }

    /// Write text, then print and feed
    pub fn line(&mut self, s: &str) -> PrintResult<()> {
        self.text(s)?;
        self.print_and_new_line()
    }

    /// Write a hex command string directly
    pub fn raw_hex(&mut self, hex: &str) -> PrintResult<()> {
        self.sink.write_hex(hex)
    }

    // === QR Code ===

    /// Print a QR frame on a Gprinter (vendor A) device
    ///
    /// `frame` comes from [`crate::build_vendor_a_qr_frame`]. It is validated
    /// by the sink before any part of the sequence is written.
    #[instrument(skip(self, frame), fields(frame_len = frame.len()))]
    pub fn print_vendor_a_qr(&mut self, frame: &str) -> PrintResult<()> {
        self.sink.validate_hex(frame)?;
        self.emit(Command::QrInit)?;
        self.sink.write_hex(frame)?;
        self.emit(Command::QrSend)
    }

    /// Print a QR frame on a Meida (vendor B) device
    ///
    /// `frame` comes from [`crate::build_vendor_b_qr_frame`]. It is validated
    /// by the sink before any part of the sequence is written.
    #[instrument(skip(self, frame), fields(frame_len = frame.len()))]
    pub fn print_vendor_b_qr(&mut self, frame: &str) -> PrintResult<()> {
        self.sink.validate_hex(frame)?;
        self.emit(Command::QrPixelSize)?;
        self.emit(Command::QrInit)?;
        self.sink.write_hex(frame)?;
        self.emit(Command::QrFinalize)
    }

    /// Build the frame for `payload` and print it with the vendor's sequence
    pub fn print_qr(&mut self, vendor: QrVendor, payload: &str) -> PrintResult<()> {
        let frame = vendor.build(payload);
        match vendor {
            QrVendor::Gprinter(_) => self.print_vendor_a_qr(&frame),
            QrVendor::Meida(_) => self.print_vendor_b_qr(&frame),
        }
    }
}

//! Device sinks for receipt output
//!
//! A sink receives two kinds of writes:
//! - Text, passed through for the device layer to encode
//! - Hex command strings (`"1B 61 01"`), one byte per token
//!
//! QR frames carry an unpadded length token that grows past two digits for
//! long payloads (`"1D 28 6b 105 00 ..."`). [`decode_hex`] writes the low
//! byte of such a token and carries the high byte into the next token, which
//! is the pH slot of the GS ( k length field.
//!
//! Provided sinks:
//! - [`RecordingSink`] keeps every write in memory (dry runs, tests)
//! - [`WriterSink`] decodes writes to raw bytes on any `std::io::Write`

use std::io::Write;

use encoding_rs::Encoding;
use tracing::{instrument, trace, warn};

use crate::error::{PrintError, PrintResult};

/// Transport capability the printer writes through
pub trait DeviceSink {
    /// Write text for the device to print as-is
    fn write_text(&mut self, text: &str) -> PrintResult<()>;

    /// Write a space separated hex byte string
    fn write_hex(&mut self, hex: &str) -> PrintResult<()>;

    /// Check that `hex` would be accepted by [`DeviceSink::write_hex`]
    ///
    /// Called before multi-part sequences so a bad part fails before the
    /// first part reaches the device.
    fn validate_hex(&self, _hex: &str) -> PrintResult<()> {
        Ok(())
    }
}

impl<S: DeviceSink + ?Sized> DeviceSink for &mut S {
    fn write_text(&mut self, text: &str) -> PrintResult<()> {
        (**self).write_text(text)
    }

    fn write_hex(&mut self, hex: &str) -> PrintResult<()> {
        (**self).write_hex(hex)
    }

    fn validate_hex(&self, hex: &str) -> PrintResult<()> {
        (**self).validate_hex(hex)
    }
}

impl<S: DeviceSink + ?Sized> DeviceSink for Box<S> {
    fn write_text(&mut self, text: &str) -> PrintResult<()> {
        (**self).write_text(text)
    }

    fn write_hex(&mut self, hex: &str) -> PrintResult<()> {
        (**self).write_hex(hex)
    }

    fn validate_hex(&self, hex: &str) -> PrintResult<()> {
        (**self).validate_hex(hex)
    }
}

/// One write received by a [`RecordingSink`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Emission {
    Text(String),
    Hex(String),
}

/// In-memory sink that records every write in order
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    emissions: Vec<Emission>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far
    pub fn emissions(&self) -> &[Emission] {
        &self.emissions
    }

    /// Drain the recorded writes
    pub fn take(&mut self) -> Vec<Emission> {
        std::mem::take(&mut self.emissions)
    }

    /// Hex writes only, in order
    pub fn hex_stream(&self) -> Vec<&str> {
        self.emissions
            .iter()
            .filter_map(|e| match e {
                Emission::Hex(h) => Some(h.as_str()),
                Emission::Text(_) => None,
            })
            .collect()
    }
}

impl DeviceSink for RecordingSink {
    fn write_text(&mut self, text: &str) -> PrintResult<()> {
        self.emissions.push(Emission::Text(text.to_string()));
        Ok(())
    }

    fn write_hex(&mut self, hex: &str) -> PrintResult<()> {
        self.emissions.push(Emission::Hex(hex.to_string()));
        Ok(())
    }
}

/// Decode a hex command string into bytes
///
/// Tokens are separated by whitespace and normally hold one or two hex
/// digits, so `"1D 28 6b 5 00"` decodes to `[0x1D, 0x28, 0x6B, 0x05, 0x00]`.
///
/// A token of three or four digits is split: its low byte is written and its
/// high byte is added to the next token. `"1D 28 6b 12f 00"` decodes to
/// `[0x1D, 0x28, 0x6B, 0x2F, 0x01]`. A high byte with no token after it, or
/// a sum that no longer fits, is rejected.
pub fn decode_hex(hex: &str) -> PrintResult<Vec<u8>> {
    let mut bytes = Vec::new();
    let mut carry: u16 = 0;

    for token in hex.split_whitespace() {
        if token.len() > 4 {
            return Err(PrintError::InvalidHex(token.to_string()));
        }
        let value = u16::from_str_radix(token, 16)
            .ok()
            .and_then(|v| v.checked_add(carry))
            .ok_or_else(|| PrintError::InvalidHex(token.to_string()))?;

        carry = value >> 8;
        if carry != 0 {
            warn!(token, high = carry, "wide hex token, carrying high byte");
        }
        bytes.push((value & 0xFF) as u8);
    }

    if carry != 0 {
        return Err(PrintError::InvalidHex(format!(
            "dangling high byte {:02x}",
            carry
        )));
    }
    Ok(bytes)
}

/// Sink writing raw bytes to an `std::io::Write` transport
///
/// Text is encoded with the configured encoding (UTF-8 by default). Most
/// Chinese thermal printers expect GBK, see [`WriterSink::with_encoding`].
pub struct WriterSink<W: Write> {
    inner: W,
    encoding: &'static Encoding,
}

impl<W: Write> WriterSink<W> {
    /// Wrap a transport, encoding text as UTF-8
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            encoding: encoding_rs::UTF_8,
        }
    }

    /// Set the text encoding
    pub fn with_encoding(mut self, encoding: &'static Encoding) -> Self {
        self.encoding = encoding;
        self
    }

    /// The text encoding in use
    pub fn encoding(&self) -> &'static Encoding {
        self.encoding
    }

    /// Flush the underlying transport
    pub fn flush(&mut self) -> PrintResult<()> {
        self.inner.flush()?;
        Ok(())
    }

    /// Get the underlying transport back
    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> DeviceSink for WriterSink<W> {
    #[instrument(skip(self, text), fields(encoding = self.encoding.name(), len = text.len()))]
    fn write_text(&mut self, text: &str) -> PrintResult<()> {
        let (bytes, _, had_errors) = self.encoding.encode(text);
        if had_errors {
            trace!("unmappable characters replaced");
        }
        self.inner.write_all(&bytes)?;
        Ok(())
    }

    fn write_hex(&mut self, hex: &str) -> PrintResult<()> {
        let bytes = decode_hex(hex)?;
        trace!(bytes = bytes.len(), "writing command");
        self.inner.write_all(&bytes)?;
        Ok(())
    }

    fn validate_hex(&self, hex: &str) -> PrintResult<()> {
        decode_hex(hex).map(|_| ())
    }
}

//! Image header reading
//!
//! Provides metadata extraction from netpbm files without decoding pixel
//! data, plus the byte scanner shared with the pixel decoder.
//!
//! A header is the magic number followed by width, height and (except for
//! bitmaps) maxval as whitespace-separated decimal tokens. A `#` starts a
//! comment that runs to the end of the line and may appear anywhere between
//! tokens.

use crate::format::detect_format_from_bytes;
use crate::{IoError, IoResult};
use netpbm_core::PnmFormat;
use std::fs;
use std::path::Path;

/// Image metadata read without decoding pixel data
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PnmHeader {
    /// Format tag from the magic number
    pub format: PnmFormat,
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Maximum sample value (1 for bitmaps)
    pub max_value: u8,
}

/// Read image metadata from a file path without decoding pixel data
pub fn read_image_header<P: AsRef<Path>>(path: P) -> IoResult<PnmHeader> {
    let data = fs::read(path)?;
    read_image_header_mem(&data)
}

/// Read image metadata from bytes without decoding pixel data
pub fn read_image_header_mem(data: &[u8]) -> IoResult<PnmHeader> {
    let mut scanner = Scanner::new(data);
    parse_header(&mut scanner)
}

/// Whitespace as netpbm defines it (includes vertical tab and form feed).
#[inline]
pub(crate) fn is_pnm_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r' | 0x0b | 0x0c)
}

/// Parse the header and leave `scanner` at the first pixel byte or token.
///
/// For raw formats the single whitespace byte that terminates the header is
/// consumed, so the scanner sits exactly at the binary raster.
pub(crate) fn parse_header(scanner: &mut Scanner<'_>) -> IoResult<PnmHeader> {
    let format = detect_format_from_bytes(scanner.remaining())?;
    scanner.advance(2);
    if !scanner.at_token_boundary() {
        return Err(IoError::InvalidData(format!(
            "magic number {} must be followed by whitespace",
            format.magic()
        )));
    }

    let width = scanner.next_uint("width")?;
    let height = scanner.next_uint("height")?;
    if width == 0 || height == 0 {
        return Err(IoError::InvalidData(format!(
            "invalid dimensions {width}x{height}"
        )));
    }

    let max_value = if format.has_max_value() {
        match scanner.next_uint("maxval")? {
            0 => return Err(IoError::InvalidData("maxval must be positive".to_string())),
            v if v > u8::MAX as u32 => {
                return Err(IoError::UnsupportedFormat(format!(
                    "maxval {v} needs 16-bit samples"
                )));
            }
            v => v as u8,
        }
    } else {
        1
    };

    if !format.is_plain() {
        scanner.expect_separator()?;
    }

    Ok(PnmHeader {
        format,
        width,
        height,
        max_value,
    })
}

/// Forward-only reader over an in-memory netpbm file
pub(crate) struct Scanner<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Scanner<'a> {
    pub(crate) fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Bytes not yet consumed.
    pub(crate) fn remaining(&self) -> &'a [u8] {
        &self.data[self.pos..]
    }

    pub(crate) fn advance(&mut self, n: usize) {
        self.pos = (self.pos + n).min(self.data.len());
    }

    /// Whether the next byte separates tokens (whitespace or a comment).
    fn at_token_boundary(&self) -> bool {
        self.data
            .get(self.pos)
            .is_some_and(|&b| is_pnm_whitespace(b) || b == b'#')
    }

    /// Skip whitespace and `#` comments.
    fn skip_blank(&mut self) {
        while let Some(&b) = self.data.get(self.pos) {
            if is_pnm_whitespace(b) {
                self.pos += 1;
            } else if b == b'#' {
                while let Some(&c) = self.data.get(self.pos) {
                    if c == b'\n' || c == b'\r' {
                        break;
                    }
                    self.pos += 1;
                }
            } else {
                break;
            }
        }
    }

    /// Read the next unsigned decimal token.
    pub(crate) fn next_uint(&mut self, what: &str) -> IoResult<u32> {
        self.skip_blank();
        let start = self.pos;
        while self
            .data
            .get(self.pos)
            .is_some_and(|b| !is_pnm_whitespace(*b) && *b != b'#')
        {
            self.pos += 1;
        }
        let token = &self.data[start..self.pos];
        if token.is_empty() {
            return Err(IoError::DecodeError(format!(
                "unexpected end of data reading {what}"
            )));
        }
        std::str::from_utf8(token)
            .ok()
            .filter(|s| s.bytes().all(|b| b.is_ascii_digit()))
            .and_then(|s| s.parse::<u32>().ok())
            .ok_or_else(|| {
                IoError::InvalidData(format!(
                    "expected decimal {what}, found {:?}",
                    String::from_utf8_lossy(token)
                ))
            })
    }

    /// Read one plain bitmap digit; digits need not be separated.
    pub(crate) fn next_bit(&mut self) -> IoResult<bool> {
        self.skip_blank();
        match self.data.get(self.pos) {
            Some(b'0') => {
                self.pos += 1;
                Ok(false)
            }
            Some(b'1') => {
                self.pos += 1;
                Ok(true)
            }
            Some(&b) => Err(IoError::InvalidData(format!(
                "expected bitmap digit, found {:?}",
                b as char
            ))),
            None => Err(IoError::DecodeError(
                "unexpected end of data reading bitmap".to_string(),
            )),
        }
    }

    /// Consume the single whitespace byte that ends a raw header.
    fn expect_separator(&mut self) -> IoResult<()> {
        match self.data.get(self.pos) {
            Some(&b) if is_pnm_whitespace(b) => {
                self.pos += 1;
                Ok(())
            }
            _ => Err(IoError::InvalidData(
                "header must end with a single whitespace byte".to_string(),
            )),
        }
    }

    /// Take exactly `n` raw bytes.
    pub(crate) fn take(&mut self, n: usize) -> IoResult<&'a [u8]> {
        let end = self.pos.checked_add(n).filter(|&end| end <= self.data.len());
        match end {
            Some(end) => {
                let bytes = &self.data[self.pos..end];
                self.pos = end;
                Ok(bytes)
            }
            None => Err(IoError::DecodeError(format!(
                "raster truncated: need {} bytes, have {}",
                n,
                self.data.len() - self.pos
            ))),
        }
    }
}

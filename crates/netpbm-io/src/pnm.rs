//! PNM (Portable Any Map) format support
//!
//! Reads and writes all six netpbm variants:
//!
//! | Tag | Variant | Raster |
//! |---|---|---|
//! | P1 | bitmap | ASCII `0`/`1`, separators optional |
//! | P2 | graymap | ASCII decimal |
//! | P3 | pixmap | ASCII decimal, R G B per pixel |
//! | P4 | bitmap | packed bits, MSB first, rows padded to a byte |
//! | P5 | graymap | one byte per sample |
//! | P6 | pixmap | three bytes per pixel |
//!
//! A bitmap `1` is a set (on, black) pixel and decodes to `true`.

use crate::header::{PnmHeader, Scanner, parse_header};
use crate::{IoError, IoResult};
use log::{debug, warn};
use netpbm_core::{AnyCanvas, Canvas, PnmFormat, Rgb, Sample};
use std::io::{Read, Write};

/// Longest line written in plain formats
const MAX_PLAIN_LINE: usize = 70;

/// Read a PNM image from a reader.
///
/// # Arguments
/// * `reader` - A reader positioned at the `P1`..`P6` magic
///
/// # Returns
/// A monochrome, grayscale or color canvas tagged with the format it was
/// read from.
pub fn read_pnm<R: Read>(mut reader: R) -> IoResult<AnyCanvas> {
    let mut data = Vec::new();
    reader.read_to_end(&mut data)?;
    decode_pnm(&data)
}

/// Decode a PNM image held in memory.
///
/// Bytes after the last pixel are ignored.
pub fn decode_pnm(data: &[u8]) -> IoResult<AnyCanvas> {
    let mut scanner = Scanner::new(data);
    let header = parse_header(&mut scanner)?;
    debug!(
        "decode {} {}x{} maxval {}",
        header.format.magic(),
        header.width,
        header.height,
        header.max_value
    );

    let count = pixel_count(&header)?;
    let canvas = match header.format {
        PnmFormat::P1 => {
            let data = read_plain(&mut scanner, count, |s| s.next_bit())?;
            AnyCanvas::Mono(assemble(&header, data)?)
        }
        PnmFormat::P2 => {
            let data = read_plain(&mut scanner, count, |s| plain_sample(s, header.max_value))?;
            AnyCanvas::Gray(assemble(&header, data)?)
        }
        PnmFormat::P3 => {
            let data = read_plain(&mut scanner, count, |s| {
                Ok(Rgb::new(
                    plain_sample(s, header.max_value)?,
                    plain_sample(s, header.max_value)?,
                    plain_sample(s, header.max_value)?,
                ))
            })?;
            AnyCanvas::Color(assemble(&header, data)?)
        }
        PnmFormat::P4 => {
            let data = read_packed_bits(&mut scanner, &header, count)?;
            AnyCanvas::Mono(assemble(&header, data)?)
        }
        PnmFormat::P5 => {
            let bytes = scanner.take(count)?;
            check_raw_samples(bytes, header.max_value)?;
            AnyCanvas::Gray(assemble(&header, bytes.to_vec())?)
        }
        PnmFormat::P6 => {
            let len = count.checked_mul(3).ok_or_else(|| too_large(&header))?;
            let bytes = scanner.take(len)?;
            check_raw_samples(bytes, header.max_value)?;
            let data = bytes
                .chunks_exact(3)
                .map(|c| Rgb::new(c[0], c[1], c[2]))
                .collect();
            AnyCanvas::Color(assemble(&header, data)?)
        }
    };
    Ok(canvas)
}

fn too_large(header: &PnmHeader) -> IoError {
    IoError::InvalidData(format!(
        "image {}x{} too large",
        header.width, header.height
    ))
}

fn pixel_count(header: &PnmHeader) -> IoResult<usize> {
    (header.width as usize)
        .checked_mul(header.height as usize)
        .ok_or_else(|| too_large(header))
}

fn assemble<P: Sample>(header: &PnmHeader, data: Vec<P>) -> IoResult<Canvas<P>> {
    Ok(Canvas::from_raw(
        header.width,
        header.height,
        header.max_value,
        header.format,
        data,
    )?)
}

/// Read `count` plain samples; capacity is bounded by the input size.
fn read_plain<'a, T>(
    scanner: &mut Scanner<'a>,
    count: usize,
    mut next: impl FnMut(&mut Scanner<'a>) -> IoResult<T>,
) -> IoResult<Vec<T>> {
    let mut data = Vec::with_capacity(count.min(scanner.remaining().len()));
    for _ in 0..count {
        data.push(next(scanner)?);
    }
    Ok(data)
}

fn plain_sample(scanner: &mut Scanner<'_>, max_value: u8) -> IoResult<u8> {
    let v = scanner.next_uint("sample")?;
    if v > max_value as u32 {
        warn!("sample {v} exceeds maxval {max_value}");
        return Err(IoError::InvalidData(format!(
            "sample {v} exceeds maxval {max_value}"
        )));
    }
    Ok(v as u8)
}

fn check_raw_samples(bytes: &[u8], max_value: u8) -> IoResult<()> {
    if let Some(&v) = bytes.iter().find(|&&v| v > max_value) {
        warn!("sample {v} exceeds maxval {max_value}");
        return Err(IoError::InvalidData(format!(
            "sample {v} exceeds maxval {max_value}"
        )));
    }
    Ok(())
}

fn read_packed_bits(
    scanner: &mut Scanner<'_>,
    header: &PnmHeader,
    count: usize,
) -> IoResult<Vec<bool>> {
    let width = header.width as usize;
    let row_bytes = width.div_ceil(8);
    let len = row_bytes
        .checked_mul(header.height as usize)
        .ok_or_else(|| too_large(header))?;
    let bytes = scanner.take(len)?;

    let mut data = Vec::with_capacity(count);
    for row in bytes.chunks_exact(row_bytes) {
        data.extend((0..width).map(|x| row[x / 8] & (0x80 >> (x % 8)) != 0));
    }
    Ok(data)
}

// ============================================================================
// Encoding
// ============================================================================

/// Write a canvas as PNM to a writer.
///
/// The variant and encoding come from the canvas's format tag.
///
/// # Arguments
/// * `canvas` - The image to encode
/// * `writer` - Destination writer
///
/// # Errors
///
/// Returns [`IoError::EncodeError`] if a sample exceeds the canvas max
/// value (possible only after a metadata-only max value change).
pub fn write_pnm<W: Write>(canvas: &AnyCanvas, mut writer: W) -> IoResult<()> {
    let format = canvas.format();
    debug!(
        "encode {} {}x{} maxval {}",
        format.magic(),
        canvas.width(),
        canvas.height(),
        canvas.max_value()
    );

    match canvas {
        AnyCanvas::Mono(c) => {
            write_header(&mut writer, c)?;
            if format.is_plain() {
                write_plain(&mut writer, c, |v, out| {
                    out.push(String::from(if v { "1" } else { "0" }));
                })?;
            } else {
                write_packed_bits(&mut writer, c)?;
            }
        }
        AnyCanvas::Gray(c) => {
            check_encodable(c)?;
            write_header(&mut writer, c)?;
            if format.is_plain() {
                write_plain(&mut writer, c, |v, out| out.push(v.to_string()))?;
            } else {
                writer.write_all(c.data())?;
            }
        }
        AnyCanvas::Color(c) => {
            check_encodable(c)?;
            write_header(&mut writer, c)?;
            if format.is_plain() {
                write_plain(&mut writer, c, |v, out| {
                    out.extend([v.r, v.g, v.b].iter().map(u8::to_string));
                })?;
            } else {
                let bytes: Vec<u8> = c.data().iter().flat_map(|v| [v.r, v.g, v.b]).collect();
                writer.write_all(&bytes)?;
            }
        }
    }
    writer.flush()?;
    Ok(())
}

/// Encode a canvas into an in-memory PNM file.
pub fn encode_pnm(canvas: &AnyCanvas) -> IoResult<Vec<u8>> {
    let mut out = Vec::new();
    write_pnm(canvas, &mut out)?;
    Ok(out)
}

fn check_encodable<P: Sample>(canvas: &Canvas<P>) -> IoResult<()> {
    match canvas.data().iter().find(|v| !v.fits(canvas.max_value())) {
        Some(v) => Err(IoError::EncodeError(format!(
            "sample {} exceeds max value {}",
            v.peak(),
            canvas.max_value()
        ))),
        None => Ok(()),
    }
}

fn write_header<P: Sample, W: Write>(writer: &mut W, canvas: &Canvas<P>) -> IoResult<()> {
    let format = canvas.format();
    writeln!(
        writer,
        "{}\n{} {}",
        format.magic(),
        canvas.width(),
        canvas.height()
    )?;
    if format.has_max_value() {
        writeln!(writer, "{}", canvas.max_value())?;
    }
    Ok(())
}

/// Write samples as decimal tokens, one image row per line run and no line
/// longer than [`MAX_PLAIN_LINE`] characters.
fn write_plain<P: Sample, W: Write>(
    writer: &mut W,
    canvas: &Canvas<P>,
    tokens: impl Fn(P, &mut Vec<String>),
) -> IoResult<()> {
    let mut line = String::with_capacity(MAX_PLAIN_LINE + 1);
    let mut buf = Vec::new();
    for row in canvas.rows() {
        for &v in row {
            buf.clear();
            tokens(v, &mut buf);
            for token in &buf {
                if !line.is_empty() && line.len() + 1 + token.len() > MAX_PLAIN_LINE {
                    writeln!(writer, "{line}")?;
                    line.clear();
                }
                if !line.is_empty() {
                    line.push(' ');
                }
                line.push_str(token);
            }
        }
        writeln!(writer, "{line}")?;
        line.clear();
    }
    Ok(())
}

fn write_packed_bits<W: Write>(writer: &mut W, canvas: &Canvas<bool>) -> IoResult<()> {
    let row_bytes = (canvas.width() as usize).div_ceil(8);
    let mut packed = vec![0u8; row_bytes];
    for row in canvas.rows() {
        packed.fill(0);
        for (x, _) in row.iter().enumerate().filter(|(_, on)| **on) {
            packed[x / 8] |= 0x80 >> (x % 8);
        }
        writer.write_all(&packed)?;
    }
    Ok(())
}

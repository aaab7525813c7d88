//! Image format detection
//!
//! Detects the netpbm variant by examining the magic number in the file
//! header, and checks that the variant's family is enabled.

use crate::{IoError, IoResult};
use netpbm_core::{PixelKind, PnmFormat};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// PAM magic; recognized only to report it as unsupported
const PAM_MAGIC: &[u8] = b"P7";

/// Detect image format from a file path
pub fn detect_format<P: AsRef<Path>>(path: P) -> IoResult<PnmFormat> {
    let mut file = File::open(path)?;
    let mut header = [0u8; 2];
    let bytes_read = file.read(&mut header)?;
    detect_format_from_bytes(&header[..bytes_read])
}

/// Detect image format from bytes
///
/// # Errors
///
/// Returns [`IoError::InvalidData`] if the data does not start with a
/// netpbm magic number and [`IoError::UnsupportedFormat`] if it names a
/// variant this build cannot handle.
pub fn detect_format_from_bytes(data: &[u8]) -> IoResult<PnmFormat> {
    if data.len() < 2 {
        return Err(IoError::InvalidData(
            "not enough data to detect format".to_string(),
        ));
    }

    let magic = &data[..2];
    if magic == PAM_MAGIC {
        return Err(IoError::UnsupportedFormat("PAM (P7)".to_string()));
    }
    let format = PnmFormat::from_magic(magic).ok_or_else(|| {
        IoError::InvalidData(format!(
            "unknown magic number {:?}",
            String::from_utf8_lossy(magic)
        ))
    })?;
    check_enabled(format)?;
    Ok(format)
}

/// Check that the family of `format` is compiled in.
pub fn check_enabled(format: PnmFormat) -> IoResult<()> {
    let (enabled, feature) = match format.kind() {
        PixelKind::Mono => (cfg!(feature = "pbm"), "pbm"),
        PixelKind::Gray => (cfg!(feature = "pgm"), "pgm"),
        PixelKind::Color => (cfg!(feature = "ppm"), "ppm"),
    };
    if enabled {
        Ok(())
    } else {
        Err(IoError::UnsupportedFormat(format!(
            "{} support not enabled (feature \"{}\")",
            format.magic(),
            feature
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_all_magics() {
        for (magic, format) in [
            (&b"P1\n"[..], PnmFormat::P1),
            (b"P2 ", PnmFormat::P2),
            (b"P3\t", PnmFormat::P3),
            (b"P4\n", PnmFormat::P4),
            (b"P5\n", PnmFormat::P5),
            (b"P6\n", PnmFormat::P6),
        ] {
            assert_eq!(detect_format_from_bytes(magic).unwrap(), format);
        }
    }

    #[test]
    fn test_detect_rejects_other_data() {
        assert!(matches!(
            detect_format_from_bytes(b"P"),
            Err(IoError::InvalidData(_))
        ));
        assert!(matches!(
            detect_format_from_bytes(b"\x89PNG"),
            Err(IoError::InvalidData(_))
        ));
        assert!(matches!(
            detect_format_from_bytes(b"P7\n"),
            Err(IoError::UnsupportedFormat(_))
        ));
    }
}

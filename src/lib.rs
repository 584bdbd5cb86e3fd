//! # rlecoder
//!
//! A streaming run-length encoding codec with a small self-describing
//! container format.
//!
//! ## Container
//!
//! | Offset | Size | Field                                         |
//! |--------|------|-----------------------------------------------|
//! | 0      | 1    | method tag: `0x21` = A, `0x8A` = B            |
//! | 1      | 4    | timestamp, big-endian seconds since the epoch |
//! | 5      | ..   | payload                                       |
//!
//! ## Methods
//!
//! - **Method A** writes every run as `[COUNT][BYTE]`.
//!   `b"LLLLARRB"` becomes `b"\x04L\x01A\x02R\x01B"`.
//! - **Method B** copies bytes that do not repeat and writes runs of two or
//!   more as `[BYTE][BYTE][COUNT]`. `b"LLLLARRB"` becomes `b"LL\x04ARR\x02B"`.
//!
//! Counts never exceed 255; longer runs are split into several records.
//!
//! ## Quick Start
//!
//! ```rust
//! use rlecoder::{compress_data, decompress_data, Method};
//!
//! let original = b"WWWWWWWWWWWWBWWWWWWWWWWWWBBB";
//! let compressed = compress_data(original, Method::B).unwrap();
//! let restored = decompress_data(&compressed).unwrap();
//! assert_eq!(original.to_vec(), restored);
//! ```
//!
//! ### Working with Files
//!
//! ```rust,no_run
//! use rlecoder::{pipeline, Method};
//! use std::fs::File;
//! use std::io::BufWriter;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let input = File::open("input.txt")?;
//! let output = BufWriter::new(File::create("input.txt.rle")?);
//!
//! let stats = pipeline::encode(Method::A, input, output)?;
//! println!("Compression ratio: {:.2}x", stats.ratio);
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod container;
pub mod error;
pub mod io;
pub mod paths;
pub mod pipeline;
pub mod transforms;

// Re-export commonly used types for convenience
pub use config::{AbortHandle, CodecConfig, Method};
pub use container::{Header, HEADER_LEN};
pub use error::{Result, RleError};
pub use pipeline::{decode, encode, DecodeReport, EncodeStats};

use std::io::Cursor;

/// Encode data in memory, header included.
///
/// For large inputs, use the streaming [`pipeline::encode`] instead.
///
/// # Example
///
/// ```rust
/// use rlecoder::{compress_data, Method};
///
/// let compressed = compress_data(b"ABC", Method::A).unwrap();
/// assert_eq!(&compressed[5..], b"\x01A\x01B\x01C");
/// ```
pub fn compress_data(data: &[u8], method: Method) -> Result<Vec<u8>> {
    let mut output = Vec::with_capacity(HEADER_LEN + data.len());
    pipeline::encode(method, Cursor::new(data), &mut output)?;
    Ok(output)
}

/// Decode an in-memory container produced by [`compress_data`] or
/// [`pipeline::encode`].
pub fn decompress_data(compressed_data: &[u8]) -> Result<Vec<u8>> {
    let mut output = Vec::with_capacity(compressed_data.len());
    pipeline::decode(Cursor::new(compressed_data), &mut output)?;
    Ok(output)
}

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Get library version information
pub fn version_info() -> VersionInfo {
    VersionInfo {
        version: VERSION,
        description: DESCRIPTION,
    }
}

#[derive(Debug, Clone)]
pub struct VersionInfo {
    pub version: &'static str,
    pub description: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compress_decompress_data() {
        let original = b"Hello, world! This is a test of the RLE library API.";
        for method in [Method::A, Method::B] {
            let compressed = compress_data(original, method).unwrap();
            assert_eq!(compressed[0], method.tag());

            let decompressed = decompress_data(&compressed).unwrap();
            assert_eq!(original.to_vec(), decompressed);
        }
    }

    #[test]
    fn test_empty_data() {
        let compressed = compress_data(b"", Method::A).unwrap();
        assert_eq!(compressed.len(), HEADER_LEN);
        assert!(decompress_data(&compressed).unwrap().is_empty());
    }

    #[test]
    fn test_large_data() {
        let original = vec![42u8; 10000];
        let compressed = compress_data(&original, Method::B).unwrap();
        // 39 full runs plus a 55-byte tail, three bytes each
        assert_eq!(compressed.len(), HEADER_LEN + 40 * 3);

        let decompressed = decompress_data(&compressed).unwrap();
        assert_eq!(original, decompressed);
    }

    #[test]
    fn test_corrupted_tag() {
        let mut compressed = compress_data(b"data", Method::A).unwrap();
        compressed[0] = 0xFF;
        assert!(matches!(decompress_data(&compressed), Err(RleError::UnknownMethod(0xFF))));
    }

    #[test]
    fn test_version_info() {
        let info = version_info();
        assert!(!info.version.is_empty());
        assert!(!info.description.is_empty());
    }
}

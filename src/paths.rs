//! Output path helpers for the command line.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

pub const RLE_EXTENSION: &str = "rle";

/// `data.bin` -> `data.bin.rle`
pub fn compress_output_for(input: &Path) -> PathBuf {
    let mut name = OsString::from(input.as_os_str());
    name.push(".");
    name.push(RLE_EXTENSION);
    PathBuf::from(name)
}

/// `data.bin.rle` -> `data.bin`; anything else gets `.out` appended.
pub fn decompress_output_for(input: &Path) -> PathBuf {
    if input.extension().map_or(false, |ext| ext == RLE_EXTENSION) {
        input.with_extension("")
    } else {
        let mut name = OsString::from(input.as_os_str());
        name.push(".out");
        PathBuf::from(name)
    }
}

/// Returns `path` if nothing exists there, otherwise the first free
/// `<stem>_<n>.<ext>` sibling, starting at `n = 2`.
pub fn unique_path(path: &Path) -> PathBuf {
    if !path.exists() {
        return path.to_path_buf();
    }
    let stem = path.file_stem().map(OsString::from).unwrap_or_default();
    let extension = path.extension();
    (2u64..)
        .map(|n| {
            let mut name = stem.clone();
            name.push(format!("_{}", n));
            if let Some(ext) = extension {
                name.push(".");
                name.push(ext);
            }
            path.with_file_name(name)
        })
        .find(|candidate| !candidate.exists())
        .unwrap_or_else(|| path.to_path_buf())
}

pub mod conditional;
pub mod runs;
pub mod unconditional;

pub use runs::{Run, RunAccumulator, MAX_RUN};

use crate::config::{AbortHandle, Method};
use crate::error::RleError;
use crate::io::ByteReader;
use std::io::{Cursor, Read, Write};

/// Encodes the payload (no header) with the engine for `method`.
pub fn encode<R: Read, W: Write>(
    method: Method,
    source: &mut ByteReader<R>,
    writer: &mut W,
    abort: Option<&AbortHandle>,
) -> Result<(), RleError> {
    match method {
        Method::A => unconditional::encode(source, writer, abort),
        Method::B => conditional::encode(source, writer, abort),
    }
}

/// Decodes a headerless payload produced by `encode` with the same method.
pub fn decode<R: Read, W: Write>(
    method: Method,
    source: &mut ByteReader<R>,
    writer: &mut W,
    abort: Option<&AbortHandle>,
) -> Result<(), RleError> {
    match method {
        Method::A => unconditional::decode(source, writer, abort),
        Method::B => conditional::decode(source, writer, abort),
    }
}

/// In-memory form of [`encode`].
pub fn encode_payload(method: Method, data: &[u8]) -> Result<Vec<u8>, RleError> {
    let mut out = Vec::with_capacity(data.len());
    encode(method, &mut ByteReader::new(Cursor::new(data)), &mut out, None)?;
    Ok(out)
}

/// In-memory form of [`decode`].
pub fn decode_payload(method: Method, data: &[u8]) -> Result<Vec<u8>, RleError> {
    let mut out = Vec::with_capacity(data.len() * 2);
    decode(method, &mut ByteReader::new(Cursor::new(data)), &mut out, None)?;
    Ok(out)
}

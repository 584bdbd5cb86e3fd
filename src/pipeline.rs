use crate::config::{AbortHandle, CodecConfig, Method};
use crate::container::{current_timestamp, Header};
use crate::error::RleError;
use crate::io::{ByteReader, CountingWriter};
use crate::transforms;
use log::{debug, info};
use std::io::{Read, Write};

#[derive(Debug, Clone)]
pub struct EncodeStats {
	pub method: Method,
	pub timestamp: u32,
	pub original_size: u64,
	/// Header included.
	pub compressed_size: u64,
	pub ratio: f64,
}

#[derive(Debug, Clone)]
pub struct DecodeReport {
	pub method: Method,
	/// Encode time recovered from the header.
	pub timestamp: u32,
	pub compressed_size: u64,
	pub decoded_size: u64,
}

impl DecodeReport {
	pub fn header(&self) -> Header {
		Header::new(self.method, self.timestamp)
	}
}

/// Encodes `reader` into `writer` with `method`, stamping the current time.
pub fn encode<R: Read, W: Write>(method: Method, reader: R, writer: W) -> Result<EncodeStats, RleError> {
	encode_with(&CodecConfig::default().with_method(method), reader, writer)
}

pub fn encode_with<R: Read, W: Write>(
	config: &CodecConfig,
	reader: R,
	writer: W,
) -> Result<EncodeStats, RleError> {
	let header = Header::new(config.method, config.timestamp.unwrap_or_else(current_timestamp));
	let mut source = ByteReader::new(reader);
	let mut sink = CountingWriter::new(writer);

	header.write_to(&mut sink)?;
	debug!("wrote header: method {} timestamp {}", header.method, header.timestamp);

	transforms::encode(header.method, &mut source, &mut sink, config.abort.as_ref())?;
	sink.flush()?;

	let original_size = source.bytes_read();
	let compressed_size = sink.bytes_written();
	let ratio = if compressed_size > 0 { original_size as f64 / compressed_size as f64 } else { 0.0 };
	info!("encoded {} -> {} bytes with method {} ({:.2}x)", original_size, compressed_size, header.method, ratio);

	Ok(EncodeStats { method: header.method, timestamp: header.timestamp, original_size, compressed_size, ratio })
}

/// Decodes a full container from `reader` into `writer`.
pub fn decode<R: Read, W: Write>(reader: R, writer: W) -> Result<DecodeReport, RleError> {
	decode_with(None, reader, writer)
}

pub fn decode_with<R: Read, W: Write>(
	abort: Option<&AbortHandle>,
	reader: R,
	writer: W,
) -> Result<DecodeReport, RleError> {
	let mut source = ByteReader::new(reader);
	let mut sink = CountingWriter::new(writer);

	let header = Header::read_from(&mut source)?;
	debug!("read header: method {} timestamp {}", header.method, header.timestamp);

	transforms::decode(header.method, &mut source, &mut sink, abort)?;
	sink.flush()?;

	let compressed_size = source.bytes_read();
	let decoded_size = sink.bytes_written();
	info!("decoded {} -> {} bytes with method {}", compressed_size, decoded_size, header.method);

	Ok(DecodeReport { method: header.method, timestamp: header.timestamp, compressed_size, decoded_size })
}

/// Reads only the container header.
pub fn inspect<R: Read>(mut reader: R) -> Result<Header, RleError> {
	Header::read_from(&mut reader)
}

use crate::config::Method;
use crate::error::RleError;
use byteorder::{BigEndian, ReadBytesExt, WriteBytesExt};
use chrono::{DateTime, Local};
use std::io::{ErrorKind, Read, Write};
use std::time::{SystemTime, UNIX_EPOCH};

/// Tag byte plus a 32-bit big-endian timestamp.
pub const HEADER_LEN: usize = 5;

/// The fixed prefix of every encoded stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
	pub method: Method,
	/// Seconds since the epoch, truncated to 32 bits. Informational only.
	pub timestamp: u32,
}

impl Header {
	pub fn new(method: Method, timestamp: u32) -> Self {
		Self { method, timestamp }
	}

	pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<(), RleError> {
		writer.write_u8(self.method.tag())?;
		writer.write_u32::<BigEndian>(self.timestamp)?;
		Ok(())
	}

	pub fn read_from<R: Read>(reader: &mut R) -> Result<Self, RleError> {
		let tag = reader.read_u8().map_err(truncated_on_eof)?;
		let method = Method::try_from(tag)?;
		let timestamp = reader.read_u32::<BigEndian>().map_err(truncated_on_eof)?;
		Ok(Self { method, timestamp })
	}

	/// Local date-time of the encode, for display.
	pub fn datetime(&self) -> Option<DateTime<Local>> {
		DateTime::from_timestamp(i64::from(self.timestamp), 0).map(|utc| utc.with_timezone(&Local))
	}
}

/// Current time in seconds since the epoch, wrapped to 32 bits.
pub fn current_timestamp() -> u32 {
	SystemTime::now()
		.duration_since(UNIX_EPOCH)
		.map(|d| d.as_secs() as u32)
		.unwrap_or(0)
}

fn truncated_on_eof(e: std::io::Error) -> RleError {
	if e.kind() == ErrorKind::UnexpectedEof { RleError::TruncatedHeader } else { RleError::Io(e) }
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::io::Cursor;

	#[test]
	fn test_header_layout() {
		let mut out = Vec::new();
		Header::new(Method::A, 0x0102_0304).write_to(&mut out).unwrap();
		assert_eq!(out, vec![0x21, 0x01, 0x02, 0x03, 0x04]);
		assert_eq!(out.len(), HEADER_LEN);

		let mut out = Vec::new();
		Header::new(Method::B, 0xFFFF_FFFF).write_to(&mut out).unwrap();
		assert_eq!(out, vec![0x8A, 0xFF, 0xFF, 0xFF, 0xFF]);
	}

	#[test]
	fn test_header_read_back() {
		let bytes = [0x8A, 0x65, 0x00, 0x00, 0x01, b'x'];
		let mut reader = Cursor::new(&bytes[..]);
		let header = Header::read_from(&mut reader).unwrap();
		assert_eq!(header, Header::new(Method::B, 0x6500_0001));
		// Payload is left untouched
		assert_eq!(reader.position(), HEADER_LEN as u64);
	}

	#[test]
	fn test_unknown_method_tag() {
		let bytes = [0x42, 0, 0, 0, 0];
		match Header::read_from(&mut Cursor::new(&bytes[..])) {
			Err(RleError::UnknownMethod(0x42)) => {}
			other => panic!("unexpected result: {:?}", other),
		}
	}

	#[test]
	fn test_truncated_header() {
		for len in 0..HEADER_LEN {
			let bytes = [0x21, 0, 0, 0, 0];
			let result = Header::read_from(&mut Cursor::new(&bytes[..len]));
			assert!(matches!(result, Err(RleError::TruncatedHeader)), "len {}", len);
		}
	}

	#[test]
	fn test_datetime_conversion() {
		let header = Header::new(Method::A, 1_000_000_000);
		let dt = header.datetime().unwrap();
		assert_eq!(dt.timestamp(), 1_000_000_000);
	}

	#[test]
	fn test_current_timestamp_is_recent() {
		// 2020-01-01, well before the 32-bit wrap.
		assert!(current_timestamp() > 1_577_836_800);
	}
}

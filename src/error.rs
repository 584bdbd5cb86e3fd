use thiserror::Error;

#[derive(Error, Debug)]
pub enum RleError {
	#[error("I/O error: {0}")]
	Io(#[from] std::io::Error),

	#[error("Unknown RLE method tag: 0x{0:02X}")]
	UnknownMethod(u8),

	#[error("Truncated RLE header: expected 5 bytes")]
	TruncatedHeader,

	#[error("Operation aborted")]
	Aborted,

	#[error("Configuration error: {0}")]
	ConfigError(String),
}

pub type Result<T> = std::result::Result<T, RleError>;

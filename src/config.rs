use crate::error::RleError;
use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// RLE method, carrying its container tag byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    /// Every run becomes a `(count, byte)` pair.
    A,
    /// Singletons pass through; runs become `byte, byte, count`.
    B,
}

impl Method {
    pub const fn tag(self) -> u8 {
        match self {
            Method::A => 0x21,
            Method::B => 0x8A,
        }
    }
}

impl TryFrom<u8> for Method {
    type Error = RleError;
    fn try_from(tag: u8) -> Result<Self, Self::Error> {
        match tag {
            0x21 => Ok(Method::A),
            0x8A => Ok(Method::B),
            other => Err(RleError::UnknownMethod(other)),
        }
    }
}

impl FromStr for Method {
    type Err = RleError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "a" => Ok(Method::A),
            "b" => Ok(Method::B),
            _ => Err(RleError::ConfigError(format!("Invalid method: {}", s))),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Method::A => f.write_str("A"),
            Method::B => f.write_str("B"),
        }
    }
}

/// Shared cancellation flag, checked by the engines between records.
#[derive(Debug, Clone, Default)]
pub struct AbortHandle {
    flag: Arc<AtomicBool>,
}

impl AbortHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn abort(&self) {
        self.flag.store(true, Ordering::SeqCst);
    }

    pub fn is_aborted(&self) -> bool {
        self.flag.load(Ordering::SeqCst)
    }

    /// Returns `Err(Aborted)` once `abort` has been called.
    pub fn check(&self) -> Result<(), RleError> {
        if self.is_aborted() {
            Err(RleError::Aborted)
        } else {
            Ok(())
        }
    }
}

#[derive(Debug, Clone)]
pub struct CodecConfig {
    pub method: Method,
    /// Header timestamp override; `None` stamps the current time.
    pub timestamp: Option<u32>,
    pub abort: Option<AbortHandle>,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            method: Method::B,
            timestamp: None,
            abort: None,
        }
    }
}

impl CodecConfig {
    pub fn with_method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    pub fn with_timestamp(mut self, timestamp: u32) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    pub fn with_abort(mut self, abort: AbortHandle) -> Self {
        self.abort = Some(abort);
        self
    }
}

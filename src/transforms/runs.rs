//! Run accumulation shared by both engines.
//!
//! The accumulator groups consecutive identical bytes into runs of at most
//! [`MAX_RUN`]. A longer run is split: once 255 copies are pending, the next
//! identical byte closes the current run and starts a fresh one with a count
//! of one. Engines differ only in how they lay a finished [`Run`] out on the
//! wire.

use crate::config::AbortHandle;
use crate::error::RleError;
use crate::io::ByteReader;
use std::io::{self, Read, Write};

/// Largest count a single record can carry.
pub const MAX_RUN: u8 = u8::MAX;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Run {
    pub byte: u8,
    /// Always in `1..=MAX_RUN`.
    pub count: u8,
}

#[derive(Debug, Default)]
pub struct RunAccumulator {
    pending: Option<Run>,
}

impl RunAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds one input byte; returns the run it closed, if any.
    pub fn push(&mut self, byte: u8) -> Option<Run> {
        if let Some(run) = self.pending.as_mut() {
            if run.byte == byte && run.count < MAX_RUN {
                run.count += 1;
                return None;
            }
        }
        self.pending.replace(Run { byte, count: 1 })
    }

    /// Flushes the pending run at end of input.
    pub fn finish(self) -> Option<Run> {
        self.pending
    }
}

/// Streams `source` to completion, handing every finished run to `emit`.
///
/// The abort handle is polled before each record, so an abort never leaves a
/// half-written record behind.
pub fn for_each_run<R, F>(
    source: &mut ByteReader<R>,
    abort: Option<&AbortHandle>,
    mut emit: F,
) -> Result<(), RleError>
where
    R: Read,
    F: FnMut(Run) -> io::Result<()>,
{
    check_abort(abort)?;
    let mut acc = RunAccumulator::new();
    while let Some(byte) = source.next_byte()? {
        if let Some(run) = acc.push(byte) {
            check_abort(abort)?;
            emit(run)?;
        }
    }
    if let Some(run) = acc.finish() {
        check_abort(abort)?;
        emit(run)?;
    }
    Ok(())
}

/// Writes `byte` repeated `count` times.
pub fn write_repeated<W: Write>(writer: &mut W, byte: u8, count: u8) -> io::Result<()> {
    let buf = [byte; MAX_RUN as usize];
    writer.write_all(&buf[..count as usize])
}

pub(crate) fn check_abort(abort: Option<&AbortHandle>) -> Result<(), RleError> {
    match abort {
        Some(handle) => handle.check(),
        None => Ok(()),
    }
}

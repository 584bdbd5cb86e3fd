//! Method A: unconditional run-length encoding.
//! Format: every run segment becomes [COUNT][BYTE], COUNT in 1..=255.
//! Cheap to decode, but doubles the size of data with no repeats.

use crate::config::AbortHandle;
use crate::error::RleError;
use crate::io::ByteReader;
use crate::transforms::runs::{self, check_abort, Run};
use std::io::{self, Read, Write};

pub fn write_record<W: Write>(writer: &mut W, run: Run) -> io::Result<()> {
    writer.write_all(&[run.count, run.byte])
}

pub fn encode<R: Read, W: Write>(
    source: &mut ByteReader<R>,
    writer: &mut W,
    abort: Option<&AbortHandle>,
) -> Result<(), RleError> {
    runs::for_each_run(source, abort, |run| write_record(writer, run))
}

pub fn decode<R: Read, W: Write>(
    source: &mut ByteReader<R>,
    writer: &mut W,
    abort: Option<&AbortHandle>,
) -> Result<(), RleError> {
    loop {
        check_abort(abort)?;
        let Some(count) = source.next_byte()? else {
            return Ok(());
        };
        let value = source.require_byte()?;
        runs::write_repeated(writer, value, count)?;
    }
}

//! Method B: conditional run-length encoding.
//!
//! Format: a byte that does not repeat is stored as-is. A run of two or more
//! is stored as `[BYTE][BYTE][COUNT]`; the doubled byte tells the decoder a
//! count follows. Data without repeats keeps its original size.
//!
//! Decoding has to walk the payload one byte at a time. A byte that turns out
//! not to match its predecessor is not a partner of anything yet; it becomes
//! the head of the next record. Reading the payload in fixed pairs would lose
//! that alignment after the first literal.

use crate::config::AbortHandle;
use crate::error::RleError;
use crate::io::ByteReader;
use crate::transforms::runs::{self, check_abort, Run};
use std::io::{self, ErrorKind, Read, Write};

pub fn write_record<W: Write>(writer: &mut W, run: Run) -> io::Result<()> {
    if run.count == 1 {
        writer.write_all(&[run.byte])
    } else {
        writer.write_all(&[run.byte, run.byte, run.count])
    }
}

pub fn encode<R: Read, W: Write>(
    source: &mut ByteReader<R>,
    writer: &mut W,
    abort: Option<&AbortHandle>,
) -> Result<(), RleError> {
    runs::for_each_run(source, abort, |run| write_record(writer, run))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Waiting for the next record head; `pending` is the one-byte lookahead.
    AwaitingByte { pending: Option<u8> },
    /// Saw a doubled byte; the next byte is its count.
    AwaitingCount(u8),
}

pub fn decode<R: Read, W: Write>(
    source: &mut ByteReader<R>,
    writer: &mut W,
    abort: Option<&AbortHandle>,
) -> Result<(), RleError> {
    let mut state = State::AwaitingByte { pending: None };

    while let Some(byte) = source.next_byte()? {
        state = match state {
            State::AwaitingByte { pending: None } => {
                check_abort(abort)?;
                State::AwaitingByte { pending: Some(byte) }
            }
            State::AwaitingByte { pending: Some(head) } if head == byte => State::AwaitingCount(head),
            State::AwaitingByte { pending: Some(head) } => {
                writer.write_all(&[head])?;
                check_abort(abort)?;
                State::AwaitingByte { pending: Some(byte) }
            }
            State::AwaitingCount(value) => {
                runs::write_repeated(writer, value, byte)?;
                State::AwaitingByte { pending: None }
            }
        };
    }

    match state {
        State::AwaitingByte { pending: Some(head) } => writer.write_all(&[head])?,
        State::AwaitingByte { pending: None } => {}
        State::AwaitingCount(_) => {
            return Err(io::Error::new(ErrorKind::UnexpectedEof, "stream ended before run count").into());
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn enc(data: &[u8]) -> Vec<u8> {
        let mut out = Vec::new();
        encode(&mut ByteReader::new(Cursor::new(data)), &mut out, None).unwrap();
        out
    }

    fn dec(data: &[u8]) -> Result<Vec<u8>, RleError> {
        let mut out = Vec::new();
        decode(&mut ByteReader::new(Cursor::new(data)), &mut out, None)?;
        Ok(out)
    }

    #[test]
    fn test_known_vectors() {
        assert_eq!(enc(b"LLLLARRB"), b"LL\x04ARR\x02B");
        assert_eq!(enc(b"ABC"), b"ABC");
        assert_eq!(enc(b""), b"");
    }

    #[test]
    fn test_long_runs_split() {
        let mut data = vec![b'W'; 300];
        data.extend(vec![b'A'; 255]);
        data.extend(vec![b'B'; 19]);
        let encoded = enc(&data);
        assert_eq!(encoded, b"WW\xffWW-AA\xffBB\x13");
        assert_eq!(dec(&encoded).unwrap(), data);
    }

    #[test]
    fn test_run_of_256_leaves_literal_tail() {
        assert_eq!(enc(&[b'x'; 256]), vec![b'x', b'x', 255, b'x']);
        assert_eq!(dec(&[b'x', b'x', 255, b'x']).unwrap(), vec![b'x'; 256]);
    }

    #[test]
    fn test_no_repeats_keeps_length() {
        let data: Vec<u8> = (0..=255u8).chain((0..=255u8).rev().skip(1)).collect();
        let encoded = enc(&data);
        assert_eq!(encoded.len(), data.len());
        assert_eq!(encoded, data);
    }

    #[test]
    fn test_literals_between_runs_stay_aligned() {
        // Pairwise reads would see "AB", "CC" and misread the count.
        let data = b"ABCCCDEFFG";
        let encoded = enc(data);
        assert_eq!(encoded, b"ABCC\x03DEFF\x02G");
        assert_eq!(dec(&encoded).unwrap(), data.to_vec());
    }

    #[test]
    fn test_run_followed_by_run() {
        let data = b"AAABBBBCC";
        let encoded = enc(data);
        assert_eq!(encoded, b"AA\x03BB\x04CC\x02");
        assert_eq!(dec(&encoded).unwrap(), data.to_vec());
    }

    #[test]
    fn test_count_equal_to_next_byte() {
        // The count byte must never be taken as the head of the next record.
        let data = [3u8, 3, 3, 3, 3, 1];
        let encoded = enc(&data);
        assert_eq!(encoded, vec![3, 3, 5, 1]);
        assert_eq!(dec(&encoded).unwrap(), data.to_vec());

        let data = [2u8, 2, 2, 2];
        assert_eq!(dec(&enc(&data)).unwrap(), data.to_vec());
    }

    #[test]
    fn test_mixed_runs() {
        let data = b"WWWWWWWWWWWWBWWWWWWWWWWWWBBBWWWWWWWWWWWWWWWWWWWWWWWWBWWWWWWWWWWWWWW";
        let encoded = enc(data);
        assert_eq!(encoded, b"WW\x0cBWW\x0cBB\x03WW\x18BWW\x0e");
        assert_eq!(dec(&encoded).unwrap(), data.to_vec());
    }

    #[test]
    fn test_single_trailing_literal() {
        assert_eq!(dec(b"Q").unwrap(), b"Q");
        assert_eq!(dec(b"RR\x02Q").unwrap(), b"RRQ");
    }

    #[test]
    fn test_missing_count() {
        match dec(b"ABB") {
            Err(RleError::Io(e)) => assert_eq!(e.kind(), ErrorKind::UnexpectedEof),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_abort_stops_decoding() {
        let abort = AbortHandle::new();
        abort.abort();
        let mut out = Vec::new();
        let result = decode(&mut ByteReader::new(Cursor::new(&b"ABC"[..])), &mut out, Some(&abort));
        assert!(matches!(result, Err(RleError::Aborted)));
        assert!(out.is_empty());
    }
}

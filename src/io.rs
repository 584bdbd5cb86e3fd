//! Forward-only streaming helpers used by the engines and the pipeline.

use std::io::{self, BufRead, BufReader, ErrorKind, Read, Write};

/// Single-byte cursor over any reader.
///
/// Reads are buffered internally, so pulling one byte at a time does not
/// hit the underlying source per byte. The cursor never seeks.
pub struct ByteReader<R> {
    inner: BufReader<R>,
    bytes_read: u64,
}

impl<R: Read> ByteReader<R> {
    pub fn new(reader: R) -> Self {
        Self { inner: BufReader::new(reader), bytes_read: 0 }
    }

    /// Returns the next byte, or `None` once the source is exhausted.
    pub fn next_byte(&mut self) -> io::Result<Option<u8>> {
        loop {
            let byte = match self.inner.fill_buf() {
                Ok([]) => return Ok(None),
                Ok(buf) => buf[0],
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            };
            self.inner.consume(1);
            self.bytes_read += 1;
            return Ok(Some(byte));
        }
    }

    /// Like `next_byte`, but a missing byte is `UnexpectedEof`.
    pub fn require_byte(&mut self) -> io::Result<u8> {
        self.next_byte()?.ok_or_else(|| {
            io::Error::new(ErrorKind::UnexpectedEof, "stream ended inside a record")
        })
    }

    pub fn bytes_read(&self) -> u64 {
        self.bytes_read
    }
}

impl<R: Read> Read for ByteReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.inner.read(buf)?;
        self.bytes_read += n as u64;
        Ok(n)
    }
}

/// Writer adapter that counts the bytes passed through it.
pub struct CountingWriter<W> {
    inner: W,
    bytes_written: u64,
}

impl<W: Write> CountingWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { inner: writer, bytes_written: 0 }
    }

    pub fn bytes_written(&self) -> u64 {
        self.bytes_written
    }
}

impl<W: Write> Write for CountingWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let n = self.inner.write(buf)?;
        self.bytes_written += n as u64;
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

use crate::error::{Result, SbetError};
use crate::types::{SbetRecord, RECORD_SIZE};
use std::io::{ErrorKind, Read};

/// Sequential reader of fixed-size SBET records
///
/// Yields one record per `RECORD_SIZE` bytes. A clean end-of-stream, or a
/// partial record at the end of the stream, ends iteration without error;
/// the size of a discarded tail is available from [`SbetReader::trailing_bytes`].
pub struct SbetReader<R> {
    inner: R,
    buf: [u8; RECORD_SIZE],
    records_read: u64,
    trailing_bytes: usize,
    eof: bool,
}

impl<R: Read> SbetReader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            buf: [0u8; RECORD_SIZE],
            records_read: 0,
            trailing_bytes: 0,
            eof: false,
        }
    }

    /// Number of complete records decoded so far
    pub fn records_read(&self) -> u64 {
        self.records_read
    }

    /// Bytes of an incomplete final record that were dropped
    pub fn trailing_bytes(&self) -> usize {
        self.trailing_bytes
    }

    /// Read the next record, `Ok(None)` at end of stream
    pub fn read_record(&mut self) -> Result<Option<SbetRecord>> {
        if self.eof {
            return Ok(None);
        }

        let filled = match self.fill_buf() {
            Ok(n) => n,
            Err(source) => {
                self.eof = true;
                return Err(SbetError::Read {
                    index: self.records_read,
                    source,
                });
            }
        };

        if filled < RECORD_SIZE {
            self.eof = true;
            self.trailing_bytes = filled;
            return Ok(None);
        }

        self.records_read += 1;
        Ok(Some(SbetRecord::from_bytes(&self.buf)))
    }

    /// Fill the record buffer, returning how many bytes were read before EOF
    fn fill_buf(&mut self) -> std::io::Result<usize> {
        let mut filled = 0;
        while filled < RECORD_SIZE {
            match self.inner.read(&mut self.buf[filled..]) {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
        Ok(filled)
    }
}

impl<R: Read> Iterator for SbetReader<R> {
    type Item = Result<SbetRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        self.read_record().transpose()
    }
}

//! CRC-32 trailer
//!
//! The trailer is the zlib-compatible CRC-32 of every byte before it,
//! stored little-endian:
//!
//! ```text
//! +--------+---------+--------------+
//! | Header | Payload | CRC32 (u32)  |
//! +--------+---------+--------------+
//! |<-- certified -->|
//! ```
//!
//! The writer computes it by rewinding the finished file and hashing it back
//! in bounded chunks. The reader hashes on the fly through
//! [`ChecksumReader`], which holds back the last four bytes it has seen so
//! that the trailer is never handed to the payload decoder.

use crate::error::{ContainerError, ContainerResult};
use respak_core::TRAILER_SIZE;
use std::io::{self, Read, Seek, SeekFrom, Write};

/// CRC-32 of a byte slice
pub fn checksum(bytes: &[u8]) -> u32 {
    crc32fast::hash(bytes)
}

/// Hash everything written so far and append the trailer
///
/// Flushes `file`, rewinds it, streams its content through the CRC in
/// `chunk_size` reads, then appends the result. Returns the CRC.
pub fn append_trailer<F>(file: &mut F, chunk_size: usize) -> io::Result<u32>
where
    F: Read + Write + Seek,
{
    file.flush()?;
    file.seek(SeekFrom::Start(0))?;

    let mut hasher = crc32fast::Hasher::new();
    let mut chunk = vec![0u8; chunk_size.max(1)];
    loop {
        match file.read(&mut chunk) {
            Ok(0) => break,
            Ok(n) => hasher.update(&chunk[..n]),
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    let crc = hasher.finalize();

    file.seek(SeekFrom::End(0))?;
    file.write_all(&crc.to_le_bytes())?;
    file.flush()?;
    Ok(crc)
}

/// Check an in-memory container's trailer
pub fn verify_bytes(container: &[u8]) -> ContainerResult<u32> {
    let Some(split) = container.len().checked_sub(TRAILER_SIZE) else {
        return Err(ContainerError::TrailerMissing {
            len: container.len() as u64,
        });
    };
    let (body, trailer) = container.split_at(split);
    let stored = u32::from_le_bytes([trailer[0], trailer[1], trailer[2], trailer[3]]);
    let computed = checksum(body);
    if stored != computed {
        return Err(ContainerError::ChecksumMismatch { stored, computed });
    }
    Ok(computed)
}

/// Reader that hashes certified bytes and withholds the trailer
pub struct ChecksumReader<R> {
    inner: R,
    hasher: crc32fast::Hasher,
    tail: [u8; TRAILER_SIZE],
    tail_len: usize,
    certified: u64,
}

impl<R: Read> ChecksumReader<R> {
    /// Wrap a container stream positioned at its first byte
    pub fn new(inner: R) -> Self {
        ChecksumReader {
            inner,
            hasher: crc32fast::Hasher::new(),
            tail: [0; TRAILER_SIZE],
            tail_len: 0,
            certified: 0,
        }
    }

    /// Certified bytes handed out so far
    pub fn certified_len(&self) -> u64 {
        self.certified
    }

    /// Drain the stream and compare the trailer
    ///
    /// Any certified bytes not yet read are hashed on the way. Returns the
    /// verified CRC.
    pub fn finish(mut self) -> ContainerResult<u32> {
        io::copy(&mut self, &mut io::sink())?;
        if self.tail_len < TRAILER_SIZE {
            return Err(ContainerError::TrailerMissing {
                len: self.tail_len as u64,
            });
        }
        let stored = u32::from_le_bytes(self.tail);
        let computed = self.hasher.finalize();
        if stored != computed {
            return Err(ContainerError::ChecksumMismatch { stored, computed });
        }
        Ok(computed)
    }
}

impl<R: Read> Read for ChecksumReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if buf.is_empty() {
            return Ok(0);
        }
        while self.tail_len < TRAILER_SIZE {
            let n = self.inner.read(&mut self.tail[self.tail_len..])?;
            if n == 0 {
                return Ok(0);
            }
            self.tail_len += n;
        }

        let n = self.inner.read(buf)?;
        if n == 0 {
            return Ok(0);
        }

        // Stream so far is tail ++ buf[..n]; hand out its first n bytes and
        // keep the last four as the new tail.
        if n >= TRAILER_SIZE {
            let mut next_tail = [0u8; TRAILER_SIZE];
            next_tail.copy_from_slice(&buf[n - TRAILER_SIZE..n]);
            buf.copy_within(0..n - TRAILER_SIZE, TRAILER_SIZE);
            buf[..TRAILER_SIZE].copy_from_slice(&self.tail);
            self.tail = next_tail;
        } else {
            let mut joined = [0u8; 2 * TRAILER_SIZE];
            joined[..TRAILER_SIZE].copy_from_slice(&self.tail);
            joined[TRAILER_SIZE..TRAILER_SIZE + n].copy_from_slice(&buf[..n]);
            buf[..n].copy_from_slice(&joined[..n]);
            self.tail.copy_from_slice(&joined[n..n + TRAILER_SIZE]);
        }

        self.hasher.update(&buf[..n]);
        self.certified += n as u64;
        Ok(n)
    }
}

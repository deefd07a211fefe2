use crate::bits::reader::{read_fourcc, read_u32_be, read_u64_be};
use crate::errors::{Mp4Error, TrackFlagsError, TrackFlagsResult};
use log::warn;
use std::io::{Read, Seek, SeekFrom};

/// Box header information
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoxHeader {
    /// 4-byte box type, kept as raw bytes because it is not guaranteed to
    /// be printable ASCII.
    pub kind: [u8; 4],
    /// The 32-bit size field exactly as stored in the file.
    pub declared_size: u32,
    /// Resolved box length in bytes (extended 64-bit and to-end-of-range
    /// forms already applied).
    pub size: u64,
    /// Offset of the size field itself, i.e. the box header start.
    pub start: u64,
    /// 8 normally, 16 when the 64-bit extended size form is used.
    pub header_size: u64,
}

impl BoxHeader {
    /// Offset of the first payload byte.
    pub fn payload_start(&self) -> u64 {
        self.start + self.header_size
    }

    /// Exclusive end offset of the box.
    pub fn end(&self) -> u64 {
        self.start + self.size
    }

    /// Lossy printable form of the box type, for logs and messages.
    pub fn kind_str(&self) -> String {
        String::from_utf8_lossy(&self.kind).into_owned()
    }
}

/// Walks one level of sibling boxes inside a byte range, resolving the
/// three size encodings (32-bit, 64-bit extended, zero meaning "to the end
/// of the enclosing range"). The same scanner is used at every nesting
/// depth; callers decide which boxes to descend into.
#[derive(Debug)]
pub struct BoxScanner<'a, R: Read + Seek> {
    src: &'a mut R,
    pos: u64,
    end: u64,
    done: bool,
}

impl<'a, R: Read + Seek> BoxScanner<'a, R> {
    /// Create a scanner over `[start, end)` of `src`.
    pub fn new(src: &'a mut R, start: u64, end: u64) -> Self {
        Self {
            src,
            pos: start,
            end,
            done: false,
        }
    }

    /// Access the underlying reader, e.g. to decode fields of the box that
    /// was just returned or to scan its children.
    pub fn reader(&mut self) -> &mut R {
        self.src
    }

    /// Produce the next sibling box header, or `None` when fewer than 8
    /// bytes remain in the range.
    ///
    /// A box with a resolved size below 8 is returned once as a malformed
    /// marker and ends the scan of this range. A box whose declared extent
    /// runs past the range end ends the scan without being returned. Both
    /// are recoverable conditions, not errors; read failures propagate.
    pub fn next_box(&mut self) -> TrackFlagsResult<Option<BoxHeader>> {
        if self.done || self.pos + 8 > self.end {
            return Ok(None);
        }
        self.src.seek(SeekFrom::Start(self.pos))?;
        let declared_size = read_u32_be(self.src).map_err(|e| {
            TrackFlagsError::Mp4(Mp4Error::Error {
                message: format!("Failed to read box size at offset {}: {}", self.pos, e),
            })
        })?;
        let kind = read_fourcc(self.src).map_err(|e| {
            TrackFlagsError::Mp4(Mp4Error::Error {
                message: format!("Failed to read box type at offset {}: {}", self.pos, e),
            })
        })?;

        let mut size = declared_size as u64;
        let mut header_size = 8u64;
        if declared_size == 1 {
            if self.pos + 16 > self.end {
                self.done = true;
                return Ok(None);
            }
            size = read_u64_be(self.src).map_err(|e| {
                TrackFlagsError::Mp4(Mp4Error::Error {
                    message: format!(
                        "Failed to read extended box size at offset {}: {}",
                        self.pos, e
                    ),
                })
            })?;
            header_size = 16;
        } else if declared_size == 0 {
            size = self.end - self.pos;
        }

        let header = BoxHeader {
            kind,
            declared_size,
            size,
            start: self.pos,
            header_size,
        };

        if size < 8 {
            warn!(
                "Box {} at offset {} has invalid size {}, stopping scan of this range",
                header.kind_str(),
                header.start,
                size
            );
            self.done = true;
            return Ok(Some(header));
        }

        match self.pos.checked_add(size) {
            Some(next) if next <= self.end => self.pos = next,
            _ => {
                warn!(
                    "Box {} at offset {} extends past range end {}, stopping scan",
                    header.kind_str(),
                    header.start,
                    self.end
                );
                self.done = true;
                return Ok(None);
            }
        }

        Ok(Some(header))
    }
}

/// Write a box header to a vector
pub fn write_box_header(output: &mut Vec<u8>, name: &str, size: u32) {
    output.extend_from_slice(&size.to_be_bytes());
    output.extend_from_slice(name.as_bytes());
}

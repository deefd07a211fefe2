use crate::mp4::stsd::is_forced_format;
use std::io::{self, Read, Seek, SeekFrom, Write};

/// Marker written into the first sample entry's format code when a track
/// is flagged as forced.
pub const FORCED_SAMPLE_FORMAT: [u8; 4] = *b"fcd ";

/// Set or clear bit 0 of the 24-bit tkhd flags word.
///
/// `tkhd_offset` is the offset recorded during extraction (first byte
/// after the box header, i.e. the version byte). Reads the 3 flag bytes at
/// `tkhd_offset + 1`, changes bit 0 only and writes the same 3 bytes back;
/// the version byte and bits 1-23 are never touched.
pub fn patch_default<F: Read + Write + Seek>(
    file: &mut F,
    tkhd_offset: u64,
    on: bool,
) -> io::Result<()> {
    file.seek(SeekFrom::Start(tkhd_offset + 1))?;
    let mut buf = [0u8; 3];
    file.read_exact(&mut buf)?;
    let mut flags = ((buf[0] as u32) << 16) | ((buf[1] as u32) << 8) | (buf[2] as u32);
    if on {
        flags |= 1;
    } else {
        flags &= !1;
    }
    let out = [(flags >> 16) as u8, (flags >> 8) as u8, flags as u8];
    file.seek(SeekFrom::Start(tkhd_offset + 1))?;
    file.write_all(&out)
}

/// Set or clear the forced marker in the first stsd sample entry.
///
/// Setting overwrites the format code at `stsd_offset + 12` with the
/// literal `fcd ` marker. Clearing writes back `original_format` as it was
/// captured during extraction; if the captured code is itself a forced
/// marker (or was never captured) the pre-marker code no longer exists
/// anywhere and the bytes are left untouched. Clearing therefore only
/// works while the original code is still on disk, i.e. with offsets and
/// format from a scan that preceded the set.
pub fn patch_forced<F: Read + Write + Seek>(
    file: &mut F,
    stsd_offset: u64,
    on: bool,
    original_format: [u8; 4],
) -> io::Result<()> {
    let format_pos = stsd_offset + 12;
    if on {
        file.seek(SeekFrom::Start(format_pos))?;
        file.write_all(&FORCED_SAMPLE_FORMAT)
    } else {
        if is_forced_format(&original_format) || original_format == [0u8; 4] {
            return Ok(());
        }
        file.seek(SeekFrom::Start(format_pos))?;
        file.write_all(&original_format)
    }
}

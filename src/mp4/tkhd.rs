use crate::bits::reader::{read_u24, read_u32_be, read_u8};
use std::io::{self, Read, Seek, SeekFrom};

/// Fields decoded from a track header box
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TkhdInfo {
    pub track_id: u32,
    pub default_flag: bool,
}

/// Decode the track id and default flag from a tkhd box.
///
/// `payload_start` is the first byte after the 8-byte box header, i.e. the
/// version byte. Bit 0 of the 24-bit flags word is the default indicator.
/// The track id follows the creation/modification timestamps, which are
/// 64-bit in version 1 and 32-bit in version 0.
pub fn read_tkhd<R: Read + Seek>(src: &mut R, payload_start: u64) -> io::Result<TkhdInfo> {
    src.seek(SeekFrom::Start(payload_start))?;
    let version = read_u8(src)?;
    let flags = read_u24(src)?;
    let timestamps = if version == 1 { 16 } else { 8 };
    src.seek(SeekFrom::Current(timestamps))?;
    let track_id = read_u32_be(src)?;
    Ok(TkhdInfo {
        track_id,
        default_flag: (flags & 1) != 0,
    })
}

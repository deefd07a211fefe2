use crate::bits::reader::{read_u16_be, read_u8};
use std::io::{self, Read, Seek, SeekFrom};

/// Decode the packed language code from an mdhd box.
///
/// `payload_start` is the first byte after the 8-byte box header. The
/// language word sits behind the version-dependent timestamp block (8 or 16
/// bytes), the 4-byte timescale and the 4- or 8-byte duration.
pub fn read_language<R: Read + Seek>(src: &mut R, payload_start: u64) -> io::Result<String> {
    src.seek(SeekFrom::Start(payload_start))?;
    let version = read_u8(src)?;
    src.seek(SeekFrom::Current(3))?; // flags
    let timestamps = if version == 1 { 16 } else { 8 };
    src.seek(SeekFrom::Current(timestamps))?;
    src.seek(SeekFrom::Current(4))?; // timescale
    let duration = if version == 1 { 8 } else { 4 };
    src.seek(SeekFrom::Current(duration))?;
    let packed = read_u16_be(src)?;
    Ok(decode_language(packed))
}

/// Decode a packed ISO 639-2/T language code.
///
/// Three 5-bit fields (bits 14-10, 9-5, 4-0), each biased by 0x60 so that
/// 1..=26 map onto lowercase letters. A packed value of 0 means the
/// language is undefined and decodes to the empty string.
pub fn decode_language(packed: u16) -> String {
    if packed == 0 {
        return String::new();
    }
    let a = (((packed >> 10) & 0x1F) as u8 + 0x60) as char;
    let b = (((packed >> 5) & 0x1F) as u8 + 0x60) as char;
    let c = ((packed & 0x1F) as u8 + 0x60) as char;
    format!("{}{}{}", a, b, c)
}

/// Pack a 3-letter lowercase language code into the mdhd wire form.
/// The empty string packs to 0 (undefined).
pub fn encode_language(code: &str) -> u16 {
    if code.is_empty() {
        return 0;
    }
    let bytes = code.as_bytes();
    let a = (bytes[0] - 0x60) as u16;
    let b = (bytes[1] - 0x60) as u16;
    let c = (bytes[2] - 0x60) as u16;
    (a << 10) | (b << 5) | c
}

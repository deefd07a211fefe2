/*
# Bits Reader Module

 Provides byte-aligned readers for the big endian integer widths used by
 ISO-BMFF box headers and full-box fields (u8, u16, u24, u32, u64). All
 readers operate on any `Read` implementation and issue exactly one
 `read_exact` each, so they compose with positioned file access.
*/

use std::io::{self, Read};

/// Read one byte from a `Read` implementation.
pub fn read_u8<R: Read>(r: &mut R) -> io::Result<u8> {
    let mut buf = [0u8; 1];
    r.read_exact(&mut buf)?;
    Ok(buf[0])
}

/// Read a 16-bit big endian value from `r`.
pub fn read_u16_be<R: Read>(r: &mut R) -> io::Result<u16> {
    let mut buf = [0u8; 2];
    r.read_exact(&mut buf)?;
    Ok(u16::from_be_bytes(buf))
}

/// Read a 24-bit big endian value from `r`.
pub fn read_u24<R: Read>(r: &mut R) -> io::Result<u32> {
    let mut buf = [0u8; 3];
    r.read_exact(&mut buf)?;
    Ok(((buf[0] as u32) << 16) | ((buf[1] as u32) << 8) | buf[2] as u32)
}

/// Read a 32-bit big endian value from `r`.
pub fn read_u32_be<R: Read>(r: &mut R) -> io::Result<u32> {
    let mut buf = [0u8; 4];
    r.read_exact(&mut buf)?;
    Ok(u32::from_be_bytes(buf))
}

/// Read a 64-bit big endian value from `r`.
pub fn read_u64_be<R: Read>(r: &mut R) -> io::Result<u64> {
    let mut buf = [0u8; 8];
    r.read_exact(&mut buf)?;
    Ok(u64::from_be_bytes(buf))
}

/// Read a 4-byte tag (box type or sample format code) from `r`.
pub fn read_fourcc<R: Read>(r: &mut R) -> io::Result<[u8; 4]> {
    let mut buf = [0u8; 4];
    r.read_exact(&mut buf)?;
    Ok(buf)
}

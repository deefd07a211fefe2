use crate::bits::reader::read_fourcc;
use std::io::{self, Read, Seek, SeekFrom};

/// Read the handler type from an hdlr box and map it to a semantic kind.
///
/// The handler fourCC sits 8 bytes into the payload (4-byte version/flags
/// plus a 4-byte pre_defined field). Unrecognized handler codes are passed
/// through verbatim.
pub fn read_handler_kind<R: Read + Seek>(src: &mut R, payload_start: u64) -> io::Result<String> {
    src.seek(SeekFrom::Start(payload_start + 8))?;
    let handler = read_fourcc(src)?;
    let kind = match &handler {
        b"vide" => "video".to_string(),
        b"soun" => "audio".to_string(),
        b"subt" | b"sbtl" | b"text" => "subtitle".to_string(),
        _ => String::from_utf8_lossy(&handler).into_owned(),
    };
    Ok(kind)
}

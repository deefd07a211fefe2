use crate::bits::reader::read_fourcc;
use std::io::{self, Read, Seek, SeekFrom};

/// Read the first sample entry's format code from an stsd box.
///
/// The payload starts with 4 bytes of version/flags and a 4-byte entry
/// count; the first sample entry then begins with its own 4-byte size
/// before the format code, so the code sits at payload offset 12.
pub fn read_sample_format<R: Read + Seek>(src: &mut R, payload_start: u64) -> io::Result<[u8; 4]> {
    src.seek(SeekFrom::Start(payload_start + 12))?;
    read_fourcc(src)
}

/// Heuristic forced-track test on a sample entry format code.
///
/// There is no standard field for the forced indicator; by convention a
/// forced subtitle track carries a marker in its sample format code. This
/// is approximate and must not be treated as ground truth.
pub fn is_forced_format(format: &[u8; 4]) -> bool {
    let code = String::from_utf8_lossy(format).to_lowercase();
    code.contains("fcd") || code.contains("forced")
}

pub mod r#box;
pub use r#box::{write_box_header, BoxHeader, BoxScanner};
pub mod tkhd;
pub use tkhd::{read_tkhd, TkhdInfo};
pub mod mdhd;
pub use mdhd::{decode_language, encode_language, read_language};
pub mod hdlr;
pub use hdlr::read_handler_kind;
pub mod stsd;
pub use stsd::{is_forced_format, read_sample_format};

use serde::Serialize;
use std::str::FromStr;

/// Metadata for one track, together with the byte offsets needed to patch
/// its flags later without rescanning
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct TrackInfo {
    #[serde(rename = "id")]
    pub track_id: u32,
    #[serde(rename = "type")]
    pub kind: String,
    /// 3-letter lowercase language code from mdhd, empty when undefined.
    #[serde(rename = "lang")]
    pub language: String,
    /// Bit 0 of the tkhd flags word.
    pub default: bool,
    /// Heuristic derived from the first stsd sample entry format code.
    pub forced: bool,
    /// Offset of the first byte after the tkhd box's 8-byte header.
    #[serde(skip)]
    pub tkhd_offset: Option<u64>,
    /// Offset of the first byte after the mdhd box's 8-byte header.
    #[serde(skip)]
    pub mdhd_offset: Option<u64>,
    /// Offset of the first byte after the stsd box's 8-byte header.
    #[serde(skip)]
    pub stsd_offset: Option<u64>,
    /// First sample entry format code as found on disk, captured so that
    /// unsetting the forced marker can restore it.
    #[serde(skip)]
    pub sample_format: [u8; 4],
}

impl Default for TrackInfo {
    fn default() -> Self {
        Self {
            track_id: 0,
            kind: "unknown".to_string(),
            language: String::new(),
            default: false,
            forced: false,
            tkhd_offset: None,
            mdhd_offset: None,
            stsd_offset: None,
            sample_format: [0u8; 4],
        }
    }
}

/// The two patchable per-track indicators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackFlag {
    Default,
    Forced,
}

impl FromStr for TrackFlag {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "default" => Ok(TrackFlag::Default),
            "forced" => Ok(TrackFlag::Forced),
            other => Err(format!("unknown flag name: {}", other)),
        }
    }
}

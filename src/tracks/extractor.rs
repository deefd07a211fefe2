/*
# Track Extractor

 Walks the moov -> trak -> {tkhd, mdia -> {mdhd, hdlr, minf -> stbl ->
 stsd}} chain with one shared `BoxScanner` per nesting level and builds a
 `TrackInfo` per track. Every invocation is a fresh full scan from the
 start of the source; nothing is cached between calls.
*/

use crate::errors::TrackFlagsResult;
use crate::mp4::r#box::{BoxHeader, BoxScanner};
use crate::mp4::{hdlr, mdhd, stsd, tkhd};
use crate::tracks::types::TrackInfo;
use log::{debug, info};
use std::io::{Read, Seek, SeekFrom};

/// Scan the whole source and return one `TrackInfo` per valid track, in
/// discovery order. Traks that never yield a non-zero track id are
/// discarded. Malformed sub-structure silently ends the affected branch;
/// I/O failures propagate.
pub fn extract_tracks<R: Read + Seek>(src: &mut R) -> TrackFlagsResult<Vec<TrackInfo>> {
    let len = src.seek(SeekFrom::End(0))?;
    let mut tracks = Vec::new();

    let mut root = BoxScanner::new(src, 0, len);
    while let Some(hdr) = root.next_box()? {
        if &hdr.kind == b"moov" {
            scan_moov(root.reader(), &hdr, &mut tracks)?;
        }
    }

    info!("Found {} tracks in {} bytes", tracks.len(), len);
    Ok(tracks)
}

fn scan_moov<R: Read + Seek>(
    src: &mut R,
    moov: &BoxHeader,
    tracks: &mut Vec<TrackInfo>,
) -> TrackFlagsResult<()> {
    let mut boxes = BoxScanner::new(src, moov.payload_start(), moov.end());
    while let Some(hdr) = boxes.next_box()? {
        if &hdr.kind == b"trak" {
            if let Some(track) = scan_trak(boxes.reader(), &hdr)? {
                tracks.push(track);
            }
        }
    }
    Ok(())
}

fn scan_trak<R: Read + Seek>(
    src: &mut R,
    trak: &BoxHeader,
) -> TrackFlagsResult<Option<TrackInfo>> {
    let mut info = TrackInfo::default();

    let mut boxes = BoxScanner::new(src, trak.payload_start(), trak.end());
    while let Some(hdr) = boxes.next_box()? {
        match &hdr.kind {
            b"tkhd" => {
                // Patch offsets are recorded relative to the 8-byte header
                // regardless of the size encoding.
                let offset = hdr.start + 8;
                info.tkhd_offset = Some(offset);
                let decoded = tkhd::read_tkhd(boxes.reader(), offset)?;
                info.track_id = decoded.track_id;
                info.default = decoded.default_flag;
            }
            b"mdia" => scan_mdia(boxes.reader(), &hdr, &mut info)?,
            _ => {}
        }
    }

    if info.track_id == 0 {
        debug!("Discarding trak at offset {} without a track id", trak.start);
        Ok(None)
    } else {
        debug!(
            "Track {}: kind={} lang={:?} default={} forced={}",
            info.track_id, info.kind, info.language, info.default, info.forced
        );
        Ok(Some(info))
    }
}

fn scan_mdia<R: Read + Seek>(
    src: &mut R,
    mdia: &BoxHeader,
    info: &mut TrackInfo,
) -> TrackFlagsResult<()> {
    let mut boxes = BoxScanner::new(src, mdia.payload_start(), mdia.end());
    while let Some(hdr) = boxes.next_box()? {
        match &hdr.kind {
            b"mdhd" => {
                let offset = hdr.start + 8;
                info.mdhd_offset = Some(offset);
                info.language = mdhd::read_language(boxes.reader(), offset)?;
            }
            b"hdlr" => {
                info.kind = hdlr::read_handler_kind(boxes.reader(), hdr.start + 8)?;
            }
            b"minf" => scan_minf(boxes.reader(), &hdr, info)?,
            _ => {}
        }
    }
    Ok(())
}

fn scan_minf<R: Read + Seek>(
    src: &mut R,
    minf: &BoxHeader,
    info: &mut TrackInfo,
) -> TrackFlagsResult<()> {
    let mut boxes = BoxScanner::new(src, minf.payload_start(), minf.end());
    while let Some(hdr) = boxes.next_box()? {
        if &hdr.kind == b"stbl" {
            scan_stbl(boxes.reader(), &hdr, info)?;
        }
    }
    Ok(())
}

fn scan_stbl<R: Read + Seek>(
    src: &mut R,
    stbl: &BoxHeader,
    info: &mut TrackInfo,
) -> TrackFlagsResult<()> {
    let mut boxes = BoxScanner::new(src, stbl.payload_start(), stbl.end());
    while let Some(hdr) = boxes.next_box()? {
        if &hdr.kind == b"stsd" {
            let offset = hdr.start + 8;
            info.stsd_offset = Some(offset);
            // A truncated sample table is tolerated; the track keeps its
            // defaults and the offset stays usable for patching.
            if let Ok(format) = stsd::read_sample_format(boxes.reader(), offset) {
                info.sample_format = format;
                info.forced = stsd::is_forced_format(&format);
            }
        }
    }
    Ok(())
}

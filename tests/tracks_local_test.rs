use std::fs;
use std::io::Write;

use tempfile::NamedTempFile;
use trackflags::mp4::write_box_header;
use trackflags::mp4::mdhd::encode_language;
use trackflags::{list_tracks, set_track_flag, TrackFlag};

fn make_box(name: &str, payload: &[u8]) -> Vec<u8> {
    let mut buf = Vec::new();
    write_box_header(&mut buf, name, (payload.len() + 8) as u32);
    buf.extend_from_slice(payload);
    buf
}

fn tkhd_box(track_id: u32, flags: u32) -> Vec<u8> {
    let mut payload = vec![0u8, (flags >> 16) as u8, (flags >> 8) as u8, flags as u8];
    payload.extend_from_slice(&[0u8; 8]); // creation + modification
    payload.extend_from_slice(&track_id.to_be_bytes());
    payload.extend_from_slice(&[0u8; 60]);
    make_box("tkhd", &payload)
}

fn mdhd_box(lang: &str) -> Vec<u8> {
    let mut payload = vec![0u8, 0, 0, 0];
    payload.extend_from_slice(&[0u8; 8]); // creation + modification
    payload.extend_from_slice(&1000u32.to_be_bytes()); // timescale
    payload.extend_from_slice(&500u32.to_be_bytes()); // duration
    payload.extend_from_slice(&encode_language(lang).to_be_bytes());
    payload.extend_from_slice(&[0u8; 2]); // pre_defined
    make_box("mdhd", &payload)
}

fn hdlr_box(handler: &[u8; 4]) -> Vec<u8> {
    let mut payload = vec![0u8; 8]; // version/flags + pre_defined
    payload.extend_from_slice(handler);
    payload.extend_from_slice(&[0u8; 12]);
    make_box("hdlr", &payload)
}

fn stsd_box(format: &[u8; 4]) -> Vec<u8> {
    let mut payload = vec![0u8, 0, 0, 0, 0, 0, 0, 1];
    payload.extend_from_slice(&16u32.to_be_bytes()); // entry size
    payload.extend_from_slice(format);
    payload.extend_from_slice(&[0u8; 8]);
    make_box("stsd", &payload)
}

fn trak_box(track_id: u32, flags: u32, handler: &[u8; 4], lang: &str, format: &[u8; 4]) -> Vec<u8> {
    let stbl = make_box("stbl", &stsd_box(format));
    let minf = make_box("minf", &stbl);
    let mdia = make_box("mdia", &[mdhd_box(lang), hdlr_box(handler), minf].concat());
    make_box("trak", &[tkhd_box(track_id, flags), mdia].concat())
}

fn write_movie(traks: &[Vec<u8>]) -> NamedTempFile {
    let mut data = make_box("ftyp", &[0u8; 16]);
    data.extend_from_slice(&make_box("moov", &traks.concat()));
    data.extend_from_slice(&make_box("mdat", &[0xabu8; 64]));
    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(&data).expect("write movie");
    file.flush().expect("flush movie");
    file
}

#[test]
fn test_list_reports_decoded_fields() {
    let file = write_movie(&[trak_box(1, 0, b"vide", "eng", b"avc1")]);
    let tracks = list_tracks(file.path()).expect("list");
    assert_eq!(tracks.len(), 1);
    assert_eq!(tracks[0].track_id, 1);
    assert_eq!(tracks[0].kind, "video");
    assert_eq!(tracks[0].language, "eng");
    assert!(!tracks[0].default);
    assert!(!tracks[0].forced);
}

#[test]
fn test_listing_leaves_file_untouched() {
    let file = write_movie(&[trak_box(1, 0, b"vide", "eng", b"avc1")]);
    let before = fs::read(file.path()).unwrap();
    list_tracks(file.path()).expect("list");
    assert_eq!(fs::read(file.path()).unwrap(), before);
}

#[test]
fn test_set_default_then_rescan() {
    let file = write_movie(&[
        trak_box(1, 0, b"vide", "eng", b"avc1"),
        trak_box(2, 0, b"soun", "spa", b"mp4a"),
    ]);
    let before = fs::read(file.path()).unwrap();

    let patched = set_track_flag(file.path(), 1, TrackFlag::Default, true).expect("set");
    assert_eq!(patched, 1);

    let tracks = list_tracks(file.path()).expect("list");
    assert!(tracks[0].default);
    assert_eq!(tracks[0].language, "eng");
    assert_eq!(tracks[0].kind, "video");
    assert!(!tracks[1].default);

    // exactly one byte may differ, and only in bit 0
    let after = fs::read(file.path()).unwrap();
    assert_eq!(after.len(), before.len());
    let diffs: Vec<usize> = (0..before.len()).filter(|&i| before[i] != after[i]).collect();
    assert_eq!(diffs.len(), 1);
    assert_eq!(after[diffs[0]], before[diffs[0]] | 1);
}

#[test]
fn test_set_default_twice_is_idempotent() {
    let file = write_movie(&[trak_box(1, 0, b"vide", "eng", b"avc1")]);
    set_track_flag(file.path(), 1, TrackFlag::Default, true).expect("first set");
    let once = fs::read(file.path()).unwrap();
    set_track_flag(file.path(), 1, TrackFlag::Default, true).expect("second set");
    assert_eq!(fs::read(file.path()).unwrap(), once);
}

#[test]
fn test_unset_default_restores_original_bytes() {
    let file = write_movie(&[trak_box(4, 1, b"soun", "ger", b"mp4a")]);
    let before = fs::read(file.path()).unwrap();
    set_track_flag(file.path(), 4, TrackFlag::Default, false).expect("unset");
    let tracks = list_tracks(file.path()).expect("list");
    assert!(!tracks[0].default);
    set_track_flag(file.path(), 4, TrackFlag::Default, true).expect("set");
    assert_eq!(fs::read(file.path()).unwrap(), before);
}

#[test]
fn test_set_forced_overwrites_sample_format() {
    let file = write_movie(&[trak_box(3, 0, b"sbtl", "fre", b"tx3g")]);
    let patched = set_track_flag(file.path(), 3, TrackFlag::Forced, true).expect("set");
    assert_eq!(patched, 1);

    let tracks = list_tracks(file.path()).expect("list");
    assert!(tracks[0].forced);
    assert_eq!(tracks[0].sample_format, *b"fcd ");

    // once the marker replaced the format code, unsetting from a fresh
    // scan has nothing to restore and leaves the file unchanged
    let marked = fs::read(file.path()).unwrap();
    set_track_flag(file.path(), 3, TrackFlag::Forced, false).expect("unset");
    assert_eq!(fs::read(file.path()).unwrap(), marked);
}

#[test]
fn test_missing_track_is_a_clean_no_op() {
    let file = write_movie(&[trak_box(1, 0, b"vide", "eng", b"avc1")]);
    let before = fs::read(file.path()).unwrap();
    let patched = set_track_flag(file.path(), 99, TrackFlag::Default, true).expect("patch");
    assert_eq!(patched, 0);
    assert_eq!(fs::read(file.path()).unwrap(), before);
}

#[test]
fn test_movie_with_trailing_zero_size_box() {
    // the final mdat declares size 0, meaning "to end of file"
    let mut data = make_box("moov", &trak_box(1, 0, b"vide", "eng", b"avc1"));
    write_box_header(&mut data, "mdat", 0);
    data.extend_from_slice(&[0u8; 40]);
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(&data).unwrap();
    file.flush().unwrap();

    let tracks = list_tracks(file.path()).expect("list");
    assert_eq!(tracks.len(), 1);
    assert_eq!(tracks[0].track_id, 1);
}

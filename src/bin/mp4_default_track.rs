use std::env;
use std::process;

use trackflags::{list_tracks, set_track_flag, TrackFlag, TrackInfo};

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.len() < 3 {
        usage(&args);
        process::exit(2);
    }

    match args[1].as_str() {
        "list" => cmd_list(&args[2]),
        "set" => cmd_set(&args, true),
        "unset" => cmd_set(&args, false),
        other => {
            eprintln!("Unknown command: {}", other);
            usage(&args);
            process::exit(2);
        }
    }
}

fn usage(args: &[String]) {
    let prog = args.first().map(String::as_str).unwrap_or("mp4_default_track");
    eprintln!("Usage: {} list <file>", prog);
    eprintln!("       {} set|unset <file> <trackId> <default|forced>", prog);
}

fn cmd_list(path: &str) {
    match list_tracks(path) {
        Ok(tracks) => print_tracks(&tracks),
        Err(e) => {
            eprintln!("Error parsing file: {}", e);
            process::exit(1);
        }
    }
}

fn cmd_set(args: &[String], on: bool) {
    if args.len() < 5 {
        usage(args);
        process::exit(2);
    }
    let path = &args[2];
    let track_id: u32 = match args[3].parse() {
        Ok(n) => n,
        Err(_) => {
            eprintln!("Invalid trackId: {}", args[3]);
            process::exit(2);
        }
    };
    let flag: TrackFlag = match args[4].parse() {
        Ok(f) => f,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(2);
        }
    };

    match set_track_flag(path, track_id, flag, on) {
        Ok(0) => {
            eprintln!("Track {} not found", track_id);
            process::exit(1);
        }
        Ok(_) => {}
        Err(e) => {
            eprintln!("Error patching file: {}", e);
            process::exit(1);
        }
    }
}

fn print_tracks(tracks: &[TrackInfo]) {
    println!("[");
    for (i, t) in tracks.iter().enumerate() {
        println!(
            "\t{{\"id\": {}, \"type\": \"{}\", \"lang\": \"{}\", \"default\": {}, \"forced\": {}}}{}",
            t.track_id,
            t.kind,
            t.language,
            t.default,
            t.forced,
            if i + 1 == tracks.len() { "" } else { "," }
        );
    }
    println!("]");
}

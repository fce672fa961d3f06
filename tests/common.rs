#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::NaiveDateTime;
use ecocharge::models::charging_window::ChargingWindow;
use std::env;
use std::fs;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::path::PathBuf;
use std::thread;

/// CLI command with HOME pointed at a private directory, so no user
/// configuration leaks into the test.
pub fn ecc(name: &str) -> Command {
    let mut cmd = cargo_bin_cmd!("ecocharge");
    cmd.env("HOME", test_home(name));
    cmd.env("APPDATA", test_home(name));
    cmd.env_remove("RUST_LOG");
    cmd
}

pub fn test_home(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_ecocharge_home", name));
    fs::create_dir_all(&path).ok();
    path.to_string_lossy().to_string()
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_ecocharge.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize a DB through the CLI (test mode, no config file).
pub fn init_db(name: &str, db_path: &str) {
    ecc(name)
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// `YYYY-MM-DD HH:MM[:SS[.fff]]` → NaiveDateTime
pub fn dt(s: &str) -> NaiveDateTime {
    ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%d %H:%M"]
        .iter()
        .find_map(|f| NaiveDateTime::parse_from_str(s, f).ok())
        .unwrap_or_else(|| panic!("bad test timestamp {s}"))
}

pub fn avail(start: &str, end: &str, emissions: f64) -> ChargingWindow {
    ChargingWindow::available(dt(start), dt(end), emissions).expect("valid window")
}

pub fn gap(start: &str, end: &str) -> ChargingWindow {
    ChargingWindow::gap(dt(start), dt(end)).expect("valid gap")
}

/// Answer a single HTTP request on a local port with `200 OK` and `body`.
/// Returns the base URL to point an HTTP source at.
pub fn serve_once(body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind local listener");
    let addr = listener.local_addr().expect("listener address");

    thread::spawn(move || {
        if let Ok((mut stream, _)) = listener.accept() {
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while let Ok(n) = stream.read(&mut buf) {
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
                if request.windows(4).any(|w| w == b"\r\n\r\n") {
                    break;
                }
            }
            let response = format!(
                "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                body.len(),
                body
            );
            stream.write_all(response.as_bytes()).ok();
        }
    });

    format!("http://{}", addr)
}

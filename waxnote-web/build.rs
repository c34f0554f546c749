//! Build script for waxnote-web
//!
//! Captures build identification at compile time (timestamp and profile)
//! for the startup log.

fn main() {
    // ISO 8601 with local timezone, e.g. 2026-08-06T14:30:45-05:00
    let build_timestamp = chrono::Local::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, false);

    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "unknown".to_string());

    println!("cargo:rustc-env=BUILD_TIMESTAMP={}", build_timestamp);
    println!("cargo:rustc-env=BUILD_PROFILE={}", profile);
}

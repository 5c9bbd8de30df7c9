//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `labsite_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

fn main() {
    let log_dir = std::env::temp_dir().join("labsite-logs");
    if let Err(err) =
        labsite_core::init_logging(labsite_core::default_log_level(), &log_dir.to_string_lossy())
    {
        eprintln!("logging disabled: {err}");
    }

    println!("labsite_core ping={}", labsite_core::ping());
    println!("labsite_core version={}", labsite_core::core_version());
}

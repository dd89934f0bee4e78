//! Swiss Ephemeris JSON shell
//!
//! Reads one JSON request per line on stdin and writes one JSON response per
//! line on stdout. Logs go to stderr.
//!
//! # Usage
//!
//! ```bash
//! echo '{"call": "julian_day", "args": [1981, 8, 22, 11.35]}' | sweph-shell
//! echo '{"const": "SE_SIDM_LAHIRI"}' | sweph-shell
//! ```
//!
//! # Environment Variables
//!
//! - `SWEPH_CONFIG`: TOML file with the initial registers (takes precedence)
//! - `SWEPH_EPHE_PATH`, `SWEPH_JPL_FILE`, `SWEPH_TOPO`, `SWEPH_SIDEREAL_MODE`,
//!   `SWEPH_SIDEREAL_T0`, `SWEPH_SIDEREAL_AYAN_T0`: initial registers
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::io;

use anyhow::Context;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use sweph::EphemerisConfig;
use sweph_host::{shell, Namespace};

fn main() -> anyhow::Result<()> {
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .with_writer(io::stderr)
        .init();

    let config = match env::var("SWEPH_CONFIG") {
        Ok(path) => EphemerisConfig::from_file(&path)
            .with_context(|| format!("failed to load configuration from {path}"))?,
        Err(_) => EphemerisConfig::from_env().context("invalid SWEPH_* environment")?,
    };

    let mut ns = Namespace::from_config(&config)?;
    info!("Swiss Ephemeris {} ready", sweph::version());

    let stdin = io::stdin();
    let handled = shell::run(&mut ns, stdin.lock(), io::stdout().lock())?;
    info!("handled {} requests", handled);

    Ok(())
}

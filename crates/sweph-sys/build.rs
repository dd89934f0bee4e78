//! Build script for sweph-sys
//!
//! This script locates a prebuilt `libswe` or, with the `build-native`
//! feature, compiles the upstream Swiss Ephemeris C sources.

use std::env;
use std::path::PathBuf;

/// Upstream translation units that make up `libswe`.
#[allow(dead_code)]
const SWE_SOURCES: &[&str] = &[
    "swecl.c",
    "swedate.c",
    "swehel.c",
    "swehouse.c",
    "swejpl.c",
    "swemmoon.c",
    "swemplan.c",
    "sweph.c",
    "swephlib.c",
];

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=SWISSEPH_LIB_DIR");
    println!("cargo:rerun-if-env-changed=SWISSEPH_SRC_DIR");

    // Strategy 1: pre-built library via environment variable
    if let Ok(lib_dir) = env::var("SWISSEPH_LIB_DIR") {
        println!("cargo:rustc-link-search=native={}", lib_dir);
        println!("cargo:rustc-link-lib=swe");
        link_system_deps();
        return;
    }

    // Strategy 2: pkg-config
    if try_pkg_config() {
        return;
    }

    // Strategy 3: compile from source if feature enabled
    #[cfg(feature = "build-native")]
    {
        build_from_source();
        return;
    }

    // Strategy 4: common install locations
    #[cfg(not(feature = "build-native"))]
    {
        let search_paths = [
            "/usr/local/lib",
            "/usr/lib",
            "/usr/lib/x86_64-linux-gnu",
            "/usr/lib/aarch64-linux-gnu",
            "/opt/homebrew/lib",
        ];

        for path in &search_paths {
            for file in ["libswe.so", "libswe.dylib", "libswe.a"] {
                if PathBuf::from(path).join(file).exists() {
                    println!("cargo:rustc-link-search=native={}", path);
                    println!("cargo:rustc-link-lib=swe");
                    link_system_deps();
                    return;
                }
            }
        }

        eprintln!("Could not find the Swiss Ephemeris library (libswe).");
        eprintln!("Options:");
        eprintln!("  1. Set SWISSEPH_LIB_DIR to the directory containing libswe");
        eprintln!("  2. Install libswe system-wide (e.g. the libswe-dev package)");
        eprintln!("  3. Enable the 'build-native' feature and set SWISSEPH_SRC_DIR");
        panic!("libswe not found");
    }
}

fn try_pkg_config() -> bool {
    match pkg_config::Config::new()
        .atleast_version("2.0")
        .probe("swisseph")
    {
        Ok(_) => {
            println!("cargo:info=Found swisseph via pkg-config");
            true
        }
        Err(_) => false,
    }
}

#[cfg(feature = "build-native")]
fn build_from_source() {
    let src_dir = env::var("SWISSEPH_SRC_DIR").map(PathBuf::from).unwrap_or_else(|_| {
        let manifest = PathBuf::from(env::var("CARGO_MANIFEST_DIR").unwrap());
        manifest.join("swisseph")
    });

    if !src_dir.join("swephexp.h").exists() {
        panic!(
            "Swiss Ephemeris sources not found at: {}\n\
             Set SWISSEPH_SRC_DIR to an upstream swisseph checkout.",
            src_dir.display()
        );
    }

    let mut build = cc::Build::new();
    build.include(&src_dir).warnings(false).opt_level(2);
    for file in SWE_SOURCES {
        let path = src_dir.join(file);
        println!("cargo:rerun-if-changed={}", path.display());
        build.file(path);
    }
    build.compile("swe");

    println!("cargo:include={}", src_dir.display());
    link_system_deps();
}

fn link_system_deps() {
    // libswe uses libm and, on Linux, dlopen for the JPL reader
    #[cfg(target_os = "linux")]
    {
        println!("cargo:rustc-link-lib=dylib=m");
        println!("cargo:rustc-link-lib=dylib=dl");
    }
}

// build.rs
// Bakes the package version into compile-time constants for the version line

use std::env;
use std::fs;
use std::path::PathBuf;

/// Read one numeric version component that Cargo exports to build scripts
fn version_component(var: &str) -> u32 {
    let raw = env::var(var).unwrap_or_else(|_| panic!("{var} not set by cargo"));
    raw.parse()
        .unwrap_or_else(|e| panic!("{var}={raw:?} is not an integer: {e}"))
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=Cargo.toml");

    let major = version_component("CARGO_PKG_VERSION_MAJOR");
    let minor = version_component("CARGO_PKG_VERSION_MINOR");

    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("OUT_DIR not set by cargo"));
    let out_file = out_dir.join("version.rs");

    let contents = format!(
        "/// Major version, generated by build.rs\n\
         pub const VERSION_MAJOR: u32 = {major};\n\
         /// Minor version, generated by build.rs\n\
         pub const VERSION_MINOR: u32 = {minor};\n"
    );

    if let Err(e) = fs::write(&out_file, contents) {
        panic!("Failed to write {}: {e}", out_file.display());
    }
}

//! Build-time version constants

include!(concat!(env!("OUT_DIR"), "/version.rs"));

/// `"<program> Version <major>.<minor>"`
pub fn version_line(program: &str) -> String {
    format!("{program} Version {VERSION_MAJOR}.{VERSION_MINOR}")
}

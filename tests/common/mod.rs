#![allow(dead_code)]

use std::io::Write;

use tempfile::NamedTempFile;

pub use stepdag_test_utils::init_tracing;

/// Write plan TOML to a temporary file that lives as long as the handle.
pub fn plan_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{contents}").unwrap();
    file
}

//! I/O utility functions

use std::fs;
use std::io;
use std::path::Path;

/// Write content to a file atomically using write-then-rename pattern.
///
/// The content is first written to a sibling `.tmp` file, then renamed over
/// the target so readers never observe a half-written export.
pub fn atomic_write(path: &Path, content: &str) -> io::Result<()> {
    let mut temp_name = path.file_name().unwrap_or_default().to_os_string();
    temp_name.push(".tmp");
    let temp_path = path.with_file_name(temp_name);

    fs::write(&temp_path, content)?;
    fs::rename(&temp_path, path)?;

    Ok(())
}

use std::fs::{File, OpenOptions};
use std::io::{self, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub const LOG_FILE_NAME: &str = "ledgerview.log";

const ROTATION_MARKER: &[u8] = b"--- Log rotated (older entries removed) ---\n";

/// When to trim the log and how much of its tail survives
#[derive(Debug, Clone, Copy)]
pub struct RotationPolicy {
    pub max_size: u64,
    pub keep_size: u64,
}

impl Default for RotationPolicy {
    /// Trim past 5 MB, keeping the most recent 1 MB
    fn default() -> Self {
        Self {
            max_size: 5 * 1024 * 1024,
            keep_size: 1024 * 1024,
        }
    }
}

impl RotationPolicy {
    /// Trim `path` to its tail if it has grown past `max_size`.
    ///
    /// The kept tail starts at a line boundary. Returns the number of bytes
    /// dropped, or `None` when the file was left alone.
    pub fn apply(&self, path: &Path) -> io::Result<Option<u64>> {
        let len = match path.metadata() {
            Ok(metadata) => metadata.len(),
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e),
        };
        if len <= self.max_size {
            return Ok(None);
        }

        let mut tail = Vec::new();
        {
            let mut file = File::open(path)?;
            file.seek(SeekFrom::Start(len.saturating_sub(self.keep_size)))?;
            file.read_to_end(&mut tail)?;
        }

        let line_start = tail
            .iter()
            .position(|&b| b == b'\n')
            .map_or(0, |i| i + 1);
        let kept = &tail[line_start..];

        let mut file = File::create(path)?;
        file.write_all(ROTATION_MARKER)?;
        file.write_all(kept)?;

        Ok(Some(len - kept.len() as u64))
    }
}

/// The log file shared by every writer the subscriber creates
#[derive(Clone)]
struct SharedFile(Arc<Mutex<File>>);

impl SharedFile {
    fn lock(&self) -> MutexGuard<'_, File> {
        // A panic mid-write leaves the file usable
        self.0.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Write for SharedFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.lock().write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.lock().flush()
    }
}

impl<'a> MakeWriter<'a> for SharedFile {
    type Writer = SharedFile;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Send `tracing` output to `{data_dir}/ledgerview.log`.
///
/// The terminal belongs to the dashboard, so nothing goes to stdout or
/// stderr once this returns. `RUST_LOG` overrides `level`.
pub fn init_logging(data_dir: &Path, level: &str) -> color_eyre::Result<PathBuf> {
    std::fs::create_dir_all(data_dir)?;
    let log_path = data_dir.join(LOG_FILE_NAME);

    let rotated = RotationPolicy::default().apply(&log_path);

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)?;

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("ledgerview={level},ledgerview_core=warn")));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(SharedFile(Arc::new(Mutex::new(file))))
                .with_ansi(false)
                .with_target(true),
        )
        .init();

    match rotated {
        Ok(Some(dropped)) => tracing::info!(dropped, "Rotated log file"),
        Ok(None) => {}
        Err(e) => tracing::warn!(error = %e, "Failed to rotate log file"),
    }
    tracing::info!(log_path = %log_path.display(), "Logging initialized");
    Ok(log_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn policy(max_size: u64, keep_size: u64) -> RotationPolicy {
        RotationPolicy { max_size, keep_size }
    }

    #[test]
    fn test_small_log_untouched() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(LOG_FILE_NAME);
        fs::write(&path, "one\ntwo\n").unwrap();

        assert_eq!(policy(1024, 16).apply(&path).unwrap(), None);
        assert_eq!(fs::read_to_string(&path).unwrap(), "one\ntwo\n");
    }

    #[test]
    fn test_large_log_keeps_recent_whole_lines() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(LOG_FILE_NAME);
        let content: String = (0..100).map(|i| format!("line {i:03}\n")).collect();
        fs::write(&path, &content).unwrap();

        let dropped = policy(100, 30).apply(&path).unwrap();

        let rotated = fs::read_to_string(&path).unwrap();
        assert!(rotated.starts_with("--- Log rotated"));
        assert!(rotated.ends_with("line 099\n"));
        assert!(!rotated.contains("line 000"));
        for line in rotated.lines().skip(1) {
            assert!(line.starts_with("line "), "partial line {line:?}");
        }
        // Three whole lines of nine bytes survive
        assert_eq!(dropped, Some(900 - 27));
    }

    #[test]
    fn test_missing_log_is_fine() {
        let dir = tempdir().unwrap();
        assert_eq!(policy(10, 5).apply(&dir.path().join("absent.log")).unwrap(), None);
    }
}

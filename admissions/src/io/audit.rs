//! Append-only audit logs for request input and response output.
//!
//! Product artifacts, not diagnostics: one line per event, written and
//! fsynced before the handler returns, so the logs reflect exactly what was
//! evaluated and what was answered. Unaffected by `RUST_LOG`.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Utc;
use serde::Serialize;

/// Paths to the two audit files under one log directory.
#[derive(Debug, Clone)]
pub struct AuditLog {
    input_path: PathBuf,
    output_path: PathBuf,
}

impl AuditLog {
    /// Audit files `input.log` and `output.log` under `dir`. The directory
    /// must exist; files are created on first append.
    pub fn new(dir: &Path) -> Self {
        Self {
            input_path: dir.join("input.log"),
            output_path: dir.join("output.log"),
        }
    }

    /// Record the raw validated request body.
    pub fn append_input<T: Serialize>(&self, input: &T) -> Result<()> {
        append_line(&self.input_path, input)
    }

    /// Record the response exactly as returned to the caller.
    pub fn append_output<T: Serialize>(&self, output: &T) -> Result<()> {
        append_line(&self.output_path, output)
    }
}

/// Append `<RFC3339 timestamp> <compact JSON>\n` and fsync.
fn append_line<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let json = serde_json::to_string(value).context("serialize audit entry")?;
    let line = format!("{} {}\n", Utc::now().to_rfc3339(), json);

    let mut file: File = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("open {}", path.display()))?;
    file.write_all(line.as_bytes())
        .with_context(|| format!("write {}", path.display()))?;
    // Durably flushed before the response leaves the handler.
    file.sync_all()
        .with_context(|| format!("sync {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn appends_one_timestamped_line_per_event() {
        let temp = tempfile::tempdir().expect("tempdir");
        let audit = AuditLog::new(temp.path());

        audit.append_input(&json!({"name": "A"})).expect("append");
        audit.append_input(&json!({"name": "B"})).expect("append");
        audit.append_output(&json!({"eligible": true})).expect("append");

        let input = std::fs::read_to_string(temp.path().join("input.log")).expect("read");
        let lines: Vec<&str> = input.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with(r#"{"name":"A"}"#));
        assert!(lines[1].ends_with(r#"{"name":"B"}"#));

        let output = std::fs::read_to_string(temp.path().join("output.log")).expect("read");
        assert_eq!(output.lines().count(), 1);
    }
}

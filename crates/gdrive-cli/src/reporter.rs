//! Console transfer reporter
//!
//! Implements the engines' reporter port over the terminal. One line
//! per notification; `--silent` drops all of them (errors travel
//! through the error path, not through here, so they still print).

use std::path::Path;

use gdrive_core::ports::ITransferReporter;

use crate::output::OutputFormat;

/// Per-file transfer feedback on stdout
pub struct ConsoleReporter {
    format: OutputFormat,
    silent: bool,
}

impl ConsoleReporter {
    pub fn new(format: OutputFormat, silent: bool) -> Self {
        Self { format, silent }
    }

    fn emit(&self, human: String, json: serde_json::Value) {
        if self.silent {
            return;
        }
        match self.format {
            OutputFormat::Human => println!("{human}"),
            OutputFormat::Json => println!("{json}"),
        }
    }
}

impl ITransferReporter for ConsoleReporter {
    fn download_progress(&self, path: &Path, percent: u8) {
        self.emit(
            progress_line(path, percent),
            serde_json::json!({
                "event": "download_progress",
                "path": path.display().to_string(),
                "percent": percent,
            }),
        );
    }

    fn empty_file(&self, path: &Path) {
        self.emit(
            format!("Create empty file {}", path.display()),
            serde_json::json!({
                "event": "empty_file",
                "path": path.display().to_string(),
            }),
        );
    }

    fn created(&self, path: &Path) {
        self.emit(
            format!("Uploaded {}", path.display()),
            serde_json::json!({
                "event": "created",
                "path": path.display().to_string(),
            }),
        );
    }

    fn updated(&self, path: &Path) {
        self.emit(
            format!("Updated {}", path.display()),
            serde_json::json!({
                "event": "updated",
                "path": path.display().to_string(),
            }),
        );
    }
}

fn progress_line(path: &Path, percent: u8) -> String {
    format!("Download and create file {} [{}%].", path.display(), percent)
}

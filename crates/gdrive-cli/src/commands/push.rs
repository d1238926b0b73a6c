//! Push command - upload a local path into a remote folder

use std::sync::Arc;

use anyhow::Result;
use clap::Args;

use gdrive_core::domain::UnitId;
use gdrive_sync::push::PushEngine;

use crate::commands::Globals;
use crate::output::get_formatter;
use crate::reporter::ConsoleReporter;

#[derive(Debug, Args)]
pub struct PushCommand {
    /// Local file or directory to mirror
    pub source: String,

    /// Identifier of the remote folder receiving it
    pub folder_id: UnitId,
}

impl PushCommand {
    /// Authenticates, builds the store handle, and runs the push engine
    pub async fn execute(&self, globals: &Globals) -> Result<()> {
        let formatter = get_formatter(globals.format);

        let store = globals.build_store().await?;
        let reporter = Arc::new(ConsoleReporter::new(globals.format, globals.silent));

        let engine = PushEngine::new(store, reporter);
        engine.push(&self.source, &self.folder_id).await?;

        formatter.success(&format!("Pushed {} into {}", self.source, self.folder_id));
        Ok(())
    }
}

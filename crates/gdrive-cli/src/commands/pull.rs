//! Pull command - download a remote unit into a local path

use std::sync::Arc;

use anyhow::Result;
use clap::Args;

use gdrive_core::domain::UnitId;
use gdrive_sync::pull::PullEngine;

use crate::commands::Globals;
use crate::output::get_formatter;
use crate::reporter::ConsoleReporter;

#[derive(Debug, Args)]
pub struct PullCommand {
    /// Identifier of the remote file or folder
    pub unit_id: UnitId,

    /// Local path to materialize the unit at
    pub destination: String,
}

impl PullCommand {
    /// Authenticates, builds the store handle, and runs the pull engine
    pub async fn execute(&self, globals: &Globals) -> Result<()> {
        let formatter = get_formatter(globals.format);

        let store = globals.build_store().await?;
        let reporter = Arc::new(ConsoleReporter::new(globals.format, globals.silent));

        let engine = PullEngine::new(store, reporter);
        engine.pull(&self.unit_id, &self.destination).await?;

        formatter.success(&format!(
            "Pulled {} into {}",
            self.unit_id, self.destination
        ));
        Ok(())
    }
}

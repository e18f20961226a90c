//! Implementation of the collect run: bundle the CWD into `all_code.txt`.

use std::env;

use tracing::debug;

use codecat_adapters::LocalFilesystem;
use codecat_core::application::CollectService;

use crate::{cli::GlobalArgs, config::AppConfig, error::CliResult, output::OutputManager};

pub fn execute(_global: GlobalArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let root = env::current_dir()?;
    let bundle_path = root.join(&config.collection.output_file);
    debug!(root = %root.display(), bundle = %bundle_path.display(), "Starting collect run");

    output.info(&format!("Collecting from: {}", root.display()))?;

    let service = CollectService::new(
        Box::new(LocalFilesystem::new()),
        Box::new(LocalFilesystem::new()),
    );
    let report = service.collect(&root, &bundle_path)?;

    if report.failed > 0 {
        output.warning(&format!(
            "{} file(s) could not be read; inline markers were written instead",
            report.failed
        ))?;
    }
    output.success(&format!(
        "Done! {} file(s) saved to {}",
        report.total(),
        config.collection.output_file
    ))?;

    Ok(())
}

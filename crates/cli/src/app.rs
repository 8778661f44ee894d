use crate::config::AppConfig;
use crate::error::Result;
use crate::{presentation, prompt};
use log::{debug, info};

/// Resolve the input file, run the engine and render the report.
///
/// # Errors
/// Propagates prompt, engine and rendering failures unchanged.
pub fn execute(config: &AppConfig) -> Result<String> {
    let path = match &config.path {
        Some(path) => path.clone(),
        None => prompt::ask_for_path()?,
    };

    let engine_config = config.engine_config(path)?;
    info!(
        "counting {} ({:?} mode)",
        engine_config.path.display(),
        engine_config.mode
    );

    let report = bool_tally_engine::run(&engine_config)?;
    debug!(
        "header={} data_rows={} boolean_columns={:?}",
        report.tally.has_header, report.tally.data_rows, report.tally.boolean_columns
    );

    presentation::render(&report, &config.render)
}

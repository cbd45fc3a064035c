use std::path::Path;

use chrono::NaiveDate;
use clap::Subcommand;
use serde::{Deserialize, Serialize};

use super::TimetableAppError;
use crate::{
    feed::StaticFeed,
    import::{run_import, TimetableImportConfig},
    storage::FileTimetableStorage,
};

#[derive(Debug, Clone, Serialize, Deserialize, Subcommand)]
pub enum TimetableOperation {
    /// import a GTFS archive, writing the timetable for a single service day
    /// to an output directory
    Import {
        /// GTFS archive, either a .zip file or a directory
        #[arg(short, long)]
        input: String,
        /// output directory path
        #[arg(short, long, default_value_t = String::from("."))]
        output_directory: String,
        /// import configuration as a .toml or .json file
        #[arg(short, long)]
        config: Option<String>,
        /// service day to import as YYYY-MM-DD, overriding the configuration.
        /// defaults to the first day with service in the archive.
        #[arg(long)]
        service_date: Option<NaiveDate>,
        /// replace an existing timetable in the output directory
        #[arg(long)]
        overwrite: bool,
        /// show a progress bar while scheduling patterns
        #[arg(long)]
        progress: bool,
    },
}

impl TimetableOperation {
    pub fn run(&self) -> Result<(), TimetableAppError> {
        match self {
            TimetableOperation::Import {
                input,
                output_directory,
                config,
                service_date,
                overwrite,
                progress,
            } => {
                let mut import_config = match config {
                    Some(f) => TimetableImportConfig::try_from(f)?,
                    None => TimetableImportConfig::default(),
                };
                if service_date.is_some() {
                    import_config.service_date = *service_date;
                }
                import_config.overwrite |= *overwrite;
                import_config.show_progress |= *progress;
                run_import_operation(input, Path::new(output_directory), &import_config)
            }
        }
    }
}

fn run_import_operation(
    input: &str,
    output_directory: &Path,
    config: &TimetableImportConfig,
) -> Result<(), TimetableAppError> {
    let feed = StaticFeed::from_path(input, &config.missing_stop_location_policy)?;
    let mut storage = FileTimetableStorage::new(output_directory, config.overwrite);
    let summary = run_import(&feed, config, &mut storage)?;
    let summary_json = serde_json::to_string_pretty(&summary)?;
    log::info!("import summary:\n{summary_json}");
    Ok(())
}

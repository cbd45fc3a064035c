use super::TimetableOperation;
use clap::Parser;

/// command line tool for building transit timetables from GTFS archives
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct TimetableApp {
    /// select the timetable operation to run
    #[command(subcommand)]
    pub op: TimetableOperation,
}

use bambam_timetable::app::TimetableApp;
use clap::Parser;

fn main() {
    env_logger::init();
    let args = TimetableApp::parse();
    match args.op.run() {
        Ok(_) => log::info!("finished."),
        Err(e) => {
            log::error!("failed running bambam_timetable: {e}");
            std::process::exit(1);
        }
    }
}

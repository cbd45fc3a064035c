mod timetable_app;
mod timetable_app_error;
mod timetable_operation;

pub use timetable_app::TimetableApp;
pub use timetable_app_error::TimetableAppError;
pub use timetable_operation::TimetableOperation;

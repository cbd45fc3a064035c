mod file_storage;
mod in_memory_storage;
mod storage_error;
mod timetable_storage;

pub use file_storage::{FileTimetableStorage, TIMETABLE_FILENAME};
pub use in_memory_storage::InMemoryTimetableStorage;
pub use storage_error::StorageError;
pub use timetable_storage::TimetableStorage;

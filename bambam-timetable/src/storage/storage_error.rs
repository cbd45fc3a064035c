use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum StorageError {
    #[error("timetable file {0} already exists, use overwrite to replace it")]
    AlreadyExists(PathBuf),
    #[error("failure writing timetable to {path}: {source}")]
    WriteError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failure reading timetable from {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failure serializing timetable: {0}")]
    SerializationError(#[from] serde_json::Error),
}

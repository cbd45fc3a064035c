use std::{
    fs::File,
    io::{BufReader, BufWriter, Write},
    path::{Path, PathBuf},
};

use flate2::{read::GzDecoder, write::GzEncoder, Compression};

use super::{StorageError, TimetableStorage};
use crate::model::TimetableSnapshot;

pub const TIMETABLE_FILENAME: &str = "timetable.json.gz";

/// writes the committed snapshot as gzipped JSON to `{directory}/timetable.json.gz`.
///
/// the snapshot is first written to a `.tmp` sibling and renamed into place once the
/// write has completed, so a failed commit never leaves a truncated timetable behind.
#[derive(Debug, Clone)]
pub struct FileTimetableStorage {
    directory: PathBuf,
    overwrite: bool,
}

impl FileTimetableStorage {
    pub fn new(directory: &Path, overwrite: bool) -> FileTimetableStorage {
        FileTimetableStorage {
            directory: directory.to_path_buf(),
            overwrite,
        }
    }

    pub fn filepath(&self) -> PathBuf {
        self.directory.join(TIMETABLE_FILENAME)
    }

    /// loads a snapshot previously committed to `directory`.
    pub fn read(directory: &Path) -> Result<TimetableSnapshot, StorageError> {
        let path = directory.join(TIMETABLE_FILENAME);
        let file = File::open(&path).map_err(|source| StorageError::ReadError {
            path: path.clone(),
            source,
        })?;
        let reader = BufReader::new(GzDecoder::new(file));
        let snapshot = serde_json::from_reader(reader)?;
        Ok(snapshot)
    }

    fn write_tmp(&self, snapshot: &TimetableSnapshot, tmp_path: &Path) -> Result<(), StorageError> {
        let write_error = |source: std::io::Error| StorageError::WriteError {
            path: tmp_path.to_path_buf(),
            source,
        };
        let file = File::create(tmp_path).map_err(write_error)?;
        let mut encoder = BufWriter::new(GzEncoder::new(file, Compression::default()));
        serde_json::to_writer(&mut encoder, snapshot)?;
        encoder.flush().map_err(write_error)?;
        let encoder = encoder
            .into_inner()
            .map_err(|e| write_error(e.into_error()))?;
        encoder.finish().map_err(write_error)?;
        Ok(())
    }
}

impl TimetableStorage for FileTimetableStorage {
    fn commit(&mut self, snapshot: TimetableSnapshot) -> Result<(), StorageError> {
        let path = self.filepath();
        if path.exists() && !self.overwrite {
            return Err(StorageError::AlreadyExists(path));
        }
        std::fs::create_dir_all(&self.directory).map_err(|source| StorageError::WriteError {
            path: self.directory.clone(),
            source,
        })?;

        let tmp_path = self.directory.join(format!("{TIMETABLE_FILENAME}.tmp"));
        if let Err(e) = self.write_tmp(&snapshot, &tmp_path) {
            let _ = std::fs::remove_file(&tmp_path);
            return Err(e);
        }
        std::fs::rename(&tmp_path, &path).map_err(|source| StorageError::WriteError {
            path: path.clone(),
            source,
        })?;
        log::info!(
            "wrote timetable with {} edges to {}",
            snapshot.edges.len(),
            path.display()
        );
        Ok(())
    }
}

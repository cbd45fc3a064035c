use super::StorageError;
use crate::model::TimetableSnapshot;

/// durable destination of an import. receives the whole result in one call, after the
/// import has succeeded. an error from `commit` leaves any prior committed snapshot in
/// place.
pub trait TimetableStorage {
    fn commit(&mut self, snapshot: TimetableSnapshot) -> Result<(), StorageError>;
}

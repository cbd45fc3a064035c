use serde::{Deserialize, Serialize};

use super::{FrozenSchedule, HopSchedule};
use crate::feed::TransferType;

/// what the router needs to know about a transfer edge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransferInfo {
    pub from_stop_id: String,
    pub to_stop_id: String,
    pub transfer_type: TransferType,
    /// minimum seconds required to make this transfer, if the feed lists one.
    pub min_transfer_time: Option<u32>,
}

/// the semantic payload of an edge created by the timetable import. graph edges carry
/// no type information of their own, so every edge id created here maps to exactly one
/// of these records.
///
/// the schedule type is generic so that the same record type describes edges while the
/// import is running (`S` = [`HopSchedule`]) and after commit (`S` = [`FrozenSchedule`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "type")]
pub enum PtEdgeRecord<S> {
    /// self-loop on a stop node, modelling waiting at the stop.
    StopLoop,
    /// a hop between consecutive stops of a pattern.
    PatternHop { schedule: S },
    /// a minimum-time transfer between two distinct stops.
    Transfer { transfer: TransferInfo },
}

/// record type held by the [`crate::import::EdgeRegistry`] during import.
pub type PendingEdgeRecord = PtEdgeRecord<HopSchedule>;

/// record type of a committed [`crate::model::TimetableSnapshot`].
pub type PtEdge = PtEdgeRecord<FrozenSchedule>;

impl<S> PtEdgeRecord<S> {
    pub fn is_stop_loop(&self) -> bool {
        matches!(self, PtEdgeRecord::StopLoop)
    }

    pub fn schedule(&self) -> Option<&S> {
        match self {
            PtEdgeRecord::PatternHop { schedule } => Some(schedule),
            _ => None,
        }
    }

    pub fn schedule_mut(&mut self) -> Option<&mut S> {
        match self {
            PtEdgeRecord::PatternHop { schedule } => Some(schedule),
            _ => None,
        }
    }

    pub fn transfer(&self) -> Option<&TransferInfo> {
        match self {
            PtEdgeRecord::Transfer { transfer } => Some(transfer),
            _ => None,
        }
    }

    /// short name of the record variant, used in log and error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            PtEdgeRecord::StopLoop => "stop_loop",
            PtEdgeRecord::PatternHop { .. } => "pattern_hop",
            PtEdgeRecord::Transfer { .. } => "transfer",
        }
    }
}

impl PendingEdgeRecord {
    /// a pattern hop with no departures yet.
    pub fn empty_hop() -> PendingEdgeRecord {
        PtEdgeRecord::PatternHop {
            schedule: HopSchedule::new(),
        }
    }

    pub fn freeze(&self) -> PtEdge {
        match self {
            PtEdgeRecord::StopLoop => PtEdgeRecord::StopLoop,
            PtEdgeRecord::PatternHop { schedule } => PtEdgeRecord::PatternHop {
                schedule: schedule.freeze(),
            },
            PtEdgeRecord::Transfer { transfer } => PtEdgeRecord::Transfer {
                transfer: transfer.clone(),
            },
        }
    }
}

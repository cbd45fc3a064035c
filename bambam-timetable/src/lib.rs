//! transit timetable import for bambam: converts a static transit feed into a graph of
//! stop nodes, pattern hop edges and transfer edges, where each hop carries the
//! departures of a single service day, and commits the result in one step.
pub mod app;
pub mod feed;
pub mod import;
pub mod model;
pub mod storage;
pub mod util;

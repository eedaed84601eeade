//! Service layer: the record cache and the matcher that runs over it

pub mod record_store;
pub mod student_search;

pub use record_store::{RecordStore, Snapshot};
pub use student_search::{search, MatchPhase, SearchOutcome};

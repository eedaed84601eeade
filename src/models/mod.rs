pub mod student;

pub use student::{StudentRecord, StudentSummary, STUDENT_COLUMN_COUNT};

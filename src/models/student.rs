use serde::{Deserialize, Serialize};

/// Number of leading columns every source row must carry
pub const STUDENT_COLUMN_COUNT: usize = 14;

/// One row of the graduation table
///
/// Values are kept exactly as they appear in the source file; nothing is
/// trimmed or coerced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentRecord {
    pub id: String,
    pub term: String,
    pub student_id: String,
    pub middle_name: String,
    pub first_name: String,
    pub birth_date: String,
    pub hometown: String,
    pub gender: String,
    pub honors_rank: String,
    pub major: String,
    pub class_name: String,
    /// Cumulative grade point average, as text
    pub gpa: String,
    pub school: String,
    pub level: String,
    /// `middle_name` and `first_name` joined by a single space
    pub full_name: String,
}

impl StudentRecord {
    /// Build a record from the columns of one row
    ///
    /// Returns `None` for rows with fewer than [`STUDENT_COLUMN_COUNT`]
    /// columns. Extra trailing columns are ignored.
    pub fn from_columns<'a, I>(columns: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut columns = columns.into_iter().map(str::to_string);
        let mut next = || columns.next();

        let id = next()?;
        let term = next()?;
        let student_id = next()?;
        let middle_name = next()?;
        let first_name = next()?;
        let birth_date = next()?;
        let hometown = next()?;
        let gender = next()?;
        let honors_rank = next()?;
        let major = next()?;
        let class_name = next()?;
        let gpa = next()?;
        let school = next()?;
        let level = next()?;

        let full_name = format!("{} {}", middle_name, first_name);

        Some(Self {
            id,
            term,
            student_id,
            middle_name,
            first_name,
            birth_date,
            hometown,
            gender,
            honors_rank,
            major,
            class_name,
            gpa,
            school,
            level,
            full_name,
        })
    }
}

/// Public projection of a record returned by the search endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentSummary {
    pub student_id: String,
    pub full_name: String,
    pub birth_date: String,
    pub hometown: String,
    pub gender: String,
    pub honors_rank: String,
    pub major: String,
    pub class_name: String,
    pub gpa: String,
    pub school: String,
    pub level: String,
    pub term: String,
}

impl From<&StudentRecord> for StudentSummary {
    fn from(record: &StudentRecord) -> Self {
        Self {
            student_id: record.student_id.clone(),
            full_name: record.full_name.clone(),
            birth_date: record.birth_date.clone(),
            hometown: record.hometown.clone(),
            gender: record.gender.clone(),
            honors_rank: record.honors_rank.clone(),
            major: record.major.clone(),
            class_name: record.class_name.clone(),
            gpa: record.gpa.clone(),
            school: record.school.clone(),
            level: record.level.clone(),
            term: record.term.clone(),
        }
    }
}

//! Two-phase student matching
//!
//! Student ID matches win outright: names are only consulted when no ID
//! contains the term. Both phases are case-insensitive substring checks and
//! keep the source order.

use tracing::debug;

use crate::models::StudentRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchPhase {
    /// Query was blank; nothing was scanned
    Skipped,
    StudentId,
    Name,
}

impl MatchPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Skipped => "skipped",
            Self::StudentId => "student_id",
            Self::Name => "name",
        }
    }
}

#[derive(Debug)]
pub struct SearchOutcome<'a> {
    pub phase: MatchPhase,
    pub records: Vec<&'a StudentRecord>,
}

impl SearchOutcome<'_> {
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Filter `records` by `query`
pub fn search<'a>(records: &'a [StudentRecord], query: &str) -> SearchOutcome<'a> {
    let term = query.trim().to_lowercase();
    if term.is_empty() {
        return SearchOutcome {
            phase: MatchPhase::Skipped,
            records: Vec::new(),
        };
    }

    debug!("Searching for: \"{}\"", term);

    let by_id: Vec<_> = records
        .iter()
        .filter(|record| matches_student_id(record, &term))
        .collect();

    if !by_id.is_empty() {
        debug!("Found {} student ID matches", by_id.len());
        return SearchOutcome {
            phase: MatchPhase::StudentId,
            records: by_id,
        };
    }

    let by_name: Vec<_> = records
        .iter()
        .filter(|record| matches_name(record, &term))
        .collect();

    debug!("Found {} name matches", by_name.len());
    SearchOutcome {
        phase: MatchPhase::Name,
        records: by_name,
    }
}

fn matches_student_id(record: &StudentRecord, term: &str) -> bool {
    if record.student_id.is_empty() {
        return false;
    }
    // Containment covers equality
    record.student_id.to_lowercase().contains(term)
}

fn matches_name(record: &StudentRecord, term: &str) -> bool {
    if record.full_name.is_empty() {
        return false;
    }
    [&record.full_name, &record.middle_name, &record.first_name]
        .iter()
        .any(|field| field.to_lowercase().contains(term))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_test::traced_test;

    fn record(student_id: &str, middle_name: &str, first_name: &str) -> StudentRecord {
        let row = [
            "1",
            "2024.2B",
            student_id,
            middle_name,
            first_name,
            "01/01/2001",
            "Hà Nội",
            "Nam",
            "Giỏi",
            "CNTT",
            "CNTT-01",
            "3.5",
            "SoICT",
            "Kỹ sư",
        ];
        StudentRecord::from_columns(row).unwrap()
    }

    fn ids(outcome: &SearchOutcome) -> Vec<String> {
        outcome
            .records
            .iter()
            .map(|r| r.student_id.clone())
            .collect()
    }

    fn sample() -> Vec<StudentRecord> {
        vec![
            record("20190001", "Nguyễn Văn", "An"),
            record("20190002", "Lê Thị", "Hoa"),
            record("12345", "Phạm Minh", "Đức"),
            record("20191234", "Trần", "An"),
            record("2020ABC9", "Võ Thanh", "Bình"),
        ]
    }

    #[test]
    fn test_exact_student_id() {
        let records = sample();
        let outcome = search(&records, "12345");

        assert_eq!(outcome.phase, MatchPhase::StudentId);
        assert_eq!(ids(&outcome), vec!["12345"]);
    }

    #[test]
    fn test_student_id_substring_keeps_source_order() {
        let records = sample();
        let outcome = search(&records, "1234");

        assert_eq!(outcome.phase, MatchPhase::StudentId);
        assert_eq!(ids(&outcome), vec!["12345", "20191234"]);
    }

    #[test]
    fn test_student_id_is_case_insensitive() {
        let records = sample();
        let outcome = search(&records, "abc9");
        assert_eq!(ids(&outcome), vec!["2020ABC9"]);
    }

    #[test]
    fn test_id_phase_suppresses_name_matches() {
        let records = vec![
            record("AN-001", "Lê", "Hoa"),
            record("20190001", "Nguyễn Văn", "An"),
        ];
        let outcome = search(&records, "an");

        assert_eq!(outcome.phase, MatchPhase::StudentId);
        assert_eq!(ids(&outcome), vec!["AN-001"]);
    }

    #[test]
    fn test_name_phase_when_no_id_matches() {
        let records = sample();
        let outcome = search(&records, "an");

        assert_eq!(outcome.phase, MatchPhase::Name);
        // "Nguyễn Văn An", "Trần An", "Võ Thanh Bình"
        assert_eq!(ids(&outcome), vec!["20190001", "20191234", "2020ABC9"]);
    }

    #[test]
    fn test_name_match_spans_middle_and_first_name() {
        let records = sample();
        let outcome = search(&records, "Thị Hoa");
        assert_eq!(ids(&outcome), vec!["20190002"]);
    }

    #[test]
    fn test_unicode_case_folding() {
        let records = sample();
        let outcome = search(&records, "ĐỨC");
        assert_eq!(ids(&outcome), vec!["12345"]);
    }

    #[test]
    fn test_no_accent_folding() {
        let records = sample();
        assert!(search(&records, "duc").is_empty());
    }

    #[test]
    fn test_query_is_trimmed() {
        let records = sample();
        let outcome = search(&records, "  hoa  ");
        assert_eq!(ids(&outcome), vec!["20190002"]);
    }

    #[test]
    fn test_blank_query_skips_scan() {
        let records = sample();
        let outcome = search(&records, "   ");

        assert_eq!(outcome.phase, MatchPhase::Skipped);
        assert!(outcome.is_empty());
    }

    #[test]
    fn test_empty_student_id_never_matches_id_phase() {
        let records = vec![record("", "Lê", "Hoa"), record("77", "Trần", "Nam")];
        let outcome = search(&records, "77");
        assert_eq!(ids(&outcome), vec!["77"]);
    }

    #[test]
    fn test_no_matches() {
        let records = sample();
        let outcome = search(&records, "zzz");

        assert_eq!(outcome.phase, MatchPhase::Name);
        assert!(outcome.is_empty());
    }

    #[test]
    #[traced_test]
    fn test_match_counts_logged_at_debug_only() {
        let records = sample();
        search(&records, "an");
        search(&records, "1234");

        assert!(logs_contain("Found 3 name matches"));
        assert!(logs_contain("Found 2 student ID matches"));
        assert!(!logs_contain("INFO"));
    }

    #[test]
    fn test_empty_table() {
        let outcome = search(&[], "an");
        assert!(outcome.is_empty());
    }
}

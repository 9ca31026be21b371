//! Manual log of exam results.

use std::fmt;

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProgressError {
    #[error("Please fill in all fields.")]
    MissingField,
    #[error("Marks must be a number, got {0}.")]
    InvalidMarks(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProgressEntry {
    pub subject: String,
    pub exam: String,
    pub marks: f64,
}

impl fmt::Display for ProgressEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}: {} marks", self.subject, self.exam, self.marks)
    }
}

/// Entries in the order they were recorded.
#[derive(Debug, Clone, Default)]
pub struct ProgressLog {
    entries: Vec<ProgressEntry>,
}

impl ProgressLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(
        &mut self,
        subject: &str,
        exam: &str,
        marks: &str,
    ) -> Result<&ProgressEntry, ProgressError> {
        let (subject, exam, marks) = (subject.trim(), exam.trim(), marks.trim());
        if subject.is_empty() || exam.is_empty() || marks.is_empty() {
            return Err(ProgressError::MissingField);
        }
        let marks = marks
            .parse::<f64>()
            .ok()
            .filter(|marks| marks.is_finite())
            .ok_or_else(|| ProgressError::InvalidMarks(marks.to_string()))?;

        self.entries.push(ProgressEntry {
            subject: subject.to_string(),
            exam: exam.to_string(),
            marks,
        });
        Ok(&self.entries[self.entries.len() - 1])
    }

    pub fn entries(&self) -> &[ProgressEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_and_display() {
        let mut log = ProgressLog::new();
        let entry = log.record("Math", "Midterm", "88").unwrap();
        assert_eq!(entry.to_string(), "Math - Midterm: 88 marks");
        log.record(" Biology ", "Final", "72.5").unwrap();

        let lines: Vec<String> = log.entries().iter().map(ToString::to_string).collect();
        assert_eq!(lines, ["Math - Midterm: 88 marks", "Biology - Final: 72.5 marks"]);
    }

    #[test]
    fn test_missing_fields_rejected() {
        let mut log = ProgressLog::new();
        assert_eq!(log.record("", "Final", "10"), Err(ProgressError::MissingField));
        assert_eq!(log.record("Math", "  ", "10"), Err(ProgressError::MissingField));
        assert_eq!(log.record("Math", "Final", ""), Err(ProgressError::MissingField));
        assert!(log.is_empty());
    }

    #[test]
    fn test_marks_must_be_numeric() {
        let mut log = ProgressLog::new();
        assert_eq!(
            log.record("Math", "Final", "lots"),
            Err(ProgressError::InvalidMarks("lots".into()))
        );
        assert!(log.record("Math", "Final", "inf").is_err());
        assert!(log.is_empty());
    }
}

//! SessionHistory aggregate

use super::record::QaRecord;

/// Ordered records for one run, in question order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionHistory {
    records: Vec<QaRecord>,
}

impl SessionHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record. Records are never removed or reordered.
    pub fn push(&mut self, record: QaRecord) {
        self.records.push(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[QaRecord] {
        &self.records
    }

    pub fn iter(&self) -> impl Iterator<Item = &QaRecord> {
        self.records.iter()
    }

    /// Number of records synthesized from failures.
    pub fn error_count(&self) -> usize {
        self.records.iter().filter(|r| r.is_error()).count()
    }
}

impl FromIterator<QaRecord> for SessionHistory {
    fn from_iter<I: IntoIterator<Item = QaRecord>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Question;

    #[test]
    fn test_push_preserves_order() {
        let mut history = SessionHistory::new();
        assert!(history.is_empty());

        history.push(QaRecord::from_answer("first"));
        history.push(QaRecord::from_answer("second"));

        let texts: Vec<_> = history.iter().map(|r| r.markdown()).collect();
        assert_eq!(texts, vec!["first", "second"]);
        assert_eq!(history.len(), 2);
    }

    #[test]
    fn test_error_count() {
        let q = Question::try_new("q").unwrap();
        let history: SessionHistory = vec![
            QaRecord::from_answer("ok"),
            QaRecord::from_error(&q),
            QaRecord::from_error(&q),
        ]
        .into_iter()
        .collect();
        assert_eq!(history.error_count(), 2);
    }
}

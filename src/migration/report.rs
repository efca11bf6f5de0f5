use serde::Serialize;
use uuid::Uuid;

/// Ergebnis für einen einzelnen Record
#[derive(Debug, Clone)]
pub enum RecordOutcome {
    /// Produkt angelegt und Marker geschrieben; metafield_errors
    /// listet fehlgeschlagene Metafields (Teil-Migration)
    Migrated { metafield_errors: Vec<String> },
    /// Bereits migriert, nicht erneut angefasst
    Skipped,
    /// Fehlgeschlagen; der Run läuft weiter
    Failed { record_id: String, error: String },
}

/// Fehlgeschlagener Record im Report
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecordFailure {
    pub record_id: String,
    pub error: String,
}

/// Strukturiertes Ergebnis eines kompletten Migration Runs
#[derive(Debug, Clone, Serialize)]
pub struct MigrationReport {
    pub run_id: Uuid,
    pub total_records: usize,
    pub batches: usize,
    pub migrated: usize,
    pub skipped: usize,
    pub failed: usize,
    /// Teilmenge von migrated: mindestens ein Metafield fehlte am Ende
    pub partial: usize,
    pub failures: Vec<RecordFailure>,
}

impl MigrationReport {
    pub fn new(total_records: usize, batches: usize) -> Self {
        Self {
            run_id: Uuid::new_v4(),
            total_records,
            batches,
            migrated: 0,
            skipped: 0,
            failed: 0,
            partial: 0,
            failures: Vec::new(),
        }
    }

    /// Zähle ein Record-Ergebnis in den Report
    pub fn record(&mut self, outcome: RecordOutcome) {
        match outcome {
            RecordOutcome::Migrated {
                metafield_errors, ..
            } => {
                self.migrated += 1;
                if !metafield_errors.is_empty() {
                    self.partial += 1;
                }
            }
            RecordOutcome::Skipped => self.skipped += 1,
            RecordOutcome::Failed { record_id, error } => {
                self.failed += 1;
                self.failures.push(RecordFailure { record_id, error });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_outcomes() {
        let mut report = MigrationReport::new(4, 1);

        report.record(RecordOutcome::Migrated {
            metafield_errors: Vec::new(),
        });
        report.record(RecordOutcome::Skipped);
        report.record(RecordOutcome::Failed {
            record_id: "c".to_string(),
            error: "Record has no usable rate".to_string(),
        });
        report.record(RecordOutcome::Migrated {
            metafield_errors: vec!["brand: HTTP 429".to_string()],
        });

        assert_eq!(report.migrated, 2);
        assert_eq!(report.skipped, 1);
        assert_eq!(report.failed, 1);
        assert_eq!(report.partial, 1);
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].record_id, "c");
    }

    #[test]
    fn test_serializes_for_response_body() {
        let mut report = MigrationReport::new(1, 1);
        report.record(RecordOutcome::Failed {
            record_id: "x".to_string(),
            error: "boom".to_string(),
        });

        let value = serde_json::to_value(&report).expect("serialize");

        assert_eq!(value["total_records"], 1);
        assert_eq!(value["failed"], 1);
        assert_eq!(value["failures"][0]["record_id"], "x");
        assert!(value["run_id"].as_str().is_some());
    }
}

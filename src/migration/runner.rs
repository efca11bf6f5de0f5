use anyhow::Result;
use std::sync::Arc;

use crate::migration::pacing::PacingPolicy;
use crate::migration::report::{MigrationReport, RecordOutcome};
use crate::migration::transform;
use crate::shopify::ProductPlatform;
use crate::storage::{MigrationMarker, RecordStore, SourceRecord};

/// Migration Runner: verarbeitet die komplette Collection batchweise,
/// strikt sequenziell. Fehler einzelner Records brechen den Run nie ab.
pub struct MigrationRunner {
    store: Arc<dyn RecordStore>,
    platform: Arc<dyn ProductPlatform>,
    pacing: PacingPolicy,
    batch_size: usize,
}

impl MigrationRunner {
    pub fn new(
        store: Arc<dyn RecordStore>,
        platform: Arc<dyn ProductPlatform>,
        pacing: PacingPolicy,
        batch_size: usize,
    ) -> Self {
        Self {
            store,
            platform,
            pacing,
            batch_size: batch_size.max(1),
        }
    }

    /// Führe die Migration aus und liefere den Report
    pub async fn run(&self) -> Result<MigrationReport> {
        let records = self.store.fetch_records().await?;
        let total = records.len();
        let batch_count = records.chunks(self.batch_size).count();

        let mut report = MigrationReport::new(total, batch_count);

        tracing::info!(
            run_id = %report.run_id,
            total,
            batches = batch_count,
            "Starting product migration"
        );

        for (index, batch) in records.chunks(self.batch_size).enumerate() {
            tracing::info!(
                run_id = %report.run_id,
                batch = index + 1,
                size = batch.len(),
                "Processing batch"
            );

            for record in batch {
                let outcome = self.process_record(record).await;
                report.record(outcome);
                self.pacing.after_record().await;
            }

            if index + 1 < batch_count {
                self.pacing.between_batches().await;
            }
        }

        tracing::info!(
            run_id = %report.run_id,
            migrated = report.migrated,
            skipped = report.skipped,
            failed = report.failed,
            "Migration finished"
        );

        Ok(report)
    }

    /// Verarbeite einen Record; jeder Fehler bleibt auf den Record begrenzt
    async fn process_record(&self, record: &SourceRecord) -> RecordOutcome {
        if record.is_migrated() {
            tracing::info!(record_id = %record.id, "Record already migrated, skipping");
            return RecordOutcome::Skipped;
        }

        match self.migrate_record(record).await {
            Ok(outcome) => outcome,
            Err(e) => {
                tracing::error!(record_id = %record.id, error = %e, "Record migration failed");
                RecordOutcome::Failed {
                    record_id: record.id.clone(),
                    error: e.to_string(),
                }
            }
        }
    }

    /// Transformiere, lege Produkt + Metafields an, schreibe Marker zurück
    async fn migrate_record(&self, record: &SourceRecord) -> Result<RecordOutcome> {
        let product = transform::build_product(record)?;
        let product_id = self.platform.create_product(&product).await?;

        tracing::info!(record_id = %record.id, product_id, "Product created");

        let mut metafield_errors = Vec::new();

        for metafield in transform::build_metafields(record) {
            if let Err(e) = self.platform.create_metafield(product_id, &metafield).await {
                tracing::warn!(
                    record_id = %record.id,
                    product_id,
                    key = %metafield.key,
                    error = %e,
                    "Metafield creation failed"
                );
                metafield_errors.push(format!("{}: {}", metafield.key, e));
            }
            self.pacing.after_metafield().await;
        }

        let marker = MigrationMarker::new(product_id.to_string());

        if let Err(e) = self.store.mark_migrated(&record.id, &marker).await {
            return Err(anyhow::anyhow!(
                "Marker write failed after creating product {}: {}",
                product_id,
                e
            ));
        }

        Ok(RecordOutcome::Migrated { metafield_errors })
    }
}

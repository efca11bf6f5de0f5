use prometheus::{Counter, CounterVec, Histogram, Registry};

/// Prometheus Metrics für Migration Runs, Record Outcomes, etc.
pub struct Metrics {
    pub registry: Registry,
    pub migration_runs: CounterVec,
    pub records_migrated: Counter,
    pub records_skipped: Counter,
    pub records_failed: Counter,
    pub run_duration: Histogram,
}

impl Metrics {
    pub fn new() -> Self {
        let registry = Registry::new();

        let migration_runs = CounterVec::new(
            prometheus::Opts::new("migration_runs_total", "Migration runs by outcome"),
            &["outcome"],
        )
        .expect("Failed to create migration_runs metric");

        let records_migrated = Counter::new(
            "records_migrated_total",
            "Records successfully migrated to Shopify",
        )
        .expect("Failed to create records_migrated metric");

        let records_skipped = Counter::new(
            "records_skipped_total",
            "Records skipped because they were already migrated",
        )
        .expect("Failed to create records_skipped metric");

        let records_failed = Counter::new(
            "records_failed_total",
            "Records that failed during migration",
        )
        .expect("Failed to create records_failed metric");

        let run_duration = Histogram::with_opts(prometheus::HistogramOpts::new(
            "migration_run_duration_seconds",
            "Duration of complete migration runs in seconds",
        ))
        .expect("Failed to create run_duration metric");

        registry.register(Box::new(migration_runs.clone())).ok();
        registry.register(Box::new(records_migrated.clone())).ok();
        registry.register(Box::new(records_skipped.clone())).ok();
        registry.register(Box::new(records_failed.clone())).ok();
        registry.register(Box::new(run_duration.clone())).ok();

        Self {
            registry,
            migration_runs,
            records_migrated,
            records_skipped,
            records_failed,
            run_duration,
        }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

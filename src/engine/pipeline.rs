use crate::loader::{load_from_path, CleaningReport};
use crate::models::CleanedDataset;
use crate::summary::{
    select_top_customers, summarize_customers, summarize_monthly, summarize_overall, CustomerSummary,
    MonthlySummary, OverallSummary, TopCustomer, DEFAULT_TOP_N
};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::task::{spawn_blocking, JoinHandle};
use tracing::{info, warn};

/// Everything one run needs to know, passed in rather than read from globals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    source: PathBuf,
    top_n: i64
}

impl PipelineConfig {
    pub fn new(source: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            top_n: DEFAULT_TOP_N
        }
    }

    /// Overrides how many customers the top customers table keeps.
    pub fn with_top_n(mut self, top_n: i64) -> Self {
        self.top_n = top_n;
        self
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn top_n(&self) -> i64 {
        self.top_n
    }
}

/// The immutable results of one run.
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineReport {
    pub cleaning: CleaningReport,
    pub overall: OverallSummary,
    pub monthly: MonthlySummary,
    pub customers: CustomerSummary,
    pub top_customers: Vec<TopCustomer>
}

/// Load, clean and summarize a transactions ledger.
pub struct Pipeline {
    config: PipelineConfig
}

impl Pipeline {
    pub fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    /// Runs every stage against the configured source.
    ///
    /// # Errors
    /// Fails if the source cannot be loaded, a sum overflows, or the top customers
    /// limit is not positive.
    pub async fn run(&self) -> anyhow::Result<PipelineReport> {
        let source = self.config.source.clone();
        let (dataset, cleaning) = spawn_blocking(move || load_from_path(source)).await??;

        self.summarize(dataset, cleaning).await
    }

    /// Runs the aggregation stages over an already cleaned dataset.
    ///
    /// The overall, monthly and customer aggregators share the dataset read-only
    /// and run concurrently; the top customers table is selected once they finish.
    pub async fn summarize(&self, dataset: CleanedDataset, cleaning: CleaningReport) -> anyhow::Result<PipelineReport> {
        info!("Aggregating {} cleaned transactions", dataset.len());

        let dataset = Arc::new(dataset);

        let (overall, monthly, customers) = tokio::try_join!(
            spawn_stage(&dataset, summarize_overall),
            spawn_stage(&dataset, summarize_monthly),
            spawn_stage(&dataset, summarize_customers)
        )?;
        let (overall, monthly, customers) = (overall?, monthly?, customers?);

        if overall.is_empty() {
            warn!("No transactions remained after cleaning, summaries carry no data");
        }

        let top_customers = select_top_customers(&customers, self.config.top_n)?;

        info!("Summarized {} months and {} customers", monthly.len(), customers.len());

        Ok(PipelineReport {
            cleaning,
            overall,
            monthly,
            customers,
            top_customers
        })
    }
}

fn spawn_stage<T, F>(dataset: &Arc<CleanedDataset>, stage: F) -> JoinHandle<T>
where
    T: Send + 'static,
    F: FnOnce(&CleanedDataset) -> T + Send + 'static
{
    let dataset = Arc::clone(dataset);
    spawn_blocking(move || stage(dataset.as_ref()))
}

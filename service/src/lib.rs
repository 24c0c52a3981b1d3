mod error;

pub use error::ServiceError;

use repository::item::{to_results, ItemSource};
use response::{ok, Envelope};
use serde_json::Value;

/// Every invocation reads this partition; the event never selects another one.
pub const SAMPLE_PARTITION_KEY: &str = "SAMPLE_PK";

pub struct ItemQueryService<S> {
    source: S,
}

impl<S: ItemSource> ItemQueryService<S> {
    pub fn new(source: S) -> ItemQueryService<S> {
        ItemQueryService { source }
    }

    /// Queries the partition and returns its items as a 200 envelope. Store
    /// and record failures are returned as-is for the runtime to report.
    pub async fn handle(&self, _event: &Value) -> Result<Envelope, ServiceError> {
        let rows = self.source.query_partition(SAMPLE_PARTITION_KEY).await?;
        let items = to_results(&rows)?;
        tracing::debug!("Returning {} items", items.len());
        Ok(ok(&items)?)
    }
}

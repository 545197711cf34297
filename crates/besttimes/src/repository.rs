use async_trait::async_trait;
use uuid::Uuid;

use crate::error::Result;
use crate::models::record::RaceRecord;

/// Source of raw race records, the engine's only inbound dependency.
///
/// Implementations talk to whatever backend holds the records; transport
/// failures surface as [`crate::EngineError::Repository`] and are
/// isolated per member by the aggregator.
#[async_trait]
pub trait RecordRepository: Send + Sync {
    /// All race records for one account, in the backend's stable order.
    async fn fetch_records_for_member(&self, user_id: Uuid) -> Result<Vec<RaceRecord>>;
}

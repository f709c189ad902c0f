use async_trait::async_trait;
use domain::error::CatalogError;
use domain::id::IdGenerator;
use std::time::{SystemTime, UNIX_EPOCH};
use tokio::sync::Mutex;

const NODE_ID_BITS: i64 = 10;
const SEQUENCE_BITS: i64 = 12;
const MAX_NODE_ID: i64 = (1 << NODE_ID_BITS) - 1;
const MAX_SEQUENCE: i64 = (1 << SEQUENCE_BITS) - 1;
const TIMESTAMP_SHIFT: i64 = NODE_ID_BITS + SEQUENCE_BITS;
const NODE_ID_SHIFT: i64 = SEQUENCE_BITS;
const EPOCH: i64 = 1609459200000; // 2021-01-01 00:00:00 UTC

/// Snowflake id generator: millisecond timestamp, node id, sequence.
pub struct SnowflakeIdGenerator {
    node_id: i64,
    // (last timestamp, sequence within that millisecond)
    state: Mutex<(i64, i64)>,
}

impl SnowflakeIdGenerator {
    pub fn new(node_id: i64) -> Result<Self, CatalogError> {
        if node_id > MAX_NODE_ID {
            return Err(CatalogError::Other(format!(
                "node id must not exceed {}",
                MAX_NODE_ID
            )));
        }
        Ok(Self {
            node_id,
            state: Mutex::new((0, 0)),
        })
    }

    fn now_millis() -> Result<i64, CatalogError> {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as i64)
            .map_err(|e| CatalogError::Other(format!("system clock error: {}", e)))
    }

    fn compose(&self, timestamp: i64, sequence: i64) -> i64 {
        ((timestamp - EPOCH) << TIMESTAMP_SHIFT) | (self.node_id << NODE_ID_SHIFT) | sequence
    }

    async fn wait_next_millis(last_timestamp: i64) -> Result<i64, CatalogError> {
        let mut timestamp = Self::now_millis()?;
        while timestamp <= last_timestamp {
            tokio::time::sleep(tokio::time::Duration::from_micros(100)).await;
            timestamp = Self::now_millis()?;
        }
        Ok(timestamp)
    }
}

#[async_trait]
impl IdGenerator for SnowflakeIdGenerator {
    async fn next_id(&self) -> Result<i64, CatalogError> {
        let mut state = self.state.lock().await;
        let (mut last_timestamp, mut sequence) = *state;

        let mut timestamp = Self::now_millis()?;
        if timestamp < last_timestamp {
            return Err(CatalogError::Other(
                "system clock moved backwards, refusing to generate id".to_string(),
            ));
        }

        if timestamp == last_timestamp {
            sequence = (sequence + 1) & MAX_SEQUENCE;
            if sequence == 0 {
                timestamp = Self::wait_next_millis(last_timestamp).await?;
            }
        } else {
            sequence = 0;
        }

        last_timestamp = timestamp;
        *state = (last_timestamp, sequence);
        Ok(self.compose(timestamp, sequence))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[tokio::test]
    async fn test_ids_are_unique_and_positive() {
        let generator = SnowflakeIdGenerator::new(1).unwrap();
        let mut seen = HashSet::new();
        for _ in 0..2048 {
            let id = generator.next_id().await.unwrap();
            assert!(id > 0);
            assert!(seen.insert(id), "duplicate id generated");
        }
    }

    #[test]
    fn test_node_id_bounds() {
        assert!(SnowflakeIdGenerator::new(MAX_NODE_ID).is_ok());
        assert!(SnowflakeIdGenerator::new(MAX_NODE_ID + 1).is_err());
    }
}

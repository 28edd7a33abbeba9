use async_trait::async_trait;
use redis::aio::MultiplexedConnection;
use redis::AsyncCommands;
use tracing::info;

use crate::store::{KeyValueStore, StoreError};

/// Redis-backed store. Keys are written as `{prefix}:{key}`.
#[derive(Clone)]
pub struct RedisStore {
    conn: MultiplexedConnection,
    prefix: String,
}

impl RedisStore {
    pub async fn connect(redis_url: &str, prefix: &str) -> Result<Self, StoreError> {
        info!("Connecting to Redis...");

        let client = redis::Client::open(redis_url)?;
        let conn = client.get_multiplexed_async_connection().await?;

        info!("Redis connection established (key prefix '{prefix}')");
        Ok(Self {
            conn,
            prefix: prefix.to_string(),
        })
    }

    fn namespaced(&self, key: &str) -> String {
        namespaced_key(&self.prefix, key)
    }
}

fn namespaced_key(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{prefix}:{key}")
    }
}

#[async_trait]
impl KeyValueStore for RedisStore {
    async fn get_raw(&self, key: &str) -> Result<Option<String>, StoreError> {
        let mut conn = self.conn.clone();
        let value: Option<String> = conn.get(self.namespaced(key)).await?;
        Ok(value)
    }

    async fn set_raw(&self, key: &str, value: String) -> Result<(), StoreError> {
        let mut conn = self.conn.clone();
        conn.set::<_, _, ()>(self.namespaced(key), value).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_are_namespaced() {
        assert_eq!(namespaced_key("cvbuilder", "resume-data"), "cvbuilder:resume-data");
        assert_eq!(namespaced_key("", "resume-data"), "resume-data");
    }
}

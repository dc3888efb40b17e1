use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[cfg(any(test, feature = "mocks"))]
use mockall::automock;

pub const DEFAULT_USERS: [&str; 3] = ["u1", "u2", "u3"];
pub const DEFAULT_ACTIONS: [&str; 3] = ["login", "click", "logout"];

/// One synthetic user action, published as a single record.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ActivityEvent {
    pub user_id: String,
    pub action: String,
    /// Seconds since the Unix epoch, fractional.
    pub timestamp: f64,
}

impl ActivityEvent {
    pub fn new(user_id: String, action: String, timestamp: f64) -> Self {
        Self {
            user_id,
            action,
            timestamp,
        }
    }

    pub fn to_payload(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(self)
    }

    pub fn from_payload(data: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(data)
    }
}

/// Current wall-clock time as fractional epoch seconds, microsecond precision.
pub fn current_timestamp() -> f64 {
    chrono::Utc::now().timestamp_micros() as f64 / 1_000_000.0
}

#[cfg_attr(any(test, feature = "mocks"), automock)]
pub trait EventGenerator {
    fn generate(&mut self) -> ActivityEvent;
}

#[derive(Debug, Error, PartialEq)]
pub enum GeneratorError {
    #[error("cannot sample from an empty {0} pool")]
    EmptyPool(&'static str),
}

/// Samples user and action independently and uniformly from fixed pools.
pub struct RandomEventGenerator<R: Rng> {
    rng: R,
    users: Vec<String>,
    actions: Vec<String>,
}

impl<R: Rng> RandomEventGenerator<R> {
    pub fn new(rng: R, users: Vec<String>, actions: Vec<String>) -> Result<Self, GeneratorError> {
        if users.is_empty() {
            return Err(GeneratorError::EmptyPool("user"));
        }
        if actions.is_empty() {
            return Err(GeneratorError::EmptyPool("action"));
        }

        Ok(Self {
            rng,
            users,
            actions,
        })
    }
}

impl RandomEventGenerator<StdRng> {
    pub fn from_entropy(users: Vec<String>, actions: Vec<String>) -> Result<Self, GeneratorError> {
        Self::new(StdRng::from_entropy(), users, actions)
    }
}

impl<R: Rng> EventGenerator for RandomEventGenerator<R> {
    fn generate(&mut self) -> ActivityEvent {
        // pools are checked non-empty at construction
        let user_id = self.users[self.rng.gen_range(0..self.users.len())].clone();
        let action = self.actions[self.rng.gen_range(0..self.actions.len())].clone();

        ActivityEvent::new(user_id, action, current_timestamp())
    }
}

/// What the stream service reports back for an accepted record.
#[derive(Debug, Clone, PartialEq)]
pub struct PublishedRecord {
    pub shard_id: String,
    pub sequence_number: String,
}

#[derive(Debug, Error)]
pub enum PublishError {
    #[error("failed to serialize event: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("failed to put record on stream {stream_name}: {message}")]
    PutRecord {
        stream_name: String,
        message: String,
    },
}

#[cfg_attr(any(test, feature = "mocks"), automock)]
#[async_trait]
pub trait RecordPublisher: Send + Sync {
    async fn put_record(
        &self,
        partition_key: &str,
        data: Vec<u8>,
    ) -> Result<PublishedRecord, PublishError>;
}

use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

/// Identifier for a bot transcript entry that is mutated after creation.
///
/// Only placeholder entries carry one; it ties ticks and gateway events back
/// to the entry they target.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MessageId(String);

impl MessageId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for MessageId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Mints an identifier unique within a session with overwhelming probability:
/// wall-clock milliseconds plus 64 bits of entropy.
pub fn fresh_id() -> MessageId {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis())
        .unwrap_or(0);
    MessageId(format!("id-{millis}-{:x}", rand::random::<u64>()))
}

use serde::{Deserialize, Serialize};

/// The sole domain record: an integer id and a content string. Both fields
/// are required on every write; `id` doubles as the store key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: i64,
    pub content: String,
}

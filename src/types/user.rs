use serde::{Deserialize, Serialize};

/// Fields for a user row created through the join flow.
/// Both hashes arrive pre-computed; raw secrets never reach the db layer.
#[derive(Serialize, Deserialize)]
pub struct DBUserCreate {
    pub name: String,
    pub email: Option<String>,
    pub pin_hash: String,
    pub auth_hash: String,
    pub color: String,
}

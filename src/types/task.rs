use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Serialize, Deserialize, Debug)]
pub struct RTaskCreate {
    pub team_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub assignee: Option<Uuid>,
    pub due_at: Option<DateTime<Utc>>,
}

/// Patch payload; absent fields stay unchanged.
#[derive(Serialize, Deserialize, Debug, Default)]
pub struct RTaskUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub completed: Option<bool>,
    pub assignee: Option<Uuid>,
    pub due_at: Option<DateTime<Utc>>,
}

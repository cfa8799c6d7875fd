use crate::pipeline::Stage;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Serialize, Deserialize, Debug)]
pub struct RManuscriptCreate {
    pub team_id: Uuid,
    pub title: String,
    pub author_name: String,
    pub notes: Option<String>,
}

/// Patch payload; absent fields stay unchanged.
#[derive(Serialize, Deserialize, Debug, Default)]
pub struct RManuscriptUpdate {
    pub title: Option<String>,
    pub author_name: Option<String>,
    pub notes: Option<String>,
}

#[derive(Serialize, Debug)]
pub struct ManuscriptRes {
    pub id: Uuid,
    pub team_id: Uuid,
    pub title: String,
    pub author_name: String,
    pub notes: Option<String>,
    pub stage: Stage,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<entity::manuscript::Model> for ManuscriptRes {
    fn from(model: entity::manuscript::Model) -> Self {
        let stage = crate::pipeline::classify_stage(&model.title, model.notes.as_deref());
        ManuscriptRes {
            id: model.id,
            team_id: model.team_id,
            title: model.title,
            author_name: model.author_name,
            notes: model.notes,
            stage,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

#[derive(Serialize, Debug)]
pub struct BoardColumn {
    pub stage: Stage,
    pub manuscripts: Vec<ManuscriptRes>,
}

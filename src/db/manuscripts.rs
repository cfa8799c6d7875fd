use crate::db::postgres_service::PostgresService;
use crate::types::{
    error::AppError,
    manuscript::{RManuscriptCreate, RManuscriptUpdate},
};
use crate::utils::token;
use chrono::Utc;
use entity::manuscript::{ActiveModel as ManuscriptActive, Entity as Manuscript, Model as ManuscriptModel};
use sea_orm::{ActiveModelTrait, ColumnTrait, DbErr, EntityTrait, QueryFilter, QueryOrder, Set};
use uuid::Uuid;

impl PostgresService {
    pub async fn create_manuscript(
        &self,
        payload: RManuscriptCreate,
    ) -> Result<ManuscriptModel, AppError> {
        self.get_team(payload.team_id).await?;
        let now = Utc::now();
        Ok(ManuscriptActive {
            id: Set(token::new_id()),
            team_id: Set(payload.team_id),
            title: Set(payload.title),
            author_name: Set(payload.author_name),
            notes: Set(payload.notes),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&self.db)
        .await?)
    }

    pub async fn get_manuscript(&self, id: Uuid) -> Result<ManuscriptModel, AppError> {
        Ok(Manuscript::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("Manuscript not found".into()))?)
    }

    pub async fn list_manuscripts_for_team(
        &self,
        team_id: Uuid,
    ) -> Result<Vec<ManuscriptModel>, AppError> {
        Ok(Manuscript::find()
            .filter(entity::manuscript::Column::TeamId.eq(team_id))
            .order_by_asc(entity::manuscript::Column::CreatedAt)
            .all(&self.db)
            .await?)
    }

    pub async fn update_manuscript(
        &self,
        id: Uuid,
        patch: RManuscriptUpdate,
    ) -> Result<ManuscriptModel, AppError> {
        let mut am: ManuscriptActive = self.get_manuscript(id).await?.into();
        if let Some(title) = patch.title {
            am.title = Set(title);
        }
        if let Some(author_name) = patch.author_name {
            am.author_name = Set(author_name);
        }
        if let Some(notes) = patch.notes {
            am.notes = Set(Some(notes));
        }
        am.updated_at = Set(Utc::now());
        Ok(am.update(&self.db).await?)
    }

    pub async fn delete_manuscript(&self, id: Uuid) -> Result<(), AppError> {
        let res = Manuscript::delete_by_id(id).exec(&self.db).await?;
        if res.rows_affected == 0 {
            return Err(AppError::NotFound);
        }
        Ok(())
    }
}

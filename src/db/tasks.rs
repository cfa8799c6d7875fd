use crate::db::postgres_service::PostgresService;
use crate::types::{error::AppError, task::{RTaskCreate, RTaskUpdate}};
use crate::utils::token;
use chrono::Utc;
use entity::task::{ActiveModel as TaskActive, Entity as Task, Model as TaskModel};
use sea_orm::{ActiveModelTrait, ColumnTrait, DbErr, EntityTrait, QueryFilter, QueryOrder, Set};
use uuid::Uuid;

impl PostgresService {
    pub async fn create_task(&self, payload: RTaskCreate) -> Result<TaskModel, AppError> {
        self.get_team(payload.team_id).await?;
        let now = Utc::now();
        Ok(TaskActive {
            id: Set(token::new_id()),
            team_id: Set(payload.team_id),
            title: Set(payload.title),
            description: Set(payload.description),
            completed: Set(false),
            assignee: Set(payload.assignee),
            due_at: Set(payload.due_at),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&self.db)
        .await?)
    }

    pub async fn get_task(&self, id: Uuid) -> Result<TaskModel, AppError> {
        Ok(Task::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("Task not found".into()))?)
    }

    pub async fn list_tasks_for_team(&self, team_id: Uuid) -> Result<Vec<TaskModel>, AppError> {
        Ok(Task::find()
            .filter(entity::task::Column::TeamId.eq(team_id))
            .order_by_asc(entity::task::Column::CreatedAt)
            .all(&self.db)
            .await?)
    }

    pub async fn update_task(&self, id: Uuid, patch: RTaskUpdate) -> Result<TaskModel, AppError> {
        let mut am: TaskActive = self.get_task(id).await?.into();
        if let Some(title) = patch.title {
            am.title = Set(title);
        }
        if let Some(description) = patch.description {
            am.description = Set(Some(description));
        }
        if let Some(completed) = patch.completed {
            am.completed = Set(completed);
        }
        if let Some(assignee) = patch.assignee {
            am.assignee = Set(Some(assignee));
        }
        if let Some(due_at) = patch.due_at {
            am.due_at = Set(Some(due_at));
        }
        am.updated_at = Set(Utc::now());
        Ok(am.update(&self.db).await?)
    }

    pub async fn delete_task(&self, id: Uuid) -> Result<(), AppError> {
        let res = Task::delete_by_id(id).exec(&self.db).await?;
        if res.rows_affected == 0 {
            return Err(AppError::NotFound);
        }
        Ok(())
    }
}

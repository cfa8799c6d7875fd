use crate::db::postgres_service::PostgresService;
use crate::types::{error::AppError, user::DBUserCreate};
use crate::utils::token::{self, encrypt, new_token};
use chrono::Utc;
use entity::user::{ActiveModel as UserActive, Entity as User, Model as UserModel};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter, Set, SqlErr,
};
use uuid::Uuid;

impl PostgresService {
    pub async fn user_exists_by_name(&self, name: &str) -> Result<bool, AppError> {
        Ok(User::find()
            .filter(entity::user::Column::Name.eq(name))
            .count(&self.db)
            .await?
            > 0)
    }

    pub async fn get_user_by_id(&self, id: &Uuid) -> Result<UserModel, AppError> {
        Ok(User::find_by_id(*id)
            .one(&self.db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("User does not exist".into()))?)
    }

    pub async fn get_user_by_name(&self, name: &str) -> Result<UserModel, AppError> {
        Ok(User::find()
            .filter(entity::user::Column::Name.eq(name))
            .one(&self.db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("User does not exist".into()))?)
    }

    pub async fn get_user_auth_hash(&self, id: Uuid) -> Result<String, AppError> {
        Ok(self.get_user_by_id(&id).await?.auth_hash)
    }

    /// Issue a fresh bearer secret; the previous token stops verifying.
    pub async fn regenerate_user_token(&self, user_id: &Uuid) -> Result<String, AppError> {
        let user = self.get_user_by_id(user_id).await?;
        let secret = new_token();
        let encrypted = encrypt(&secret).map_err(|_| DbErr::RecordNotUpdated)?;
        let mut am: UserActive = user.into();
        am.auth_hash = Set(encrypted);
        am.updated_at = Set(Utc::now());
        am.update(&self.db).await?;
        Ok(secret)
    }

    /// Direct user creation, outside any invitation. The join flow does not
    /// use this; it creates users inside the acceptance transaction.
    pub async fn create_user(&self, payload: DBUserCreate) -> Result<Uuid, AppError> {
        if self.user_exists_by_name(&payload.name).await? {
            return Err(AppError::NameConflict);
        }
        let uid = token::new_id();
        let now = Utc::now();
        match User::insert(UserActive {
            id: Set(uid),
            name: Set(payload.name),
            email: Set(payload.email),
            pin_hash: Set(payload.pin_hash),
            auth_hash: Set(payload.auth_hash),
            color: Set(payload.color),
            role: Set("user".to_string()),
            created_at: Set(now),
            updated_at: Set(now),
        })
        .exec(&self.db)
        .await
        {
            Ok(_) => Ok(uid),
            Err(err) => {
                if let Some(SqlErr::UniqueConstraintViolation(_)) = err.sql_err() {
                    return Err(AppError::NameConflict);
                }
                Err(err.into())
            }
        }
    }
}

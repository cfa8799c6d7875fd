use actix_web::{web, App};
use chrono::{Duration, Utc};
use copydesk::{
    db::postgres_service::PostgresService,
    types::{team::TeamRole, user::DBUserCreate},
    utils::{credential, token},
};
use sha2::Digest;
use std::sync::Arc;
use uuid::Uuid;

pub struct TestClient {
    pub db: Arc<PostgresService>,
}

impl TestClient {
    pub fn new(db: Arc<PostgresService>) -> Self {
        TestClient { db }
    }

    pub fn create_app(
        &self,
    ) -> actix_web::App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(web::Data::new(Arc::clone(&self.db)))
            .configure(copydesk::routes::configure_routes)
    }

    /// Team plus its bootstrap admin invitation, straight through the db layer.
    #[allow(dead_code)]
    pub async fn create_test_team(&self, slug: &str) -> (entity::team::Model, String) {
        let (team, invitation) = self
            .db
            .create_team(
                format!("Team {}", slug),
                slug.to_string(),
                "#2563eb".to_string(),
                format!("admin@{}.test", slug),
                Utc::now() + Duration::days(7),
            )
            .await
            .expect("Failed to create team");
        (team, invitation.token)
    }

    /// User with a salted PIN credential. The returned id has a valid
    /// auth_hash but no usable bearer secret; regenerate to log in.
    #[allow(dead_code)]
    pub async fn create_test_user(&self, name: &str, pin: &str) -> Uuid {
        let pin_hash = credential::hash_pin(pin).expect("Failed to hash pin");
        let secret = token::new_token();
        let auth_hash = token::encrypt(&secret).expect("Failed to encrypt secret");
        self.db
            .create_user(DBUserCreate {
                name: name.to_string(),
                email: None,
                pin_hash,
                auth_hash,
                color: "#888888".to_string(),
            })
            .await
            .expect("Failed to create user")
    }

    /// User carrying an unsalted legacy credential.
    #[allow(dead_code)]
    pub async fn create_legacy_pin_user(&self, name: &str, pin: &str) -> Uuid {
        let pin_hash = format!("sha256:{}", hex::encode(sha2::Sha256::digest(pin.as_bytes())));
        let secret = token::new_token();
        let auth_hash = token::encrypt(&secret).expect("Failed to encrypt secret");
        self.db
            .create_user(DBUserCreate {
                name: name.to_string(),
                email: None,
                pin_hash,
                auth_hash,
                color: "#888888".to_string(),
            })
            .await
            .expect("Failed to create user")
    }

    #[allow(dead_code)]
    pub async fn bearer_for(&self, user_id: Uuid) -> String {
        let secret = self
            .db
            .regenerate_user_token(&user_id)
            .await
            .expect("Failed to regenerate token");
        token::construct_token(&user_id, &secret)
    }

    /// Team, joined admin, and a bearer token for them.
    #[allow(dead_code)]
    pub async fn seed_team_with_admin(&self, slug: &str) -> (entity::team::Model, Uuid, String) {
        let (team, invite_token) = self.create_test_team(slug).await;
        let admin_id = self.create_test_user(&format!("Admin {}", slug), "4821").await;
        self.db
            .accept_with_existing(&invite_token, admin_id)
            .await
            .expect("Failed to accept bootstrap invitation");
        let bearer = self.bearer_for(admin_id).await;
        (team, admin_id, bearer)
    }

    /// Plain member joined via a fresh invitation.
    #[allow(dead_code)]
    pub async fn seed_member(&self, team_id: Uuid, name: &str) -> (Uuid, String) {
        let invitation = self
            .db
            .create_invitation(
                team_id,
                format!("{}@test.com", name.to_lowercase().replace(' ', ".")),
                TeamRole::Member,
                None,
                Utc::now() + Duration::days(7),
            )
            .await
            .expect("Failed to create invitation");
        let user_id = self.create_test_user(name, "1234").await;
        self.db
            .accept_with_existing(&invitation.token, user_id)
            .await
            .expect("Failed to accept invitation");
        let bearer = self.bearer_for(user_id).await;
        (user_id, bearer)
    }
}

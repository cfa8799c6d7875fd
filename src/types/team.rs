use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Invitable membership roles. Owner is deliberately absent:
/// ownership is never granted through an invitation.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TeamRole {
    Admin,
    Member,
}

impl TeamRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            TeamRole::Admin => "admin",
            TeamRole::Member => "member",
        }
    }

    pub fn parse(value: &str) -> Option<TeamRole> {
        match value {
            "admin" => Some(TeamRole::Admin),
            "member" => Some(TeamRole::Member),
            _ => None,
        }
    }
}

impl fmt::Display for TeamRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub struct RTeamCreate {
    pub name: String,
    pub slug: String,
    pub primary_color: Option<String>,
    /// Address for the bootstrap admin invitation.
    pub admin_email: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct TeamCreateRes {
    pub id: Uuid,
    pub slug: String,
    /// Join token for the team's first admin.
    pub invite_token: String,
    pub message: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct RTeamInvite {
    pub email: String,
    pub role: TeamRole,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct TeamInviteRes {
    pub token: String,
    pub expires_at: DateTime<Utc>,
    pub message: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct InviteListItem {
    pub token: String,
    pub email: String,
    pub role: String,
    pub expires_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct MemberListItem {
    pub user_id: Uuid,
    pub name: String,
    pub color: String,
    pub role: String,
    pub joined_at: DateTime<Utc>,
}

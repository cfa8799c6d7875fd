use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

/// Outcome of looking up a join token. Only `Valid` lets the flow proceed;
/// everything else is terminal until a new invitation is issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InviteStatus {
    Valid,
    NotFound,
    AlreadyAccepted,
    Expired,
    TeamInactive,
}

impl InviteStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            InviteStatus::Valid => "valid",
            InviteStatus::NotFound => "not_found",
            InviteStatus::AlreadyAccepted => "already_accepted",
            InviteStatus::Expired => "expired",
            InviteStatus::TeamInactive => "team_inactive",
        }
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self, InviteStatus::Valid)
    }
}

impl fmt::Display for InviteStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify an invitation lookup. First match wins:
/// not_found, already_accepted, expired, team_inactive, valid.
/// An accepted invitation is never reported as merely expired.
pub fn classify(
    lookup: Option<(&entity::invitation::Model, &entity::team::Model)>,
    now: DateTime<Utc>,
) -> InviteStatus {
    let Some((invitation, team)) = lookup else {
        return InviteStatus::NotFound;
    };
    if invitation.accepted_at.is_some() {
        return InviteStatus::AlreadyAccepted;
    }
    if invitation.expires_at <= now {
        return InviteStatus::Expired;
    }
    if !team.is_active {
        return InviteStatus::TeamInactive;
    }
    InviteStatus::Valid
}

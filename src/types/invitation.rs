use crate::invite::flow::JoinState;
use crate::invite::validator::InviteStatus;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Serialize, Deserialize, Debug)]
pub struct RJoinRegister {
    pub name: String,
    pub pin: String,
    pub pin_confirm: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct RJoinLogin {
    pub name: String,
    pub pin: String,
}

#[derive(Serialize, Debug)]
pub struct JoinTeamInfo {
    pub name: String,
    pub slug: String,
    pub primary_color: String,
}

#[derive(Serialize, Debug)]
pub struct JoinInvitationInfo {
    pub email: String,
    pub role: String,
    pub team: JoinTeamInfo,
}

#[derive(Serialize, Debug)]
pub struct JoinLookupRes {
    pub state: JoinState,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<InviteStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invitation: Option<JoinInvitationInfo>,
}

#[derive(Serialize, Debug)]
pub struct JoinCompleteRes {
    pub state: JoinState,
    pub user_id: Uuid,
    pub access_token: String,
    pub message: String,
}

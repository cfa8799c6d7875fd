use super::validator::InviteStatus;
use serde::Serialize;

/// Client-facing join flow:
/// `loading -> invalid | account`, `account <-> existing_user`,
/// `account | existing_user -> complete`.
/// `invalid` and `complete` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum JoinState {
    Loading,
    Invalid,
    Account,
    ExistingUser,
    Complete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinEvent {
    Resolved(InviteStatus),
    UseExisting,
    UseNewAccount,
    Accepted,
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("no transition from {from:?} on {event:?}")]
pub struct TransitionError {
    pub from: JoinState,
    pub event: JoinEvent,
}

impl JoinState {
    pub fn apply(self, event: JoinEvent) -> Result<JoinState, TransitionError> {
        match (self, event) {
            (JoinState::Loading, JoinEvent::Resolved(InviteStatus::Valid)) => Ok(JoinState::Account),
            (JoinState::Loading, JoinEvent::Resolved(_)) => Ok(JoinState::Invalid),
            (JoinState::Account, JoinEvent::UseExisting) => Ok(JoinState::ExistingUser),
            (JoinState::ExistingUser, JoinEvent::UseNewAccount) => Ok(JoinState::Account),
            (JoinState::Account, JoinEvent::Accepted)
            | (JoinState::ExistingUser, JoinEvent::Accepted) => Ok(JoinState::Complete),
            (from, event) => Err(TransitionError { from, event }),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            JoinState::Loading => "loading",
            JoinState::Invalid => "invalid",
            JoinState::Account => "account",
            JoinState::ExistingUser => "existing_user",
            JoinState::Complete => "complete",
        }
    }
}

/// State presented to a client that has just opened a join link.
pub fn resolve(status: InviteStatus) -> JoinState {
    match JoinState::Loading.apply(JoinEvent::Resolved(status)) {
        Ok(state) => state,
        Err(_) => JoinState::Invalid,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_lookup_resolves_to_account() {
        assert_eq!(resolve(InviteStatus::Valid), JoinState::Account);
    }

    #[test]
    fn terminal_lookups_resolve_to_invalid() {
        for status in [
            InviteStatus::NotFound,
            InviteStatus::AlreadyAccepted,
            InviteStatus::Expired,
            InviteStatus::TeamInactive,
        ] {
            assert_eq!(resolve(status), JoinState::Invalid);
        }
    }

    #[test]
    fn account_and_existing_user_toggle() {
        let state = JoinState::Account.apply(JoinEvent::UseExisting).unwrap();
        assert_eq!(state, JoinState::ExistingUser);
        let state = state.apply(JoinEvent::UseNewAccount).unwrap();
        assert_eq!(state, JoinState::Account);
    }

    #[test]
    fn both_paths_reach_complete() {
        assert_eq!(
            JoinState::Account.apply(JoinEvent::Accepted).unwrap(),
            JoinState::Complete
        );
        assert_eq!(
            JoinState::ExistingUser.apply(JoinEvent::Accepted).unwrap(),
            JoinState::Complete
        );
    }

    #[test]
    fn terminal_states_reject_all_events() {
        for state in [JoinState::Invalid, JoinState::Complete] {
            for event in [
                JoinEvent::Resolved(InviteStatus::Valid),
                JoinEvent::UseExisting,
                JoinEvent::UseNewAccount,
                JoinEvent::Accepted,
            ] {
                assert!(state.apply(event).is_err());
            }
        }
    }

    #[test]
    fn loading_only_accepts_resolution() {
        for event in [JoinEvent::UseExisting, JoinEvent::UseNewAccount, JoinEvent::Accepted] {
            assert!(JoinState::Loading.apply(event).is_err());
        }
    }
}

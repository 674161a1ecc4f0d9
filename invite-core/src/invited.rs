//! Users that already received an invitation.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Invitation state of an existing collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InviteStatus {
    Invited,
    Joined,
}

impl InviteStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Invited => "INVITED",
            Self::Joined => "JOINED",
        }
    }
}

impl fmt::Display for InviteStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An already-invited collaborator. Display-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvitedUser {
    pub email: String,
    pub status: InviteStatus,
}

impl InvitedUser {
    #[must_use]
    pub fn new(email: impl Into<String>, status: InviteStatus) -> Self {
        Self {
            email: email.into(),
            status,
        }
    }
}

/// The seed list shown when nothing else is configured.
#[must_use]
pub fn seed_invited_users() -> Vec<InvitedUser> {
    [
        InviteStatus::Invited,
        InviteStatus::Invited,
        InviteStatus::Joined,
        InviteStatus::Joined,
        InviteStatus::Joined,
    ]
    .into_iter()
    .map(|status| InvitedUser::new("bill@opal.co", status))
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_displays_uppercase() {
        assert_eq!(InviteStatus::Invited.to_string(), "INVITED");
        assert_eq!(InviteStatus::Joined.to_string(), "JOINED");
    }

    #[test]
    fn seed_has_two_invited_then_three_joined() {
        let seed = seed_invited_users();
        let statuses: Vec<_> = seed.iter().map(|user| user.status).collect();
        assert_eq!(
            statuses,
            vec![
                InviteStatus::Invited,
                InviteStatus::Invited,
                InviteStatus::Joined,
                InviteStatus::Joined,
                InviteStatus::Joined,
            ]
        );
        assert!(seed.iter().all(|user| user.email == "bill@opal.co"));
    }

    #[test]
    fn deserialize_status_from_toml() {
        #[derive(Deserialize)]
        struct Wrapper {
            user: InvitedUser,
        }

        let wrapper: Wrapper = toml::from_str(
            r#"
[user]
email = "ana@example.com"
status = "JOINED"
"#,
        )
        .expect("should deserialize");
        assert_eq!(wrapper.user, InvitedUser::new("ana@example.com", InviteStatus::Joined));
    }
}

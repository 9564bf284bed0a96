//! Signed-in user model and session state.
//!
//! The wire shape follows the authentication service: `_id`, `fullname`, `role`
//! and a nested `profile` object with `bio` and `profilePhoto`. Unknown fields
//! (email, phone number, skills, resume) are ignored.

use serde::{Deserialize, Serialize};

/// Role attached to a signed-in account.
///
/// Any value other than `student` or `recruiter` deserializes to
/// [`Role::Unknown`] and is treated as the least-privileged role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Recruiter,
    #[serde(other)]
    Unknown,
}

impl Role {
    /// Display label used by the account popover.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Student => "Student",
            Self::Recruiter => "Recruiter",
            Self::Unknown => "Member",
        }
    }
}

/// Optional profile details shown in the account popover and profile page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default, rename = "profilePhoto")]
    pub photo: Option<String>,
}

/// An authenticated user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "fullname")]
    pub display_name: String,
    pub role: Role,
    #[serde(default)]
    pub profile: Profile,
}

impl User {
    pub fn new(id: impl Into<String>, display_name: impl Into<String>, role: Role) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            role,
            profile: Profile::default(),
        }
    }
}

/// Exactly one of these holds at any time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SessionState {
    #[default]
    Anonymous,
    Authenticated(User),
}

impl SessionState {
    #[must_use]
    pub const fn user(&self) -> Option<&User> {
        match self {
            Self::Anonymous => None,
            Self::Authenticated(user) => Some(user),
        }
    }

    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }

    /// Role of the signed-in user, `None` when anonymous.
    #[must_use]
    pub fn role(&self) -> Option<Role> {
        self.user().map(|user| user.role)
    }
}

impl From<Option<User>> for SessionState {
    fn from(user: Option<User>) -> Self {
        user.map_or(Self::Anonymous, Self::Authenticated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_deserializes_from_service_payload() {
        let json = r#"{
            "_id": "665f1c",
            "fullname": "Asha Verma",
            "email": "asha@example.com",
            "phoneNumber": 9876543210,
            "role": "student",
            "profile": { "bio": "Backend dev", "profilePhoto": "https://cdn/asha.png", "skills": ["rust"] }
        }"#;

        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.id, "665f1c");
        assert_eq!(user.display_name, "Asha Verma");
        assert_eq!(user.role, Role::Student);
        assert_eq!(user.profile.bio.as_deref(), Some("Backend dev"));
        assert_eq!(user.profile.photo.as_deref(), Some("https://cdn/asha.png"));
    }

    #[test]
    fn unrecognized_role_becomes_unknown() {
        let json = r#"{ "_id": "1", "fullname": "E", "role": "employer" }"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.role, Role::Unknown);
        assert_eq!(user.profile, Profile::default());
    }

    #[test]
    fn session_state_from_option() {
        assert_eq!(SessionState::from(None), SessionState::Anonymous);

        let user = User::new("7", "Ravi", Role::Recruiter);
        let state = SessionState::from(Some(user.clone()));
        assert!(state.is_authenticated());
        assert_eq!(state.user(), Some(&user));
        assert_eq!(state.role(), Some(Role::Recruiter));
    }
}

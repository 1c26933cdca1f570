use gloo_timers::future::TimeoutFuture;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use yew::prelude::*;

use crate::storage;

pub const IDENTITY_STORAGE_KEY: &str = "cortex-user";
pub const MIN_PASSWORD_LEN: usize = 6;
/// Fake round trip for login, register and logout.
pub const MOCK_LATENCY_MS: u32 = 1_000;

const MOCK_IDENTITY_ID: &str = "1";
const AVATAR_BASE_URL: &str = "https://api.dicebear.com/7.x/initials/svg?seed=";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("Please enter your email address.")]
    MissingEmail,
    #[error("Password must be at least {min} characters.")]
    PasswordTooShort { min: usize },
    #[error("Please enter your name.")]
    MissingName,
}

/// The signed-in user. Stored as JSON exactly as it is held in memory.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Identity {
    pub id: String,
    pub email: String,
    pub name: String,
    #[serde(default)]
    pub avatar: Option<String>,
}

fn avatar_url(seed: &str) -> String {
    format!("{}{}", AVATAR_BASE_URL, urlencoding::encode(seed))
}

fn check_credentials(email: &str, password: &str) -> Result<(), SessionError> {
    if email.is_empty() {
        return Err(SessionError::MissingEmail);
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(SessionError::PasswordTooShort { min: MIN_PASSWORD_LEN });
    }
    Ok(())
}

impl Identity {
    /// Any non-empty email with a long enough password is accepted. The
    /// display name is the part of the email before the `@`.
    pub fn for_login(email: &str, password: &str) -> Result<Self, SessionError> {
        check_credentials(email, password)?;
        let name = email.split('@').next().unwrap_or(email);
        Ok(Self {
            id: MOCK_IDENTITY_ID.to_string(),
            email: email.to_string(),
            name: name.to_string(),
            avatar: Some(avatar_url(email)),
        })
    }

    pub fn for_registration(email: &str, password: &str, name: &str) -> Result<Self, SessionError> {
        check_credentials(email, password)?;
        if name.is_empty() {
            return Err(SessionError::MissingName);
        }
        Ok(Self {
            id: MOCK_IDENTITY_ID.to_string(),
            email: email.to_string(),
            name: name.to_string(),
            avatar: Some(avatar_url(name)),
        })
    }

    pub fn avatar_or_default(&self) -> String {
        self.avatar.clone().unwrap_or_else(|| avatar_url(&self.name))
    }
}

pub fn decode_identity(raw: &str) -> Option<Identity> {
    match serde_json::from_str(raw) {
        Ok(identity) => Some(identity),
        Err(e) => {
            warn!("Ignoring unreadable stored identity: {}", e);
            None
        }
    }
}

pub fn load_identity() -> Option<Identity> {
    storage::get_item(IDENTITY_STORAGE_KEY).and_then(|raw| decode_identity(&raw))
}

fn persist_identity(identity: &Identity) {
    match serde_json::to_string(identity) {
        Ok(raw) => storage::set_item(IDENTITY_STORAGE_KEY, &raw),
        Err(e) => warn!("Could not serialize identity: {}", e),
    }
}

/// Handle to the current session, handed down through a context instead of
/// living in a global.
#[derive(Clone, PartialEq)]
pub struct SessionHandle {
    identity: UseStateHandle<Option<Identity>>,
}

impl SessionHandle {
    pub fn identity(&self) -> Option<&Identity> {
        (*self.identity).as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.identity.is_some()
    }

    fn establish(&self, identity: Identity) {
        persist_identity(&identity);
        self.identity.set(Some(identity));
    }

    pub async fn login(self, email: String, password: String) -> Result<Identity, SessionError> {
        TimeoutFuture::new(MOCK_LATENCY_MS).await;
        let identity = Identity::for_login(&email, &password)?;
        info!("Signed in as {}", identity.email);
        self.establish(identity.clone());
        Ok(identity)
    }

    pub async fn register(self, email: String, password: String, name: String) -> Result<Identity, SessionError> {
        TimeoutFuture::new(MOCK_LATENCY_MS).await;
        let identity = Identity::for_registration(&email, &password, &name)?;
        info!("Registered {}", identity.email);
        self.establish(identity.clone());
        Ok(identity)
    }

    pub async fn logout(self) {
        TimeoutFuture::new(MOCK_LATENCY_MS).await;
        storage::remove_item(IDENTITY_STORAGE_KEY);
        self.identity.set(None);
        info!("Signed out");
    }
}

#[derive(Properties, PartialEq)]
pub struct SessionProviderProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(SessionProvider)]
pub fn session_provider(props: &SessionProviderProps) -> Html {
    let identity = use_state(load_identity);
    let session = SessionHandle { identity };

    html! {
        <ContextProvider<SessionHandle> context={session}>
            { for props.children.iter() }
        </ContextProvider<SessionHandle>>
    }
}

#[hook]
pub fn use_session() -> SessionHandle {
    use_context::<SessionHandle>().expect("use_session called outside of SessionProvider")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_passwords_are_rejected() {
        for password in ["", "a", "abcde", "12345"] {
            assert_eq!(
                Identity::for_login("jane@example.com", password),
                Err(SessionError::PasswordTooShort { min: MIN_PASSWORD_LEN })
            );
        }
    }

    #[test]
    fn long_enough_password_signs_in_with_matching_email() {
        for password in ["abcdef", "correct horse battery staple"] {
            let identity = Identity::for_login("jane@example.com", password).unwrap();
            assert_eq!(identity.email, "jane@example.com");
            assert_eq!(identity.name, "jane");
        }
    }

    #[test]
    fn password_length_counts_characters_not_bytes() {
        assert!(Identity::for_login("a@b.c", "ééééé").is_err());
        assert!(Identity::for_login("a@b.c", "éééééé").is_ok());
    }

    #[test]
    fn email_is_required() {
        assert_eq!(Identity::for_login("", "abcdef"), Err(SessionError::MissingEmail));
    }

    #[test]
    fn registration_requires_a_name() {
        assert_eq!(
            Identity::for_registration("jane@example.com", "abcdef", ""),
            Err(SessionError::MissingName)
        );
        let identity = Identity::for_registration("jane@example.com", "abcdef", "Jane Doe").unwrap();
        assert_eq!(identity.name, "Jane Doe");
        assert_eq!(identity.avatar.as_deref(), Some("https://api.dicebear.com/7.x/initials/svg?seed=Jane%20Doe"));
    }

    #[test]
    fn registration_checks_password_before_name() {
        assert_eq!(
            Identity::for_registration("jane@example.com", "abc", ""),
            Err(SessionError::PasswordTooShort { min: MIN_PASSWORD_LEN })
        );
    }

    #[test]
    fn stored_identity_survives_serialization() {
        let identity = Identity::for_login("jane@example.com", "abcdef").unwrap();
        let raw = serde_json::to_string(&identity).unwrap();
        assert_eq!(decode_identity(&raw), Some(identity));
    }

    #[test]
    fn identity_stored_without_avatar_still_loads() {
        let identity = decode_identity(r#"{"id":"1","email":"a@b.c","name":"a"}"#).unwrap();
        assert_eq!(identity.avatar, None);
        assert!(identity.avatar_or_default().ends_with("seed=a"));
    }

    #[test]
    fn corrupt_storage_is_ignored() {
        assert_eq!(decode_identity("{not json"), None);
    }
}

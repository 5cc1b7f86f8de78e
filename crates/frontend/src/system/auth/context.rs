use contracts::system::auth::UserInfo;
use leptos::prelude::*;

use super::storage;

/// Authenticated session shared through context. Explicit lifecycle:
/// `init` restores the persisted credential at app start, `login` persists a
/// fresh one, `logout` tears everything down.
#[derive(Clone, Copy)]
pub struct Session {
    pub user: RwSignal<Option<UserInfo>>,
    pub token: RwSignal<Option<String>>,
}

impl Session {
    pub fn init() -> Self {
        let (user, token) = match (storage::get_user(), storage::get_token()) {
            (Some(user), Some(token)) => (Some(user), Some(token)),
            // A half-persisted session is useless; start logged out.
            _ => (None, None),
        };
        Self {
            user: RwSignal::new(user),
            token: RwSignal::new(token),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.get().is_some()
    }

    pub fn login(&self, token: String, user: UserInfo) {
        storage::save_token(&token);
        storage::save_user(&user);
        self.token.set(Some(token));
        self.user.set(Some(user));
    }

    pub fn logout(&self) {
        storage::clear_session();
        self.token.set(None);
        self.user.set(None);
    }
}

/// Hook to access the session
pub fn use_session() -> Session {
    use_context::<Session>().expect("Session not found in component tree")
}

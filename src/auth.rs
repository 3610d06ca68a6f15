/// Signed-in session shared across pages.
///
/// The token and user mirror what the backend returned at login; nothing here
/// is authoritative. The pair is persisted through a [`SessionStore`] so a
/// reload keeps the user signed in.
use crate::api::ApiClient;
use crate::config::AppConfig;
use crate::models::user::User;
use crate::storage::{clear_session, load_session, save_session, Session, SessionStore};
use leptos::logging::{error, log};
use leptos::*;
use std::rc::Rc;

#[derive(Clone, Copy)]
pub struct AuthContext {
    pub user: RwSignal<Option<User>>,
    pub token: RwSignal<Option<String>>,
    /// Set once the stored session has been looked at.
    pub ready: RwSignal<bool>,
    config: StoredValue<AppConfig>,
    store: StoredValue<Rc<dyn SessionStore>>,
}

impl AuthContext {
    pub fn new(config: AppConfig, store: Rc<dyn SessionStore>) -> Self {
        Self {
            user: create_rw_signal(None),
            token: create_rw_signal(None),
            ready: create_rw_signal(false),
            config: store_value(config),
            store: store_value(store),
        }
    }

    pub fn restore(&self) {
        if let Some(session) = self.store.with_value(|store| load_session(store.as_ref())) {
            log!("[AUTH] Restored session for {}", session.user.email);
            self.token.set(Some(session.token));
            self.user.set(Some(session.user));
        }
        self.ready.set(true);
    }

    pub fn login(&self, token: String, user: User) {
        let session = Session { token, user };
        if let Err(err) = self.store.with_value(|store| save_session(store.as_ref(), &session)) {
            error!("[AUTH] Could not persist session: {}", err);
        }
        self.token.set(Some(session.token));
        self.user.set(Some(session.user));
    }

    pub fn logout(&self) {
        if let Err(err) = self.store.with_value(|store| clear_session(store.as_ref())) {
            error!("[AUTH] Could not clear stored session: {}", err);
        }
        self.token.set(None);
        self.user.set(None);
    }

    pub fn is_signed_in(&self) -> bool {
        self.token.with(Option::is_some)
    }

    /// A client carrying the current bearer token. Does not subscribe to the token.
    pub fn client(&self) -> ApiClient {
        self.config
            .with_value(ApiClient::new)
            .with_token(self.token.get_untracked())
    }
}

pub fn provide_auth_context(config: AppConfig, store: Rc<dyn SessionStore>) -> AuthContext {
    let auth = AuthContext::new(config, store);
    provide_context(auth);
    auth
}

pub fn use_auth() -> AuthContext {
    expect_context::<AuthContext>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{MemoryStorage, TOKEN_KEY, USER_KEY};

    fn kiran() -> User {
        User {
            id: "u1".into(),
            name: "Kiran".into(),
            email: "kiran@example.com".into(),
        }
    }

    fn config() -> AppConfig {
        AppConfig::with_backend("https://api.example.com")
    }

    #[test]
    fn test_login_persists_and_logout_clears() {
        let runtime = create_runtime();
        let store = MemoryStorage::default();
        let auth = AuthContext::new(config(), Rc::new(store.clone()));

        assert!(!auth.is_signed_in());
        auth.login("tok".into(), kiran());
        assert!(auth.is_signed_in());
        assert_eq!(auth.user.get_untracked(), Some(kiran()));
        assert_eq!(store.get(TOKEN_KEY).as_deref(), Some("tok"));
        assert_eq!(auth.client().bearer().as_deref(), Some("Bearer tok"));

        auth.logout();
        assert!(!auth.is_signed_in());
        assert_eq!(auth.user.get_untracked(), None);
        assert_eq!(store.get(USER_KEY), None);
        assert_eq!(auth.client().bearer(), None);

        runtime.dispose();
    }

    #[test]
    fn test_restore_reads_previous_session() {
        let runtime = create_runtime();
        let store = MemoryStorage::default();
        AuthContext::new(config(), Rc::new(store.clone())).login("tok".into(), kiran());

        let reloaded = AuthContext::new(config(), Rc::new(store));
        assert!(!reloaded.ready.get_untracked());
        reloaded.restore();
        assert!(reloaded.ready.get_untracked());
        assert_eq!(reloaded.token.get_untracked().as_deref(), Some("tok"));
        assert_eq!(reloaded.user.get_untracked(), Some(kiran()));

        runtime.dispose();
    }

    #[test]
    fn test_restore_without_session_still_becomes_ready() {
        let runtime = create_runtime();
        let auth = AuthContext::new(config(), Rc::new(MemoryStorage::default()));
        auth.restore();
        assert!(auth.ready.get_untracked());
        assert!(!auth.is_signed_in());
        runtime.dispose();
    }
}

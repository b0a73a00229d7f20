use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio::sync::watch;

use crate::application::write_queue::WriteQueue;
use crate::domain::auth::errors::AuthError;
use crate::domain::auth::model::{DemoCredentials, User};
use crate::domain::auth::repository::SessionRepository;
use crate::domain::logger::Logger;

#[derive(Default)]
struct AuthState {
    user: Option<User>,
    is_initialized: bool,
}

/// In-memory view of the current session. Authentication is simulated:
/// one fixed credential pair, no hashing, no token, no expiry.
pub struct AuthStore {
    repository: Arc<dyn SessionRepository>,
    logger: Arc<dyn Logger>,
    credentials: DemoCredentials,
    queue: WriteQueue,
    state: Mutex<AuthState>,
    changes: watch::Sender<u64>,
}

impl AuthStore {
    pub fn new(
        repository: Arc<dyn SessionRepository>,
        logger: Arc<dyn Logger>,
        credentials: DemoCredentials,
    ) -> Self {
        let queue = WriteQueue::spawn("auth", Arc::clone(&logger));
        Self {
            repository,
            logger,
            credentials,
            queue,
            state: Mutex::new(AuthState::default()),
            changes: watch::Sender::new(0),
        }
    }

    /// Loads the persisted session, if any. Idempotent; fails open to
    /// "no user".
    pub async fn initialize(&self) {
        if self.state().is_initialized {
            return;
        }

        match self.repository.get_current().await {
            Ok(user) => {
                let mut state = self.state();
                if !state.is_initialized {
                    state.user = user;
                    state.is_initialized = true;
                }
            }
            Err(e) => {
                self.logger.error(&format!("Failed to initialize auth: {}", e));
                self.state().is_initialized = true;
            }
        }
        self.notify();
    }

    /// On a credential match, synthesizes the session user, sets memory
    /// and enqueues the persisted upsert. A mismatch has no side effects.
    pub fn login(&self, email: &str, password: &str) -> Result<User, AuthError> {
        if !self.credentials.matches(email, password) {
            self.logger.warn(&format!("Rejected login for {}", email));
            return Err(AuthError::InvalidCredentials);
        }

        let user = User::from_login(email);
        self.state().user = Some(user.clone());

        self.logger.info(&format!("User {} logged in", user.name));

        let repository = Arc::clone(&self.repository);
        let persisted = user.clone();
        self.queue
            .enqueue(async move { repository.set_current(&persisted).await });
        self.notify();
        Ok(user)
    }

    /// Clears memory synchronously; the persisted delete is fire-and-forget.
    pub fn logout(&self) {
        self.state().user = None;

        let repository = Arc::clone(&self.repository);
        self.queue.enqueue(async move { repository.clear().await });
        self.notify();
    }

    pub fn is_logged_in(&self) -> bool {
        self.state().user.is_some()
    }

    pub fn current_user(&self) -> Option<User> {
        self.state().user.clone()
    }

    pub fn is_initialized(&self) -> bool {
        self.state().is_initialized
    }

    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.changes.subscribe()
    }

    /// Resolves once every previously issued persistence write has landed.
    pub async fn flush(&self) {
        self.queue.flush().await;
    }

    fn state(&self) -> MutexGuard<'_, AuthState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn notify(&self) {
        self.changes.send_modify(|version| *version += 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use mockall::mock;

    mock! {
        pub SessionRepo {}

        #[async_trait::async_trait]
        impl SessionRepository for SessionRepo {
            async fn get_current(&self) -> Result<Option<User>, RepositoryError>;
            async fn set_current(&self, user: &User) -> Result<(), RepositoryError>;
            async fn clear(&self) -> Result<(), RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn store_with_saving_repo() -> AuthStore {
        let mut repo = MockSessionRepo::new();
        repo.expect_set_current().returning(|_| Ok(()));
        repo.expect_clear().returning(|| Ok(()));
        AuthStore::new(Arc::new(repo), mock_logger(), DemoCredentials::default())
    }

    #[tokio::test]
    async fn should_log_in_with_demo_credentials() {
        let store = store_with_saving_repo();

        let user = store.login("demo@megamart.com", "demo123").unwrap();
        store.flush().await;

        assert!(store.is_logged_in());
        assert_eq!(user.name, "demo");
        assert_eq!(store.current_user().unwrap().email, "demo@megamart.com");
    }

    #[tokio::test]
    async fn should_reject_wrong_credentials_without_side_effects() {
        // No set_current expectation: a mismatch must not reach storage.
        let repo = MockSessionRepo::new();
        let store = AuthStore::new(Arc::new(repo), mock_logger(), DemoCredentials::default());

        let result = store.login("x@x.com", "wrong");
        store.flush().await;

        assert!(matches!(result.unwrap_err(), AuthError::InvalidCredentials));
        assert!(!store.is_logged_in());
        assert!(store.current_user().is_none());
    }

    #[tokio::test]
    async fn should_keep_existing_user_after_failed_login() {
        let store = store_with_saving_repo();
        store.login("demo@megamart.com", "demo123").unwrap();

        let result = store.login("demo@megamart.com", "wrong");

        assert!(result.is_err());
        assert!(store.is_logged_in());
    }

    #[tokio::test]
    async fn should_clear_session_on_logout() {
        let store = store_with_saving_repo();
        store.login("demo@megamart.com", "demo123").unwrap();

        store.logout();
        store.flush().await;

        assert!(!store.is_logged_in());
        assert!(store.current_user().is_none());
    }

    #[tokio::test]
    async fn should_restore_persisted_session_once() {
        let persisted = User::from_repository(
            "user-1700000000000".to_string(),
            "demo@megamart.com".to_string(),
            "demo".to_string(),
            chrono::Utc::now(),
        );

        let mut repo = MockSessionRepo::new();
        let user = persisted.clone();
        repo.expect_get_current()
            .times(1)
            .returning(move || Ok(Some(user.clone())));

        let store = AuthStore::new(Arc::new(repo), mock_logger(), DemoCredentials::default());
        store.initialize().await;
        store.initialize().await;

        assert!(store.is_initialized());
        assert_eq!(store.current_user(), Some(persisted));
    }

    #[tokio::test]
    async fn should_fail_open_to_no_user() {
        let mut repo = MockSessionRepo::new();
        repo.expect_get_current()
            .returning(|| Err(RepositoryError::DatabaseError));

        let store = AuthStore::new(Arc::new(repo), mock_logger(), DemoCredentials::default());
        store.initialize().await;

        assert!(store.is_initialized());
        assert!(!store.is_logged_in());
    }
}

use dioxus::prelude::*;

use crate::{
    client::{
        api::ApiClient,
        error::ApiError,
        session::{Identity, Session, SessionStore},
    },
    model::user::{RegisterDto, UserDto},
};

/// Reactive session shared with every screen through context
///
/// Screens read `state`; only the methods below write it, and each write
/// replaces the whole [`Session`] with one produced by the [`SessionStore`].
#[derive(Clone)]
pub struct SessionContext {
    pub state: Store<Session>,
    store: SessionStore,
}

impl SessionContext {
    pub fn new(state: Store<Session>, store: SessionStore) -> Self {
        Self { state, store }
    }

    /// Copy of the current session
    pub fn snapshot(&self) -> Session {
        self.state.read().clone()
    }

    pub fn api(&self) -> ApiClient {
        self.store.api().clone()
    }

    pub fn restore(&mut self) {
        let session = self.store.restore();
        self.replace(session);
    }

    pub async fn login(&mut self, email: &str, password: &str) -> Result<(), ApiError> {
        let session = self.store.login(email, password).await?;
        self.replace(session);
        Ok(())
    }

    pub async fn register(&self, profile: &RegisterDto) -> Result<Identity, ApiError> {
        self.store.register(profile).await
    }

    pub fn logout(&mut self) {
        let session = self.store.logout();
        self.replace(session);
    }

    pub async fn impersonate(&mut self, target: &UserDto) -> Result<(), ApiError> {
        let current = self.snapshot();
        let session = self.store.impersonate(&current, target).await?;
        self.replace(session);
        Ok(())
    }

    fn replace(&mut self, session: Session) {
        *self.state.write() = session;
    }
}

/// The session context installed by [`App`](crate::client::App)
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>()
}

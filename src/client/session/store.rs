use std::rc::Rc;

use dioxus_logger::tracing;

use crate::{
    client::{
        api::{self, ApiClient},
        error::ApiError,
        session::{storage::KeyValueStorage, Credential, Identity, Session},
    },
    model::user::{LoginDto, RegisterDto, Role, TokenDto, UserDto},
};

pub const CREDENTIAL_KEY: &str = "chuflay:token";
pub const IDENTITY_KEY: &str = "chuflay:user";

/// Owner of "who is acting": the persisted pair and the outbound credential
///
/// Every operation returns the complete next [`Session`] for the caller to
/// install, so the reactive context holding it stays the only writer.
#[derive(Clone)]
pub struct SessionStore {
    api: ApiClient,
    storage: Rc<dyn KeyValueStorage>,
}

impl SessionStore {
    pub fn new(api: ApiClient, storage: Rc<dyn KeyValueStorage>) -> Self {
        Self { api, storage }
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    /// Restores the persisted session at startup
    ///
    /// Installs the stored credential when both entries are present and well
    /// formed, otherwise erases whatever was stored. Either way the credential
    /// slot is armed and the returned session is resolved.
    pub fn restore(&self) -> Session {
        match self.read_persisted() {
            Some((identity, credential)) => {
                tracing::debug!(user_id = %identity.id, "Restored persisted session");

                self.api.attach(credential.clone());
                Session::authenticated(identity, credential)
            }
            None => {
                self.api.detach();
                Session::anonymous()
            }
        }
    }

    /// Logs in with email and password
    ///
    /// # Returns
    /// - `Ok(Session)`: The new authenticated session, already persisted and attached
    /// - `Err(ApiError::Validation)`: Email or password left blank, nothing was sent
    /// - `Err(ApiError)`: The exchange failed, storage and credential are untouched
    pub async fn login(&self, email: &str, password: &str) -> Result<Session, ApiError> {
        let email = email.trim();
        if email.is_empty() || password.is_empty() {
            return Err(ApiError::Validation(
                "Introduce tu correo y contraseña".to_string(),
            ));
        }

        let token = api::auth::login(
            &self.api,
            &LoginDto {
                email: email.to_string(),
                password: password.to_string(),
            },
        )
        .await?;

        let session = self.install(token)?;

        if let Some(identity) = session.identity() {
            tracing::info!(user_id = %identity.id, role = %identity.role.as_str(), "User logged in");
        }

        Ok(session)
    }

    /// Registers an account without logging it in
    ///
    /// Only required fields are checked here, role and password rules belong to the API.
    pub async fn register(&self, profile: &RegisterDto) -> Result<Identity, ApiError> {
        validate_registration(profile)?;

        let user = api::auth::register(&self.api, profile).await?;

        tracing::info!(user_id = %user.id, role = %user.role.as_str(), "Registered new account");

        Ok(user)
    }

    /// Clears the persisted pair, the in-memory session and the outbound credential
    ///
    /// Safe to call when nobody is logged in.
    pub fn logout(&self) -> Session {
        self.erase_persisted();
        self.api.detach();

        tracing::info!("User logged out");

        Session::anonymous()
    }

    /// Replaces the session with one acting as `target`
    ///
    /// Only a global administrator may do this. The request and its outcome
    /// are logged as an audit trail, the API must still authorize the call.
    pub async fn impersonate(&self, current: &Session, target: &UserDto) -> Result<Session, ApiError> {
        let Some(actor) = current.identity() else {
            return Err(ApiError::Validation(
                "Debes iniciar sesión para suplantar a un usuario".to_string(),
            ));
        };

        if actor.role != Role::GlobalAdmin {
            return Err(ApiError::Validation(
                "Solo el administrador global puede suplantar usuarios".to_string(),
            ));
        }

        if actor.id == target.id {
            return Err(ApiError::Validation(
                "No puedes suplantar tu propia cuenta".to_string(),
            ));
        }

        tracing::warn!(
            actor_id = %actor.id,
            actor_email = %actor.email,
            target_id = %target.id,
            target_email = %target.email,
            "Impersonation requested"
        );

        let token = api::global::impersonate_user(&self.api, &target.id).await?;

        let session = self.install(token)?;

        tracing::warn!(
            actor_id = %actor.id,
            target_id = %target.id,
            "Impersonation started, session now acts as the target account"
        );

        Ok(session)
    }

    /// Persists and attaches a credential exchange result
    fn install(&self, token: TokenDto) -> Result<Session, ApiError> {
        let credential = Credential::new(&token.access_token).ok_or_else(|| {
            ApiError::InvalidResponse("the API returned an empty access token".to_string())
        })?;

        self.persist(&token.user, &credential);
        self.api.attach(credential.clone());

        Ok(Session::authenticated(token.user, credential))
    }

    fn read_persisted(&self) -> Option<(Identity, Credential)> {
        let credential = self.storage.get(CREDENTIAL_KEY);
        let identity = self.storage.get(IDENTITY_KEY);

        let (credential, identity) = match (credential, identity) {
            (None, None) => return None,
            (Some(credential), Some(identity)) => (credential, identity),
            _ => {
                tracing::warn!("Discarding persisted session with a missing entry");
                self.erase_persisted();
                return None;
            }
        };

        let Some(credential) = Credential::new(&credential) else {
            tracing::warn!("Discarding persisted session with a blank credential");
            self.erase_persisted();
            return None;
        };

        match serde_json::from_str::<Identity>(&identity) {
            Ok(identity) => Some((identity, credential)),
            Err(e) => {
                tracing::warn!("Discarding persisted session with a malformed identity: {}", e);
                self.erase_persisted();
                None
            }
        }
    }

    /// A failed write leaves the session usable for this visit only
    fn persist(&self, identity: &Identity, credential: &Credential) {
        let identity = match serde_json::to_string(identity) {
            Ok(identity) => identity,
            Err(e) => {
                tracing::warn!("Failed to serialize identity for persistence: {}", e);
                return;
            }
        };

        let result = self
            .storage
            .set(CREDENTIAL_KEY, credential.as_str())
            .and_then(|_| self.storage.set(IDENTITY_KEY, &identity));

        if let Err(e) = result {
            tracing::warn!("Session will not survive a reload: {}", e);
            self.erase_persisted();
        }
    }

    fn erase_persisted(&self) {
        for key in [CREDENTIAL_KEY, IDENTITY_KEY] {
            if let Err(e) = self.storage.remove(key) {
                tracing::warn!("Failed to erase {:?} from durable storage: {}", key, e);
            }
        }
    }
}

fn validate_registration(profile: &RegisterDto) -> Result<(), ApiError> {
    if profile.full_name.trim().is_empty() {
        return Err(ApiError::Validation("El nombre completo es obligatorio".to_string()));
    }

    if profile.email.trim().is_empty() {
        return Err(ApiError::Validation("El correo es obligatorio".to_string()));
    }

    if profile.password.is_empty() {
        return Err(ApiError::Validation("La contraseña es obligatoria".to_string()));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::{SessionStore, CREDENTIAL_KEY, IDENTITY_KEY};
    use crate::client::{
        api::ApiClient,
        config::Config,
        session::{storage::KeyValueStorage, MemoryStorage},
    };

    fn store(storage: Rc<MemoryStorage>) -> SessionStore {
        let api = ApiClient::new(&Config::new("http://127.0.0.1:9").unwrap());
        SessionStore::new(api, storage)
    }

    const IDENTITY: &str = r#"{"id": "u1", "email": "admin@colegio.edu", "role": "admin_colegio", "full_name": "Admin Colegio", "is_active": true, "colegio_id": "c1"}"#;

    #[test]
    /// Expect a well formed pair to be restored and attached
    fn test_restore_well_formed_pair() {
        let storage = Rc::new(MemoryStorage::new());
        storage.set(CREDENTIAL_KEY, "token-1").unwrap();
        storage.set(IDENTITY_KEY, IDENTITY).unwrap();
        let store = store(storage);

        let session = store.restore();

        assert!(session.is_resolved());
        assert_eq!(session.identity().unwrap().id, "u1");
        assert_eq!(store.api().credential().unwrap().as_str(), "token-1");
    }

    #[test]
    /// Expect empty storage to resolve anonymous with an armed, empty slot
    fn test_restore_empty_storage() {
        let store = store(Rc::new(MemoryStorage::new()));

        let session = store.restore();

        assert!(session.is_resolved());
        assert!(session.identity().is_none());
        assert!(store.api().is_resolved());
        assert!(store.api().credential().is_none());
    }

    #[test]
    /// Expect malformed or partial pairs to resolve anonymous and be erased
    fn test_restore_malformed_pairs_are_erased() {
        let cases: [(Option<&str>, Option<&str>); 4] = [
            (Some("token"), None),
            (None, Some(IDENTITY)),
            (Some("  "), Some(IDENTITY)),
            (Some("token"), Some("{not json")),
        ];

        for (credential, identity) in cases {
            let storage = Rc::new(MemoryStorage::new());
            if let Some(credential) = credential {
                storage.set(CREDENTIAL_KEY, credential).unwrap();
            }
            if let Some(identity) = identity {
                storage.set(IDENTITY_KEY, identity).unwrap();
            }
            let store = store(storage.clone());

            let session = store.restore();

            assert!(session.is_resolved());
            assert!(session.identity().is_none());
            assert!(storage.is_empty());
        }
    }

    #[test]
    /// Expect logout to be idempotent
    fn test_logout_idempotent() {
        let storage = Rc::new(MemoryStorage::new());
        let store = store(storage.clone());
        store.restore();

        let first = store.logout();
        let second = store.logout();

        assert_eq!(first, second);
        assert!(second.is_resolved());
        assert!(storage.is_empty());
    }

    #[tokio::test]
    /// Expect blank login input to fail validation without touching the session
    async fn test_login_blank_input() {
        let storage = Rc::new(MemoryStorage::new());
        let store = store(storage.clone());
        store.restore();

        let result = store.login("  ", "secret").await;

        assert!(matches!(result, Err(crate::client::error::ApiError::Validation(_))));
        assert!(storage.is_empty());
        assert!(store.api().credential().is_none());
    }
}

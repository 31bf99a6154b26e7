//! Client construction against the mock API server.

use std::rc::Rc;

use chuflay::client::{
    api::ApiClient,
    config::Config,
    session::{KeyValueStorage, MemoryStorage, SessionStore},
};
use chuflay_test_utils::TestSetup;

/// A client wired the way the app wires it, with in-memory storage
pub struct TestClient {
    pub api: ApiClient,
    pub storage: Rc<MemoryStorage>,
    pub store: SessionStore,
}

impl TestClient {
    /// Builds the client without restoring, so the credential slot is unresolved
    pub fn unresolved(setup: &TestSetup) -> Self {
        let config = Config::new(&setup.url()).unwrap();
        let api = ApiClient::new(&config);
        let storage = Rc::new(MemoryStorage::new());
        let shared: Rc<dyn KeyValueStorage> = storage.clone();
        let store = SessionStore::new(api.clone(), shared);

        Self { api, storage, store }
    }

    /// Builds the client and restores from the empty storage, leaving it anonymous
    pub fn anonymous(setup: &TestSetup) -> Self {
        let client = Self::unresolved(setup);
        client.store.restore();
        client
    }
}

use mockito::{Mock, Server, ServerGuard};

/// Mock API server plus the endpoints registered on it
pub struct TestSetup {
    pub server: ServerGuard,
    pub mocks: Vec<Mock>,
}

impl TestSetup {
    pub async fn new() -> Self {
        let server = Server::new_async().await;

        TestSetup {
            server,
            mocks: Vec::new(),
        }
    }

    /// Origin of the mock server, used as the client's backend URL
    pub fn url(&self) -> String {
        self.server.url()
    }

    /// Assert all mock endpoints were called as expected.
    ///
    /// # Panics
    /// Panics if any mock endpoint was not called the expected number of times
    pub fn assert_mocks(&self) {
        for mock in &self.mocks {
            mock.assert();
        }
    }
}

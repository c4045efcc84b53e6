use std::sync::Arc;

use tokio::task::JoinHandle;

use crate::repository::UserRepository;

/// Starts logins without making the caller wait.
#[derive(Clone)]
pub struct LoginUseCase {
    repository: Arc<dyn UserRepository>,
}

impl LoginUseCase {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    /// Fire a guest login in the background.
    ///
    /// The repository logs the outcome and stores the token on success. The
    /// handle is only useful to tests and shutdown code that want to wait.
    pub fn execute_guest_login(&self, device_id: impl Into<String>) -> JoinHandle<()> {
        let repository = Arc::clone(&self.repository);
        let device_id = device_id.into();
        tokio::spawn(async move {
            // Failure degrades to an anonymous session.
            let _ = repository.login(&device_id).await;
        })
    }

    /// Fire a provider login in the background.
    pub fn execute_login(
        &self,
        id_token: impl Into<String>,
        provider: impl Into<String>,
    ) -> JoinHandle<()> {
        let repository = Arc::clone(&self.repository);
        let id_token = id_token.into();
        let provider = provider.into();
        tokio::spawn(async move {
            let _ = repository.login_with_provider(&id_token, &provider).await;
        })
    }

    pub fn fetch_profile(&self) {
        self.repository.fetch_profile();
    }
}

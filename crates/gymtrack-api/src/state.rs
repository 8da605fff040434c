use std::sync::Arc;

use gymtrack_core::{CredentialProvider, SessionService, SessionStore};

pub struct AppState<S: SessionStore> {
    pub sessions: Arc<SessionService<S>>,
    pub credentials: Arc<dyn CredentialProvider>,
}

impl<S: SessionStore> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            sessions: self.sessions.clone(),
            credentials: self.credentials.clone(),
        }
    }
}

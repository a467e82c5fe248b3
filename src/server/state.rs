use leptos::config::LeptosOptions;

use crate::server::backend::BackendClient;
use crate::server::config::ServerConfig;

#[derive(Clone)]
pub struct AppState {
    pub leptos_options: LeptosOptions,
    pub backend: BackendClient,
    /// Largest upload body accepted, in bytes.
    pub upload_limit: usize,
}

impl AppState {
    pub fn new(
        config: &ServerConfig,
        leptos_options: LeptosOptions,
    ) -> Result<Self, reqwest::Error> {
        let http_client = reqwest::Client::builder().build()?;
        let backend = BackendClient::new(http_client, config.backend_url.clone());

        Ok(Self {
            leptos_options,
            backend,
            upload_limit: config.upload_limit,
        })
    }
}

impl axum::extract::FromRef<AppState> for LeptosOptions {
    fn from_ref(state: &AppState) -> Self {
        state.leptos_options.clone()
    }
}

impl axum::extract::FromRef<AppState> for BackendClient {
    fn from_ref(state: &AppState) -> Self {
        state.backend.clone()
    }
}

pub fn provide_server_context(state: AppState) {
    leptos::prelude::provide_context(state);
}

use crate::domain::error::AnuvadError;
use crate::domain::traits::Translator;
use crate::infrastructure::config::Config;
use crate::infrastructure::network::client::RemoteTranslator;
use crate::infrastructure::storage::inflight::InflightRegistry;
use reqwest::Client;
use std::sync::Arc;
use tokio::sync::RwLock;
use tokio_rusqlite::Connection;

#[derive(Clone)]
pub struct AppState {
    pub db: Arc<Connection>,
    pub inflight: Arc<InflightRegistry>,
    pub config: Arc<RwLock<Config>>,
    pub http_client: Client,
    pub translator: Arc<dyn Translator>,
}

impl AppState {
    pub fn new(db: Connection, config: Config) -> Result<Self, AnuvadError> {
        let http_client = Client::builder()
            .pool_max_idle_per_host(10)
            .pool_idle_timeout(std::time::Duration::from_secs(30))
            .user_agent("anuvad/0.1.0")
            .build()?;

        let translator = Arc::new(RemoteTranslator::new(
            http_client.clone(),
            config.remote.clone(),
        ));

        Ok(Self {
            db: Arc::new(db),
            inflight: Arc::new(InflightRegistry::new()),
            config: Arc::new(RwLock::new(config)),
            http_client,
            translator,
        })
    }

    /// Same wiring with an injected translator. Used by tests to count
    /// or fail remote dispatches.
    pub fn with_translator(
        db: Connection,
        config: Config,
        translator: Arc<dyn Translator>,
    ) -> Result<Self, AnuvadError> {
        let http_client = Client::builder().user_agent("anuvad/0.1.0").build()?;

        Ok(Self {
            db: Arc::new(db),
            inflight: Arc::new(InflightRegistry::new()),
            config: Arc::new(RwLock::new(config)),
            http_client,
            translator,
        })
    }
}

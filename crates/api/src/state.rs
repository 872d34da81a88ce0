use std::sync::Arc;

use hmis_store::Store;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tokio::sync::Mutex;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Resource collections for every mocked endpoint.
    pub store: Arc<Store>,
    /// Server configuration (read by middleware and handlers).
    pub config: Arc<ServerConfig>,
    /// Random source for randomized mock responses (boundary checks).
    pub rng: Arc<Mutex<StdRng>>,
}

impl AppState {
    /// Build state around `store`, seeding the random source from
    /// `config.random_seed` when set.
    pub fn new(config: ServerConfig, store: Store) -> Self {
        let rng = match config.random_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        Self {
            store: Arc::new(store),
            config: Arc::new(config),
            rng: Arc::new(Mutex::new(rng)),
        }
    }
}

use std::sync::Arc;

use crate::config::settings::AppConfig;
use crate::modules::actor::repository::ActorRepository;
use crate::modules::director::repository::DirectorRepository;
use crate::modules::movie::repository::MovieRepository;
use crate::modules::role::repository::RoleRepository;

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub actors: Arc<dyn ActorRepository>,
    pub directors: Arc<dyn DirectorRepository>,
    pub movies: Arc<dyn MovieRepository>,
    pub roles: Arc<dyn RoleRepository>,
}

impl AppState {
    /// Every repository is served by the same store.
    pub fn new<S>(config: AppConfig, store: S) -> Self
    where
        S: ActorRepository + DirectorRepository + MovieRepository + RoleRepository + 'static,
    {
        let store = Arc::new(store);
        Self {
            config,
            actors: store.clone(),
            directors: store.clone(),
            movies: store.clone(),
            roles: store,
        }
    }
}

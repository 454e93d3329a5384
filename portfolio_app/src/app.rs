use crate::config::Config;

use portfolio_db::{Db, GetPgPool};
use portfolio_render::{ApiClient, GetApiClient};

use sqlx::PgPool;
use std::sync::Arc;

#[derive(Clone)]
pub struct App {
    pub config: Arc<Config>,
    pub db: Db,
    pub api_client: ApiClient,
}

impl GetPgPool for App {
    fn get_pg_pool(&self) -> &PgPool {
        &self.db.pg_pool
    }
}

impl GetApiClient for App {
    fn get_api_client(&self) -> &ApiClient {
        &self.api_client
    }
}

use crate::core::{Config, Result};
use crate::db::DbService;
use crate::db::repository::OrderRepository;
use crate::orders::OrderService;

/// Server state - shared by every handler
///
/// Cloning is cheap: the pool is reference counted and the config is small.
///
/// | Field | Type | Purpose |
/// |-------|------|---------|
/// | config | Config | configuration (immutable) |
/// | db | DbService | SQLite connection pool |
#[derive(Clone, Debug)]
pub struct ServerState {
    pub config: Config,
    pub db: DbService,
}

impl ServerState {
    /// Open the database (running migrations) and build the state
    pub async fn initialize(config: &Config) -> Result<Self> {
        config.validate()?;
        let db = DbService::new(&config.database_path).await?;
        Ok(Self {
            config: config.clone(),
            db,
        })
    }

    /// Order service bound to this state's pool
    pub fn orders(&self) -> OrderService<OrderRepository> {
        OrderService::new(OrderRepository::new(self.db.pool.clone()))
    }
}

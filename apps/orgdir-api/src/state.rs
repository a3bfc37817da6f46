use std::sync::Arc;

use orgdir_service::DirectoryService;
use orgdir_storage::db::Db;

#[derive(Clone)]
pub struct AppState {
	pub service: Arc<DirectoryService>,
	pub api_key: Arc<str>,
}
impl AppState {
	pub async fn new(config: orgdir_config::Config) -> color_eyre::Result<Self> {
		let db = Db::connect(&config.storage.postgres).await?;

		db.ensure_schema().await?;

		let service = DirectoryService::new(db);

		Ok(Self { service: Arc::new(service), api_key: config.security.api_key.into() })
	}
}

pub mod activity;
pub mod aggregate;
pub mod building;
pub mod geo;
pub mod get;
pub mod search;
pub mod views;

use orgdir_storage::db::Db;

pub use views::{BuildingView, GeoSearchView, OrganizationView};

pub type ServiceResult<T> = Result<T, ServiceError>;

#[derive(Debug)]
pub enum ServiceError {
	NotFound { entity: &'static str },
	Storage { message: String },
}

impl std::fmt::Display for ServiceError {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::NotFound { entity } => write!(f, "{entity} not found."),
			Self::Storage { message } => write!(f, "Storage error: {message}"),
		}
	}
}

impl std::error::Error for ServiceError {}

impl From<orgdir_storage::Error> for ServiceError {
	fn from(err: orgdir_storage::Error) -> Self {
		Self::Storage { message: err.to_string() }
	}
}

/// Read-only query surface over the directory store. Holds no per-request
/// state; every operation is a function of its inputs and the current store
/// contents.
pub struct DirectoryService {
	pub db: Db,
}
impl DirectoryService {
	pub fn new(db: Db) -> Self {
		Self { db }
	}
}

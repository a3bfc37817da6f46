#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Building {
	pub id: i64,
	pub address: String,
	pub lat: f64,
	pub lon: f64,
}

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Organization {
	pub id: i64,
	pub name: String,
	pub building_id: i64,
}

#[derive(Debug, sqlx::FromRow)]
pub struct OrganizationPhone {
	pub organization_id: i64,
	pub phone: String,
}

/// One row of the organization/activity join, resolved to the activity name.
#[derive(Debug, sqlx::FromRow)]
pub struct OrganizationActivityName {
	pub organization_id: i64,
	pub name: String,
}

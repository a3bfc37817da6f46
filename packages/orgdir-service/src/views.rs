use orgdir_storage::models::Building;

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct BuildingView {
	pub id: i64,
	pub address: String,
	pub lat: f64,
	pub lon: f64,
}
impl From<Building> for BuildingView {
	fn from(building: Building) -> Self {
		Self { id: building.id, address: building.address, lat: building.lat, lon: building.lon }
	}
}

/// Organization with its building, phones, and activity names resolved.
/// Every organization-returning operation produces this shape, the
/// name-substring search included.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct OrganizationView {
	pub id: i64,
	pub name: String,
	pub building: BuildingView,
	pub phones: Vec<String>,
	pub activities: Vec<String>,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct GeoSearchView {
	pub organizations: Vec<OrganizationView>,
	pub buildings: Vec<BuildingView>,
}

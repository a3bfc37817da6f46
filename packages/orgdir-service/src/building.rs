use crate::{DirectoryService, ServiceResult, aggregate, views::OrganizationView};

impl DirectoryService {
	/// Organizations located in the given building. An unknown building id is
	/// not an error here: the result is simply empty. This is asymmetric with
	/// the activity lookup, which reports NotFound for an unknown root.
	pub async fn organizations_in_building(
		&self,
		building_id: i64,
	) -> ServiceResult<Vec<OrganizationView>> {
		aggregate::organizations_for_buildings(&self.db, &[building_id]).await
	}
}

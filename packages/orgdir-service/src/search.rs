use orgdir_storage::queries;

use crate::{DirectoryService, ServiceResult, aggregate, views::OrganizationView};

impl DirectoryService {
	/// Organizations whose name contains `q`, case-insensitively. Blank or
	/// too-short queries are rejected at the boundary before this runs.
	pub async fn search_by_name(&self, q: &str) -> ServiceResult<Vec<OrganizationView>> {
		let organizations = queries::organizations_by_name(&self.db, q).await?;

		aggregate::assemble_views(&self.db, aggregate::dedup_by_id(organizations)).await
	}
}

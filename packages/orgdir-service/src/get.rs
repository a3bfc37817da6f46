use orgdir_storage::queries;

use crate::{DirectoryService, ServiceError, ServiceResult, aggregate, views::OrganizationView};

impl DirectoryService {
	/// Single organization by id, with its building, phones, and activity
	/// names resolved.
	pub async fn get_organization(&self, id: i64) -> ServiceResult<OrganizationView> {
		let Some(organization) = queries::organization_by_id(&self.db, id).await? else {
			return Err(ServiceError::NotFound { entity: "Organization" });
		};
		let mut views = aggregate::assemble_views(&self.db, vec![organization]).await?;

		views.pop().ok_or_else(|| ServiceError::Storage {
			message: format!("Organization {id} could not be assembled."),
		})
	}
}

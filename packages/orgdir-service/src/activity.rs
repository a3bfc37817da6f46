use orgdir_domain::taxonomy;
use orgdir_storage::queries;

use crate::{DirectoryService, ServiceError, ServiceResult, aggregate, views::OrganizationView};

impl DirectoryService {
	/// Organizations linked to the given activity or to any descendant within
	/// [`taxonomy::DEPTH_LIMIT`] tree levels of it. An unknown root is
	/// NotFound, never an empty list.
	pub async fn organizations_by_activity(
		&self,
		activity_id: i64,
	) -> ServiceResult<Vec<OrganizationView>> {
		if !queries::activity_exists(&self.db, activity_id).await? {
			return Err(ServiceError::NotFound { entity: "Activity" });
		}

		let edges = queries::activity_edges(&self.db).await?;
		let activity_ids = taxonomy::descendant_ids(activity_id, &edges, taxonomy::DEPTH_LIMIT);

		tracing::debug!(
			root = activity_id,
			descendants = activity_ids.len(),
			"Resolved activity subtree."
		);

		aggregate::organizations_for_activities(&self.db, &activity_ids).await
	}
}

use std::collections::{BTreeMap, HashMap};

use orgdir_storage::{db::Db, models::Organization, queries};

use crate::{
	ServiceError, ServiceResult,
	views::{BuildingView, OrganizationView},
};

/// Organizations located in any of the given buildings. One batched lookup
/// keyed by the whole id set; an empty set touches the store not at all.
pub async fn organizations_for_buildings(
	db: &Db,
	building_ids: &[i64],
) -> ServiceResult<Vec<OrganizationView>> {
	if building_ids.is_empty() {
		return Ok(Vec::new());
	}

	let organizations = queries::organizations_in_buildings(db, building_ids).await?;

	assemble_views(db, dedup_by_id(organizations)).await
}

/// Organizations linked to any of the given activities, deduplicated: an
/// organization reachable through several of the ids appears once.
pub async fn organizations_for_activities(
	db: &Db,
	activity_ids: &[i64],
) -> ServiceResult<Vec<OrganizationView>> {
	if activity_ids.is_empty() {
		return Ok(Vec::new());
	}

	let organizations = queries::organizations_by_activities(db, activity_ids).await?;

	assemble_views(db, dedup_by_id(organizations)).await
}

/// One row per organization id. The BTreeMap keys make the output ascend by
/// id, so the order is stable within a call on any storage backend.
pub(crate) fn dedup_by_id(organizations: Vec<Organization>) -> Vec<Organization> {
	let mut by_id = BTreeMap::new();

	for organization in organizations {
		by_id.entry(organization.id).or_insert(organization);
	}

	by_id.into_values().collect()
}

/// Resolves the building, phone list, and activity names for each
/// organization: one query per relation, keyed by the full id set, grouped
/// in memory.
pub(crate) async fn assemble_views(
	db: &Db,
	organizations: Vec<Organization>,
) -> ServiceResult<Vec<OrganizationView>> {
	if organizations.is_empty() {
		return Ok(Vec::new());
	}

	let organization_ids: Vec<i64> = organizations.iter().map(|o| o.id).collect();
	let mut building_ids: Vec<i64> = organizations.iter().map(|o| o.building_id).collect();

	building_ids.sort_unstable();
	building_ids.dedup();

	let buildings: HashMap<i64, BuildingView> = queries::buildings_by_ids(db, &building_ids)
		.await?
		.into_iter()
		.map(|building| (building.id, BuildingView::from(building)))
		.collect();
	let mut phones: HashMap<i64, Vec<String>> = HashMap::new();

	for row in queries::phones_for_organizations(db, &organization_ids).await? {
		phones.entry(row.organization_id).or_default().push(row.phone);
	}

	let mut activities: HashMap<i64, Vec<String>> = HashMap::new();

	for row in queries::activity_names_for_organizations(db, &organization_ids).await? {
		activities.entry(row.organization_id).or_default().push(row.name);
	}

	organizations
		.into_iter()
		.map(|organization| {
			let building =
				buildings.get(&organization.building_id).cloned().ok_or_else(|| {
					ServiceError::Storage {
						message: format!(
							"Organization {} references a missing building {}.",
							organization.id, organization.building_id
						),
					}
				})?;

			Ok(OrganizationView {
				id: organization.id,
				name: organization.name,
				building,
				phones: phones.remove(&organization.id).unwrap_or_default(),
				activities: activities.remove(&organization.id).unwrap_or_default(),
			})
		})
		.collect()
}

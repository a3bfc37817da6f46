use orgdir_domain::geo::BBox;

use crate::{
	Result,
	db::Db,
	models::{Building, Organization, OrganizationActivityName, OrganizationPhone},
};

pub async fn organization_by_id(db: &Db, id: i64) -> Result<Option<Organization>> {
	let organization = sqlx::query_as::<_, Organization>(
		"SELECT id, name, building_id FROM organizations WHERE id = $1",
	)
	.bind(id)
	.fetch_optional(&db.pool)
	.await?;

	Ok(organization)
}

/// Case-insensitive substring match on the organization name. SQL wildcards
/// inside `q` pass through unescaped.
pub async fn organizations_by_name(db: &Db, q: &str) -> Result<Vec<Organization>> {
	let organizations = sqlx::query_as::<_, Organization>(
		"\
SELECT id, name, building_id
FROM organizations
WHERE name ILIKE '%' || $1 || '%'",
	)
	.bind(q)
	.fetch_all(&db.pool)
	.await?;

	Ok(organizations)
}

pub async fn organizations_in_buildings(
	db: &Db,
	building_ids: &[i64],
) -> Result<Vec<Organization>> {
	let organizations = sqlx::query_as::<_, Organization>(
		"\
SELECT id, name, building_id
FROM organizations
WHERE building_id = ANY($1)",
	)
	.bind(building_ids)
	.fetch_all(&db.pool)
	.await?;

	Ok(organizations)
}

/// Organizations joined to any of the given activities. One row per matching
/// link, so an organization linked to several of the ids comes back several
/// times; the caller deduplicates.
pub async fn organizations_by_activities(
	db: &Db,
	activity_ids: &[i64],
) -> Result<Vec<Organization>> {
	let organizations = sqlx::query_as::<_, Organization>(
		"\
SELECT o.id, o.name, o.building_id
FROM organizations o
JOIN organization_activities oa ON oa.organization_id = o.id
WHERE oa.activity_id = ANY($1)",
	)
	.bind(activity_ids)
	.fetch_all(&db.pool)
	.await?;

	Ok(organizations)
}

pub async fn buildings_by_ids(db: &Db, ids: &[i64]) -> Result<Vec<Building>> {
	let buildings = sqlx::query_as::<_, Building>(
		"SELECT id, address, lat, lon FROM buildings WHERE id = ANY($1)",
	)
	.bind(ids)
	.fetch_all(&db.pool)
	.await?;

	Ok(buildings)
}

pub async fn buildings_in_bbox(db: &Db, bbox: &BBox) -> Result<Vec<Building>> {
	let buildings = sqlx::query_as::<_, Building>(
		"\
SELECT id, address, lat, lon
FROM buildings
WHERE lat BETWEEN $1 AND $2
	AND lon BETWEEN $3 AND $4",
	)
	.bind(bbox.lat_min)
	.bind(bbox.lat_max)
	.bind(bbox.lon_min)
	.bind(bbox.lon_max)
	.fetch_all(&db.pool)
	.await?;

	Ok(buildings)
}

pub async fn phones_for_organizations(
	db: &Db,
	organization_ids: &[i64],
) -> Result<Vec<OrganizationPhone>> {
	let phones = sqlx::query_as::<_, OrganizationPhone>(
		"\
SELECT organization_id, phone
FROM organization_phones
WHERE organization_id = ANY($1)
ORDER BY organization_id, phone",
	)
	.bind(organization_ids)
	.fetch_all(&db.pool)
	.await?;

	Ok(phones)
}

pub async fn activity_names_for_organizations(
	db: &Db,
	organization_ids: &[i64],
) -> Result<Vec<OrganizationActivityName>> {
	let names = sqlx::query_as::<_, OrganizationActivityName>(
		"\
SELECT oa.organization_id, a.name
FROM organization_activities oa
JOIN activities a ON a.id = oa.activity_id
WHERE oa.organization_id = ANY($1)
ORDER BY oa.organization_id, a.name",
	)
	.bind(organization_ids)
	.fetch_all(&db.pool)
	.await?;

	Ok(names)
}

pub async fn activity_exists(db: &Db, id: i64) -> Result<bool> {
	let exists: bool =
		sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM activities WHERE id = $1)")
			.bind(id)
			.fetch_one(&db.pool)
			.await?;

	Ok(exists)
}

/// The whole parent-linked forest as `(id, parent_id)` pairs, enough to
/// compute the bounded descendant closure in memory.
pub async fn activity_edges(db: &Db) -> Result<Vec<(i64, Option<i64>)>> {
	let edges = sqlx::query_as::<_, (i64, Option<i64>)>("SELECT id, parent_id FROM activities")
		.fetch_all(&db.pool)
		.await?;

	Ok(edges)
}

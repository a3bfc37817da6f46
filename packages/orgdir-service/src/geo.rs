use orgdir_domain::geo;
use orgdir_storage::queries;

use crate::{
	DirectoryService, ServiceResult, aggregate,
	views::{BuildingView, GeoSearchView},
};

impl DirectoryService {
	/// Buildings within `radius_m` meters of the point, and the organizations
	/// located in them. The bbox prefetch is a deliberate superset of the
	/// circle; the haversine pass below decides membership. The boundary
	/// guarantees `radius_m > 0`.
	pub async fn geo_radius(
		&self,
		lat: f64,
		lon: f64,
		radius_m: f64,
	) -> ServiceResult<GeoSearchView> {
		let bbox = geo::bbox_for_radius(lat, lon, radius_m);
		let candidates = queries::buildings_in_bbox(&self.db, &bbox).await?;
		let candidate_count = candidates.len();
		let mut near: Vec<_> = candidates
			.into_iter()
			.filter(|building| geo::haversine_m(lat, lon, building.lat, building.lon) <= radius_m)
			.collect();

		tracing::debug!(candidates = candidate_count, in_radius = near.len(), "Filtered radius search.");

		if near.is_empty() {
			return Ok(GeoSearchView { organizations: Vec::new(), buildings: Vec::new() });
		}

		near.sort_unstable_by_key(|building| building.id);

		let building_ids: Vec<i64> = near.iter().map(|building| building.id).collect();
		let organizations =
			aggregate::organizations_for_buildings(&self.db, &building_ids).await?;

		Ok(GeoSearchView {
			organizations,
			buildings: near.into_iter().map(BuildingView::from).collect(),
		})
	}

	/// Buildings inside the rectangle spanned by two arbitrary corner points,
	/// and the organizations located in them. The normalized bbox is exact
	/// for rectangles, so no second filtering pass exists here.
	pub async fn geo_rectangle(
		&self,
		lat1: f64,
		lon1: f64,
		lat2: f64,
		lon2: f64,
	) -> ServiceResult<GeoSearchView> {
		let bbox = geo::bbox_for_rectangle(lat1, lon1, lat2, lon2);
		let mut buildings = queries::buildings_in_bbox(&self.db, &bbox).await?;

		if buildings.is_empty() {
			return Ok(GeoSearchView { organizations: Vec::new(), buildings: Vec::new() });
		}

		buildings.sort_unstable_by_key(|building| building.id);

		let building_ids: Vec<i64> = buildings.iter().map(|building| building.id).collect();
		let organizations =
			aggregate::organizations_for_buildings(&self.db, &building_ids).await?;

		Ok(GeoSearchView {
			organizations,
			buildings: buildings.into_iter().map(BuildingView::from).collect(),
		})
	}
}

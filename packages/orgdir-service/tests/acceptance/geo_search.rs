use super::{build_service, insert_building, insert_organization, test_db};

#[tokio::test]
#[ignore = "Requires external Postgres. Set ORGDIR_PG_DSN to run."]
async fn radius_search_on_an_empty_store_is_empty() {
	let Some(test_db) = test_db().await else {
		eprintln!("Skipping radius_search_on_an_empty_store_is_empty; set ORGDIR_PG_DSN to run this test.");

		return;
	};
	let service = build_service(&test_db).await;
	let view = service.geo_radius(0.0, 0.0, 1.0).await.expect("Failed to search radius.");

	assert!(view.organizations.is_empty());
	assert!(view.buildings.is_empty());

	test_db.cleanup().await.expect("Failed to cleanup test database.");
}

#[tokio::test]
#[ignore = "Requires external Postgres. Set ORGDIR_PG_DSN to run."]
async fn radius_search_keeps_only_buildings_within_distance() {
	let Some(test_db) = test_db().await else {
		eprintln!("Skipping radius_search_keeps_only_buildings_within_distance; set ORGDIR_PG_DSN to run this test.");

		return;
	};
	let service = build_service(&test_db).await;
	let near_id = insert_building(&service, "Near Plaza", 0.0, 0.0).await;
	let far_id = insert_building(&service, "Far Plaza", 10.0, 10.0).await;
	let near_org = insert_organization(&service, "Near Shop", near_id).await;
	let _far_org = insert_organization(&service, "Far Shop", far_id).await;
	let view = service.geo_radius(0.0, 0.0, 50_000.0).await.expect("Failed to search radius.");
	let building_ids: Vec<i64> = view.buildings.iter().map(|building| building.id).collect();
	let organization_ids: Vec<i64> = view.organizations.iter().map(|org| org.id).collect();

	assert_eq!(building_ids, vec![near_id]);
	assert_eq!(organization_ids, vec![near_org]);

	test_db.cleanup().await.expect("Failed to cleanup test database.");
}

#[tokio::test]
#[ignore = "Requires external Postgres. Set ORGDIR_PG_DSN to run."]
async fn radius_search_drops_bbox_corners_outside_the_circle() {
	let Some(test_db) = test_db().await else {
		eprintln!("Skipping radius_search_drops_bbox_corners_outside_the_circle; set ORGDIR_PG_DSN to run this test.");

		return;
	};
	let service = build_service(&test_db).await;
	// For r = 50 km at the equator the bbox spans ±0.45°; a building at
	// (0.45, 0.45) sits inside the bbox but ~71 km from the center.
	let corner_id = insert_building(&service, "Corner Case House", 0.45, 0.45).await;
	let inside_id = insert_building(&service, "Inner House", 0.1, 0.1).await;

	insert_organization(&service, "Corner Shop", corner_id).await;

	let inside_org = insert_organization(&service, "Inner Shop", inside_id).await;
	let view = service.geo_radius(0.0, 0.0, 50_000.0).await.expect("Failed to search radius.");
	let building_ids: Vec<i64> = view.buildings.iter().map(|building| building.id).collect();
	let organization_ids: Vec<i64> = view.organizations.iter().map(|org| org.id).collect();

	assert_eq!(building_ids, vec![inside_id]);
	assert_eq!(organization_ids, vec![inside_org]);

	test_db.cleanup().await.expect("Failed to cleanup test database.");
}

#[tokio::test]
#[ignore = "Requires external Postgres. Set ORGDIR_PG_DSN to run."]
async fn rectangle_search_is_corner_order_independent() {
	let Some(test_db) = test_db().await else {
		eprintln!("Skipping rectangle_search_is_corner_order_independent; set ORGDIR_PG_DSN to run this test.");

		return;
	};
	let service = build_service(&test_db).await;
	let inside_id = insert_building(&service, "Inside Rect", 55.5, 37.5).await;
	let _outside_id = insert_building(&service, "Outside Rect", 57.0, 39.0).await;
	let inside_org = insert_organization(&service, "Rect Tenant", inside_id).await;
	let first = service
		.geo_rectangle(55.0, 37.0, 56.0, 38.0)
		.await
		.expect("Failed to search rectangle.");
	let second = service
		.geo_rectangle(56.0, 38.0, 55.0, 37.0)
		.await
		.expect("Failed to search rectangle.");

	for view in [first, second] {
		let building_ids: Vec<i64> = view.buildings.iter().map(|building| building.id).collect();
		let organization_ids: Vec<i64> = view.organizations.iter().map(|org| org.id).collect();

		assert_eq!(building_ids, vec![inside_id]);
		assert_eq!(organization_ids, vec![inside_org]);
	}

	test_db.cleanup().await.expect("Failed to cleanup test database.");
}

#[tokio::test]
#[ignore = "Requires external Postgres. Set ORGDIR_PG_DSN to run."]
async fn rectangle_search_without_buildings_is_empty() {
	let Some(test_db) = test_db().await else {
		eprintln!("Skipping rectangle_search_without_buildings_is_empty; set ORGDIR_PG_DSN to run this test.");

		return;
	};
	let service = build_service(&test_db).await;
	let view =
		service.geo_rectangle(0.0, 0.0, 1.0, 1.0).await.expect("Failed to search rectangle.");

	assert!(view.organizations.is_empty());
	assert!(view.buildings.is_empty());

	test_db.cleanup().await.expect("Failed to cleanup test database.");
}

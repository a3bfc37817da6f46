use orgdir_service::ServiceError;

use super::{
	build_service, insert_activity, insert_building, insert_organization, insert_phone,
	link_activity, test_db,
};

#[tokio::test]
#[ignore = "Requires external Postgres. Set ORGDIR_PG_DSN to run."]
async fn get_organization_resolves_building_phones_and_activities() {
	let Some(test_db) = test_db().await else {
		eprintln!("Skipping get_organization_resolves_building_phones_and_activities; set ORGDIR_PG_DSN to run this test.");

		return;
	};
	let service = build_service(&test_db).await;
	let building_id = insert_building(&service, "12 Harbor Lane", 59.93, 30.31).await;
	let organization_id = insert_organization(&service, "Harbor Bakery", building_id).await;

	insert_phone(&service, organization_id, "+1-202-555-0101").await;
	insert_phone(&service, organization_id, "+1-202-555-0102").await;

	let food = insert_activity(&service, "Food", None).await;
	let bakery = insert_activity(&service, "Bakeries", Some(food)).await;

	link_activity(&service, organization_id, food).await;
	link_activity(&service, organization_id, bakery).await;

	let view =
		service.get_organization(organization_id).await.expect("Failed to get organization.");

	assert_eq!(view.id, organization_id);
	assert_eq!(view.name, "Harbor Bakery");
	assert_eq!(view.building.id, building_id);
	assert_eq!(view.building.address, "12 Harbor Lane");
	assert_eq!(view.phones, vec!["+1-202-555-0101", "+1-202-555-0102"]);
	assert_eq!(view.activities, vec!["Bakeries", "Food"]);

	test_db.cleanup().await.expect("Failed to cleanup test database.");
}

#[tokio::test]
#[ignore = "Requires external Postgres. Set ORGDIR_PG_DSN to run."]
async fn unknown_organization_is_not_found() {
	let Some(test_db) = test_db().await else {
		eprintln!("Skipping unknown_organization_is_not_found; set ORGDIR_PG_DSN to run this test.");

		return;
	};
	let service = build_service(&test_db).await;
	let err = service.get_organization(999).await.expect_err("Expected NotFound.");

	assert!(matches!(err, ServiceError::NotFound { entity: "Organization" }));
	assert_eq!(err.to_string(), "Organization not found.");

	test_db.cleanup().await.expect("Failed to cleanup test database.");
}

#[tokio::test]
#[ignore = "Requires external Postgres. Set ORGDIR_PG_DSN to run."]
async fn name_search_matches_substrings_case_insensitively() {
	let Some(test_db) = test_db().await else {
		eprintln!("Skipping name_search_matches_substrings_case_insensitively; set ORGDIR_PG_DSN to run this test.");

		return;
	};
	let service = build_service(&test_db).await;
	let building_id = insert_building(&service, "3 Market Sq", 0.0, 0.0).await;
	let cafe = insert_organization(&service, "Best Cafe Ever", building_id).await;
	let _other = insert_organization(&service, "Iron Works", building_id).await;
	let coffee = insert_activity(&service, "Coffee", None).await;

	link_activity(&service, cafe, coffee).await;

	for q in ["Cafe", "cafe", "CAFE"] {
		let views = service.search_by_name(q).await.expect("Failed to search.");

		assert_eq!(views.len(), 1, "Unexpected result count for {q:?}.");
		assert_eq!(views[0].id, cafe);
		assert_eq!(views[0].name, "Best Cafe Ever");
		// The search result carries the same full view as every other
		// organization endpoint, activities included.
		assert_eq!(views[0].activities, vec!["Coffee"]);
	}

	test_db.cleanup().await.expect("Failed to cleanup test database.");
}

#[tokio::test]
#[ignore = "Requires external Postgres. Set ORGDIR_PG_DSN to run."]
async fn name_search_without_matches_is_empty() {
	let Some(test_db) = test_db().await else {
		eprintln!("Skipping name_search_without_matches_is_empty; set ORGDIR_PG_DSN to run this test.");

		return;
	};
	let service = build_service(&test_db).await;
	let views = service.search_by_name("abc").await.expect("Failed to search.");

	assert!(views.is_empty());

	test_db.cleanup().await.expect("Failed to cleanup test database.");
}

#[tokio::test]
#[ignore = "Requires external Postgres. Set ORGDIR_PG_DSN to run."]
async fn unknown_building_yields_an_empty_list_not_an_error() {
	let Some(test_db) = test_db().await else {
		eprintln!("Skipping unknown_building_yields_an_empty_list_not_an_error; set ORGDIR_PG_DSN to run this test.");

		return;
	};
	let service = build_service(&test_db).await;
	// Intentional asymmetry with the activity lookup: no existence check.
	let views =
		service.organizations_in_building(999).await.expect("Expected an empty list, not an error.");

	assert!(views.is_empty());

	test_db.cleanup().await.expect("Failed to cleanup test database.");
}

#[tokio::test]
#[ignore = "Requires external Postgres. Set ORGDIR_PG_DSN to run."]
async fn building_lookup_lists_every_organization_inside() {
	let Some(test_db) = test_db().await else {
		eprintln!("Skipping building_lookup_lists_every_organization_inside; set ORGDIR_PG_DSN to run this test.");

		return;
	};
	let service = build_service(&test_db).await;
	let building_id = insert_building(&service, "7 Long Ave", 1.0, 1.0).await;
	let other_building_id = insert_building(&service, "9 Long Ave", 1.0, 1.001).await;
	let first = insert_organization(&service, "First Tenant", building_id).await;
	let second = insert_organization(&service, "Second Tenant", building_id).await;
	let _elsewhere = insert_organization(&service, "Elsewhere", other_building_id).await;
	let views = service.organizations_in_building(building_id).await.expect("Failed to list.");
	let ids: Vec<i64> = views.iter().map(|view| view.id).collect();

	assert_eq!(ids, vec![first, second]);

	test_db.cleanup().await.expect("Failed to cleanup test database.");
}

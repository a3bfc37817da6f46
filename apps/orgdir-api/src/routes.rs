use axum::{
	Json, Router,
	extract::{Path, Query, Request, State},
	http::StatusCode,
	middleware::{self, Next},
	response::{IntoResponse, Response},
	routing::get,
};
use serde::{Deserialize, Serialize};

use orgdir_service::{GeoSearchView, OrganizationView, ServiceError};

use crate::state::AppState;

pub fn router(state: AppState) -> Router {
	let authed = Router::new()
		.route("/organizations/search", get(search_organizations))
		.route("/organizations/{id}", get(get_organization))
		.route("/buildings/{building_id}/organizations", get(organizations_in_building))
		.route("/activities/{activity_id}/organizations", get(organizations_by_activity))
		.route("/geo/radius", get(geo_radius))
		.route("/geo/rectangle", get(geo_rectangle))
		.route_layer(middleware::from_fn_with_state(state.clone(), require_api_key));

	Router::new().route("/health", get(health)).merge(authed).with_state(state)
}

async fn require_api_key(State(state): State<AppState>, request: Request, next: Next) -> Response {
	let presented = request.headers().get("x-api-key").and_then(|value| value.to_str().ok());

	if presented != Some(state.api_key.as_ref()) {
		return json_error(StatusCode::UNAUTHORIZED, "unauthorized", "Invalid API key.")
			.into_response();
	}

	next.run(request).await
}

async fn health() -> Json<serde_json::Value> {
	Json(serde_json::json!({ "status": "ok" }))
}

#[derive(Debug, Deserialize)]
struct SearchParams {
	q: String,
}

async fn search_organizations(
	State(state): State<AppState>,
	Query(params): Query<SearchParams>,
) -> Result<Json<Vec<OrganizationView>>, ApiError> {
	if params.q.trim().is_empty() {
		return Err(json_error(
			StatusCode::UNPROCESSABLE_ENTITY,
			"validation",
			"Query parameter q must be non-empty.",
		));
	}

	let views = state.service.search_by_name(&params.q).await?;

	Ok(Json(views))
}

async fn get_organization(
	State(state): State<AppState>,
	Path(id): Path<i64>,
) -> Result<Json<OrganizationView>, ApiError> {
	let view = state.service.get_organization(id).await?;

	Ok(Json(view))
}

async fn organizations_in_building(
	State(state): State<AppState>,
	Path(building_id): Path<i64>,
) -> Result<Json<Vec<OrganizationView>>, ApiError> {
	let views = state.service.organizations_in_building(building_id).await?;

	Ok(Json(views))
}

async fn organizations_by_activity(
	State(state): State<AppState>,
	Path(activity_id): Path<i64>,
) -> Result<Json<Vec<OrganizationView>>, ApiError> {
	let views = state.service.organizations_by_activity(activity_id).await?;

	Ok(Json(views))
}

#[derive(Debug, Deserialize)]
struct RadiusParams {
	lat: f64,
	lon: f64,
	r_m: f64,
}

async fn geo_radius(
	State(state): State<AppState>,
	Query(params): Query<RadiusParams>,
) -> Result<Json<GeoSearchView>, ApiError> {
	if !params.r_m.is_finite() || params.r_m <= 0.0 {
		return Err(json_error(
			StatusCode::UNPROCESSABLE_ENTITY,
			"validation",
			"Query parameter r_m must be greater than zero.",
		));
	}

	let view = state.service.geo_radius(params.lat, params.lon, params.r_m).await?;

	Ok(Json(view))
}

#[derive(Debug, Deserialize)]
struct RectangleParams {
	lat1: f64,
	lon1: f64,
	lat2: f64,
	lon2: f64,
}

async fn geo_rectangle(
	State(state): State<AppState>,
	Query(params): Query<RectangleParams>,
) -> Result<Json<GeoSearchView>, ApiError> {
	let view = state
		.service
		.geo_rectangle(params.lat1, params.lon1, params.lat2, params.lon2)
		.await?;

	Ok(Json(view))
}

#[derive(Debug, Serialize)]
struct ErrorBody {
	error_code: String,
	message: String,
}

#[derive(Debug)]
pub struct ApiError {
	status: StatusCode,
	error_code: String,
	message: String,
}

impl ApiError {
	fn new(status: StatusCode, error_code: impl Into<String>, message: impl Into<String>) -> Self {
		Self { status, error_code: error_code.into(), message: message.into() }
	}
}

pub fn json_error(status: StatusCode, code: &str, message: impl Into<String>) -> ApiError {
	ApiError::new(status, code, message)
}

impl From<ServiceError> for ApiError {
	fn from(err: ServiceError) -> Self {
		match &err {
			ServiceError::NotFound { .. } =>
				json_error(StatusCode::NOT_FOUND, "not_found", err.to_string()),
			ServiceError::Storage { .. } => {
				tracing::error!(error = %err, "Storage failure while serving a request.");

				json_error(StatusCode::INTERNAL_SERVER_ERROR, "storage", "Storage failure.")
			},
		}
	}
}

impl IntoResponse for ApiError {
	fn into_response(self) -> Response {
		let body = ErrorBody { error_code: self.error_code, message: self.message };

		(self.status, Json(body)).into_response()
	}
}

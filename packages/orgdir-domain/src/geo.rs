pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

const METERS_PER_DEGREE_LAT: f64 = 111_000.0;
const MIN_COS_LAT: f64 = 0.1;

/// Axis-aligned box in latitude/longitude space bounding a search region.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BBox {
	pub lat_min: f64,
	pub lat_max: f64,
	pub lon_min: f64,
	pub lon_max: f64,
}

/// Great-circle distance in meters between two coordinates, on a sphere of
/// radius [`EARTH_RADIUS_M`]. Symmetric in its arguments and zero for
/// identical points.
pub fn haversine_m(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
	let phi1 = lat1.to_radians();
	let phi2 = lat2.to_radians();
	let dphi = (lat2 - lat1).to_radians();
	let dlambda = (lon2 - lon1).to_radians();
	let a = (dphi / 2.0).sin().powi(2) + phi1.cos() * phi2.cos() * (dlambda / 2.0).sin().powi(2);

	2.0 * EARTH_RADIUS_M * a.sqrt().asin()
}

/// Box containing every point within `radius_m` meters of the center. The
/// box is a superset of the circle, so callers must still apply an exact
/// distance filter to its contents.
///
/// Callers guarantee `radius_m > 0`.
pub fn bbox_for_radius(lat: f64, lon: f64, radius_m: f64) -> BBox {
	let lat_delta = radius_m / METERS_PER_DEGREE_LAT;
	// A longitude degree shrinks with latitude; the divisor is clamped so it
	// never collapses near the poles.
	let lon_delta = radius_m / (METERS_PER_DEGREE_LAT * lat.to_radians().cos().max(MIN_COS_LAT));

	BBox {
		lat_min: lat - lat_delta,
		lat_max: lat + lat_delta,
		lon_min: lon - lon_delta,
		lon_max: lon + lon_delta,
	}
}

/// Normalizes two arbitrary corner points into a min/max box; corner order
/// is irrelevant. Rectangles crossing the antimeridian or enclosing a pole
/// are not supported.
pub fn bbox_for_rectangle(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> BBox {
	BBox {
		lat_min: lat1.min(lat2),
		lat_max: lat1.max(lat2),
		lon_min: lon1.min(lon2),
		lon_max: lon1.max(lon2),
	}
}

impl BBox {
	pub fn contains(&self, lat: f64, lon: f64) -> bool {
		lat >= self.lat_min && lat <= self.lat_max && lon >= self.lon_min && lon <= self.lon_max
	}
}

pub fn render_schema() -> String {
	let init = include_str!("../../../sql/init.sql");

	expand_includes(init)
}

fn expand_includes(sql: &str) -> String {
	let mut out = String::new();

	for line in sql.lines() {
		let trimmed = line.trim();

		if let Some(path) = trimmed.strip_prefix("\\ir ") {
			match path.trim() {
				"tables/001_buildings.sql" =>
					out.push_str(include_str!("../../../sql/tables/001_buildings.sql")),
				"tables/002_organizations.sql" =>
					out.push_str(include_str!("../../../sql/tables/002_organizations.sql")),
				"tables/003_organization_phones.sql" =>
					out.push_str(include_str!("../../../sql/tables/003_organization_phones.sql")),
				"tables/004_activities.sql" =>
					out.push_str(include_str!("../../../sql/tables/004_activities.sql")),
				"tables/005_organization_activities.sql" => out
					.push_str(include_str!("../../../sql/tables/005_organization_activities.sql")),
				_ => out.push_str(line),
			}
		} else {
			out.push_str(line);
		}

		out.push('\n');
	}

	out
}

use clap::Parser;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
	color_eyre::install()?;
	let args = orgdir_api::Args::parse();
	orgdir_api::run(args).await
}

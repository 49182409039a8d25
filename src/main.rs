use dogs::{config::Config, model::database};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => match Config::load(&path) {
            Ok(config) => config,
            Err(err) => {
                eprintln!("could not load config {}: {}", path, err);
                std::process::exit(1);
            }
        },
        None => Config::default(),
    };

    tracing::debug!(?config, "starting");

    database::initialize(&config.db.sqlite_file).await;
}

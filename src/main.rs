//! `eeum` - fetch the open feed from the command line.
//!
//! Logs in as a guest bound to a fresh device id and prints the first page
//! of open posts. `RUST_LOG` controls verbosity; `EEUM_DEV=1` targets the
//! dev backend.

use color_eyre::eyre::eyre;
use color_eyre::Result;
use eeum::view_model::ListStatus;
use eeum::{ClientConfig, Services};
use tracing::info;
use tracing_subscriber::EnvFilter;

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[tokio::main]
async fn main() -> Result<()> {
    if std::env::args().any(|arg| arg == "--version" || arg == "-V") {
        println!("eeum {}", VERSION);
        return Ok(());
    }

    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("eeum=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = ClientConfig::from_env();
    info!(base_url = config.base_url(), "Starting");
    let services = Services::production(config)?;

    let device_id = uuid::Uuid::new_v4().to_string();
    services.login_use_case().execute_guest_login(device_id).await?;

    let feed = services.feed_view_model();
    feed.load_ing_posts().await;
    let state = feed.state();

    if state.ing.status() == ListStatus::Error {
        let message = state
            .error_message
            .unwrap_or_else(|| "unknown error".to_string());
        return Err(eyre!("Failed to load posts: {}", message));
    }

    if state.ing.is_empty() {
        println!("No open stories right now.");
    }
    for post in state.ing.items() {
        let id = post.post_id.as_deref().unwrap_or("-");
        let title = post.title.as_deref().unwrap_or("(untitled)");
        match (post.song_name.as_deref(), post.artist_name.as_deref()) {
            (Some(song), Some(artist)) if !song.is_empty() => {
                println!("#{:<6} {}  [{} - {}]", id, title, song, artist)
            }
            _ => println!("#{:<6} {}", id, title),
        }
    }

    Ok(())
}

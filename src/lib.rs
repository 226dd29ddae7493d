use lib_game::{App, GameVariant};
use macroquad::prelude::*;

/// Shared entry point of both games. Never returns on a fatal error,
/// the process exits with code 1 instead.
pub async fn launch(variant: GameVariant) {
    if let Err(e) = run(variant).await {
        error!("{} exited with error:\n{:?}", variant.name(), e);
        std::process::exit(1);
    }
}

async fn run(variant: GameVariant) -> anyhow::Result<()> {
    quad_dbg::init_on_screen_log()?;
    log::set_max_level(log::STATIC_MAX_LEVEL);

    info!("Project version: {}", env!("CARGO_PKG_VERSION"));
    info!("Starting {}", variant.name());

    let app = App::new(variant).await?;
    app.run().await;

    Ok(())
}

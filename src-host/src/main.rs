use std::path::PathBuf;

use anyhow::Context;
use verge_core::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    verge_core::init_logging();

    let config = match std::env::var_os("VERGE_CONFIG").map(PathBuf::from) {
        Some(path) => Config::load(&path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => Config::default(),
    };

    verge_lib::run(config).await
}

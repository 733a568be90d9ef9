use std::path::Path;

use anyhow::Result;
use tracing::info;

use preyvpn_icons::app_icon;

fn main() -> Result<()> {
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive("preyvpn_icons=info".parse().unwrap())
        .add_directive("gen_app_icon=info".parse().unwrap());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    app_icon::write(Path::new(app_icon::PACKAGING_PATH), app_icon::SIZE)?;

    info!("Application icon generated");
    Ok(())
}

use anyhow::Result;
use tracing::info;

use preyvpn_icons::{tray_icon, ConnectionState};

fn main() -> Result<()> {
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive("preyvpn_icons=info".parse().unwrap())
        .add_directive("gen_tray_icons=info".parse().unwrap());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // Icons land in the invocation directory, next to the tray assets
    let out_dir = std::env::current_dir()?;
    for state in ConnectionState::ALL {
        tray_icon::write(&out_dir, state, tray_icon::SIZE)?;
    }

    info!("All tray icons generated");
    Ok(())
}

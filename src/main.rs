use mic_icon_gen::assets::{self, ASSETS_DIR, ICON_FILE, TRAY_FILE};
use std::path::Path;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    assets::write_assets(Path::new("."))?;

    println!("Icons created:");
    println!("- {ASSETS_DIR}/{ICON_FILE}");
    println!("- {ASSETS_DIR}/{TRAY_FILE}");
    Ok(())
}

use crate::icon;
use anyhow::{Context, Result};
use image::{ImageFormat, RgbaImage};
use std::path::{Path, PathBuf};

/// Directory holding the desktop shell's assets, relative to the output root.
pub const ASSETS_DIR: &str = "electron/assets";
/// File name of the 256x256 application icon.
pub const ICON_FILE: &str = "icon.png";
/// File name of the 16x16 system-tray icon.
pub const TRAY_FILE: &str = "tray-icon.png";

/// Where the two icons land for a given output root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetPaths {
    pub icon: PathBuf,
    pub tray: PathBuf,
}

impl AssetPaths {
    pub fn under(root: &Path) -> Self {
        let dir = root.join(ASSETS_DIR);
        Self {
            icon: dir.join(ICON_FILE),
            tray: dir.join(TRAY_FILE),
        }
    }
}

/// Render the application icon and its tray variant and write both as PNG
/// under `root`. The assets directory is created if missing.
pub fn write_assets(root: &Path) -> Result<AssetPaths> {
    let paths = AssetPaths::under(root);

    let icon = icon::render_icon();

    if let Some(dir) = paths.icon.parent() {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create {}", dir.display()))?;
    }
    save_png(&icon, &paths.icon)?;

    let tray = icon::tray_icon(&icon);
    save_png(&tray, &paths.tray)?;

    Ok(paths)
}

fn save_png(img: &RgbaImage, path: &Path) -> Result<()> {
    img.save_with_format(path, ImageFormat::Png)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    log::info!(
        "Wrote {}x{} icon to {}",
        img.width(),
        img.height(),
        path.display()
    );
    Ok(())
}

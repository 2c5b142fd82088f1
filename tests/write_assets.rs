use image::ColorType;
use mic_icon_gen::assets::{write_assets, AssetPaths};
use mic_icon_gen::icon::{ICON_SIZE, TRAY_SIZE};

#[test]
fn writes_both_icons_with_alpha() {
    let root = tempfile::tempdir().unwrap();
    let paths = write_assets(root.path()).unwrap();
    assert_eq!(paths, AssetPaths::under(root.path()));

    let icon = image::open(&paths.icon).unwrap();
    assert_eq!((icon.width(), icon.height()), (ICON_SIZE, ICON_SIZE));
    assert_eq!(icon.color(), ColorType::Rgba8);

    let tray = image::open(&paths.tray).unwrap();
    assert_eq!((tray.width(), tray.height()), (TRAY_SIZE, TRAY_SIZE));
    assert_eq!(tray.color(), ColorType::Rgba8);
}

#[test]
fn creates_exactly_two_files() {
    let root = tempfile::tempdir().unwrap();
    let paths = write_assets(root.path()).unwrap();

    let dir = paths.icon.parent().unwrap();
    let mut names: Vec<_> = std::fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().into_string().unwrap())
        .collect();
    names.sort();
    assert_eq!(names, ["icon.png", "tray-icon.png"]);
}

#[test]
fn reuses_existing_assets_directory() {
    let root = tempfile::tempdir().unwrap();
    std::fs::create_dir_all(root.path().join("electron/assets")).unwrap();
    write_assets(root.path()).unwrap();
}

#[test]
fn reruns_are_byte_identical() {
    let root = tempfile::tempdir().unwrap();
    let paths = write_assets(root.path()).unwrap();
    let first = (
        std::fs::read(&paths.icon).unwrap(),
        std::fs::read(&paths.tray).unwrap(),
    );

    write_assets(root.path()).unwrap();
    let second = (
        std::fs::read(&paths.icon).unwrap(),
        std::fs::read(&paths.tray).unwrap(),
    );
    assert!(first == second);
}

#[test]
fn saved_icon_keeps_gradient_and_notches() {
    let root = tempfile::tempdir().unwrap();
    let paths = write_assets(root.path()).unwrap();
    let icon = image::open(&paths.icon).unwrap().into_rgba8();

    assert_eq!(icon.get_pixel(0, 0).0, [0, 0, 0, 0]);
    assert_eq!(icon.get_pixel(255, 255).0[3], 0);
    assert_eq!(icon.get_pixel(128, 0).0, [25, 118, 210, 255]);
}

use crate::canvas::{self, Bounds};
use image::imageops::{self, FilterType};
use image::{Rgba, Rgba32FImage, RgbaImage};

/// Side of the full-size application icon.
pub const ICON_SIZE: u32 = 256;
/// Side of the system-tray icon.
pub const TRAY_SIZE: u32 = 16;

const GRADIENT_TOP: [u8; 3] = [25, 118, 210];
const GRADIENT_BOTTOM: [u8; 3] = [92, 107, 192];

const CORNER_RADIUS: i32 = 32;

const MIC_X: i32 = 108;
const MIC_Y: i32 = 88;
const MIC_W: i32 = 40;
const MIC_H: i32 = 60;
const MIC_RADIUS: f32 = 20.0;
const GRILLE_LINES: i32 = 5;
const GRILLE_INSET: i32 = 8;

const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);
const GLYPH: Rgba<u8> = Rgba([255, 255, 255, 230]);
const GRILLE: Rgba<u8> = Rgba([GRADIENT_TOP[0], GRADIENT_TOP[1], GRADIENT_TOP[2], 255]);
const WAVE_NEAR: Rgba<u8> = Rgba([255, 255, 255, 180]);
const WAVE_FAR: Rgba<u8> = Rgba([255, 255, 255, 120]);
const WAVE_WIDTH: f32 = 3.0;

/// Render the 256x256 application icon: a blue gradient tile with a white
/// microphone and two sound waves on each side.
pub fn render_icon() -> RgbaImage {
    let mut img = RgbaImage::from_pixel(ICON_SIZE, ICON_SIZE, TRANSPARENT);

    paint_gradient(&mut img);
    clear_corners(&mut img);
    paint_microphone(&mut img);
    paint_sound_waves(&mut img);

    img
}

/// Downscale a rendered icon to tray size.
///
/// Resampling runs on premultiplied alpha so the transparent corner
/// notches do not bleed black into neighbouring pixels.
pub fn tray_icon(icon: &RgbaImage) -> RgbaImage {
    let premultiplied = Rgba32FImage::from_fn(icon.width(), icon.height(), |x, y| {
        let [r, g, b, a] = icon.get_pixel(x, y).0.map(|c| c as f32 / 255.0);
        Rgba([r * a, g * a, b * a, a])
    });

    let small = imageops::resize(&premultiplied, TRAY_SIZE, TRAY_SIZE, FilterType::Lanczos3);

    RgbaImage::from_fn(TRAY_SIZE, TRAY_SIZE, |x, y| {
        let [r, g, b, a] = small.get_pixel(x, y).0;
        let a = a.clamp(0.0, 1.0);
        if a <= 0.0 {
            return TRANSPARENT;
        }
        let straight = |c: f32| ((c / a).clamp(0.0, 1.0) * 255.0).round() as u8;
        Rgba([straight(r), straight(g), straight(b), (a * 255.0).round() as u8])
    })
}

/// Colour of gradient row `y`. Interpolates over the full canvas height,
/// so the last row stops one step short of `GRADIENT_BOTTOM`.
pub fn gradient_color(y: u32) -> Rgba<u8> {
    let t = y as f64 / ICON_SIZE as f64;
    let lerp = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t) as u8;
    Rgba([
        lerp(GRADIENT_TOP[0], GRADIENT_BOTTOM[0]),
        lerp(GRADIENT_TOP[1], GRADIENT_BOTTOM[1]),
        lerp(GRADIENT_TOP[2], GRADIENT_BOTTOM[2]),
        255,
    ])
}

fn paint_gradient(img: &mut RgbaImage) {
    log::debug!("painting background gradient");
    let right = img.width() as i32;
    for y in 0..img.height() {
        // Each band is two rows tall; the next one overwrites the lower row.
        let row = y as i32;
        canvas::fill_rect(img, Bounds::new(0, row, right, row + 1), gradient_color(y));
    }
}

/// Square notches in place of true rounded corners.
fn clear_corners(img: &mut RgbaImage) {
    log::debug!("clearing corners");
    let s = img.width() as i32;
    let r = CORNER_RADIUS;
    for b in [
        Bounds::new(0, 0, r, r),
        Bounds::new(s - r, 0, s, r),
        Bounds::new(0, s - r, r, s),
        Bounds::new(s - r, s - r, s, s),
    ] {
        canvas::fill_rect(img, b, TRANSPARENT);
    }
}

fn paint_microphone(img: &mut RgbaImage) {
    log::debug!("painting microphone");

    // Capsule
    canvas::fill_rounded_rect(
        img,
        Bounds::new(MIC_X, MIC_Y, MIC_X + MIC_W, MIC_Y + MIC_H),
        MIC_RADIUS,
        GLYPH,
    );

    // Grille
    for i in 0..GRILLE_LINES {
        let y = MIC_Y + 10 + i * 10;
        canvas::hline(
            img,
            MIC_X + GRILLE_INSET,
            MIC_X + MIC_W - GRILLE_INSET,
            y,
            2,
            GRILLE,
        );
    }

    // Stand
    canvas::fill_rect(img, Bounds::new(126, 148, 130, 178), GLYPH);

    // Base
    canvas::fill_ellipse(img, Bounds::new(103, 175, 153, 191), GLYPH);
}

fn paint_sound_waves(img: &mut RgbaImage) {
    log::debug!("painting sound waves");

    let waves = [
        (Bounds::new(148, 93, 178, 123), 315.0, 45.0, WAVE_NEAR),
        (Bounds::new(153, 88, 188, 128), 315.0, 45.0, WAVE_FAR),
        (Bounds::new(78, 93, 108, 123), 135.0, 225.0, WAVE_NEAR),
        (Bounds::new(68, 88, 103, 128), 135.0, 225.0, WAVE_FAR),
    ];
    for (b, start, end, color) in waves {
        canvas::stroke_arc(img, b, start, end, WAVE_WIDTH, color);
    }
}

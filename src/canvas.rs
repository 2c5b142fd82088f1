//! Raster primitives on an RGBA canvas.
//!
//! Boxes are inclusive pixel spans. A pixel belongs to a shape when its
//! centre (x + 0.5, y + 0.5) falls inside the continuous region
//! [x0, x1 + 1) x [y0, y1 + 1). Every write replaces the pixel outright.

use image::{Rgba, RgbaImage};

/// Inclusive pixel box `(x0, y0)..=(x1, y1)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub x0: i32,
    pub y0: i32,
    pub x1: i32,
    pub y1: i32,
}

impl Bounds {
    pub const fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    fn width(&self) -> f32 {
        (self.x1 - self.x0 + 1) as f32
    }

    fn height(&self) -> f32 {
        (self.y1 - self.y0 + 1) as f32
    }

    fn center(&self) -> (f32, f32) {
        (
            self.x0 as f32 + self.width() / 2.0,
            self.y0 as f32 + self.height() / 2.0,
        )
    }
}

/// Visit every canvas pixel inside `b`, passing its centre coordinates.
fn for_each_in<F>(img: &mut RgbaImage, b: Bounds, mut f: F)
where
    F: FnMut(f32, f32) -> Option<Rgba<u8>>,
{
    let (w, h) = (img.width() as i32, img.height() as i32);
    let (x_lo, x_hi) = (b.x0.max(0), b.x1.min(w - 1));
    let (y_lo, y_hi) = (b.y0.max(0), b.y1.min(h - 1));

    for y in y_lo..=y_hi {
        for x in x_lo..=x_hi {
            if let Some(c) = f(x as f32 + 0.5, y as f32 + 0.5) {
                img.put_pixel(x as u32, y as u32, c);
            }
        }
    }
}

pub fn fill_rect(img: &mut RgbaImage, b: Bounds, color: Rgba<u8>) {
    for_each_in(img, b, |_, _| Some(color));
}

/// Rectangle with each corner cut by a quarter circle of `radius`.
pub fn fill_rounded_rect(img: &mut RgbaImage, b: Bounds, radius: f32, color: Rgba<u8>) {
    let r = radius.min(b.width() / 2.0).min(b.height() / 2.0).max(0.0);
    let left = b.x0 as f32 + r;
    let right = (b.x1 + 1) as f32 - r;
    let top = b.y0 as f32 + r;
    let bottom = (b.y1 + 1) as f32 - r;

    for_each_in(img, b, |fx, fy| {
        // Distance from the nearest corner centre, zero outside the corner zones.
        let dx = (left - fx).max(fx - right).max(0.0);
        let dy = (top - fy).max(fy - bottom).max(0.0);
        (dx * dx + dy * dy <= r * r).then_some(color)
    });
}

/// Horizontal stroke `width` rows thick, centred on `y`. Even widths put
/// the extra row below `y`.
pub fn hline(img: &mut RgbaImage, x0: i32, x1: i32, y: i32, width: u32, color: Rgba<u8>) {
    if width == 0 {
        return;
    }
    let top = y - ((width - 1) / 2) as i32;
    fill_rect(img, Bounds::new(x0, top, x1, top + width as i32 - 1), color);
}

/// Ellipse inscribed in `b`.
pub fn fill_ellipse(img: &mut RgbaImage, b: Bounds, color: Rgba<u8>) {
    let (cx, cy) = b.center();
    let (rx, ry) = (b.width() / 2.0, b.height() / 2.0);

    for_each_in(img, b, |fx, fy| {
        (ellipse_norm(fx - cx, fy - cy, rx, ry) <= 1.0).then_some(color)
    });
}

/// Band of thickness `width` along the inside of the ellipse inscribed in
/// `b`, from `start_deg` clockwise to `end_deg`. 0° points right.
pub fn stroke_arc(
    img: &mut RgbaImage,
    b: Bounds,
    start_deg: f32,
    end_deg: f32,
    width: f32,
    color: Rgba<u8>,
) {
    let (cx, cy) = b.center();
    let (rx, ry) = (b.width() / 2.0, b.height() / 2.0);
    let (irx, iry) = (rx - width, ry - width);
    let sweep = (end_deg - start_deg).rem_euclid(360.0);

    for_each_in(img, b, |fx, fy| {
        let (dx, dy) = (fx - cx, fy - cy);
        if ellipse_norm(dx, dy, rx, ry) > 1.0 {
            return None;
        }
        // Inner ellipse collapses once the stroke is thicker than the radius.
        if irx > 0.0 && iry > 0.0 && ellipse_norm(dx, dy, irx, iry) < 1.0 {
            return None;
        }
        let angle = dy.atan2(dx).to_degrees().rem_euclid(360.0);
        ((angle - start_deg).rem_euclid(360.0) <= sweep).then_some(color)
    });
}

fn ellipse_norm(dx: f32, dy: f32, rx: f32, ry: f32) -> f32 {
    (dx / rx).powi(2) + (dy / ry).powi(2)
}

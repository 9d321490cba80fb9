//! Masked portrait overlay.
//!
//! The portrait is blended over the template with straight-alpha "over", then written back
//! only where the template is fully opaque. Semi-transparent template pixels (anti-aliased
//! borders) are left exactly as they were.

use image::{RgbaImage, imageops};

use crate::foundation::core::{PixelRect, Placement};
use crate::foundation::error::{CutinError, CutinResult};

/// Straight (non-premultiplied) RGBA8.
pub type Rgba8 = [u8; 4];

/// Template alpha a pixel must carry to receive portrait content.
pub const PAINTABLE_ALPHA: u8 = u8::MAX;

/// Whether a template pixel with this alpha may be overwritten by the portrait.
pub fn is_paintable(alpha: u8) -> bool {
    alpha == PAINTABLE_ALPHA
}

/// Binary per-pixel selector derived from a template region's alpha channel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OpaqueMask {
    width: u32,
    height: u32,
    bits: Vec<bool>,
}

impl OpaqueMask {
    pub fn from_region(region: &RgbaImage) -> Self {
        let (width, height) = region.dimensions();
        let bits = region.pixels().map(|p| is_paintable(p.0[3])).collect();
        Self {
            width,
            height,
            bits,
        }
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn get(&self, x: u32, y: u32) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        self.bits[(y as usize) * (self.width as usize) + (x as usize)]
    }

    /// Number of paintable pixels.
    pub fn count(&self) -> usize {
        self.bits.iter().filter(|&&b| b).count()
    }
}

/// Porter-Duff "over" on straight-alpha pixels.
pub fn over(dst: Rgba8, src: Rgba8) -> Rgba8 {
    let sa = u32::from(src[3]);
    if sa == 0 {
        return dst;
    }
    if sa == 255 {
        return src;
    }

    let da = u32::from(dst[3]);
    let src_w = sa * 255;
    let dst_w = da * (255 - sa);
    let total = src_w + dst_w;

    let mut out = [0u8; 4];
    out[3] = ((total + 127) / 255) as u8;
    for i in 0..3 {
        let c = u32::from(src[i]) * src_w + u32::from(dst[i]) * dst_w;
        out[i] = ((c + total / 2) / total) as u8;
    }
    out
}

pub fn over_in_place(dst: &mut RgbaImage, src: &RgbaImage) -> CutinResult<()> {
    if dst.dimensions() != src.dimensions() {
        return Err(CutinError::validation(
            "over_in_place expects equally sized rgba8 images",
        ));
    }
    for (d, s) in dst.pixels_mut().zip(src.pixels()) {
        d.0 = over(d.0, s.0);
    }
    Ok(())
}

/// Region of the template covered by a portrait of `portrait_dims` placed at `placement`.
///
/// `None` when the portrait lies entirely off-canvas.
pub fn overlap(
    template_dims: (u32, u32),
    portrait_dims: (u32, u32),
    placement: Placement,
) -> Option<PixelRect> {
    let canvas = PixelRect::from_origin_size(0, 0, template_dims.0, template_dims.1);
    let placed = PixelRect::from_origin_size(
        i64::from(placement.x),
        i64::from(placement.y),
        portrait_dims.0,
        portrait_dims.1,
    );
    let rect = canvas.intersect(placed);
    (!rect.is_empty()).then_some(rect)
}

/// Overlay `portrait` onto a copy of `template` with its top-left corner at `placement`.
///
/// Only fully opaque template pixels inside the overlap change. An off-canvas placement
/// returns an identical copy of the template.
pub fn composite(
    template: &RgbaImage,
    portrait: &RgbaImage,
    placement: Placement,
) -> CutinResult<RgbaImage> {
    let mut out = template.clone();
    let Some(rect) = overlap(template.dimensions(), portrait.dimensions(), placement) else {
        tracing::trace!(?placement, "portrait is off-canvas");
        return Ok(out);
    };

    // Overlap lies inside both images, so every coordinate below fits in u32.
    let (ox, oy) = (rect.x0 as u32, rect.y0 as u32);
    let (w, h) = (rect.width() as u32, rect.height() as u32);

    let mut region = imageops::crop_imm(template, ox, oy, w, h).to_image();
    let mask = OpaqueMask::from_region(&region);
    if mask.count() == 0 {
        return Ok(out);
    }

    let px = (rect.x0 - i64::from(placement.x)) as u32;
    let py = (rect.y0 - i64::from(placement.y)) as u32;
    let portrait_crop = imageops::crop_imm(portrait, px, py, w, h).to_image();

    over_in_place(&mut region, &portrait_crop)?;

    for (x, y, blended) in region.enumerate_pixels() {
        if mask.get(x, y) {
            out.put_pixel(ox + x, oy + y, *blended);
        }
    }

    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/unit/render/composite.rs"]
mod tests;

use std::path::Path;

use crate::{
    draw::raster::save_premul_rgba8_png,
    foundation::{
        core::Rgba8,
        error::{SigError, SigResult},
    },
    scene::frame::SceneFrame,
};

const MAX_DIM: u32 = 16_384;

/// Rasterize `frame` into premultiplied RGBA8 at `width` x `height` pixels.
///
/// The view window is stretched to the pixel size. `background`, when given, is painted
/// beneath the scene.
pub fn rasterize_frame(
    frame: &SceneFrame<'_>,
    width: u32,
    height: u32,
    background: Option<Rgba8>,
) -> SigResult<Vec<u8>> {
    if width == 0 || height == 0 || width > MAX_DIM || height > MAX_DIM {
        return Err(SigError::render(format!(
            "frame size {width}x{height} out of range (1..={MAX_DIM})"
        )));
    }

    let svg = frame.to_svg_sized(width, height);
    let tree = usvg::Tree::from_str(&svg, &usvg::Options::default())
        .map_err(|e| SigError::render(format!("parse frame svg: {e}")))?;

    let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| SigError::render("failed to allocate frame pixmap"))?;
    if let Some(bg) = background {
        pixmap.fill(resvg::tiny_skia::Color::from_rgba8(bg.r, bg.g, bg.b, bg.a));
    }

    let sx = (width as f32) / tree.size().width();
    let sy = (height as f32) / tree.size().height();
    let xform = resvg::tiny_skia::Transform::from_scale(sx, sy);

    resvg::render(&tree, xform, &mut pixmap.as_mut());
    Ok(pixmap.data().to_vec())
}

/// Rasterize `frame` and write it as a PNG.
pub fn save_frame_png(
    frame: &SceneFrame<'_>,
    path: &Path,
    width: u32,
    height: u32,
    background: Option<Rgba8>,
) -> SigResult<()> {
    let data = rasterize_frame(frame, width, height, background)?;
    save_premul_rgba8_png(path, &data, width, height)
}

#[cfg(test)]
#[path = "../../tests/unit/scene/raster.rs"]
mod tests;

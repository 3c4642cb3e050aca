use std::path::Path;

use crate::{
    draw::surface::{Ink, Segment, Surface},
    foundation::{
        core::{BezPath, Point, Rgba8},
        error::{SigError, SigResult},
    },
};

/// CPU raster drawing surface backed by `vello_cpu`.
///
/// The surface keeps a display list of stroked segments since the last clear and rasterizes it
/// on demand, so a host can snapshot the canvas at any point of a live session or replay.
#[derive(Clone, Debug)]
pub struct PixmapSurface {
    width: u16,
    height: u16,
    background: Option<Rgba8>,
    display: Vec<(Segment, Ink)>,
}

impl PixmapSurface {
    /// Transparent surface of the given pixel size.
    pub fn new(width: u32, height: u32) -> SigResult<Self> {
        let width: u16 = width
            .try_into()
            .map_err(|_| SigError::render("surface width exceeds u16"))?;
        let height: u16 = height
            .try_into()
            .map_err(|_| SigError::render("surface height exceeds u16"))?;
        if width == 0 || height == 0 {
            return Err(SigError::render("surface must be at least 1x1"));
        }
        Ok(Self {
            width,
            height,
            background: None,
            display: Vec::new(),
        })
    }

    /// Fill the surface with `color` before any ink.
    pub fn with_background(mut self, color: Rgba8) -> Self {
        self.background = Some(color);
        self
    }

    /// Pixel width.
    pub fn width(&self) -> u32 {
        u32::from(self.width)
    }

    /// Pixel height.
    pub fn height(&self) -> u32 {
        u32::from(self.height)
    }

    /// Number of segments currently on the surface.
    pub fn segment_count(&self) -> usize {
        self.display.len()
    }

    /// Rasterize the current contents into premultiplied RGBA8 bytes.
    pub fn render_premul_rgba8(&self) -> Vec<u8> {
        let mut ctx = vello_cpu::RenderContext::new(self.width, self.height);

        if let Some(bg) = self.background {
            ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(bg.r, bg.g, bg.b, bg.a));
            ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
                0.0,
                0.0,
                f64::from(self.width),
                f64::from(self.height),
            ));
        }

        for (segment, ink) in &self.display {
            let c = ink.color.with_opacity(ink.alpha);
            ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, c.a));
            ctx.set_stroke(
                vello_cpu::kurbo::Stroke::new(ink.width)
                    .with_caps(vello_cpu::kurbo::Cap::Round)
                    .with_join(vello_cpu::kurbo::Join::Round),
            );
            ctx.stroke_path(&bezpath_to_cpu(&segment.to_bezpath()));
        }

        ctx.flush();
        let mut pixmap = vello_cpu::Pixmap::new(self.width, self.height);
        ctx.render_to_pixmap(&mut pixmap);
        pixmap.data_as_u8_slice().to_vec()
    }

    /// Rasterize and write a PNG.
    pub fn save_png(&self, path: &Path) -> SigResult<()> {
        save_premul_rgba8_png(
            path,
            &self.render_premul_rgba8(),
            self.width(),
            self.height(),
        )
    }
}

impl Surface for PixmapSurface {
    fn clear(&mut self) {
        self.display.clear();
    }

    fn stroke(&mut self, segment: &Segment, ink: &Ink) {
        self.display.push((*segment, *ink));
    }
}

/// Un-premultiply `premul` and write it as an RGBA PNG.
pub fn save_premul_rgba8_png(path: &Path, premul: &[u8], width: u32, height: u32) -> SigResult<()> {
    if premul.len() != width as usize * height as usize * 4 {
        return Err(SigError::render("pixel buffer length does not match size"));
    }

    let straight: Vec<u8> = premul
        .chunks_exact(4)
        .flat_map(|px| {
            let a = px[3];
            let unpremul = |c: u8| -> u8 {
                if a == 0 {
                    0
                } else {
                    ((u16::from(c) * 255 + u16::from(a) / 2) / u16::from(a)).min(255) as u8
                }
            };
            [unpremul(px[0]), unpremul(px[1]), unpremul(px[2]), a]
        })
        .collect();

    image::save_buffer_with_format(
        path,
        &straight,
        width,
        height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .map_err(|e| SigError::render(format!("write png '{}': {e}", path.display())))
}

fn point_to_cpu(p: Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(point_to_cpu(p)),
            PathEl::LineTo(p) => out.line_to(point_to_cpu(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(point_to_cpu(p1), point_to_cpu(p2)),
            PathEl::CurveTo(p1, p2, p3) => {
                out.curve_to(point_to_cpu(p1), point_to_cpu(p2), point_to_cpu(p3));
            }
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/draw/raster.rs"]
mod tests;

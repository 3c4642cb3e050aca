use kurbo::Shape;
use ttf_parser::{Face, GlyphId, OutlineBuilder};

use crate::{
    foundation::{
        core::{BezPath, Point},
        error::{SigError, SigResult},
        fixed::compact,
    },
    path::bounds::{Bounds, ViewBox},
};

const PATH_DIGITS: usize = 2;

/// How typed text is broken into animated paths.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SplitMode {
    /// One path per glyph with a visible outline.
    #[default]
    Glyph,
    /// One path per whitespace-separated word.
    Word,
    /// The whole text as one path.
    Line,
}

impl std::str::FromStr for SplitMode {
    type Err = SigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "glyph" => Ok(Self::Glyph),
            "word" => Ok(Self::Word),
            "line" => Ok(Self::Line),
            other => Err(SigError::validation(format!(
                "unknown split mode '{other}' (expected glyph, word or line)"
            ))),
        }
    }
}

/// Layout parameters for [`outline_text`].
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct OutlineOptions {
    /// Em size in output units.
    pub font_size: f64,
    /// Extra advance after every glyph, in output units.
    pub letter_spacing: f64,
    /// Path granularity.
    pub split: SplitMode,
}

impl Default for OutlineOptions {
    fn default() -> Self {
        Self {
            font_size: 128.0,
            letter_spacing: 0.0,
            split: SplitMode::Glyph,
        }
    }
}

/// Outline paths of a piece of text plus their combined extent.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GlyphSet {
    /// Path data strings, in reading order.
    pub paths: Vec<String>,
    /// Exact extent of every path, `None` when there is no outline.
    pub bounds: Option<Bounds>,
}

impl GlyphSet {
    /// View window around the outlines, at least one unit wide and tall.
    pub fn view_box(&self) -> ViewBox {
        ViewBox::from_glyph_bounds(self.bounds)
    }

    /// True when nothing visible was produced.
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    fn push(&mut self, writer: PathWriter) {
        if writer.data.is_empty() {
            return;
        }
        let rect = writer.path.bounding_box();
        self.bounds = Bounds::merge(self.bounds, Some(Bounds::from_rect(rect)));
        self.paths.push(writer.data);
    }
}

/// Outline `text` with the font in `face_bytes`.
///
/// Glyphs are placed on a baseline at y = 0 with y growing downward. Characters the font does
/// not map fall back to glyph 0. Blank text yields an empty set.
#[tracing::instrument(skip(face_bytes), fields(bytes = face_bytes.len()))]
pub fn outline_text(face_bytes: &[u8], text: &str, options: &OutlineOptions) -> SigResult<GlyphSet> {
    let face = Face::parse(face_bytes, 0).map_err(|e| SigError::font(format!("parse font: {e}")))?;
    let units_per_em = face.units_per_em();
    if units_per_em == 0 {
        return Err(SigError::font("font reports zero units per em"));
    }
    if !options.font_size.is_finite() || options.font_size <= 0.0 {
        return Err(SigError::validation("font size must be finite and > 0"));
    }

    let mut set = GlyphSet::default();
    if text.trim().is_empty() {
        return Ok(set);
    }

    let layout = Layout {
        face: &face,
        scale: options.font_size / f64::from(units_per_em),
        letter_spacing: options.letter_spacing,
    };

    match options.split {
        SplitMode::Glyph => {
            let mut x = 0.0;
            for ch in text.chars() {
                let id = layout.glyph(ch);
                let mut writer = PathWriter::new(layout.scale, x);
                face.outline_glyph(id, &mut writer);
                set.push(writer);
                x += layout.glyph_advance(id);
            }
        }
        SplitMode::Word => {
            let mut cursor = 0.0;
            for word in text.split_whitespace() {
                let (writer, advance) = layout.run(word, cursor);
                set.push(writer);
                cursor += advance;
            }
        }
        SplitMode::Line => {
            let (writer, _) = layout.run(text, 0.0);
            set.push(writer);
        }
    }

    tracing::debug!(paths = set.paths.len(), "text outlined");
    Ok(set)
}

struct Layout<'a> {
    face: &'a Face<'a>,
    scale: f64,
    letter_spacing: f64,
}

impl Layout<'_> {
    fn glyph(&self, ch: char) -> GlyphId {
        self.face.glyph_index(ch).unwrap_or(GlyphId(0))
    }

    /// Pen advance after `id`. Glyphs without an advance do not move the pen.
    fn glyph_advance(&self, id: GlyphId) -> f64 {
        match self.face.glyph_hor_advance(id) {
            Some(adv) if adv > 0 => f64::from(adv) * self.scale + self.letter_spacing,
            _ => 0.0,
        }
    }

    /// Outline `run` as one path starting at `x`; returns the path and the run's advance.
    fn run(&self, run: &str, x: f64) -> (PathWriter, f64) {
        let mut writer = PathWriter::new(self.scale, x);
        let mut advance = 0.0;
        for ch in run.chars() {
            let id = self.glyph(ch);
            writer.origin_x = x + advance;
            self.face.outline_glyph(id, &mut writer);
            advance += self.glyph_advance(id);
        }
        (writer, advance)
    }
}

/// Collects font outline commands as compact path data and as a `kurbo` path.
struct PathWriter {
    scale: f64,
    origin_x: f64,
    data: String,
    path: BezPath,
}

impl PathWriter {
    fn new(scale: f64, origin_x: f64) -> Self {
        Self {
            scale,
            origin_x,
            data: String::new(),
            path: BezPath::new(),
        }
    }

    fn map(&self, x: f32, y: f32) -> Point {
        Point::new(
            self.origin_x + f64::from(x) * self.scale,
            -f64::from(y) * self.scale,
        )
    }

    fn command(&mut self, op: char, points: &[Point]) {
        self.data.push(op);
        let values = points.iter().flat_map(|p| [p.x, p.y]);
        for (i, v) in values.enumerate() {
            // Negative values carry their own separator.
            if i > 0 && v >= 0.0 {
                self.data.push(' ');
            }
            self.data.push_str(&compact(v, PATH_DIGITS));
        }
    }
}

impl OutlineBuilder for PathWriter {
    fn move_to(&mut self, x: f32, y: f32) {
        let p = self.map(x, y);
        self.command('M', &[p]);
        self.path.move_to(p);
    }

    fn line_to(&mut self, x: f32, y: f32) {
        let p = self.map(x, y);
        self.command('L', &[p]);
        self.path.line_to(p);
    }

    fn quad_to(&mut self, x1: f32, y1: f32, x: f32, y: f32) {
        let (c, p) = (self.map(x1, y1), self.map(x, y));
        self.command('Q', &[c, p]);
        self.path.quad_to(c, p);
    }

    fn curve_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x: f32, y: f32) {
        let (c1, c2, p) = (self.map(x1, y1), self.map(x2, y2), self.map(x, y));
        self.command('C', &[c1, c2, p]);
        self.path.curve_to(c1, c2, p);
    }

    fn close(&mut self) {
        self.data.push('Z');
        self.path.close_path();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/glyph/outline.rs"]
mod tests;

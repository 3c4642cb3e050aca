use std::{
    collections::BTreeMap,
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use crate::{
    capture::stroke::Stroke,
    draw::config::PadConfig,
    export::options::ExportOptions,
    foundation::error::{SigError, SigResult},
    glyph::library::FontLibrary,
};

/// Everything a session needs besides the strokes themselves.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Sampling and live ink.
    pub pad: PadConfig,
    /// Preview and export styling.
    pub export: ExportOptions,
    /// Font name to font file. Relative paths resolve against the config file's directory.
    pub fonts: BTreeMap<String, PathBuf>,
}

impl SessionConfig {
    /// Parse and validate a config from JSON.
    pub fn from_reader<R: std::io::Read>(r: R) -> SigResult<Self> {
        let cfg: Self = serde_json::from_reader(r)
            .map_err(|e| SigError::validation(format!("parse session config JSON: {e}")))?;
        cfg.pad.validate()?;
        cfg.export.validate()?;
        Ok(cfg)
    }

    /// Parse a config file, resolving relative font paths against its directory.
    pub fn from_path(path: impl AsRef<Path>) -> SigResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            SigError::validation(format!("open session config '{}': {e}", path.display()))
        })?;
        let mut cfg = Self::from_reader(BufReader::new(f))?;
        if let Some(dir) = path.parent() {
            for font in cfg.fonts.values_mut() {
                if font.is_relative() {
                    *font = dir.join(&*font);
                }
            }
        }
        Ok(cfg)
    }

    /// Font library over the configured fonts.
    pub fn font_library(&self) -> FontLibrary {
        FontLibrary::from_paths(self.fonts.clone())
    }
}

/// Parse captured strokes from JSON: an array of `{ "points": [{ "x", "y", "t", "v"? }] }`.
pub fn strokes_from_reader<R: std::io::Read>(r: R) -> SigResult<Vec<Stroke>> {
    serde_json::from_reader(r).map_err(|e| SigError::serde(format!("parse strokes JSON: {e}")))
}

/// Parse captured strokes from a JSON file.
pub fn strokes_from_path(path: impl AsRef<Path>) -> SigResult<Vec<Stroke>> {
    let path = path.as_ref();
    let f = File::open(path)
        .map_err(|e| SigError::validation(format!("open strokes '{}': {e}", path.display())))?;
    strokes_from_reader(BufReader::new(f))
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;

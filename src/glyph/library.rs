use std::{
    collections::{BTreeMap, HashMap},
    path::{Path, PathBuf},
    sync::Arc,
};

use crate::{
    foundation::error::{SigError, SigResult},
    glyph::outline::{GlyphSet, OutlineOptions, outline_text},
};

/// Named signature fonts and a byte cache keyed by file path.
///
/// Each file is read at most once; later lookups of the same path, under any name, share the
/// cached bytes.
#[derive(Clone, Debug, Default)]
pub struct FontLibrary {
    paths: BTreeMap<String, PathBuf>,
    cache: HashMap<PathBuf, Arc<Vec<u8>>>,
}

impl FontLibrary {
    /// Empty library.
    pub fn new() -> Self {
        Self::default()
    }

    /// Library with the given name to file mapping.
    pub fn from_paths(paths: BTreeMap<String, PathBuf>) -> Self {
        Self {
            paths,
            cache: HashMap::new(),
        }
    }

    /// Register or replace a font name.
    pub fn register(&mut self, name: impl Into<String>, path: impl Into<PathBuf>) {
        self.paths.insert(name.into(), path.into());
    }

    /// Registered names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.paths.keys().map(String::as_str)
    }

    /// File registered under `name`.
    pub fn path_of(&self, name: &str) -> Option<&Path> {
        self.paths.get(name).map(PathBuf::as_path)
    }

    /// Bytes of the font registered under `name`, reading the file on first use.
    pub fn load(&mut self, name: &str) -> SigResult<Arc<Vec<u8>>> {
        let path = self
            .paths
            .get(name)
            .ok_or_else(|| SigError::font(format!("unknown font \"{name}\"")))?;

        if let Some(bytes) = self.cache.get(path) {
            return Ok(Arc::clone(bytes));
        }

        let bytes = std::fs::read(path).map_err(|e| {
            tracing::warn!(font = name, path = %path.display(), error = %e, "font load failed");
            SigError::font(format!(
                "failed to load font \"{name}\" from '{}': {e}",
                path.display()
            ))
        })?;
        let bytes = Arc::new(bytes);
        self.cache.insert(path.clone(), Arc::clone(&bytes));
        tracing::debug!(font = name, bytes = bytes.len(), "font loaded");
        Ok(bytes)
    }

    /// Outline `text` with the font registered under `name`.
    pub fn outline(&mut self, name: &str, text: &str, options: &OutlineOptions) -> SigResult<GlyphSet> {
        let bytes = self.load(name)?;
        outline_text(&bytes, text, options)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/glyph/library.rs"]
mod tests;

use tracing::{debug, warn};

use crate::{
    foundation::error::SigResult,
    glyph::outline::GlyphSet,
    signature::{InputMode, Signature},
};

/// Handle for one text conversion request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ConversionRequest(u64);

/// Last-request-wins gate for asynchronous text conversion.
///
/// Every change of text, font or split issues a new request. A result is only applied if its
/// request is still the latest; anything older is dropped without effect.
#[derive(Clone, Debug, Default)]
pub struct TextConversion {
    latest: u64,
}

impl TextConversion {
    /// Gate with no request in flight.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a request, superseding every earlier one.
    pub fn issue(&mut self) -> ConversionRequest {
        self.latest += 1;
        ConversionRequest(self.latest)
    }

    /// Whether `request` is still the latest.
    pub fn is_current(&self, request: ConversionRequest) -> bool {
        request.0 == self.latest
    }

    /// Apply a finished conversion.
    ///
    /// Stale requests yield `None`. A failed conversion yields the empty typed signature, so
    /// downstream consumers keep working.
    pub fn settle(&self, request: ConversionRequest, result: SigResult<GlyphSet>) -> Option<Signature> {
        if !self.is_current(request) {
            debug!(request = request.0, latest = self.latest, "stale text conversion dropped");
            return None;
        }
        match result {
            Ok(glyphs) => Some(Signature::from_glyphs(&glyphs)),
            Err(err) => {
                warn!(error = %err, "text conversion failed; using empty signature");
                Some(Signature::empty(InputMode::Type))
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/glyph/request.rs"]
mod tests;

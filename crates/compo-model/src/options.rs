//! Configuration options for composition conversion.

use serde::{Deserialize, Serialize};

/// Whether template placeholders are inserted into the composition.
///
/// Placeholders (identifier issuer/assigner/type, ordinal codes) do not come
/// from the phenopacket; they exist so the output compares cleanly against a
/// precomputed target composition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FillMode {
    /// Insert placeholder values.
    #[default]
    Fill,
    /// Emit only values present in the source.
    Skip,
}

impl FillMode {
    pub fn is_fill(self) -> bool {
        matches!(self, Self::Fill)
    }
}

impl From<bool> for FillMode {
    fn from(fill: bool) -> Self {
        if fill { Self::Fill } else { Self::Skip }
    }
}

/// Options controlling a single document conversion.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConversionOptions {
    pub fill_mode: FillMode,
}

impl ConversionOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_fill_mode(mut self, fill_mode: FillMode) -> Self {
        self.fill_mode = fill_mode;
        self
    }
}

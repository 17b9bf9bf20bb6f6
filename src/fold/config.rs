// ============================================================================
// Fold Configuration
// Language extensions that affect constant evaluation
// ============================================================================

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for a [`ConstantFolder`](super::ConstantFolder)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FoldConfig {
    /// Whether `enable f16;` is in effect. When false any f16 operand or
    /// f16 conversion target is rejected.
    pub f16_enabled: bool,
}

impl FoldConfig {
    /// Create a configuration with no extensions enabled
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: Enable or disable the f16 extension
    pub fn with_f16_enabled(mut self, enabled: bool) -> Self {
        self.f16_enabled = enabled;
        self
    }
}

// ============================================================================
// Preset Configurations
// ============================================================================

impl FoldConfig {
    /// Core language only
    pub fn strict() -> Self {
        Self::new()
    }

    /// Core language plus `enable f16;`
    pub fn with_f16() -> Self {
        Self::new().with_f16_enabled(true)
    }
}

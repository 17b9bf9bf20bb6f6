// ============================================================================
// Fold Module
// Constant-expression evaluation over scalars
// ============================================================================

pub mod config;
mod folder;

pub use config::FoldConfig;
pub use folder::ConstantFolder;

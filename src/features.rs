//! Feature modules - logic separated from UI
//!
//! Features should not depend on UI components directly.

pub mod settings;

pub use settings::GlowSettings;

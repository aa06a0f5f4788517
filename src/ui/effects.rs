//! Visual effects
//!
//! - Layered radial gradient descriptions for the glowing border

pub mod gradient;

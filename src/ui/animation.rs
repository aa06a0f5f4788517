//! Animation state for the glowing border
//!
//! - [`direction`]: anchor ring walked by the moving highlight
//! - [`glow`]: phase controller owning every timer
//! - [`keyframes`]: initial glow keyframe generator
//! - [`hover`]: eased opacity of the hover highlight

pub mod direction;
pub mod glow;
pub mod hover;
pub mod keyframes;

pub use direction::Direction;
pub use glow::{GlowConfig, GlowController, Phase};
pub use hover::HighlightFade;
pub use keyframes::{GlowKeyframes, KeyframeEasing};

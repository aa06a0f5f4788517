//! UI module for the glowing border widget
//!
//! # Architecture
//!
//! The UI is organized into layers:
//!
//! - **Animation** (`animation`): Phase controller, sequencers and fades
//! - **Effects** (`effects`): Pure gradient descriptions and their renderer
//! - **Primitives** (`primitives`): Low-level Canvas programs
//! - **Widgets** (`widgets`): Composable UI patterns without app logic

pub mod animation;
pub mod effects;
pub mod primitives;
pub mod theme;
pub mod widgets;

//! Primitive UI elements - atomic building blocks
//!
//! This module contains the lowest-level UI components that implement
//! iced's `canvas::Program` trait directly.
//!
//! # Design Principles
//!
//! - **No app logic**: Primitives must not import from `crate::app`
//! - **Generic Message types**: Use type parameters for flexibility
//!
//! # Contents
//!
//! - [`GradientBorder`] - Gradient-painted rounded outline using Canvas

pub mod gradient_border;

pub use gradient_border::{GradientBorder, view_gradient_border};

//! Border anchor directions
//!
//! The moving highlight sits on one of four anchors around the border.
//! They form the ring TOP -> LEFT -> BOTTOM -> RIGHT -> TOP.

use serde::{Deserialize, Serialize};

/// Anchor point of the moving highlight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    #[default]
    Top,
    Left,
    Bottom,
    Right,
}

impl Direction {
    /// Ring order
    pub const ALL: [Direction; 4] = [
        Direction::Top,
        Direction::Left,
        Direction::Bottom,
        Direction::Right,
    ];

    /// Position in the ring
    pub fn index(self) -> usize {
        match self {
            Self::Top => 0,
            Self::Left => 1,
            Self::Bottom => 2,
            Self::Right => 3,
        }
    }

    /// Direction at a ring position, wrapping
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % Self::ALL.len()]
    }

    /// Step one position around the ring
    ///
    /// Clockwise walks TOP -> LEFT -> BOTTOM -> RIGHT.
    pub fn rotate(self, clockwise: bool) -> Self {
        let len = Self::ALL.len();
        let next = if clockwise {
            (self.index() + 1 + len) % len
        } else {
            (self.index() + len - 1) % len
        };
        Self::from_index(next)
    }
}

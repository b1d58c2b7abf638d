//! Sprite sheet frame handles
//!
//! The simulation never touches decoded images. It stores [`FrameId`]s and
//! the renderer resolves them to whatever texture type it owns.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::tuning::Tuning;

/// Errors raised while assembling an [`AssetBundle`]
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AssetError {
    #[error("animation for {0:?} has no frames")]
    EmptyAnimation(Sheet),
    #[error("sprite sheets need at least one frame column")]
    ZeroColumns,
}

/// Source image a frame is cut from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sheet {
    Beach,
    Crab,
    Bird,
    Fish,
}

/// Opaque handle for one frame of a sprite sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FrameId {
    pub sheet: Sheet,
    pub row: u32,
    pub column: u32,
}

impl FrameId {
    /// A whole, unsliced image
    pub const fn single(sheet: Sheet) -> Self {
        Self {
            sheet,
            row: 0,
            column: 0,
        }
    }
}

/// Every frame the game can display, built once at startup
#[derive(Debug, Clone, PartialEq)]
pub struct AssetBundle {
    pub beach: FrameId,
    pub fish: FrameId,
    pub crab_frames: Vec<FrameId>,
    pub bird_frames: Vec<FrameId>,
}

impl AssetBundle {
    pub fn new(
        beach: FrameId,
        fish: FrameId,
        crab_frames: Vec<FrameId>,
        bird_frames: Vec<FrameId>,
    ) -> Result<Self, AssetError> {
        if crab_frames.is_empty() {
            return Err(AssetError::EmptyAnimation(Sheet::Crab));
        }
        if bird_frames.is_empty() {
            return Err(AssetError::EmptyAnimation(Sheet::Bird));
        }

        Ok(Self {
            beach,
            fish,
            crab_frames,
            bird_frames,
        })
    }

    /// Slice the reference sheets: one animation row of `columns` frames
    /// for the crab and bird, single images for the beach and fish.
    pub fn from_sheets(columns: u32, crab_row: u32, bird_row: u32) -> Result<Self, AssetError> {
        if columns == 0 {
            return Err(AssetError::ZeroColumns);
        }

        Self::new(
            FrameId::single(Sheet::Beach),
            FrameId::single(Sheet::Fish),
            animation_row(Sheet::Crab, crab_row, columns),
            animation_row(Sheet::Bird, bird_row, columns),
        )
    }

    pub fn from_tuning(tuning: &Tuning) -> Result<Self, AssetError> {
        Self::from_sheets(
            tuning.animation_columns,
            tuning.crab_animation_row,
            tuning.bird_animation_row,
        )
    }
}

fn animation_row(sheet: Sheet, row: u32, columns: u32) -> Vec<FrameId> {
    (0..columns).map(|column| FrameId { sheet, row, column }).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_sheets_slices_rows() {
        let assets = AssetBundle::from_sheets(4, 0, 2).unwrap();
        assert_eq!(assets.crab_frames.len(), 4);
        assert_eq!(assets.bird_frames[3], FrameId {
            sheet: Sheet::Bird,
            row: 2,
            column: 3,
        });
        assert_eq!(assets.fish, FrameId::single(Sheet::Fish));
    }

    #[test]
    fn test_zero_columns_rejected() {
        assert_eq!(
            AssetBundle::from_sheets(0, 0, 0).unwrap_err(),
            AssetError::ZeroColumns
        );
    }

    #[test]
    fn test_empty_animation_rejected() {
        let err = AssetBundle::new(
            FrameId::single(Sheet::Beach),
            FrameId::single(Sheet::Fish),
            vec![FrameId::single(Sheet::Crab)],
            Vec::new(),
        )
        .unwrap_err();
        assert_eq!(err, AssetError::EmptyAnimation(Sheet::Bird));
    }
}

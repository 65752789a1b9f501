//! The seven dimensional levels.

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// One of the seven fixed levels within a spiral.
///
/// The ordinal → meaning mapping is frozen:
///
/// | Ordinal | Level | Meaning |
/// |---------|-----------|------------------------------------------|
/// | 0 | Potential | Pure possibility, nothing instantiated |
/// | 1 | Point | Single instantiation, moment of existence |
/// | 2 | Length | Extension in one dimension |
/// | 3 | Width | Extension in two dimensions |
/// | 4 | Plane | Surface, 2D completeness |
/// | 5 | Volume | Full 3D existence |
/// | 6 | Whole | Complete entity, ready for the next spiral |
///
/// There is deliberately no `next()`/`prev()` — stepwise advance is the
/// pattern the helix replaces, not a primitive it offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum HelixLevel {
    Potential = 0,
    Point = 1,
    Length = 2,
    Width = 3,
    Plane = 4,
    Volume = 5,
    Whole = 6,
}

impl HelixLevel {
    /// All seven levels in ordinal order.
    pub const ALL: [HelixLevel; 7] = [
        HelixLevel::Potential,
        HelixLevel::Point,
        HelixLevel::Length,
        HelixLevel::Width,
        HelixLevel::Plane,
        HelixLevel::Volume,
        HelixLevel::Whole,
    ];

    /// Convert an ordinal to a level. Fails with [`Error::OutOfRange`]
    /// for anything outside `0..=6`.
    pub fn from_ordinal(ordinal: i64) -> Result<Self> {
        match ordinal {
            0 => Ok(HelixLevel::Potential),
            1 => Ok(HelixLevel::Point),
            2 => Ok(HelixLevel::Length),
            3 => Ok(HelixLevel::Width),
            4 => Ok(HelixLevel::Plane),
            5 => Ok(HelixLevel::Volume),
            6 => Ok(HelixLevel::Whole),
            other => Err(Error::OutOfRange(other)),
        }
    }

    pub fn ordinal(self) -> u8 {
        self as u8
    }

    pub fn name(self) -> &'static str {
        match self {
            HelixLevel::Potential => "Potential",
            HelixLevel::Point => "Point",
            HelixLevel::Length => "Length",
            HelixLevel::Width => "Width",
            HelixLevel::Plane => "Plane",
            HelixLevel::Volume => "Volume",
            HelixLevel::Whole => "Whole",
        }
    }

    /// Display glyph used in demos and dumps.
    pub fn symbol(self) -> &'static str {
        match self {
            HelixLevel::Potential => "○",
            HelixLevel::Point => "•",
            HelixLevel::Length => "━",
            HelixLevel::Width => "▭",
            HelixLevel::Plane => "▦",
            HelixLevel::Volume => "▣",
            HelixLevel::Whole => "◉",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            HelixLevel::Potential => "Pure possibility, nothing instantiated",
            HelixLevel::Point => "Single instantiation, moment of existence",
            HelixLevel::Length => "Extension in one dimension",
            HelixLevel::Width => "Extension in two dimensions",
            HelixLevel::Plane => "Surface, 2D completeness",
            HelixLevel::Volume => "Full 3D existence",
            HelixLevel::Whole => "Complete entity, ready for next spiral",
        }
    }
}

impl std::fmt::Display for HelixLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl TryFrom<i64> for HelixLevel {
    type Error = Error;

    fn try_from(ordinal: i64) -> Result<Self> {
        HelixLevel::from_ordinal(ordinal)
    }
}

// crates/domain/src/model/pages.rs
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// 原稿用紙換算の枚数。
///
/// Stored as exact hundredths of a page so that two-decimal rounding never
/// depends on floating point.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ManuscriptPages(u64);

impl ManuscriptPages {
    /// Characters (or weighted cells) per 400字詰め page.
    pub const CELLS_PER_PAGE: u64 = 400;

    pub const ZERO: Self = Self(0);

    #[inline]
    pub const fn from_hundredths(hundredths: u64) -> Self {
        Self(hundredths)
    }

    /// Pages for `cells` filled cells, rounded half-up to two decimals.
    #[inline]
    pub const fn from_cells(cells: u64) -> Self {
        // cells * 100 / 400, half-up
        Self((cells * 100 + Self::CELLS_PER_PAGE / 2) / Self::CELLS_PER_PAGE)
    }

    #[inline]
    pub const fn hundredths(self) -> u64 {
        self.0
    }

    #[allow(clippy::cast_precision_loss)]
    pub fn as_f64(self) -> f64 {
        self.0 as f64 / 100.0
    }
}

impl fmt::Display for ManuscriptPages {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

impl Serialize for ManuscriptPages {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.as_f64())
    }
}

impl<'de> Deserialize<'de> for ManuscriptPages {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let pages = f64::deserialize(deserializer)?;
        if !pages.is_finite() || pages < 0.0 {
            return Err(serde::de::Error::custom("manuscript pages must be a non-negative number"));
        }
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        Ok(Self((pages * 100.0).round() as u64))
    }
}

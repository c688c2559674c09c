//! Track geometry and padded/logical index arithmetic.
//!
//! The track holds the padded sequence `[clone(last), item0, .., item(n-1), clone(first)]`, so
//! padded index `p` is drawn at offset `-p * unit`. Offsets are negative (or zero) pixel
//! translations along the horizontal axis.

/// Horizontal layout of the padded track.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Geometry {
    /// Rendered width plus right margin of a single item.
    pub unit: f64,
    /// Number of real items (clones excluded).
    pub item_count: usize,
}

impl Geometry {
    /// Builds the geometry for `item_count` real items of width `unit`.
    ///
    /// Degenerate units (negative or non-finite) are treated as zero.
    pub fn new(unit: f64, item_count: usize) -> Self {
        let unit = if unit.is_finite() && unit > 0.0 { unit } else { 0.0 };
        Self { unit, item_count }
    }

    /// Padded index of the appended clone of item 0.
    pub fn last_padded(&self) -> usize {
        self.item_count + 1
    }

    pub fn offset_of(&self, padded: usize) -> f64 {
        -(padded as f64) * self.unit
    }

    /// Leftmost bound, at the appended clone.
    pub fn max_offset(&self) -> f64 {
        self.offset_of(self.last_padded())
    }

    /// Rightmost bound, at the prepended clone.
    pub fn min_offset(&self) -> f64 {
        0.0
    }

    /// Offset showing real item 0.
    pub fn init_offset(&self) -> f64 {
        self.offset_of(1)
    }

    /// Offset showing real item `n - 1`.
    pub fn last_offset(&self) -> f64 {
        self.max_offset() + self.unit
    }

    /// Width the track needs to hold every padded item.
    pub fn track_width(&self) -> f64 {
        -self.max_offset()
    }

    pub fn clamp(&self, offset: f64) -> f64 {
        offset.clamp(self.max_offset(), self.min_offset())
    }

    /// Whether `offset` lies on (or past) either bound.
    pub fn touches_bound(&self, offset: f64) -> bool {
        offset >= self.min_offset() || offset <= self.max_offset()
    }

    /// Maps a padded index to the logical index it displays.
    ///
    /// The two clones map to the real items they mirror.
    pub fn logical_of(&self, padded: usize) -> usize {
        if padded == 0 {
            self.item_count.saturating_sub(1)
        } else if padded >= self.last_padded() {
            0
        } else {
            padded - 1
        }
    }

    pub fn is_clone(&self, padded: usize) -> bool {
        padded == 0 || padded == self.last_padded()
    }

    /// The real item a clone stands in for; other indexes map to themselves.
    pub fn unwrap_clone(&self, padded: usize) -> usize {
        if padded == 0 {
            self.item_count
        } else if padded >= self.last_padded() {
            1
        } else {
            padded
        }
    }
}

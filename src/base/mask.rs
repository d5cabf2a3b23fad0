//! Boundary flag set
//!
//! A [`Mask`] is the compact description of a range's shape: whether it is
//! empty, and for each side whether the bound is infinite or inclusive.
//! [`Range`](crate::Range) is the structured form; masks exist for callers
//! that want to inspect or build ranges flag by flag.

use bitflags::bitflags;

bitflags! {
    /// Bit flags describing the boundaries of a range
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Mask: u8 {
        /// The range is empty
        const EMPTY = 1 << 1;
        /// The lower bound includes its value
        const LOWER_CLOSED = 1 << 2;
        /// The upper bound includes its value
        const UPPER_CLOSED = 1 << 3;
        /// There is no lower bound
        const LOWER_INFINITE = 1 << 4;
        /// There is no upper bound
        const UPPER_INFINITE = 1 << 5;
    }
}

impl Default for Mask {
    fn default() -> Self {
        Mask::NONE
    }
}

impl Mask {
    /// No flags: both bounds finite and exclusive
    pub const NONE: Mask = Mask::empty();

    /// The `EMPTY` flag is set
    ///
    /// Not to be confused with [`Mask::is_empty`], which checks for no flags
    /// at all.
    pub fn is_empty_range(self) -> bool {
        self.contains(Mask::EMPTY)
    }

    /// Neither side is infinite
    pub fn is_bounded(self) -> bool {
        self.has_lower_bound() && self.has_upper_bound()
    }

    pub fn has_lower_bound(self) -> bool {
        !self.contains(Mask::LOWER_INFINITE)
    }

    pub fn has_upper_bound(self) -> bool {
        !self.contains(Mask::UPPER_INFINITE)
    }

    /// A lower bound exists and includes its value
    pub fn is_lower_closed(self) -> bool {
        self.has_lower_bound() && self.contains(Mask::LOWER_CLOSED)
    }

    /// An upper bound exists and includes its value
    pub fn is_upper_closed(self) -> bool {
        self.has_upper_bound() && self.contains(Mask::UPPER_CLOSED)
    }
}

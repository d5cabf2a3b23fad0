//! Range values
//!
//! A [`Range`] is a contiguous interval over an ordered value domain. Each
//! side is a [`Bound`]: unbounded, open (value excluded) or closed (value
//! included). The empty range is its own variant rather than a flag on
//! ordinary bounds, so every predicate can treat it explicitly.
//!
//! Ranges are plain immutable values. Every algebra operation returns a
//! new range.

mod algebra;
mod error;

pub use error::InvalidOperation;

use crate::base::Mask;

/// One end of a range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bound<T> {
    /// No bound on this side (infinite)
    Unbounded,
    /// The value itself is excluded
    Open(T),
    /// The value itself is included
    Closed(T),
}

impl<T> Bound<T> {
    /// Build a finite bound with the given inclusivity
    pub fn new(value: T, closed: bool) -> Self {
        if closed {
            Bound::Closed(value)
        } else {
            Bound::Open(value)
        }
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            Bound::Unbounded => None,
            Bound::Open(v) | Bound::Closed(v) => Some(v),
        }
    }

    pub fn into_value(self) -> Option<T> {
        match self {
            Bound::Unbounded => None,
            Bound::Open(v) | Bound::Closed(v) => Some(v),
        }
    }

    pub fn is_unbounded(&self) -> bool {
        matches!(self, Bound::Unbounded)
    }

    pub fn is_closed(&self) -> bool {
        matches!(self, Bound::Closed(_))
    }

    pub fn as_ref(&self) -> Bound<&T> {
        match self {
            Bound::Unbounded => Bound::Unbounded,
            Bound::Open(v) => Bound::Open(v),
            Bound::Closed(v) => Bound::Closed(v),
        }
    }

    /// Transform the bound value, keeping inclusivity
    pub fn map<U, F>(self, f: F) -> Bound<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Bound::Unbounded => Bound::Unbounded,
            Bound::Open(v) => Bound::Open(f(v)),
            Bound::Closed(v) => Bound::Closed(f(v)),
        }
    }

    /// Fallible version of [`Bound::map`]
    pub fn try_map<U, E, F>(self, f: F) -> Result<Bound<U>, E>
    where
        F: FnOnce(T) -> Result<U, E>,
    {
        Ok(match self {
            Bound::Unbounded => Bound::Unbounded,
            Bound::Open(v) => Bound::Open(f(v)?),
            Bound::Closed(v) => Bound::Closed(f(v)?),
        })
    }
}

/// A contiguous interval over an ordered value domain
///
/// Equality is structural: two ranges are equal only if they have the same
/// shape and the same bound values. `(0,0)` and `empty` denote the same set
/// but are not equal.
///
/// # Examples
///
/// ```rust
/// use pgrange::{Bound, Range};
///
/// let r = Range::new(Bound::Closed(1), Bound::Open(10));
/// assert!(r.contains_point(&5));
/// assert!(!r.contains_point(&10));
/// assert_eq!(r.to_string(), "[1,10)");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Range<T> {
    /// The empty set
    Empty,
    /// A non-empty interval between two bounds
    Bounded { lower: Bound<T>, upper: Bound<T> },
}

impl<T> Default for Range<T> {
    fn default() -> Self {
        Range::Empty
    }
}

impl<T> Range<T> {
    pub const fn empty() -> Self {
        Range::Empty
    }

    pub fn new(lower: Bound<T>, upper: Bound<T>) -> Self {
        Range::Bounded { lower, upper }
    }

    /// `(,)` - every value
    pub const fn unbounded() -> Self {
        Range::Bounded {
            lower: Bound::Unbounded,
            upper: Bound::Unbounded,
        }
    }

    /// `[lower,upper]`
    pub fn closed(lower: T, upper: T) -> Self {
        Self::new(Bound::Closed(lower), Bound::Closed(upper))
    }

    /// `(lower,upper)`
    pub fn open(lower: T, upper: T) -> Self {
        Self::new(Bound::Open(lower), Bound::Open(upper))
    }

    /// `[lower,upper)`
    pub fn closed_open(lower: T, upper: T) -> Self {
        Self::new(Bound::Closed(lower), Bound::Open(upper))
    }

    /// `(lower,upper]`
    pub fn open_closed(lower: T, upper: T) -> Self {
        Self::new(Bound::Open(lower), Bound::Closed(upper))
    }

    /// Build a range from optional bound values and a flag mask
    ///
    /// `EMPTY` wins over everything else. A side is unbounded when its
    /// infinite flag is set or its value is missing; otherwise the closed
    /// flag selects inclusivity.
    ///
    /// ```rust
    /// use pgrange::{Mask, Range};
    ///
    /// let r = Range::from_mask(Some(0), None, Mask::LOWER_CLOSED | Mask::UPPER_INFINITE);
    /// assert_eq!(r.to_string(), "[0,)");
    /// ```
    pub fn from_mask(lower: Option<T>, upper: Option<T>, mask: Mask) -> Self {
        if mask.is_empty_range() {
            return Range::Empty;
        }

        let lower = match lower {
            Some(value) if mask.has_lower_bound() => Bound::new(value, mask.is_lower_closed()),
            _ => Bound::Unbounded,
        };
        let upper = match upper {
            Some(value) if mask.has_upper_bound() => Bound::new(value, mask.is_upper_closed()),
            _ => Bound::Unbounded,
        };

        Range::Bounded { lower, upper }
    }

    /// Flag view of this range
    pub fn mask(&self) -> Mask {
        match self {
            Range::Empty => Mask::EMPTY,
            Range::Bounded { lower, upper } => {
                let mut mask = Mask::NONE;
                match lower {
                    Bound::Unbounded => mask |= Mask::LOWER_INFINITE,
                    Bound::Closed(_) => mask |= Mask::LOWER_CLOSED,
                    Bound::Open(_) => {}
                }
                match upper {
                    Bound::Unbounded => mask |= Mask::UPPER_INFINITE,
                    Bound::Closed(_) => mask |= Mask::UPPER_CLOSED,
                    Bound::Open(_) => {}
                }
                mask
            }
        }
    }

    /// Split into `(lower, upper, mask)`, the inverse of [`Range::from_mask`]
    pub fn into_parts(self) -> (Option<T>, Option<T>, Mask) {
        let mask = self.mask();
        match self {
            Range::Empty => (None, None, mask),
            Range::Bounded { lower, upper } => (lower.into_value(), upper.into_value(), mask),
        }
    }

    /// Lower bound, or `None` for the empty range
    pub fn lower(&self) -> Option<&Bound<T>> {
        match self {
            Range::Empty => None,
            Range::Bounded { lower, .. } => Some(lower),
        }
    }

    /// Upper bound, or `None` for the empty range
    pub fn upper(&self) -> Option<&Bound<T>> {
        match self {
            Range::Empty => None,
            Range::Bounded { upper, .. } => Some(upper),
        }
    }

    pub fn lower_value(&self) -> Option<&T> {
        self.lower().and_then(Bound::value)
    }

    pub fn upper_value(&self) -> Option<&T> {
        self.upper().and_then(Bound::value)
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Range::Empty)
    }

    /// Neither side is infinite
    pub fn is_bounded(&self) -> bool {
        self.mask().is_bounded()
    }

    pub fn has_lower_bound(&self) -> bool {
        self.mask().has_lower_bound()
    }

    pub fn has_upper_bound(&self) -> bool {
        self.mask().has_upper_bound()
    }

    pub fn is_lower_bound_closed(&self) -> bool {
        self.mask().is_lower_closed()
    }

    pub fn is_upper_bound_closed(&self) -> bool {
        self.mask().is_upper_closed()
    }

    pub fn as_ref(&self) -> Range<&T> {
        match self {
            Range::Empty => Range::Empty,
            Range::Bounded { lower, upper } => Range::Bounded {
                lower: lower.as_ref(),
                upper: upper.as_ref(),
            },
        }
    }

    /// Transform both bound values, keeping the shape
    pub fn map<U, F>(self, mut f: F) -> Range<U>
    where
        F: FnMut(T) -> U,
    {
        match self {
            Range::Empty => Range::Empty,
            Range::Bounded { lower, upper } => Range::Bounded {
                lower: lower.map(&mut f),
                upper: upper.map(&mut f),
            },
        }
    }

    /// Fallible version of [`Range::map`]; the lower bound is converted first
    pub fn try_map<U, E, F>(self, mut f: F) -> Result<Range<U>, E>
    where
        F: FnMut(T) -> Result<U, E>,
    {
        match self {
            Range::Empty => Ok(Range::Empty),
            Range::Bounded { lower, upper } => Ok(Range::Bounded {
                lower: lower.try_map(&mut f)?,
                upper: upper.try_map(&mut f)?,
            }),
        }
    }
}

#[cfg(test)]
mod tests;

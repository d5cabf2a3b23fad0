//! Interval algebra over [`Range`] values
//!
//! Predicates (containment, ordering, adjacency) only need `PartialOrd` on
//! the bound values. The set operations (union, intersection, difference)
//! additionally clone the bounds they keep.
//!
//! Bounds are compared inclusivity-aware: among lower bounds `Unbounded`
//! sorts first and `[v` sorts before `(v`; among upper bounds `Unbounded`
//! sorts last and `v)` sorts before `v]`. Ties in union therefore prefer the
//! inclusive bound and ties in intersection prefer the exclusive one.
//!
//! Values are expected to be totally ordered. Incomparable values (such as
//! `NaN`) make every strict predicate false and leave the left operand's
//! bound in place for the set operations.

use std::cmp::Ordering;

use super::{Bound, InvalidOperation, Range};

fn cmp_lower<T: PartialOrd>(a: &Bound<T>, b: &Bound<T>) -> Option<Ordering> {
    match (a, b) {
        (Bound::Unbounded, Bound::Unbounded) => Some(Ordering::Equal),
        (Bound::Unbounded, _) => Some(Ordering::Less),
        (_, Bound::Unbounded) => Some(Ordering::Greater),
        (Bound::Closed(x), Bound::Open(y)) if x == y => Some(Ordering::Less),
        (Bound::Open(x), Bound::Closed(y)) if x == y => Some(Ordering::Greater),
        (Bound::Open(x) | Bound::Closed(x), Bound::Open(y) | Bound::Closed(y)) => x.partial_cmp(y),
    }
}

fn cmp_upper<T: PartialOrd>(a: &Bound<T>, b: &Bound<T>) -> Option<Ordering> {
    match (a, b) {
        (Bound::Unbounded, Bound::Unbounded) => Some(Ordering::Equal),
        (Bound::Unbounded, _) => Some(Ordering::Greater),
        (_, Bound::Unbounded) => Some(Ordering::Less),
        (Bound::Open(x), Bound::Closed(y)) if x == y => Some(Ordering::Less),
        (Bound::Closed(x), Bound::Open(y)) if x == y => Some(Ordering::Greater),
        (Bound::Open(x) | Bound::Closed(x), Bound::Open(y) | Bound::Closed(y)) => x.partial_cmp(y),
    }
}

fn le(ordering: Option<Ordering>) -> bool {
    matches!(ordering, Some(Ordering::Less | Ordering::Equal))
}

/// Does `point` lie on the inner side of a lower bound?
fn above_lower<T: PartialOrd>(lower: &Bound<T>, point: &T) -> bool {
    match lower {
        Bound::Unbounded => true,
        Bound::Open(v) => v < point,
        Bound::Closed(v) => v <= point,
    }
}

/// Does `point` lie on the inner side of an upper bound?
fn below_upper<T: PartialOrd>(upper: &Bound<T>, point: &T) -> bool {
    match upper {
        Bound::Unbounded => true,
        Bound::Open(v) => v > point,
        Bound::Closed(v) => v >= point,
    }
}

/// Two finite bounds share a value and exactly one of them includes it
fn tiles<T: PartialOrd>(a: &Bound<T>, b: &Bound<T>) -> bool {
    match (a.value(), b.value()) {
        (Some(x), Some(y)) => x == y && a.is_closed() != b.is_closed(),
        _ => false,
    }
}

fn rejected<T>(error: InvalidOperation) -> Result<Range<T>, InvalidOperation> {
    tracing::debug!(operation = error.operation(), %error, "range operation rejected");
    Err(error)
}

impl<T: PartialOrd> Range<T> {
    /// Check if `point` lies inside this range
    ///
    /// The empty range contains no points; `(,)` contains all of them.
    ///
    /// ```rust
    /// use pgrange::Range;
    ///
    /// let r = Range::closed_open(1, 10);
    /// assert!(r.contains_point(&1));
    /// assert!(r.contains_point(&5));
    /// assert!(!r.contains_point(&10));
    /// assert!(!r.contains_point(&-5));
    /// ```
    pub fn contains_point(&self, point: &T) -> bool {
        match self {
            Range::Empty => false,
            Range::Bounded { lower, upper } => above_lower(lower, point) && below_upper(upper, point),
        }
    }

    /// Check if every point of `other` lies inside this range
    ///
    /// Every range contains the empty range except the empty range itself,
    /// which contains nothing.
    pub fn contains_range(&self, other: &Range<T>) -> bool {
        match (self, other) {
            (Range::Bounded { .. }, Range::Empty) => true,
            (Range::Empty, _) => false,
            (
                Range::Bounded { lower, upper },
                Range::Bounded {
                    lower: other_lower,
                    upper: other_upper,
                },
            ) => le(cmp_lower(lower, other_lower)) && le(cmp_upper(other_upper, upper)),
        }
    }

    /// Check if this range lies entirely to the right of `other`
    ///
    /// False if either range is empty or the two sides that would have to be
    /// compared are unbounded. `[5,6)` is right of `[1,5)` but not of
    /// `[1,5]`.
    pub fn strictly_right_of(&self, other: &Range<T>) -> bool {
        match (self.lower(), other.upper()) {
            (Some(Bound::Closed(a)), Some(Bound::Closed(b))) => a > b,
            (Some(lower), Some(upper)) => match (lower.value(), upper.value()) {
                (Some(a), Some(b)) => a >= b,
                _ => false,
            },
            _ => false,
        }
    }

    /// Check if this range lies entirely to the left of `other`
    pub fn strictly_left_of(&self, other: &Range<T>) -> bool {
        match (self.upper(), other.lower()) {
            (Some(Bound::Closed(a)), Some(Bound::Closed(b))) => a < b,
            (Some(upper), Some(lower)) => match (upper.value(), lower.value()) {
                (Some(a), Some(b)) => a <= b,
                _ => false,
            },
            _ => false,
        }
    }

    /// Check if this range reaches further right than `other`
    ///
    /// At equal upper values a closed upper bound on this range wins.
    pub fn extends_right_of(&self, other: &Range<T>) -> bool {
        match (self.upper(), other.upper()) {
            (Some(_), Some(Bound::Unbounded)) | (None, _) | (_, None) => false,
            (Some(Bound::Unbounded), Some(_)) => true,
            (Some(ours), Some(theirs)) => match (ours.value(), theirs.value()) {
                (Some(a), Some(b)) => a > b || (a == b && ours.is_closed()),
                _ => false,
            },
        }
    }

    /// Check if this range reaches further left than `other`
    ///
    /// At equal lower values a closed lower bound on this range wins.
    pub fn extends_left_of(&self, other: &Range<T>) -> bool {
        match (self.lower(), other.lower()) {
            (Some(_), Some(Bound::Unbounded)) | (None, _) | (_, None) => false,
            (Some(Bound::Unbounded), Some(_)) => true,
            (Some(ours), Some(theirs)) => match (ours.value(), theirs.value()) {
                (Some(a), Some(b)) => a < b || (a == b && ours.is_closed()),
                _ => false,
            },
        }
    }

    /// Check if the two ranges share at least one point
    pub fn overlaps(&self, other: &Range<T>) -> bool {
        !(self.is_empty()
            || other.is_empty()
            || self.strictly_right_of(other)
            || self.strictly_left_of(other))
    }

    /// Check if the two ranges touch without overlapping or leaving a gap
    ///
    /// `[1,5)` and `[5,9)` are adjacent. `[1,5]` and `[5,9)` overlap, and
    /// `(1,5)` and `(5,9)` leave the point 5 uncovered, so neither pair is
    /// adjacent.
    pub fn adjacent_to(&self, other: &Range<T>) -> bool {
        match (self, other) {
            (
                Range::Bounded { lower, upper },
                Range::Bounded {
                    lower: other_lower,
                    upper: other_upper,
                },
            ) => tiles(upper, other_lower) || tiles(lower, other_upper),
            _ => false,
        }
    }
}

impl<T: PartialOrd + Clone> Range<T> {
    /// Smallest range covering both operands
    ///
    /// The empty range is the identity. Fails with
    /// [`InvalidOperation::DisjointUnion`] when the operands neither overlap
    /// nor are adjacent, since the covering range would include points that
    /// belong to neither.
    ///
    /// ```rust
    /// use pgrange::{InvalidOperation, Range};
    ///
    /// let joined = Range::closed_open(0, 10).union(&Range::closed_open(10, 20));
    /// assert_eq!(joined, Ok(Range::closed_open(0, 20)));
    ///
    /// let gap = Range::closed_open(5, 9).union(&Range::closed_open(20, 30));
    /// assert_eq!(gap, Err(InvalidOperation::DisjointUnion));
    /// ```
    pub fn union(&self, other: &Range<T>) -> Result<Range<T>, InvalidOperation> {
        match (self, other) {
            (Range::Empty, Range::Empty) => Ok(Range::Empty),
            (Range::Empty, range) | (range, Range::Empty) => Ok(range.clone()),
            (
                Range::Bounded { lower, upper },
                Range::Bounded {
                    lower: other_lower,
                    upper: other_upper,
                },
            ) => {
                if !self.overlaps(other) && !other.adjacent_to(self) {
                    return rejected(InvalidOperation::DisjointUnion);
                }

                let lower = match cmp_lower(other_lower, lower) {
                    Some(Ordering::Less) => other_lower,
                    _ => lower,
                };
                let upper = match cmp_upper(other_upper, upper) {
                    Some(Ordering::Greater) => other_upper,
                    _ => upper,
                };

                Ok(Range::new(lower.clone(), upper.clone()))
            }
        }
    }

    /// Points common to both operands; the empty range if they don't overlap
    pub fn intersection(&self, other: &Range<T>) -> Range<T> {
        match (self, other) {
            (
                Range::Bounded { lower, upper },
                Range::Bounded {
                    lower: other_lower,
                    upper: other_upper,
                },
            ) if self.overlaps(other) => {
                let lower = match cmp_lower(other_lower, lower) {
                    Some(Ordering::Greater) => other_lower,
                    _ => lower,
                };
                let upper = match cmp_upper(other_upper, upper) {
                    Some(Ordering::Less) => other_upper,
                    _ => upper,
                };

                Range::new(lower.clone(), upper.clone())
            }
            _ => Range::Empty,
        }
    }

    /// Points of this range that are not in `other`
    ///
    /// Returns this range unchanged when the operands don't overlap, and the
    /// empty range when `other` covers it. When `other` covers one end, that
    /// end is trimmed back to `other`'s facing bound with the opposite
    /// inclusivity. Fails with [`InvalidOperation::SplitDifference`] when
    /// `other` sits strictly inside with room on both sides.
    ///
    /// ```rust
    /// use pgrange::{InvalidOperation, Range};
    ///
    /// let trimmed = Range::open(0, 4).difference(&Range::open(2, 6));
    /// assert_eq!(trimmed, Ok(Range::open_closed(0, 2)));
    ///
    /// let split = Range::open(0, 10).difference(&Range::open(3, 6));
    /// assert_eq!(split, Err(InvalidOperation::SplitDifference));
    /// ```
    pub fn difference(&self, other: &Range<T>) -> Result<Range<T>, InvalidOperation> {
        let (
            Range::Bounded { lower, upper },
            Range::Bounded {
                lower: other_lower,
                upper: other_upper,
            },
        ) = (self, other)
        else {
            return Ok(self.clone());
        };

        if !self.overlaps(other) {
            return Ok(self.clone());
        }
        if other.contains_range(self) {
            return Ok(Range::Empty);
        }

        match (other_lower, other_upper) {
            // other covers our right end
            (Bound::Open(cut) | Bound::Closed(cut), _)
                if le(cmp_lower(lower, other_lower)) && le(cmp_upper(upper, other_upper)) =>
            {
                let upper = Bound::new(cut.clone(), !other_lower.is_closed());
                Ok(Range::new(lower.clone(), upper))
            }
            // other covers our left end
            (_, Bound::Open(cut) | Bound::Closed(cut))
                if le(cmp_lower(other_lower, lower)) && le(cmp_upper(other_upper, upper)) =>
            {
                let lower = Bound::new(cut.clone(), !other_upper.is_closed());
                Ok(Range::new(lower, upper.clone()))
            }
            _ => rejected(InvalidOperation::SplitDifference),
        }
    }
}

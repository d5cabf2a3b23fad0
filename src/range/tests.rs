use super::*;

#[test]
fn test_empty_mask() {
    let r: Range<i32> = Range::empty();
    assert_eq!(r.mask(), Mask::EMPTY);
    assert!(r.is_empty());
    assert_eq!(r.lower(), None);
    assert_eq!(r.upper_value(), None);
}

#[test]
fn test_mask_of_half_open() {
    let r = Range::closed_open(0, 10);
    assert_eq!(r.mask(), Mask::LOWER_CLOSED);
    assert!(r.is_bounded());
    assert!(r.is_lower_bound_closed());
    assert!(!r.is_upper_bound_closed());
}

#[test]
fn test_mask_of_unbounded() {
    let r: Range<i32> = Range::unbounded();
    assert_eq!(r.mask(), Mask::LOWER_INFINITE | Mask::UPPER_INFINITE);
    assert!(!r.has_lower_bound());
    assert!(!r.has_upper_bound());
    assert!(!r.is_lower_bound_closed());
}

#[test]
fn test_from_mask_empty_wins() {
    let r = Range::from_mask(Some(1), Some(2), Mask::EMPTY | Mask::LOWER_CLOSED);
    assert_eq!(r, Range::Empty);
}

#[test]
fn test_from_mask_infinite_discards_value() {
    let r = Range::from_mask(Some(1), Some(2), Mask::LOWER_INFINITE | Mask::LOWER_CLOSED);
    assert_eq!(r, Range::new(Bound::Unbounded, Bound::Open(2)));
}

#[test]
fn test_from_mask_missing_value_is_unbounded() {
    let r = Range::from_mask(None, Some(2), Mask::UPPER_CLOSED);
    assert_eq!(r, Range::new(Bound::Unbounded, Bound::Closed(2)));
    assert_eq!(r.mask(), Mask::LOWER_INFINITE | Mask::UPPER_CLOSED);
}

#[test]
fn test_into_parts_inverts_from_mask() {
    let mask = Mask::UPPER_CLOSED | Mask::LOWER_INFINITE;
    let r = Range::from_mask(None, Some("z"), mask);
    assert_eq!(r.into_parts(), (None, Some("z"), mask));
}

#[test]
fn test_structural_equality() {
    assert_eq!(Range::closed(1, 2), Range::closed(1, 2));
    assert_ne!(Range::closed(1, 2), Range::closed_open(1, 2));
    assert_ne!(Range::open(0, 0), Range::Empty);
}

#[test]
fn test_map_keeps_shape() {
    let r = Range::new(Bound::Open(1), Bound::Unbounded).map(|v| v * 10);
    assert_eq!(r, Range::new(Bound::Open(10), Bound::Unbounded));
}

#[test]
fn test_try_map_stops_at_first_error() {
    let r = Range::closed("1", "x").try_map(|v| v.parse::<i32>());
    assert!(r.is_err());

    let r = Range::closed("1", "2").try_map(|v| v.parse::<i32>());
    assert_eq!(r, Ok(Range::closed(1, 2)));
}

#[test]
fn test_bound_accessors() {
    let b = Bound::new(4, true);
    assert_eq!(b, Bound::Closed(4));
    assert_eq!(b.value(), Some(&4));
    assert!(b.is_closed());
    assert!(!Bound::new(4, false).is_closed());
    assert!(Bound::<i32>::Unbounded.is_unbounded());
}

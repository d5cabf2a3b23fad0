//! Serde support using the literal text form.
//!
//! A range serializes as the same string PostgreSQL produces for range
//! columns in JSON output, e.g. `"[1,10)"` or `"empty"`.

use std::fmt::{self, Display};
use std::marker::PhantomData;
use std::str::FromStr;

use serde::de::{self, Deserialize, Deserializer, Visitor};
use serde::ser::{Serialize, Serializer};

use crate::Range;

impl<T: Display> Serialize for Range<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

struct RangeVisitor<T>(PhantomData<T>);

impl<T> Visitor<'_> for RangeVisitor<T>
where
    T: FromStr,
    T::Err: Display,
{
    type Value = Range<T>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a range literal such as \"[1,10)\" or \"empty\"")
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        v.parse().map_err(E::custom)
    }
}

impl<'de, T> Deserialize<'de> for Range<T>
where
    T: FromStr,
    T::Err: Display,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_str(RangeVisitor(PhantomData))
    }
}

#[cfg(test)]
mod tests {
    use crate::{Bound, Range};

    #[test]
    fn test_serialize_as_literal() {
        let r = Range::new(Bound::Closed(1), Bound::Unbounded);
        assert_eq!(serde_json::to_string(&r).unwrap(), "\"[1,)\"");
    }

    #[test]
    fn test_deserialize_from_literal() {
        let r: Range<i64> = serde_json::from_str("\"(0,10]\"").unwrap();
        assert_eq!(r, Range::open_closed(0, 10));
    }

    #[test]
    fn test_text_values_keep_surrounding_whitespace() {
        let r = Range::closed_open(" a".to_string(), "b ".to_string());
        let json = serde_json::to_string(&r).unwrap();
        assert_eq!(json, r#""[\" a\",\"b \")""#);
        let back: Range<String> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, r);
    }

    #[test]
    fn test_deserialize_error_reports_cause() {
        let err = serde_json::from_str::<Range<i64>>("\"[0,10\"").unwrap_err();
        assert!(err.to_string().contains("unexpected end of input"));
    }
}

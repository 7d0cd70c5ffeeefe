//! Loggable values and their single-line rendering
//!
//! A log call takes any number of `LogValue`s. Top-level text and numbers are
//! written as-is; everything else is written as compact JSON.

use std::fmt::{self, Write as _};

use serde::Serialize;

use super::error::LogResult;

/// A value passed to a log call
#[derive(Debug, Clone, PartialEq)]
pub enum LogValue {
    Null,
    Bool(bool),
    Number(serde_json::Number),
    Text(String),
    /// Ordered elements
    Array(Vec<LogValue>),
    /// Ordered key-value pairs; order is preserved when rendered
    Object(Vec<(String, LogValue)>),
}

impl LogValue {
    /// Build an object from key-value pairs, keeping their order
    pub fn object<K, V, I>(pairs: I) -> Self
    where
        K: Into<String>,
        V: Into<LogValue>,
        I: IntoIterator<Item = (K, V)>,
    {
        LogValue::Object(
            pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Build an array from elements, keeping their order
    pub fn array<V, I>(items: I) -> Self
    where
        V: Into<LogValue>,
        I: IntoIterator<Item = V>,
    {
        LogValue::Array(items.into_iter().map(Into::into).collect())
    }

    /// Convert any serializable value
    ///
    /// Struct fields keep their declaration order.
    pub fn from_serialize<T: Serialize + ?Sized>(value: &T) -> LogResult<Self> {
        Ok(serde_json::to_value(value)?.into())
    }

    /// Render as a top-level argument: literal text for strings and numbers,
    /// compact JSON otherwise
    pub fn render(&self) -> String {
        self.to_string()
    }

    fn write_to<W: fmt::Write>(&self, out: &mut W) -> fmt::Result {
        match self {
            LogValue::Text(s) => out.write_str(s),
            LogValue::Number(n) => write!(out, "{}", n),
            other => other.write_compact(out),
        }
    }

    fn write_compact<W: fmt::Write>(&self, out: &mut W) -> fmt::Result {
        match self {
            LogValue::Null => out.write_str("null"),
            LogValue::Bool(b) => write!(out, "{}", b),
            LogValue::Number(n) => write!(out, "{}", n),
            LogValue::Text(s) => write_quoted(out, s),
            LogValue::Array(items) => {
                out.write_char('[')?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        out.write_char(',')?;
                    }
                    item.write_compact(out)?;
                }
                out.write_char(']')
            }
            LogValue::Object(pairs) => {
                out.write_char('{')?;
                for (i, (key, value)) in pairs.iter().enumerate() {
                    if i > 0 {
                        out.write_char(',')?;
                    }
                    write_quoted(out, key)?;
                    out.write_char(':')?;
                    value.write_compact(out)?;
                }
                out.write_char('}')
            }
        }
    }
}

fn write_quoted<W: fmt::Write>(out: &mut W, s: &str) -> fmt::Result {
    let quoted = serde_json::to_string(s).map_err(|_| fmt::Error)?;
    out.write_str(&quoted)
}

impl fmt::Display for LogValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_to(f)
    }
}

impl From<&str> for LogValue {
    fn from(s: &str) -> Self {
        LogValue::Text(s.to_string())
    }
}

impl From<String> for LogValue {
    fn from(s: String) -> Self {
        LogValue::Text(s)
    }
}

impl From<&String> for LogValue {
    fn from(s: &String) -> Self {
        LogValue::Text(s.clone())
    }
}

impl From<bool> for LogValue {
    fn from(b: bool) -> Self {
        LogValue::Bool(b)
    }
}

macro_rules! impl_from_integer {
    ($($t:ty),*) => {
        $(
            impl From<$t> for LogValue {
                fn from(n: $t) -> Self {
                    LogValue::Number(n.into())
                }
            }
        )*
    };
}

impl_from_integer!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl From<f64> for LogValue {
    /// Non-finite floats have no JSON form and become `Null`
    fn from(n: f64) -> Self {
        serde_json::Number::from_f64(n)
            .map(LogValue::Number)
            .unwrap_or(LogValue::Null)
    }
}

impl From<f32> for LogValue {
    fn from(n: f32) -> Self {
        LogValue::from(f64::from(n))
    }
}

impl<T: Into<LogValue>> From<Option<T>> for LogValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(LogValue::Null)
    }
}

impl<T: Into<LogValue>> From<Vec<T>> for LogValue {
    fn from(items: Vec<T>) -> Self {
        LogValue::array(items)
    }
}

impl<T: Clone + Into<LogValue>> From<&[T]> for LogValue {
    fn from(items: &[T]) -> Self {
        LogValue::array(items.iter().cloned())
    }
}

impl<T: Into<LogValue>, const N: usize> From<[T; N]> for LogValue {
    fn from(items: [T; N]) -> Self {
        LogValue::array(items)
    }
}

impl From<serde_json::Value> for LogValue {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => LogValue::Null,
            serde_json::Value::Bool(b) => LogValue::Bool(b),
            serde_json::Value::Number(n) => LogValue::Number(n),
            serde_json::Value::String(s) => LogValue::Text(s),
            serde_json::Value::Array(items) => {
                LogValue::Array(items.into_iter().map(Into::into).collect())
            }
            serde_json::Value::Object(map) => {
                LogValue::Object(map.into_iter().map(|(k, v)| (k, v.into())).collect())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    #[test]
    fn test_scalars_render_literally() {
        assert_eq!(LogValue::from("foobar").render(), "foobar");
        assert_eq!(LogValue::from("say \"hi\"").render(), "say \"hi\"");
        assert_eq!(LogValue::from(42).render(), "42");
        assert_eq!(LogValue::from(-1.5).render(), "-1.5");
    }

    #[test]
    fn test_object_renders_as_json() {
        let obj = LogValue::object([("foo", "bar")]);
        assert_eq!(obj.render(), r#"{"foo":"bar"}"#);
    }

    #[test]
    fn test_array_renders_as_json() {
        let arr = LogValue::from(vec!["foo", "bar", "foobar"]);
        assert_eq!(arr.render(), r#"["foo","bar","foobar"]"#);
    }

    #[test]
    fn test_object_keeps_insertion_order() {
        let obj = LogValue::object([
            ("zeta", LogValue::from(1)),
            ("alpha", LogValue::from("a")),
            ("mid", LogValue::Null),
        ]);
        assert_eq!(obj.render(), r#"{"zeta":1,"alpha":"a","mid":null}"#);
    }

    #[test]
    fn test_nested_values() {
        let value = LogValue::object([
            ("tags", LogValue::from(vec!["x", "y"])),
            ("ok", LogValue::from(true)),
            ("inner", LogValue::object([("n", 3)])),
        ]);
        assert_eq!(
            value.render(),
            r#"{"tags":["x","y"],"ok":true,"inner":{"n":3}}"#
        );
    }

    #[test]
    fn test_nested_strings_are_escaped() {
        let arr = LogValue::from(vec!["line\nbreak", "quote\""]);
        assert_eq!(arr.render(), r#"["line\nbreak","quote\""]"#);
    }

    #[test]
    fn test_non_finite_float_is_null() {
        assert_eq!(LogValue::from(f64::NAN), LogValue::Null);
        assert_eq!(LogValue::from(f64::INFINITY).render(), "null");
    }

    #[test]
    fn test_from_serialize_struct_order() {
        #[derive(Serialize)]
        struct Request {
            method: &'static str,
            path: &'static str,
            status: u16,
        }

        let value = LogValue::from_serialize(&Request {
            method: "GET",
            path: "/health",
            status: 200,
        })
        .unwrap();
        assert_eq!(
            value.render(),
            r#"{"method":"GET","path":"/health","status":200}"#
        );
    }

    #[test]
    fn test_from_json_value() {
        let value: LogValue = serde_json::json!({"b": [1, 2], "a": null}).into();
        assert_eq!(value.render(), r#"{"b":[1,2],"a":null}"#);
    }

    #[test]
    fn test_top_level_bool_and_null_render_as_json() {
        assert_eq!(LogValue::from(false).render(), "false");
        assert_eq!(LogValue::Null.render(), "null");
        assert_eq!(format!("{}", LogValue::from("plain")), "plain");
    }
}

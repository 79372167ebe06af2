//! Runtime values accepted by [`Colorizers::auto`](crate::Colorizers::auto)
//!
//! A closed set of semantic kinds. Every primitive converts through `From`,
//! so call sites rarely name a variant:
//!
//! ```
//! use huelog::Value;
//!
//! let values: Vec<Value> = vec![(-23).into(), 0.5.into(), "text".into(), None::<i32>.into()];
//! assert_eq!(values[3], Value::Nil);
//! ```

use std::fmt;
use std::time::Duration;

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone};
use serde::{Serialize, Serializer};

/// Format used when a time value has to become plain text.
pub const PLAIN_DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A single value to colorize.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Nil,
    Bool(bool),
    Int(i64),
    Uint(u64),
    Float(f64),
    Time(NaiveDateTime),
    Duration(Duration),
    Str(String),
    Seq(Seq),
    /// Anything else, already turned into text by its `Display` impl.
    Other(String),
}

/// Homogeneous sequences, plus `Mixed` for everything else.
#[derive(Debug, Clone, PartialEq)]
pub enum Seq {
    Bool(Vec<bool>),
    Int(Vec<i64>),
    Uint(Vec<u64>),
    Float(Vec<f64>),
    Time(Vec<NaiveDateTime>),
    Duration(Vec<Duration>),
    Str(Vec<String>),
    Mixed(Vec<Value>),
}

/// Discriminator returned by [`Value::kind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Nil,
    Bool,
    Int,
    Uint,
    Float,
    Time,
    Duration,
    Str,
    Seq,
    Other,
}

impl Value {
    pub fn kind(&self) -> Kind {
        match self {
            Value::Nil => Kind::Nil,
            Value::Bool(_) => Kind::Bool,
            Value::Int(_) => Kind::Int,
            Value::Uint(_) => Kind::Uint,
            Value::Float(_) => Kind::Float,
            Value::Time(_) => Kind::Time,
            Value::Duration(_) => Kind::Duration,
            Value::Str(_) => Kind::Str,
            Value::Seq(_) => Kind::Seq,
            Value::Other(_) => Kind::Other,
        }
    }

    pub fn is_nil(&self) -> bool {
        matches!(self, Value::Nil)
    }

    /// Wrap an arbitrary displayable value as [`Value::Other`].
    pub fn other(value: impl fmt::Display) -> Self {
        Value::Other(value.to_string())
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) | Value::Other(s) => Some(s),
            _ => None,
        }
    }
}

impl Seq {
    pub fn len(&self) -> usize {
        match self {
            Seq::Bool(v) => v.len(),
            Seq::Int(v) => v.len(),
            Seq::Uint(v) => v.len(),
            Seq::Float(v) => v.len(),
            Seq::Time(v) => v.len(),
            Seq::Duration(v) => v.len(),
            Seq::Str(v) => v.len(),
            Seq::Mixed(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Elements as individual values.
    pub fn to_values(&self) -> Vec<Value> {
        match self {
            Seq::Bool(v) => v.iter().copied().map(Value::Bool).collect(),
            Seq::Int(v) => v.iter().copied().map(Value::Int).collect(),
            Seq::Uint(v) => v.iter().copied().map(Value::Uint).collect(),
            Seq::Float(v) => v.iter().copied().map(Value::Float).collect(),
            Seq::Time(v) => v.iter().copied().map(Value::Time).collect(),
            Seq::Duration(v) => v.iter().copied().map(Value::Duration).collect(),
            Seq::Str(v) => v.iter().cloned().map(Value::Str).collect(),
            Seq::Mixed(v) => v.clone(),
        }
    }
}

/// Compact duration with a space between segments: `1h 2m 3.5s`, `250ms`,
/// `0s`. Hours are the largest unit.
pub fn format_duration(d: Duration) -> String {
    let nanos = d.as_nanos();
    let raw = if nanos == 0 {
        "0s".to_string()
    } else if nanos < 1_000 {
        format!("{}ns", nanos)
    } else if nanos < 1_000_000 {
        format!("{}\u{b5}s", frac(nanos, 1_000))
    } else if nanos < 1_000_000_000 {
        format!("{}ms", frac(nanos, 1_000_000))
    } else {
        let total_secs = d.as_secs();
        let hours = total_secs / 3600;
        let minutes = (total_secs % 3600) / 60;
        let seconds = frac(nanos % 60_000_000_000, 1_000_000_000);
        if hours > 0 {
            format!("{}h{}m{}s", hours, minutes, seconds)
        } else if minutes > 0 {
            format!("{}m{}s", minutes, seconds)
        } else {
            format!("{}s", seconds)
        }
    };
    space_segments(&raw)
}

/// `value / unit` with the fraction's trailing zeros dropped.
fn frac(value: u128, unit: u128) -> String {
    let whole = value / unit;
    let rest = value % unit;
    if rest == 0 {
        return whole.to_string();
    }
    let digits = unit.to_string().len() - 1;
    let fraction = format!("{:0width$}", rest, width = digits);
    format!("{}.{}", whole, fraction.trim_end_matches('0'))
}

/// Insert a space wherever a unit letter is followed by a digit.
fn space_segments(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len() + 4);
    let mut prev_alpha = false;
    for c in raw.chars() {
        if prev_alpha && c.is_ascii_digit() {
            out.push(' ');
        }
        prev_alpha = c.is_alphabetic();
        out.push(c);
    }
    out
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Nil => write!(f, "nil"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(n) => write!(f, "{}", n),
            Value::Uint(n) => write!(f, "{}", n),
            Value::Float(n) => write!(f, "{}", n),
            Value::Time(t) => write!(f, "{}", t.format(PLAIN_DATE_TIME_FORMAT)),
            Value::Duration(d) => write!(f, "{}", format_duration(*d)),
            Value::Str(s) | Value::Other(s) => write!(f, "{}", s),
            Value::Seq(seq) => {
                let parts: Vec<String> = seq.to_values().iter().map(|v| v.to_string()).collect();
                write!(f, "[{}]", parts.join(", "))
            }
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Nil => serializer.serialize_none(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Int(n) => serializer.serialize_i64(*n),
            Value::Uint(n) => serializer.serialize_u64(*n),
            Value::Float(n) => serializer.serialize_f64(*n),
            Value::Time(t) => serializer.collect_str(&t.format(PLAIN_DATE_TIME_FORMAT)),
            Value::Duration(d) => serializer.serialize_f64(d.as_secs_f64()),
            Value::Str(s) | Value::Other(s) => serializer.serialize_str(s),
            Value::Seq(seq) => serializer.collect_seq(seq.to_values()),
        }
    }
}

macro_rules! impl_from {
    ($variant:ident as $target:ty: $($source:ty),+) => {
        $(
            impl From<$source> for Value {
                fn from(v: $source) -> Self {
                    Value::$variant(v as $target)
                }
            }

            impl From<Vec<$source>> for Value {
                fn from(v: Vec<$source>) -> Self {
                    Value::Seq(Seq::$variant(v.into_iter().map(|x| x as $target).collect()))
                }
            }
        )+
    };
}

impl_from!(Int as i64: i8, i16, i32, i64, isize);
impl_from!(Uint as u64: u8, u16, u32, u64, usize);
impl_from!(Float as f64: f32, f64);

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<Vec<bool>> for Value {
    fn from(v: Vec<bool>) -> Self {
        Value::Seq(Seq::Bool(v))
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Str(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Str(v)
    }
}

impl From<&String> for Value {
    fn from(v: &String) -> Self {
        Value::Str(v.clone())
    }
}

impl From<Vec<&str>> for Value {
    fn from(v: Vec<&str>) -> Self {
        Value::Seq(Seq::Str(v.into_iter().map(str::to_string).collect()))
    }
}

impl From<Vec<String>> for Value {
    fn from(v: Vec<String>) -> Self {
        Value::Seq(Seq::Str(v))
    }
}

impl From<NaiveDateTime> for Value {
    fn from(v: NaiveDateTime) -> Self {
        Value::Time(v)
    }
}

impl From<NaiveDate> for Value {
    fn from(v: NaiveDate) -> Self {
        Value::Time(v.and_time(chrono::NaiveTime::MIN))
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for Value {
    fn from(v: DateTime<Tz>) -> Self {
        Value::Time(v.naive_local())
    }
}

impl From<Vec<NaiveDateTime>> for Value {
    fn from(v: Vec<NaiveDateTime>) -> Self {
        Value::Seq(Seq::Time(v))
    }
}

impl From<Duration> for Value {
    fn from(v: Duration) -> Self {
        Value::Duration(v)
    }
}

impl From<Vec<Duration>> for Value {
    fn from(v: Vec<Duration>) -> Self {
        Value::Seq(Seq::Duration(v))
    }
}

impl From<Vec<Value>> for Value {
    fn from(v: Vec<Value>) -> Self {
        Value::Seq(Seq::Mixed(v))
    }
}

impl From<Seq> for Value {
    fn from(v: Seq) -> Self {
        Value::Seq(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(v) => v.into(),
            None => Value::Nil,
        }
    }
}

/// Colorize any number of values with the global colorizers.
///
/// Each argument goes through `Value::from`; results are joined with `", "`.
///
/// ```
/// let out = huelog::auto!(-23, 0, 32);
/// assert_eq!(huelog::width::strip_escapes(&out), "-23, 0, 32");
/// ```
#[macro_export]
macro_rules! auto {
    ($($value:expr),* $(,)?) => {
        $crate::auto(&[$($crate::Value::from($value)),*])
    };
}

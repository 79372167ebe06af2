//! Type-driven dispatch for [`Value`]s

use super::{join, Colorizers, PathKind};
use crate::value::{Seq, Value};

impl Colorizers {
    /// Colorize each value by its kind; results are joined with `", "`.
    ///
    /// Floats in `[-1, 1]` (bounds included) are taken to be fractions and
    /// shown as percentages. Strings that look like URLs or absolute paths
    /// get the dedicated colorizers, everything else is hashed whole.
    pub fn auto(&self, values: &[Value]) -> String {
        join(values.iter().map(|v| self.auto_value(v)))
    }

    pub fn auto_value(&self, value: &Value) -> String {
        match value {
            Value::Seq(seq) => self.auto_seq(seq),
            Value::Bool(b) => self.bool(*b),
            Value::Int(n) => self.int(*n),
            Value::Uint(n) => self.uint(*n),
            Value::Float(n) => self.auto_float(*n),
            Value::Time(t) => self.date_time(t),
            Value::Duration(d) => self.duration(*d),
            Value::Str(s) => self.auto_str(s),
            Value::Nil => self.nil(),
            Value::Other(s) => self.highlight(&[s]),
        }
    }

    fn auto_seq(&self, seq: &Seq) -> String {
        match seq {
            Seq::Bool(v) => self.bools(v),
            Seq::Int(v) => self.ints(v),
            Seq::Uint(v) => self.uints(v),
            Seq::Float(v) => join(v.iter().map(|&n| self.auto_float(n))),
            Seq::Time(v) => join(v.iter().map(|t| self.date_time(t))),
            Seq::Duration(v) => join(v.iter().map(|&d| self.duration(d))),
            Seq::Str(v) => self.highlight(v),
            Seq::Mixed(v) => self.auto(v),
        }
    }

    fn auto_float(&self, n: f64) -> String {
        let precision = self.config.format.float_precision;
        if (-1.0..=1.0).contains(&n) {
            self.percentage(n, precision)
        } else {
            self.float(n, precision)
        }
    }

    fn auto_str(&self, s: &str) -> String {
        match super::identify_path(s) {
            PathKind::Url => self.url(s),
            PathKind::File => self.file(s),
            PathKind::Invalid => self.highlight(&[s]),
        }
    }
}

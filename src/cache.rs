//! Deterministic hash-to-color mapping
//!
//! Strings (and IPv4 addresses) are reduced to a scalar in `[0, 1]` and
//! projected onto the logical range [`HASH_MIN`]..=[`HASH_MAX`]. Similar
//! content lands on neighbouring logical indices, which the palette keeps
//! visually close.

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use tracing::trace;

use crate::palette::ColorIndex;
use crate::width::remove_non_printable;

/// Lowest logical index produced by hashing.
pub const HASH_MIN: ColorIndex = 88;
/// Highest logical index produced by hashing.
pub const HASH_MAX: ColorIndex = 231;

/// Printable ASCII starts at 32 (space) and spans 94 steps to `~`.
const CODE_POINT_BASE: i64 = 32;
const CODE_POINT_SPAN: f64 = 94.0;

/// Thread-safe memo of computed colors.
///
/// Entries are never evicted; the cache grows with the number of distinct
/// keys seen over the process lifetime.
#[derive(Debug, Default)]
pub struct ColorCache {
    entries: Mutex<HashMap<String, ColorIndex>>,
}

impl ColorCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached color for `key`, computing and storing it on a miss.
    ///
    /// The lock is held only around this lookup; `compute` must not call
    /// back into the same cache.
    pub fn get_or_insert_with(
        &self,
        key: &str,
        compute: impl FnOnce(&str) -> ColorIndex,
    ) -> ColorIndex {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(&color) = entries.get(key) {
            return color;
        }
        let color = compute(key);
        trace!(key, color, "color cache miss");
        entries.insert(key.to_string(), color);
        color
    }

    pub fn len(&self) -> usize {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

/// Project a scalar in `[0, 1]` onto the hash range. Out-of-range input
/// (including NaN) is clamped.
pub fn project(scalar: f64) -> ColorIndex {
    let scalar = if scalar.is_nan() {
        0.0
    } else {
        scalar.clamp(0.0, 1.0)
    };
    HASH_MIN + ((HASH_MAX - HASH_MIN) as f64 * scalar).floor() as ColorIndex
}

/// Uncached string hash: average of the printable code points, each
/// rescaled from `' '..='~'` to `[0, 1]`.
pub fn hash_string(s: &str) -> ColorIndex {
    let printable = remove_non_printable(s);
    let mut count = 0usize;
    let mut total = 0.0;
    for c in printable.chars() {
        let step = (c as i64 - CODE_POINT_BASE).clamp(0, CODE_POINT_SPAN as i64);
        total += step as f64 / CODE_POINT_SPAN;
        count += 1;
    }
    if count == 0 {
        return HASH_MIN;
    }
    project(total / count as f64)
}

/// Uncached IPv4 hash: the average octet value scaled by 255.
///
/// Components that do not parse count as 0, so malformed input still
/// yields a color.
pub fn hash_ipv4(ip: &str) -> ColorIndex {
    let parts: Vec<f64> = ip
        .split('.')
        .map(|part| part.trim().parse::<f64>().unwrap_or(0.0))
        .collect();
    let average = parts.iter().sum::<f64>() / parts.len() as f64;
    project(average / 255.0)
}

/// Port numbers spread over the same range as hashed strings.
pub fn hash_port(port: u16) -> ColorIndex {
    project(port as f64 / u16::MAX as f64)
}

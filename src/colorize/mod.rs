//! Colorizers
//!
//! [`Colorizers`] bundles a [`Config`] with the string and IPv4 color
//! caches. Every colorizing operation is a method on it; the crate root
//! re-exports free functions that go through [`Colorizers::global`].

mod auto;
mod network;
mod path;
mod progress;
mod scalar;
mod time;
mod units;

pub use path::{identify_path, PathKind};
pub use units::{Scaled, UnitScale};

pub(crate) use scalar::by_sign;

use std::sync::OnceLock;

use crate::ansi;
use crate::cache::{self, ColorCache};
use crate::config::Config;
use crate::error::Error;
use crate::palette::ColorIndex;

static GLOBAL: OnceLock<Colorizers> = OnceLock::new();

/// Configured colorizer set plus its caches.
///
/// Safe to share between threads; the caches lock internally for the
/// duration of a single lookup.
#[derive(Debug, Default)]
pub struct Colorizers {
    config: Config,
    strings: ColorCache,
    ips: ColorCache,
}

impl Colorizers {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            strings: ColorCache::new(),
            ips: ColorCache::new(),
        }
    }

    /// The process-wide instance, built from defaults on first use unless
    /// [`install`] ran earlier.
    pub fn global() -> &'static Colorizers {
        GLOBAL.get_or_init(Colorizers::default)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub(crate) fn disabled(&self) -> bool {
        self.config.colors.disabled
    }

    /// Wrap `text` in a logical color, or return it as-is when colors are
    /// disabled.
    pub fn wrap(&self, text: &str, color: ColorIndex) -> String {
        if self.disabled() {
            text.to_string()
        } else {
            ansi::wrap(text, color)
        }
    }

    /// Stable color for the printable content of `s`.
    pub fn color_for_string(&self, s: &str) -> ColorIndex {
        self.strings.get_or_insert_with(s, cache::hash_string)
    }

    /// Stable color for a dotted-decimal IPv4 address.
    pub fn color_for_ipv4(&self, ip: &str) -> ColorIndex {
        self.ips.get_or_insert_with(ip, cache::hash_ipv4)
    }

    /// Color each string by its own content hash; joined with `", "`.
    pub fn highlight<S: AsRef<str>>(&self, strings: &[S]) -> String {
        join(strings.iter().map(|s| {
            let s = s.as_ref();
            self.wrap(s, self.color_for_string(s))
        }))
    }

    /// Token-highlight `chunks`, splitting opaque text on `glue`.
    pub fn token<S: AsRef<str>>(&self, glue: &str, chunks: &[S]) -> String {
        crate::token::Highlighter::new(self, glue).render(chunks)
    }
}

/// Replace the defaults behind [`Colorizers::global`].
///
/// Only the first call before any global use succeeds.
pub fn install(colorizers: Colorizers) -> Result<(), Error> {
    GLOBAL
        .set(colorizers)
        .map_err(|_| Error::AlreadyInstalled)
}

pub(crate) fn join(parts: impl Iterator<Item = String>) -> String {
    parts.collect::<Vec<_>>().join(", ")
}

//! Crate-level error type

/// Errors raised at the few fallible edges of the library.
///
/// Colorizing itself never fails; these only cover setup.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// `install` was called after the global colorizers were already set
    /// (either by an earlier `install` or by first use).
    #[error("global colorizers are already installed")]
    AlreadyInstalled,
}

/// Configuration errors reported by [`crate::Tokenizer::scan`].
///
/// Malformed markup is never an error: the scanner demotes anything it cannot
/// interpret to `invalid_markup` or `text` events and keeps going.
#[derive(Clone, Copy, Debug, Eq, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// `scan` was called before any observer was attached.
    #[error("no observer attached to the tokenizer")]
    MissingObserver,
}

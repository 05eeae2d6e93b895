use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
///
/// Every variant carries the exact user-facing message a presenter should
/// show. The fetch operations classify transport and decode failures into
/// one of these variants; nothing else ever escapes them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AvError {
    /// The search input was empty after trimming.
    #[error("Please enter a stock symbol")]
    EmptySymbol,

    /// The server answered with a non-2xx status.
    #[error("{0}")]
    Transport(String),

    /// The provider reported an explicit error for the requested symbol.
    #[error("{0}")]
    SymbolNotFound(String),

    /// The provider signalled that the request quota is exhausted.
    #[error("{0}")]
    RateLimit(String),

    /// The response was well-formed but carried no usable data.
    #[error("{0}")]
    NoData(String),

    /// Anything else: a failed connection, malformed JSON, and so on.
    #[error("{0}")]
    Unexpected(String),
}

/// Classified outcome of one fetch operation: the payload on success, a
/// single tagged [`AvError`] on failure, never both.
pub type FetchResult<T> = Result<T, AvError>;

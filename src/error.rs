use super::context::Context;
use super::prober::ProbeError;

/// This is the enumeration of all the different kinds of errors which this
/// crate generates.
#[derive(Debug, Clone, thiserror::Error, PartialEq)]
pub enum Error {
    /// The URI string could not be decomposed into its components, such as
    /// `https://test:test:test` (too many colons in the authority) or
    /// `http://www.example.com:foo` (port is not a number).
    #[error("invalid URI {uri:?}: malformed {context}")]
    InvalidUri {
        /// The string which was rejected.
        uri: String,

        /// The component in which decomposition failed.
        context: Context,
    },

    /// A port number outside of `1..=65535` was given, such as `0` or
    /// `999999`.
    #[error("a valid port must be between 1 and 65535, [{0}] given")]
    PortOutOfRange(i64),

    /// Query text, or a query key or value, contains the fragment delimiter,
    /// such as `arg1=1&arg2=2#test`.
    #[error("query cannot contain a fragment delimiter: {0:?}")]
    QueryContainsFragment(String),

    /// A query key was added which is already present in the query.
    #[error("given query key [{0}] already exists")]
    QueryKeyExists(String),

    /// A query key with no characters was given.
    #[error("query key must have at least one character")]
    QueryKeyEmpty,

    /// Reachability of the host was checked while no host is set.
    #[error("host is empty")]
    HostIsEmpty,

    /// The HTTP prober used to check reachability could not be used.
    #[error("HTTP probe unavailable")]
    ProbeUnavailable(#[from] ProbeError),
}

/// This is the error an [`HttpProber`] reports when the transport it relies
/// on cannot be used at all, as opposed to a request which was made and
/// answered with some status code.
///
/// [`HttpProber`]: trait.HttpProber.html
#[derive(Debug, Clone, thiserror::Error, PartialEq)]
#[error("transport unavailable: {reason}")]
pub struct ProbeError {
    reason: String,
}

impl ProbeError {
    /// Describe why the transport could not be used.
    pub fn new<T>(reason: T) -> Self
    where
        T: Into<String>,
    {
        Self {
            reason: reason.into(),
        }
    }

    /// Borrow the reason the transport could not be used.
    #[must_use]
    pub fn reason(&self) -> &str {
        &self.reason
    }
}

/// This is the capability used by [`Uri::host_is_reachable`] to issue a
/// HEAD-style request against a URI and report the HTTP status code which
/// came back.  A status code of zero means no response was received.
///
/// Any `Fn(&str) -> Result<u16, ProbeError>` closure is an `HttpProber`.
///
/// [`Uri::host_is_reachable`]: struct.Uri.html#method.host_is_reachable
pub trait HttpProber {
    /// Probe the given URI and return the status code of the response.
    ///
    /// # Errors
    ///
    /// Returns [`ProbeError`](struct.ProbeError.html) if the transport is
    /// unavailable.
    fn probe(&self, uri: &str) -> Result<u16, ProbeError>;
}

impl<F> HttpProber for F
where
    F: Fn(&str) -> Result<u16, ProbeError>,
{
    fn probe(&self, uri: &str) -> Result<u16, ProbeError> {
        self(uri)
    }
}

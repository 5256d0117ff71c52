/// This identifies the part of a URI string in which decomposition failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Context {
    /// The scheme, everything before the first `:` ahead of any `/`.
    Scheme,

    /// The `user:pass` portion in front of the `@` in the authority.
    Userinfo,

    /// The host name in the authority.
    Host,

    /// The port number following the host name in the authority.
    Port,
}

impl std::fmt::Display for Context {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Context::Scheme => {
                write!(f, "scheme")
            },
            Context::Userinfo => {
                write!(f, "user info")
            },
            Context::Host => {
                write!(f, "host")
            },
            Context::Port => {
                write!(f, "port")
            },
        }
    }
}

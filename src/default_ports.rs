use once_cell::sync::Lazy;
use std::collections::HashMap;

// These are the conventional ports of the schemes we know about; a port
// equal to the scheme's entry is left out when rendering an authority.
static DEFAULT_PORTS: Lazy<HashMap<&'static str, u16>> = Lazy::new(|| {
    [
        ("http", 80),
        ("https", 443),
        ("ftp", 21),
        ("gopher", 70),
        ("nntp", 119),
        ("news", 119),
        ("telnet", 23),
        ("tn3270", 23),
        ("imap", 143),
        ("pop", 110),
        ("ldap", 389),
    ]
    .iter()
    .copied()
    .collect()
});

pub fn default_port<T>(scheme: T) -> Option<u16>
where
    T: AsRef<str>,
{
    DEFAULT_PORTS
        .get(scheme.as_ref().to_ascii_lowercase().as_str())
        .copied()
}

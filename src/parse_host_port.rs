use super::character_classes::{
    DIGIT,
    HOST_NAME,
};
use super::context::Context;

struct Shared {
    host: String,
    port_string: String,
}

enum State {
    Host(Shared),
    Port(Shared),
}

impl State {
    fn finalize(self) -> Result<(String, Option<u16>), Context> {
        match self {
            Self::Host(state) | Self::Port(state) => {
                let mut state = state;
                state.host.make_ascii_lowercase();
                let port = if state.port_string.is_empty() {
                    None
                } else {
                    match state.port_string.parse::<u16>() {
                        Ok(port) if port != 0 => Some(port),
                        _ => return Err(Context::Port),
                    }
                };
                Ok((state.host, port))
            },
        }
    }

    fn new() -> Self {
        Self::Host(Shared {
            host: String::new(),
            port_string: String::new(),
        })
    }

    fn next(self, c: char) -> Result<Self, Context> {
        match self {
            Self::Host(state) => Self::next_host(state, c),
            Self::Port(state) => Self::next_port(state, c),
        }
    }

    fn next_host(state: Shared, c: char) -> Result<Self, Context> {
        let mut state = state;
        if c == ':' {
            Ok(Self::Port(state))
        } else if HOST_NAME.contains(&c) {
            state.host.push(c);
            Ok(Self::Host(state))
        } else {
            Err(Context::Host)
        }
    }

    fn next_port(state: Shared, c: char) -> Result<Self, Context> {
        // A second colon leaves no way to tell where the host ends, so
        // only digits may follow the port delimiter.
        let mut state = state;
        if DIGIT.contains(&c) {
            state.port_string.push(c);
            Ok(Self::Port(state))
        } else {
            Err(Context::Port)
        }
    }
}

pub fn parse_host_port<T>(host_port_string: T) -> Result<(String, Option<u16>), Context>
    where T: AsRef<str>
{
    host_port_string
        .as_ref()
        .chars()
        .try_fold(State::new(), |machine, c| {
            machine.next(c)
        })?
        .finalize()
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    // NOTE: These lints are disabled because they're triggered inside the
    // `named_tuple!` macro expansion.
    #[allow(clippy::ref_option_ref)]
    #[allow(clippy::from_over_into)]
    fn good_host_ports() {
        named_tuple!(
            struct TestVector {
                host_port_string: &'static str,
                host: &'static str,
                port: Option<u16>,
            }
        );
        let test_vectors: &[TestVector] = &[
            ("", "", None).into(),
            ("test.test", "test.test", None).into(),
            ("Test.TEST", "test.test", None).into(),
            ("test.test:80", "test.test", Some(80)).into(),
            ("test.test:", "test.test", None).into(),
            ("localhost:65535", "localhost", Some(65535)).into(),
            ("my%20host", "my%20host", None).into(),
        ];
        for test_vector in test_vectors {
            assert_eq!(
                Ok((test_vector.host().to_string(), *test_vector.port())),
                parse_host_port(test_vector.host_port_string()),
                "{}",
                test_vector.host_port_string()
            );
        }
    }

    #[test]
    // NOTE: This lint is disabled because it's triggered inside the
    // `named_tuple!` macro expansion.
    #[allow(clippy::from_over_into)]
    fn bad_host_ports() {
        named_tuple!(
            struct TestVector {
                host_port_string: &'static str,
                context: Context,
            }
        );
        let test_vectors: &[TestVector] = &[
            ("test:test:test", Context::Port).into(),
            ("test:80:80", Context::Port).into(),
            ("test:foo", Context::Port).into(),
            ("test:0", Context::Port).into(),
            ("test:65536", Context::Port).into(),
            ("test:99999999999", Context::Port).into(),
            ("te st", Context::Host).into(),
            ("[::1]", Context::Host).into(),
        ];
        for test_vector in test_vectors {
            assert_eq!(
                Err(*test_vector.context()),
                parse_host_port(test_vector.host_port_string()),
                "{}",
                test_vector.host_port_string()
            );
        }
    }
}

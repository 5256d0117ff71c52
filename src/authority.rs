#![warn(clippy::pedantic)]

use super::character_classes::USER_INFO;
use super::context::Context;
use super::parse_host_port::parse_host_port;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Authority {
    username: String,
    password: String,
    host: String,
    port: Option<u16>,
}

impl Authority {
    #[must_use = "why u no use host return value?"]
    pub fn host(&self) -> &str {
        &self.host
    }

    #[must_use = "why did you get the port number and then throw it away?"]
    pub fn port(&self) -> Option<u16> {
        self.port
    }

    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    #[must_use = "security breach... security breach... password not used"]
    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn set_username<T>(&mut self, username: T)
        where T: Into<String>
    {
        self.username = username.into();
    }

    pub fn set_password<T>(&mut self, password: T)
        where T: Into<String>
    {
        self.password = password.into();
    }

    pub fn set_host<T>(&mut self, host: T)
        where T: Into<String>
    {
        self.host = host.into();
    }

    pub fn set_port(&mut self, port: u16) {
        self.port = Some(port);
    }

    #[must_use = "you parsed it; don't you want the results?"]
    pub fn parse<T>(authority_string: T) -> Result<Self, Context>
        where T: AsRef<str>
    {
        let (userinfo, host_port_string) = Self::parse_userinfo(authority_string.as_ref())?;
        let (host, port) = parse_host_port(host_port_string)?;
        let (username, password) = match userinfo {
            Some(userinfo) => match userinfo.find(':') {
                Some(delimiter) => (
                    userinfo[0..delimiter].to_string(),
                    userinfo[delimiter+1..].to_string()
                ),
                None => (userinfo.to_string(), String::new()),
            },
            None => (String::new(), String::new()),
        };
        Ok(Self{
            username,
            password,
            host,
            port,
        })
    }

    fn parse_userinfo(authority: &str) -> Result<(Option<&str>, &str), Context> {
        match authority.find('@') {
            Some(delimiter) => {
                let userinfo = &authority[0..delimiter];
                if userinfo.chars().all(|c| USER_INFO.contains(&c)) {
                    Ok((Some(userinfo), &authority[delimiter+1..]))
                } else {
                    Err(Context::Userinfo)
                }
            },
            None => Ok((None, authority)),
        }
    }

    /// Render `user:pass@host[:port]`, or nothing at all when there is no
    /// username.  The port is left out when it matches `default_port`,
    /// unless `explicit_port` is set.
    pub fn render(&self, default_port: Option<u16>, explicit_port: bool) -> String {
        if self.username.is_empty() {
            return String::new();
        }
        let mut authority = format!("{}:{}@{}", self.username, self.password, self.host);
        if let Some(port) = self.port {
            if explicit_port || default_port != Some(port) {
                authority.push_str(&format!(":{}", port));
            }
        }
        authority
    }
}

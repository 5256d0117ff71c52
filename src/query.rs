use std::str::FromStr;

use super::{
    codec::{
        decode_form_component,
        encode_form_component,
    },
    error::Error,
};

/// This type holds the query of a URI as an ordered mapping from keys to
/// optional values.
///
/// Keys are unique and keep the position at which they were first inserted,
/// even when their value is later overwritten.  A key without a value is a
/// "bare key", rendered without any `=`.  Keys and values given directly
/// may not contain the fragment delimiter (`#`); one decoded from `%23` is
/// ordinary data and is encoded again when the query is built.  Every key
/// has at least one character.
///
/// The [`Display`] implementation builds the query string (without the
/// leading `?`), form-encoding keys and values.
///
/// # Examples
///
/// ```rust
/// # extern crate urivalue;
/// use urivalue::Query;
///
/// # fn main() -> Result<(), urivalue::Error> {
/// let query = Query::parse("arg1=1&flag&name=hello+world")?;
/// assert_eq!(Some("1"), query.get("arg1"));
/// assert!(query.contains_key("flag"));
/// assert_eq!(None, query.get("flag"));
/// assert_eq!(Some("hello world"), query.get("name"));
/// assert_eq!("arg1=1&flag&name=hello+world", query.to_string());
/// # Ok(())
/// # }
/// ```
///
/// [`Display`]: https://doc.rust-lang.org/std/fmt/trait.Display.html
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Query {
    pairs: Vec<(String, Option<String>)>,
}

impl Query {
    /// Create an empty query.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Interpret the given string (without a leading `?`) as a query,
    /// splitting it on `&` into parts and each part on its first `=` into a
    /// key and a value.  A part without `=` becomes a bare key.  Parts with
    /// no key, such as the empty parts of `a=1&&b=2` or `=x`, are skipped.
    /// When a key shows up more than once, the last value wins and the first
    /// position is kept.
    ///
    /// Keys and values are form-decoded, so a `%23` in the string is stored
    /// as `#` and written back as `%23`.  Parsing a built query gives the
    /// same query back, except that escapes which don't decode to valid
    /// UTF-8 (such as `%FF`) are replaced with U+FFFD and so come back as
    /// `%EF%BF%BD`.
    ///
    /// # Errors
    ///
    /// [`Error::QueryContainsFragment`] is returned if the string contains
    /// `#`.
    ///
    /// [`Error::QueryContainsFragment`]: enum.Error.html#variant.QueryContainsFragment
    pub fn parse<T>(query_string: T) -> Result<Self, Error>
    where
        T: AsRef<str>,
    {
        let query_string = query_string.as_ref();
        Self::check_fragment(query_string)?;
        let mut query = Self::new();
        for part in query_string.split('&') {
            let (key, value) = match part.find('=') {
                Some(delimiter) => (
                    decode_form_component(&part[0..delimiter]),
                    Some(decode_form_component(&part[delimiter + 1..])),
                ),
                None => (decode_form_component(part), None),
            };
            if !key.is_empty() {
                query.upsert(key, value);
            }
        }
        Ok(query)
    }

    pub(crate) fn from_pairs<I, K, V>(pairs: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        pairs.into_iter().try_fold(Self::new(), |mut query, (key, value)| -> Result<Self, Error> {
            query.replace(key.into(), Some(value.into()))?;
            Ok(query)
        })
    }

    fn check_fragment(text: &str) -> Result<(), Error> {
        if text.contains('#') {
            Err(Error::QueryContainsFragment(text.to_string()))
        } else {
            Ok(())
        }
    }

    fn check_pair(
        key: &str,
        value: Option<&str>,
    ) -> Result<(), Error> {
        if key.is_empty() {
            return Err(Error::QueryKeyEmpty);
        }
        Self::check_fragment(key)?;
        value.map_or(Ok(()), Self::check_fragment)
    }

    /// Determine whether or not the given key is in the query.
    #[must_use]
    pub fn contains_key<T>(
        &self,
        key: T,
    ) -> bool
    where
        T: AsRef<str>,
    {
        self.position(key.as_ref()).is_some()
    }

    /// Borrow the value of the given key.  `None` is returned both for keys
    /// which aren't in the query and for bare keys; use [`contains_key`] to
    /// tell these apart.
    ///
    /// [`contains_key`]: #method.contains_key
    #[must_use]
    pub fn get<T>(
        &self,
        key: T,
    ) -> Option<&str>
    where
        T: AsRef<str>,
    {
        self.position(key.as_ref())
            .and_then(|i| self.pairs[i].1.as_deref())
    }

    /// Add a key which isn't yet in the query.
    pub(crate) fn insert(
        &mut self,
        key: String,
        value: Option<String>,
    ) -> Result<(), Error> {
        Self::check_pair(&key, value.as_deref())?;
        if self.contains_key(&key) {
            return Err(Error::QueryKeyExists(key));
        }
        self.pairs.push((key, value));
        Ok(())
    }

    /// Determine whether or not the query has no keys.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Iterate over the keys and values of the query, in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.pairs
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_deref()))
    }

    /// Return the number of keys in the query.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    fn position(
        &self,
        key: &str,
    ) -> Option<usize> {
        self.pairs.iter().position(|(k, _)| k == key)
    }

    /// Add a key, or overwrite its value in place if it's already there.
    pub(crate) fn replace(
        &mut self,
        key: String,
        value: Option<String>,
    ) -> Result<(), Error> {
        Self::check_pair(&key, value.as_deref())?;
        self.upsert(key, value);
        Ok(())
    }

    fn upsert(
        &mut self,
        key: String,
        value: Option<String>,
    ) {
        match self.position(&key) {
            Some(i) => self.pairs[i].1 = value,
            None => self.pairs.push((key, value)),
        }
    }
}

impl std::fmt::Display for Query {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        for (i, (key, value)) in self.pairs.iter().enumerate() {
            if i > 0 {
                write!(f, "&")?;
            }
            write!(f, "{}", encode_form_component(key))?;
            if let Some(value) = value {
                write!(f, "={}", encode_form_component(value))?;
            }
        }
        Ok(())
    }
}

impl FromStr for Query {
    type Err = Error;

    fn from_str(query_string: &str) -> Result<Self, Self::Err> {
        Query::parse(query_string)
    }
}

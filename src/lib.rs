#![warn(clippy::pedantic)]
#![allow(clippy::non_ascii_literal)]
#![warn(missing_docs)]

//! This crate provides [`Uri`], a mutable URI value which can be parsed from
//! a string, inspected and changed one component at a time, and turned back
//! into a string.  The query is held as a [`Query`], an ordered mapping from
//! keys to optional values.
//!
//! [`Uri`]: struct.Uri.html
//! [`Query`]: struct.Query.html

#[cfg(test)]
#[macro_use]
extern crate named_tuple;

mod authority;
mod character_classes;
mod codec;
mod context;
mod default_ports;
mod error;
mod parse_host_port;
mod percent_encoded_character_decoder;
mod prober;
mod query;
mod uri;

pub use crate::context::Context;
pub use crate::error::Error;
pub use crate::prober::{
    HttpProber,
    ProbeError,
};
pub use crate::query::Query;
pub use crate::uri::{
    Components,
    Uri,
};

//! # rest-client
//!
//! A minimal blocking REST client. A [`RestClient`] targets a single base
//! URL and exposes CRUD-style convenience methods that delegate to a
//! generic [`RestClient::call`], which issues one request through the
//! configured transport and parses the response body according to the
//! configured content type.
//!
//! ```no_run
//! use rest_client::{ClientConfig, RestClient};
//!
//! fn main() -> rest_client::Result<()> {
//!     let client = RestClient::new(ClientConfig::new("https://api.example.com/items"))?;
//!     let item = client.get_one(42)?;
//!     println!("{}", item);
//!     Ok(())
//! }
//! ```
//!
//! Response parsing defaults to autodetection: the body is tried as JSON,
//! then as XML, and falls back to the raw string. An explicit `json` or
//! `xml` preference fails with [`Error::Parse`] on a malformed body
//! instead.
//!
//! The client is blocking and single-threaded: one request in flight per
//! instance. Concurrent call sites should each use their own instance.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

pub mod client;
pub mod content;
pub mod http_client;
pub mod logger;

pub use client::{ClientConfig, RestClient};
pub use content::{Content, ContentType};
pub use http_client::{HttpClient, Request, Response};
pub use logger::Logger;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// A verb outside GET/POST/PUT/DELETE was requested.
    #[error("method {0} is not supported")]
    UnsupportedMethod(String),
    /// The underlying transport could not be constructed.
    #[error("unable to initialize the http transport: {0}")]
    TransportInit(String),
    /// Network or transport-level failure while executing the request.
    #[error("transport failure: {0}")]
    Transport(String),
    /// The server answered with a status code other than 200.
    #[error("server returned response code \"{0}\", expected response code is 200")]
    UnexpectedStatus(u16),
    /// The body did not match the requested content type.
    #[error("unable to parse {kind} content: {message}")]
    Parse { kind: &'static str, message: String },
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Error {
        if err.is_builder() {
            Error::TransportInit(err.to_string())
        } else {
            Error::Transport(err.to_string())
        }
    }
}

/// The four verbs the client supports. Anything else fails fast with
/// [`Error::UnsupportedMethod`] before a request is issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let method = match *self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        };
        f.write_str(method)
    }
}

impl FromStr for Method {
    type Err = Error;

    fn from_str(method: &str) -> Result<Method> {
        match method.to_ascii_uppercase().as_str() {
            "GET" => Ok(Method::Get),
            "POST" => Ok(Method::Post),
            "PUT" => Ok(Method::Put),
            "DELETE" => Ok(Method::Delete),
            other => Err(Error::UnsupportedMethod(other.to_string())),
        }
    }
}

//! The transport seam. [`HttpClient`] is what the core requires from an
//! HTTP execution facility; [`reqwest::ReqwestHttpClient`] is the default
//! implementation.

use std::time::Duration;

use crate::{ClientConfig, Method, Result};


pub mod reqwest;

/// One outbound request. Built transiently per call from the client
/// configuration and the call arguments.
#[derive(Debug, Clone)]
pub struct Request {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    /// Field name/value pairs, form-urlencoded for non-GET verbs and
    /// ignored for GET.
    pub body: Vec<(String, String)>,
    pub timeout: Option<Duration>,
}

/// What came back from the transport, consumed immediately by the caller.
#[derive(Debug, Clone)]
pub struct Response {
    pub status_code: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
    pub elapsed: Duration,
    pub final_url: String,
}

pub trait HttpClient {
    fn create(config: &ClientConfig) -> Result<Self>
    where
        Self: Sized;

    fn execute(&self, request: &Request) -> Result<Response>;
}

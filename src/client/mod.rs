//! The client itself: configuration, the CRUD convenience methods, and
//! the URL builder they share.

use std::fmt::Display;
use std::time::Duration;

use serde_json::{json, Map, Value};
use url::form_urlencoded;

use crate::content::{parse_content, Content, ContentType};
use crate::http_client::reqwest::ReqwestHttpClient;
use crate::http_client::{HttpClient, Request};
use crate::logger::{Logger, NoopLogger};
use crate::{Error, Method, Result};


/// Everything a [`RestClient`] needs to know up front. Plain data; build
/// one, adjust the fields you care about, and hand it to the client.
pub struct ClientConfig {
    /// The fixed resource root all CRUD methods target.
    pub base_url: String,
    pub content_type: ContentType,
    /// Extra headers sent with every request, e.g. authentication keys.
    pub headers: Vec<(String, String)>,
    /// Maximum request time. `None` disables the limit.
    pub timeout: Option<Duration>,
    /// Set to false to skip certificate validation.
    pub ssl_check: bool,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> ClientConfig {
        ClientConfig {
            base_url: base_url.into(),
            content_type: ContentType::Autodetect,
            headers: Vec::new(),
            timeout: Some(Duration::from_secs(30)),
            ssl_check: true,
        }
    }
}

/// A blocking client for one REST resource.
///
/// One request in flight at a time; no synchronization is provided, so
/// concurrent call sites should each hold their own instance.
pub struct RestClient {
    config: ClientConfig,
    transport: Box<dyn HttpClient>,
    logger: Box<dyn Logger>,
}

impl RestClient {
    pub fn new(config: ClientConfig) -> Result<RestClient> {
        let transport = Box::new(ReqwestHttpClient::create(&config)?);
        Ok(RestClient::with_transport(config, transport))
    }

    /// Builds a client over a caller-supplied transport.
    pub fn with_transport(config: ClientConfig, transport: Box<dyn HttpClient>) -> RestClient {
        RestClient {
            config,
            transport,
            logger: Box::new(NoopLogger),
        }
    }

    pub fn with_logger(mut self, logger: Box<dyn Logger>) -> RestClient {
        self.logger = logger;
        self
    }

    /// Fetches several records, merging `search_params` into the base
    /// URL's query string.
    pub fn get_all(&self, search_params: &[(String, String)]) -> Result<Content> {
        let url = build_url(Method::Get, &self.config.base_url, search_params);
        self.call(Method::Get, &url, &[])
    }

    /// Fetches one record by its ID.
    pub fn get_one(&self, id: impl Display) -> Result<Content> {
        let url = format!("{}/{}", self.config.base_url, id);
        self.call(Method::Get, &url, &[])
    }

    /// Creates a new record from the given fields.
    pub fn create(&self, data: &[(String, String)]) -> Result<Content> {
        let url = self.config.base_url.clone();
        self.call(Method::Post, &url, data)
    }

    /// Updates the record with the given ID.
    pub fn update(&self, data: &[(String, String)], id: impl Display) -> Result<Content> {
        let url = format!("{}/{}", self.config.base_url, id);
        self.call(Method::Put, &url, data)
    }

    /// Deletes by ID, by additional parameters, or both.
    pub fn delete(
        &self,
        id: Option<impl Display>,
        search_params: &[(String, String)],
    ) -> Result<Content> {
        let url = match id {
            Some(id) => format!("{}/{}", self.config.base_url, id),
            None => self.config.base_url.clone(),
        };
        self.call(Method::Delete, &url, search_params)
    }

    /// Issues one blocking request and returns the parsed response body.
    ///
    /// Anything other than a 200 answer fails with
    /// [`Error::UnexpectedStatus`]; most services answer 200 on success no
    /// matter the verb, so the check stays simple.
    pub fn call(&self, method: Method, url: &str, data: &[(String, String)]) -> Result<Content> {
        let request = Request {
            method,
            url: url.to_string(),
            headers: self.config.headers.clone(),
            body: data.to_vec(),
            timeout: self.config.timeout,
        };

        self.logger.log(
            "Send request.",
            Some(&json!({
                "Url": request.url,
                "Method": request.method.to_string(),
                "Data": pairs_to_value(&request.body),
                "Headers": pairs_to_value(&request.headers),
            })),
        );

        let response = self.transport.execute(&request)?;

        if response.status_code != 200 {
            return Err(Error::UnexpectedStatus(response.status_code));
        }

        self.logger.log(
            "Successfully got the response.",
            Some(&json!({
                "Response code": response.status_code,
                "Request time": response.elapsed.as_secs_f64(),
                "Response Url": response.final_url,
                "Response Headers": pairs_to_value(&response.headers),
            })),
        );

        parse_content(self.config.content_type, &response.body)
    }
}

/// Appends `search_params` to the base URL for GET requests, merging them
/// over any query string the base URL already carries (caller values win
/// on collision). Non-GET verbs send their parameters in the body, so the
/// base URL passes through untouched.
///
/// A GET with no parameters and no existing query still gains a bare `?`.
pub(crate) fn build_url(
    method: Method,
    base_url: &str,
    search_params: &[(String, String)],
) -> String {
    if method != Method::Get {
        return base_url.to_string();
    }

    let (base, params) = match base_url.split_once('?') {
        Some((base, existing)) => {
            let mut params: Vec<(String, String)> = form_urlencoded::parse(existing.as_bytes())
                .into_owned()
                .collect();
            for (key, value) in search_params {
                match params.iter_mut().find(|(existing_key, _)| existing_key == key) {
                    Some(param) => param.1 = value.clone(),
                    None => params.push((key.clone(), value.clone())),
                }
            }
            (base, params)
        }
        None => (base_url, search_params.to_vec()),
    };

    let query = form_urlencoded::Serializer::new(String::new())
        .extend_pairs(&params)
        .finish();

    format!("{}?{}", base, query)
}

fn pairs_to_value(pairs: &[(String, String)]) -> Value {
    let map: Map<String, Value> = pairs
        .iter()
        .map(|(key, value)| (key.clone(), Value::String(value.clone())))
        .collect();
    Value::Object(map)
}

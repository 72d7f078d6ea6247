use std::time::Instant;

use reqwest::blocking::{Client, RequestBuilder};
use reqwest::header::HeaderMap;

use crate::http_client::{HttpClient, Request, Response};
use crate::{ClientConfig, Error, Method, Result};

pub struct ReqwestHttpClient {
    client: Client,
}

impl HttpClient for ReqwestHttpClient {
    fn create(config: &ClientConfig) -> Result<ReqwestHttpClient>
    where
        Self: Sized,
    {
        let client = Client::builder()
            .danger_accept_invalid_certs(!config.ssl_check)
            .timeout(config.timeout)
            .build()
            .map_err(|e| Error::TransportInit(e.to_string()))?;

        Ok(ReqwestHttpClient { client })
    }

    fn execute(&self, request: &Request) -> Result<Response> {
        let Request {
            method,
            url,
            headers,
            body,
            timeout,
        } = request;
        let mut request_builder = self.client.request(method.into(), url);
        request_builder = set_headers(headers, request_builder);
        if let Some(timeout) = timeout {
            request_builder = request_builder.timeout(*timeout);
        }
        // GET parameters travel in the query string, not the body
        if *method != Method::Get {
            request_builder = request_builder.form(body);
        }

        let started = Instant::now();
        let response = request_builder.send()?;
        let elapsed = started.elapsed();

        let final_url = response.url().to_string();
        let status_code = response.status().as_u16();
        let headers = flatten_headers(response.headers());
        let body = response.text()?;

        Ok(Response {
            status_code,
            headers,
            body,
            elapsed,
            final_url,
        })
    }
}

fn set_headers(
    headers: &[(String, String)],
    mut request_builder: RequestBuilder,
) -> RequestBuilder {
    for (key, value) in headers {
        request_builder = request_builder.header(key, value);
    }
    request_builder
}

fn flatten_headers(headers: &HeaderMap) -> Vec<(String, String)> {
    headers
        .iter()
        .map(|(name, value)| {
            (
                name.to_string(),
                String::from_utf8_lossy(value.as_bytes()).into_owned(),
            )
        })
        .collect()
}

impl From<&Method> for reqwest::Method {
    fn from(method: &Method) -> Self {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
        }
    }
}

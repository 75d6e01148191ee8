use async_trait::async_trait;
use http::{HeaderMap, HeaderName, HeaderValue};
use tracing::debug;

use crate::http_client::{
    error::{Error, HttpClientErrorChecker},
    http_client::HttpClient,
    request::{Headers, Request},
    response::Response,
};

#[derive(Clone, Default)]
pub struct ReqwestHttpClient {
    client: reqwest::Client,
}

impl ReqwestHttpClient {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpClient for ReqwestHttpClient {
    async fn post(&self, request: Request) -> Result<Response, Error> {
        debug!("Sending {:#?}", request);

        let header_map: HeaderMap = (&request.headers).try_into()?;

        let reqwest_response = self
            .client
            .post(&request.url)
            .headers(header_map)
            .timeout(request.timeout)
            .body(request.body)
            .send()
            .await
            .map_err(|e| Error::classify(&e))?;

        let status = reqwest_response.status().as_u16();
        let final_url = reqwest_response.url().to_string();
        let headers: Headers = reqwest_response.headers().into();

        let body = reqwest_response.text().await.map_err(|e| {
            if e.is_timeout() {
                Error::Timeout(e.to_string())
            } else {
                Error::Network(e.to_string())
            }
        })?;

        Ok(Response {
            status,
            headers,
            body,
            final_url,
        })
    }
}

impl HttpClientErrorChecker for reqwest::Error {
    fn is_timeout(&self) -> bool {
        self.is_timeout()
    }

    fn is_connect(&self) -> bool {
        self.is_connect()
    }

    fn is_request(&self) -> bool {
        self.is_request()
    }

    fn is_body(&self) -> bool {
        self.is_body()
    }

    fn error_string(&self) -> String {
        self.to_string()
    }
}

/// Repeated header names collapse into one entry, values joined with `", "`.
/// Values that are not visible ASCII are skipped.
impl From<&HeaderMap> for Headers {
    fn from(headers: &HeaderMap) -> Self {
        headers
            .keys()
            .filter_map(|k| {
                let values: Vec<&str> = headers
                    .get_all(k)
                    .iter()
                    .filter_map(|v| v.to_str().ok())
                    .collect();
                (!values.is_empty()).then(|| (k.to_string(), values.join(", ")))
            })
            .collect()
    }
}

impl TryFrom<&Headers> for HeaderMap {
    type Error = Error;

    fn try_from(headers: &Headers) -> Result<Self, Self::Error> {
        let mut header_map = HeaderMap::with_capacity(headers.len());
        for (k, v) in headers.iter() {
            let name = HeaderName::from_bytes(k.as_bytes())
                .map_err(|e| Error::InvalidRequest(format!("header name {k:?}: {e}")))?;
            let value = HeaderValue::from_str(v)
                .map_err(|e| Error::InvalidRequest(format!("header {k:?} value: {e}")))?;
            header_map.insert(name, value);
        }
        Ok(header_map)
    }
}

use std::time::Duration;

use reqwest::Url;

use crate::error::GamesDbError;

/// Performs a single HTTP GET and returns the response body.
///
/// [`GamesDbClient`](crate::GamesDbClient) only ever issues GETs with a query
/// string, so any client that can do that can stand in for [`HttpTransport`].
pub trait Transport {
    fn get(&self, url: &Url) -> Result<Vec<u8>, GamesDbError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn get(&self, url: &Url) -> Result<Vec<u8>, GamesDbError> {
        (**self).get(url)
    }
}

/// Blocking reqwest transport.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: reqwest::blocking::Client,
}

impl HttpTransport {
    pub fn new(timeout: Duration) -> Result<Self, GamesDbError> {
        let http = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()?;
        Ok(Self { http })
    }
}

impl Transport for HttpTransport {
    fn get(&self, url: &Url) -> Result<Vec<u8>, GamesDbError> {
        let response = self.http.get(url.clone()).send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(GamesDbError::HttpStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let bytes = response.bytes()?;
        Ok(bytes.to_vec())
    }
}

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;

use crate::config::ClientConfig;


/// Shared HTTP plumbing for the catalog endpoints. Cheap to clone.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    http: reqwest::Client,
    config: ClientConfig,
}

impl CatalogClient {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    pub fn from_env() -> Self {
        Self::new(ClientConfig::from_env())
    }

    pub fn with_access_token(mut self, access_token: Option<String>) -> Self {
        self.config.access_token = access_token.filter(|t| !t.is_empty());
        self
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Absolute URL of an API path such as `products/search`.
    pub fn api_url(&self, path: &str) -> String {
        format!("{}/{}", self.config.api_url.trim_end_matches('/'), path.trim_start_matches('/'))
    }

    pub(crate) fn get(&self, url: &str) -> RequestBuilder {
        self.authorize(self.http.get(url))
    }

    pub(crate) fn post(&self, url: &str) -> RequestBuilder {
        self.authorize(self.http.post(url))
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.config.access_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// Sends the request and decodes a JSON body. Error statuses become errors carrying the body text.
    pub(crate) async fn send_json<T: DeserializeOwned>(&self, request: RequestBuilder) -> anyhow::Result<T> {
        let response_txt = self.send(request).await?;
        let response: T = serde_json::from_str(&response_txt)?;
        Ok(response)
    }

    pub(crate) async fn send(&self, request: RequestBuilder) -> anyhow::Result<String> {
        let request = request.build()?;
        tracing::debug!("{} {}", request.method(), request.url());
        let response = self.http.execute(request).await?;
        let status = response.status();
        let response_txt = response.text().await?;
        if status.is_client_error() || status.is_server_error() {
            tracing::warn!("catalog request failed: {}", status);
            anyhow::bail!("Error: {}: {}", status, response_txt);
        }
        tracing::debug!("catalog response: len = {}", response_txt.len());
        Ok(response_txt)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn client(api_url: &str) -> CatalogClient {
        CatalogClient::new(ClientConfig {
            api_url: api_url.to_string(),
            access_token: None,
        })
    }

    #[test]
    fn api_url_joins_single_slash() {
        assert_eq!(client("http://shop/api/").api_url("/brands"), "http://shop/api/brands");
        assert_eq!(client("http://shop/api").api_url("brands"), "http://shop/api/brands");
    }

    #[test]
    fn bearer_token_is_attached_when_present() {
        let anonymous = client("http://shop/api");
        let request = anonymous.get("http://shop/api/products").build().unwrap();
        assert!(request.headers().get(reqwest::header::AUTHORIZATION).is_none());

        let signed_in = client("http://shop/api").with_access_token(Some("abc".to_string()));
        let request = signed_in.get("http://shop/api/products").build().unwrap();
        assert_eq!(request.headers()[reqwest::header::AUTHORIZATION], "Bearer abc");
    }

    #[test]
    fn empty_token_counts_as_signed_out() {
        let client = client("http://shop/api").with_access_token(Some(String::new()));
        assert_eq!(client.config().access_token, None);
    }
}

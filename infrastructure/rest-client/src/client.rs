use std::time::Duration;

use reqwest::Client;
use url::Url;

use business::domain::errors::ServiceError;
use business::domain::product::value_objects::ProductId;

/// Collection path of the product resource, relative to the service root.
const COLLECTION_PATH: &str = "api/array/";

/// Shared HTTP client configuration for the product service.
#[derive(Debug, Clone)]
pub struct ApiClient {
    pub client: Client,
    pub base_url: Url,
}

impl ApiClient {
    pub fn new(base_url: Url, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_default();

        Self {
            client,
            base_url: with_trailing_slash(base_url),
        }
    }

    /// `{base}/api/array/`
    pub fn collection_url(&self) -> Result<Url, ServiceError> {
        self.base_url
            .join(COLLECTION_PATH)
            .map_err(|e| ServiceError::invalid_url(e.to_string()))
    }

    /// `{base}/api/array/{id}`, with the identifier percent-encoded.
    pub fn item_url(&self, id: &ProductId) -> Result<Url, ServiceError> {
        let mut url = self.collection_url()?;
        url.path_segments_mut()
            .map_err(|()| ServiceError::invalid_url("service url cannot carry a path"))?
            .pop_if_empty()
            .push(id.as_str());
        Ok(url)
    }

    /// Resolves a record's relative image path against the service host.
    pub fn asset_url(&self, path: &str) -> Option<Url> {
        self.base_url.join(path.trim_start_matches('/')).ok()
    }
}

fn with_trailing_slash(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base: &str) -> ApiClient {
        ApiClient::new(Url::parse(base).unwrap(), Duration::from_secs(5))
    }

    #[test]
    fn should_build_collection_url_from_host() {
        let api = client("http://localhost:3000");
        assert_eq!(
            api.collection_url().unwrap().as_str(),
            "http://localhost:3000/api/array/"
        );
    }

    #[test]
    fn should_keep_base_path_prefix() {
        let api = client("https://shop.example.com/backend");
        assert_eq!(
            api.collection_url().unwrap().as_str(),
            "https://shop.example.com/backend/api/array/"
        );
    }

    #[test]
    fn should_build_item_url_without_double_slash() {
        let api = client("http://localhost:3000/");
        let url = api.item_url(&ProductId::new("65f1c0ffee")).unwrap();
        assert_eq!(url.as_str(), "http://localhost:3000/api/array/65f1c0ffee");
    }

    #[test]
    fn should_percent_encode_item_id() {
        let api = client("http://localhost:3000");
        let url = api.item_url(&ProductId::new("a/b c")).unwrap();
        assert_eq!(url.as_str(), "http://localhost:3000/api/array/a%2Fb%20c");
    }

    #[test]
    fn should_resolve_relative_image_path_against_host() {
        let api = client("http://localhost:3000");
        assert_eq!(
            api.asset_url("uploads/pen.png").unwrap().as_str(),
            "http://localhost:3000/uploads/pen.png"
        );
        assert_eq!(
            api.asset_url("/uploads/pen.png").unwrap().as_str(),
            "http://localhost:3000/uploads/pen.png"
        );
    }

    #[test]
    fn should_report_invalid_url_when_base_cannot_carry_a_path() {
        let client = client("mailto:catalog@example.com");

        assert!(matches!(client.collection_url(), Err(ServiceError::InvalidUrl(_))));
        assert!(matches!(
            client.item_url(&ProductId::new("pen-1")),
            Err(ServiceError::InvalidUrl(_))
        ));
    }
}

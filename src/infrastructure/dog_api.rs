// SPDX-License-Identifier: MPL-2.0
//! TheDogAPI adapter implementing [`BreedSource`] and [`ImageSource`].
//!
//! Requests are built eagerly so the returned futures own everything they
//! need and can be handed to `Task::perform`.

use crate::application::port::{BreedSource, ImageSource};
use crate::config::ApiConfig;
use crate::domain::{Breed, BreedId, Measurement};
use crate::error::{Error, Result};
use reqwest::header::HeaderValue;
use serde::Deserialize;
use std::future::Future;
use std::sync::Arc;

const API_KEY_HEADER: &str = "x-api-key";
const USER_AGENT: &str = concat!("DoggieSee/", env!("CARGO_PKG_VERSION"));

/// HTTP client for the breed and image endpoints.
#[derive(Debug, Clone)]
pub struct DogApiClient {
    http: reqwest::Client,
    base_url: Arc<str>,
    image_base_url: Arc<str>,
    api_key: Option<HeaderValue>,
}

impl DogApiClient {
    /// Builds a client from the `[api]` configuration section.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the API key is not a valid header value
    /// and [`Error::Network`] if the TLS backend cannot be initialized.
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let api_key = match config.api_key.as_deref().map(str::trim) {
            Some(key) if !key.is_empty() => {
                let mut value = HeaderValue::from_str(key)
                    .map_err(|e| Error::Config(format!("invalid api_key: {e}")))?;
                value.set_sensitive(true);
                Some(value)
            }
            _ => None,
        };

        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(config.request_timeout())
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').into(),
            image_base_url: config.image_base_url.trim_end_matches('/').into(),
            api_key,
        })
    }

    fn api_get(&self, path: &str) -> reqwest::RequestBuilder {
        let builder = self.http.get(format!("{}/{path}", self.base_url));
        match &self.api_key {
            Some(key) => builder.header(API_KEY_HEADER, key.clone()),
            None => builder,
        }
    }

    fn list_request(&self, page: u32, limit: u32) -> Result<reqwest::Request> {
        Ok(self
            .api_get("breeds")
            .query(&[("limit", limit), ("page", page)])
            .build()?)
    }

    fn search_request(&self, query: &str) -> Result<reqwest::Request> {
        Ok(self.api_get("breeds/search").query(&[("q", query)]).build()?)
    }

    fn image_request(&self, image_id: &str) -> Result<reqwest::Request> {
        Ok(self
            .http
            .get(format!("{}/{image_id}.jpg", self.image_base_url))
            .build()?)
    }
}

async fn fetch_breeds(http: reqwest::Client, request: Result<reqwest::Request>) -> Result<Vec<Breed>> {
    let request = request?;
    tracing::debug!(url = %request.url(), "requesting breeds");
    let response = http.execute(request).await?.error_for_status()?;
    let records: Vec<BreedRecord> = response.json().await?;
    Ok(records.into_iter().map(Breed::from).collect())
}

impl BreedSource for DogApiClient {
    fn list_page(
        &self,
        page: u32,
        limit: u32,
    ) -> impl Future<Output = Result<Vec<Breed>>> + Send + 'static {
        fetch_breeds(self.http.clone(), self.list_request(page, limit))
    }

    fn search(&self, query: String) -> impl Future<Output = Result<Vec<Breed>>> + Send + 'static {
        fetch_breeds(self.http.clone(), self.search_request(&query))
    }
}

impl ImageSource for DogApiClient {
    fn fetch_image(
        &self,
        image_id: String,
    ) -> impl Future<Output = Result<Vec<u8>>> + Send + 'static {
        let http = self.http.clone();
        let request = self.image_request(&image_id);
        async move {
            let request = request?;
            tracing::debug!(url = %request.url(), "requesting breed image");
            let response = http.execute(request).await?.error_for_status()?;
            Ok(response.bytes().await?.to_vec())
        }
    }
}

// =============================================================================
// Wire format
// =============================================================================

/// Upstream identifiers are JSON numbers; strings are accepted as well.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RecordId {
    Number(u64),
    Text(String),
}

#[derive(Debug, Default, Deserialize)]
struct MeasurementRecord {
    #[serde(default)]
    metric: String,
    #[serde(default)]
    imperial: String,
}

#[derive(Debug, Deserialize)]
struct BreedRecord {
    id: RecordId,
    name: String,
    #[serde(default)]
    bred_for: Option<String>,
    #[serde(default)]
    breed_group: Option<String>,
    #[serde(default)]
    height: MeasurementRecord,
    #[serde(default)]
    weight: MeasurementRecord,
    #[serde(default)]
    temperament: Option<String>,
    #[serde(default)]
    life_span: String,
    #[serde(default)]
    reference_image_id: Option<String>,
}

impl From<MeasurementRecord> for Measurement {
    fn from(record: MeasurementRecord) -> Self {
        Self {
            metric: record.metric,
            imperial: record.imperial,
        }
    }
}

impl From<BreedRecord> for Breed {
    fn from(record: BreedRecord) -> Self {
        let id = match record.id {
            RecordId::Number(n) => BreedId::new(n.to_string()),
            RecordId::Text(s) => BreedId::new(s),
        };
        Self {
            id,
            name: record.name,
            bred_for: record.bred_for.filter(|s| !s.is_empty()),
            breed_group: record.breed_group.filter(|s| !s.is_empty()),
            height: record.height.into(),
            weight: record.weight.into(),
            temperament: record.temperament,
            life_span: record.life_span,
            reference_image_id: record.reference_image_id.filter(|s| !s.is_empty()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client_with(api_key: Option<&str>) -> DogApiClient {
        let config = ApiConfig {
            api_key: api_key.map(str::to_string),
            ..ApiConfig::default()
        };
        DogApiClient::new(&config).expect("client should build")
    }

    fn decode(json: &str) -> Vec<Breed> {
        let records: Vec<BreedRecord> = serde_json::from_str(json).expect("valid breed json");
        records.into_iter().map(Breed::from).collect()
    }

    #[test]
    fn list_request_carries_limit_and_page() {
        let request = client_with(None).list_request(3, 10).unwrap();
        assert_eq!(
            request.url().as_str(),
            "https://api.thedogapi.com/v1/breeds?limit=10&page=3"
        );
        assert!(request.headers().get(API_KEY_HEADER).is_none());
    }

    #[test]
    fn search_query_is_url_encoded() {
        let request = client_with(None).search_request("golden & co").unwrap();
        assert_eq!(
            request.url().as_str(),
            "https://api.thedogapi.com/v1/breeds/search?q=golden+%26+co"
        );
    }

    #[test]
    fn api_key_is_sent_on_api_requests_only() {
        let client = client_with(Some(" secret "));
        let list = client.list_request(0, 10).unwrap();
        assert_eq!(list.headers().get(API_KEY_HEADER).unwrap(), "secret");

        let image = client.image_request("BJa4kxc4X").unwrap();
        assert!(image.headers().get(API_KEY_HEADER).is_none());
    }

    #[test]
    fn blank_api_key_is_ignored() {
        let request = client_with(Some("  ")).list_request(0, 10).unwrap();
        assert!(request.headers().get(API_KEY_HEADER).is_none());
    }

    #[test]
    fn invalid_api_key_is_a_config_error() {
        let config = ApiConfig {
            api_key: Some("bad\nkey".to_string()),
            ..ApiConfig::default()
        };
        assert!(matches!(DogApiClient::new(&config), Err(Error::Config(_))));
    }

    #[test]
    fn image_url_tolerates_trailing_slash() {
        let config = ApiConfig {
            image_base_url: "https://images.example.com/dogs/".to_string(),
            ..ApiConfig::default()
        };
        let client = DogApiClient::new(&config).unwrap();
        let request = client.image_request("abc").unwrap();
        assert_eq!(request.url().as_str(), "https://images.example.com/dogs/abc.jpg");
    }

    #[test]
    fn decodes_listing_record() {
        let breeds = decode(
            r#"[{
                "weight": {"imperial": "6 - 13", "metric": "3 - 6"},
                "height": {"imperial": "9 - 11.5", "metric": "23 - 29"},
                "id": 1,
                "name": "Affenpinscher",
                "bred_for": "Small rodent hunting, lapdog",
                "breed_group": "Toy",
                "life_span": "10 - 12 years",
                "temperament": "Stubborn, Curious, Playful",
                "origin": "Germany, France",
                "reference_image_id": "BJa4kxc4X",
                "image": {"id": "BJa4kxc4X", "width": 1600, "height": 1199}
            }]"#,
        );

        assert_eq!(breeds.len(), 1);
        let breed = &breeds[0];
        assert_eq!(breed.id.as_str(), "1");
        assert_eq!(breed.name, "Affenpinscher");
        assert_eq!(breed.height.metric, "23 - 29");
        assert_eq!(breed.weight.imperial, "6 - 13");
        assert_eq!(breed.breed_group.as_deref(), Some("Toy"));
        assert_eq!(breed.reference_image_id.as_deref(), Some("BJa4kxc4X"));
        assert_eq!(
            breed.temperament_traits().collect::<Vec<_>>(),
            vec!["Stubborn", "Curious", "Playful"]
        );
    }

    #[test]
    fn decodes_sparse_search_record() {
        let breeds = decode(
            r#"[{
                "id": "akita",
                "name": "Akita",
                "breed_group": "",
                "life_span": "10 - 14 years"
            }]"#,
        );

        let breed = &breeds[0];
        assert_eq!(breed.id.as_str(), "akita");
        assert_eq!(breed.breed_group, None);
        assert_eq!(breed.temperament, None);
        assert_eq!(breed.reference_image_id, None);
        assert_eq!(breed.height, Measurement::default());
        assert!(!breed.has_badge());
    }

    #[test]
    fn empty_page_decodes_to_no_breeds() {
        assert!(decode("[]").is_empty());
    }
}

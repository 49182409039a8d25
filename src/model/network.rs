use reqwest::StatusCode;
use serde::Deserialize;
use tracing::{debug, warn};
use url::Url;

use crate::config::ApiConfig;
use crate::model::{Error, Result};

pub const IMAGE_HOST_PREFIX: &str = "https://images.dog.ceo/breeds/";

#[derive(Deserialize, Debug)]
pub struct RandomImageResponse {
    pub status: Option<String>,
    pub message: Option<String>,
}

impl RandomImageResponse {
    pub fn into_image_url(self) -> Option<String> {
        match self.status.as_deref() {
            Some("success") => self.message,
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct DogApi {
    client: reqwest::Client,
    base_url: Url,
}

impl DogApi {
    pub fn new(config: &ApiConfig) -> Result<DogApi> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(DogApi {
            client,
            base_url: config.base_url.clone(),
        })
    }

    pub fn random_image_url(&self, breed: &str) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| Error::InvalidBaseUrl(self.base_url.clone()))?
            .pop_if_empty()
            .extend(["breed", breed, "images", "random"]);
        Ok(url)
    }

    /// Asks the API for a random picture of `breed`.
    ///
    /// A non-200 response, an unreadable body, or a body whose status is not
    /// `success` all come back as `Ok(None)`. Only transport failures are
    /// errors.
    pub async fn random_image(&self, breed: &str) -> Result<Option<String>> {
        let url = self.random_image_url(breed)?;
        debug!(%url, "fetching random image");

        let response = self.client.get(url).send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        if status != StatusCode::OK {
            warn!(breed, %status, "dog api returned an error status");
            return Ok(None);
        }

        match serde_json::from_slice::<RandomImageResponse>(&body) {
            Ok(parsed) => Ok(parsed.into_image_url()),
            Err(err) => {
                warn!(breed, %err, "dog api returned an unreadable body");
                Ok(None)
            }
        }
    }
}

use std::time::Duration;

use anyhow::Error;
use reqwest::StatusCode;
use thiserror::Error;

use crate::{
    models::youtube_trending_response::YouTubeTrendingResponse,
    utils::consts::{MAX_RESULTS_PER_PAGE, MOST_POPULAR_CHART, VIDEO_PARTS},
};

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Temp-banned due to excess requests, please wait and continue later")]
    RateLimited,
    #[error("Access forbidden, check the api key and quota")]
    Forbidden,
    #[error("Api request failed with status code {status}: {body}")]
    UnexpectedStatus { status: StatusCode, body: String },
    #[error("Request timed out")]
    Timeout,
    #[error("Request error: {0}")]
    Transport(reqwest::Error),
    #[error("Could not parse api response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl FetchError {
    /// Rate limits and forbidden responses invalidate the key for every
    /// remaining request of the run.
    pub fn is_fatal(&self) -> bool {
        matches!(self, FetchError::RateLimited | FetchError::Forbidden)
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            FetchError::Timeout
        } else {
            FetchError::Transport(err)
        }
    }
}

pub struct YoutubeService {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl YoutubeService {
    pub fn new(api_key: String, base_url: &str, timeout: Duration) -> Result<YoutubeService, Error> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        let base_url = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{}/", base_url)
        };

        Ok(YoutubeService {
            client,
            base_url,
            api_key,
        })
    }

    /// Fetches one page of the mostPopular chart. No page token means the first page.
    pub async fn get_trending_videos(
        &self,
        country_code: &str,
        category_id: Option<&str>,
        page_token: Option<&str>,
    ) -> Result<YouTubeTrendingResponse, FetchError> {
        let url = format!("{}videos", self.base_url);

        let mut query: Vec<(&str, String)> = vec![("part", VIDEO_PARTS.to_string())];
        if let Some(page_token) = page_token {
            query.push(("pageToken", page_token.to_string()));
        }
        query.push(("chart", MOST_POPULAR_CHART.to_string()));
        query.push(("regionCode", country_code.to_string()));
        query.push(("maxResults", MAX_RESULTS_PER_PAGE.to_string()));
        if let Some(category_id) = category_id {
            query.push(("videoCategoryId", category_id.to_string()));
        }
        query.push(("key", self.api_key.clone()));

        let resp = self.client.get(url).query(&query).send().await?;

        match resp.status() {
            StatusCode::OK => (),
            StatusCode::TOO_MANY_REQUESTS => return Err(FetchError::RateLimited),
            StatusCode::FORBIDDEN => return Err(FetchError::Forbidden),
            status => {
                let body = resp.text().await.unwrap_or_default();
                return Err(FetchError::UnexpectedStatus { status, body });
            }
        }

        let body = resp.text().await?;
        let page = serde_json::from_str::<YouTubeTrendingResponse>(&body)?;

        Ok(page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn service(server: &MockServer, timeout: Duration) -> YoutubeService {
        YoutubeService::new("test-key".to_string(), &server.uri(), timeout).unwrap()
    }

    #[tokio::test]
    async fn sends_expected_query_parameters() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/videos"))
            .and(query_param("part", "id,statistics,snippet,contentDetails"))
            .and(query_param("chart", "mostPopular"))
            .and(query_param("regionCode", "US"))
            .and(query_param("maxResults", "50"))
            .and(query_param("videoCategoryId", "10"))
            .and(query_param("pageToken", "CDIQAA"))
            .and(query_param("key", "test-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "items": [{ "id": "abc", "statistics": {} }]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let page = service(&server, Duration::from_secs(10))
            .get_trending_videos("US", Some("10"), Some("CDIQAA"))
            .await
            .unwrap();

        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].id, "abc");
        assert!(page.next_page_token.is_none());
    }

    #[tokio::test]
    async fn rate_limit_is_fatal() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(429))
            .mount(&server)
            .await;

        let err = service(&server, Duration::from_secs(10))
            .get_trending_videos("US", None, None)
            .await
            .unwrap_err();

        assert!(matches!(err, FetchError::RateLimited));
        assert!(err.is_fatal());
    }

    #[tokio::test]
    async fn forbidden_is_fatal() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(403))
            .mount(&server)
            .await;

        let err = service(&server, Duration::from_secs(10))
            .get_trending_videos("US", None, None)
            .await
            .unwrap_err();

        assert!(matches!(err, FetchError::Forbidden));
        assert!(err.is_fatal());
    }

    #[tokio::test]
    async fn other_status_is_local_failure() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404).set_body_string("region not found"))
            .mount(&server)
            .await;

        let err = service(&server, Duration::from_secs(10))
            .get_trending_videos("XX", None, None)
            .await
            .unwrap_err();

        match &err {
            FetchError::UnexpectedStatus { status, body } => {
                assert_eq!(*status, StatusCode::NOT_FOUND);
                assert_eq!(body, "region not found");
            }
            other => panic!("Expected UnexpectedStatus, got {:?}", other),
        }
        assert!(!err.is_fatal());
    }

    #[tokio::test]
    async fn slow_response_times_out() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({ "items": [] }))
                    .set_delay(Duration::from_millis(500)),
            )
            .mount(&server)
            .await;

        let err = service(&server, Duration::from_millis(50))
            .get_trending_videos("US", None, None)
            .await
            .unwrap_err();

        assert!(matches!(err, FetchError::Timeout));
        assert!(!err.is_fatal());
    }

    #[tokio::test]
    async fn invalid_body_is_local_failure() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
            .mount(&server)
            .await;

        let err = service(&server, Duration::from_secs(10))
            .get_trending_videos("US", None, None)
            .await
            .unwrap_err();

        assert!(matches!(err, FetchError::Decode(_)));
        assert!(!err.is_fatal());
    }
}

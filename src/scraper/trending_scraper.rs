use log::{info, warn};

use crate::{
    models::category::Category,
    scraper::video_extractor::VideoExtractor,
    services::youtube_service::{FetchError, YoutubeService},
};

pub struct TrendingScraper {
    youtube_service: YoutubeService,
    video_extractor: VideoExtractor,
}

impl TrendingScraper {
    pub fn new(youtube_service: YoutubeService, video_extractor: VideoExtractor) -> TrendingScraper {
        TrendingScraper {
            youtube_service,
            video_extractor,
        }
    }

    pub fn header_row(&self) -> String {
        self.video_extractor.header_row()
    }

    /// Follows page tokens until the chart is exhausted.
    ///
    /// A local fetch failure ends pagination early and keeps the rows
    /// collected so far. Fatal failures are returned and the rows dropped.
    pub async fn scrape(
        &self,
        country_code: &str,
        category: Option<&Category>,
    ) -> Result<Vec<String>, FetchError> {
        let category_id = category.map(|c| c.id);
        let mut country_data = Vec::new();
        let mut next_page_token: Option<String> = None;

        loop {
            let page = match self
                .youtube_service
                .get_trending_videos(country_code, category_id, next_page_token.as_deref())
                .await
            {
                Ok(page) => page,
                Err(err) if err.is_fatal() => return Err(err),
                Err(err) => {
                    warn!(
                        "Failed to get data for {}{}, skipping: {}",
                        country_code,
                        category.map(|c| format!(" category {}", c.name)).unwrap_or_default(),
                        err
                    );
                    break;
                }
            };

            let rows = self.video_extractor.get_videos(&page.items);
            info!(
                "Got {} of {} videos from page for {}",
                rows.len(),
                page.items.len(),
                country_code
            );
            country_data.extend(rows);

            match page.next_page_token {
                Some(token) => next_page_token = Some(token),
                None => break,
            }
        }

        Ok(country_data)
    }
}

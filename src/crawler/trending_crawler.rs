use std::time::Duration;

use anyhow::Error;
use chrono::NaiveDate;
use log::{error, info};
use tokio::time::sleep;

use crate::{
    models::category::Category, repos::csv_repo::CsvRepository,
    scraper::trending_scraper::TrendingScraper,
};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CrawlSummary {
    pub files_written: usize,
    pub videos_written: usize,
}

pub struct TrendingCrawler {
    trending_scraper: TrendingScraper,
    csv_repo: CsvRepository,
    categories: Vec<Category>,
    by_category: bool,
    category_delay: Duration,
    run_date: NaiveDate,
}

impl TrendingCrawler {
    pub fn new(
        trending_scraper: TrendingScraper,
        csv_repo: CsvRepository,
        categories: Vec<Category>,
        by_category: bool,
        category_delay: Duration,
        run_date: NaiveDate,
    ) -> TrendingCrawler {
        TrendingCrawler {
            trending_scraper,
            csv_repo,
            categories,
            by_category,
            category_delay,
            run_date,
        }
    }

    /// Collects every country, either per category or unfiltered.
    ///
    /// Rate limit and forbidden responses abort the whole crawl with an error,
    /// nothing is written for the target that was being collected.
    pub async fn crawl(&self, country_codes: &[String]) -> Result<CrawlSummary, Error> {
        let mut summary = CrawlSummary::default();

        for country_code in country_codes {
            if self.by_category {
                for category in &self.categories {
                    info!("Collecting {} data for {}", category.name, country_code);

                    let videos = self
                        .trending_scraper
                        .scrape(country_code, Some(category))
                        .await?;

                    if videos.is_empty() {
                        info!("No videos found for {} - {}", country_code, category.name);
                    } else {
                        self.write(country_code, Some(category.name), videos, &mut summary);
                    }

                    sleep(self.category_delay).await;
                }
            } else {
                info!("Collecting data for {}", country_code);

                let videos = self.trending_scraper.scrape(country_code, None).await?;
                self.write(country_code, None, videos, &mut summary);
            }
        }

        info!(
            "Data collection complete, wrote {} videos to {} files in {}",
            summary.videos_written,
            summary.files_written,
            self.csv_repo.output_dir().display()
        );

        Ok(summary)
    }

    fn write(
        &self,
        country_code: &str,
        category_name: Option<&str>,
        videos: Vec<String>,
        summary: &mut CrawlSummary,
    ) {
        let video_count = videos.len();

        let mut country_data = Vec::with_capacity(video_count + 1);
        country_data.push(self.trending_scraper.header_row());
        country_data.extend(videos);

        match self
            .csv_repo
            .write(self.run_date, country_code, category_name, &country_data)
        {
            Ok(path) => {
                info!("Wrote {} videos to {}", video_count, path.display());
                summary.files_written += 1;
                summary.videos_written += video_count;
            }
            Err(err) => {
                error!(
                    "Error writing file for {}{}: {:#}",
                    country_code,
                    category_name.map(|name| format!(" {}", name)).unwrap_or_default(),
                    err
                );
            }
        }
    }
}

use std::path::PathBuf;
use std::time::Duration;

use anyhow::anyhow;
use chrono::Local;
use clap::{ArgAction, Parser};
use log::{info, LevelFilter};
use serde::Serialize;
use simple_logger::SimpleLogger;

use crawler::trending_crawler::TrendingCrawler;
use models::{category::CATEGORIES, config::Config};
use repos::csv_repo::CsvRepository;
use scraper::{trending_scraper::TrendingScraper, video_extractor::VideoExtractor};
use services::youtube_service::YoutubeService;
use utils::{
    consts::TRENDING_DATE_FORMAT,
    csv_utils::{Sanitizer, UNSAFE_CHARACTERS},
    input_utils,
};

mod crawler;
mod models;
mod repos;
mod scraper;
mod services;
mod utils;

/// Scrape YouTube trending video metrics into CSV files.
#[derive(Parser, Debug, Serialize)]
#[command(name = "trending-scraper")]
struct Cli {
    /// Path to the file containing the api key
    #[arg(long)]
    #[serde(skip_serializing_if = "Option::is_none")]
    key_path: Option<PathBuf>,

    /// Path to the file containing the list of country codes to scrape
    #[arg(long)]
    #[serde(skip_serializing_if = "Option::is_none")]
    country_code_path: Option<PathBuf>,

    /// Path to save the outputted files in
    #[arg(long)]
    #[serde(skip_serializing_if = "Option::is_none")]
    output_dir: Option<PathBuf>,

    /// Collect videos separated by category
    #[arg(long, action = ArgAction::Set, value_name = "BOOL")]
    #[serde(skip_serializing_if = "Option::is_none")]
    by_category: Option<bool>,

    /// Optional JSON config file
    #[arg(long)]
    #[serde(skip)]
    config: Option<PathBuf>,
}

#[tokio::main]
pub async fn main() -> Result<(), anyhow::Error> {
    let cli = Cli::parse();
    let config = Config::load(cli.config.as_ref(), &cli)?;

    let log_level = config
        .log_level
        .parse::<LevelFilter>()
        .map_err(|_| anyhow!("Invalid log level {}", config.log_level))?;
    SimpleLogger::new()
        .with_level(log_level)
        .init()
        .map_err(|err| anyhow!("Could not initialise logger: {}", err))?;

    let api_key = input_utils::read_api_key(&config.key_path)?;
    let country_codes = input_utils::read_country_codes(&config.country_code_path)?;

    info!(
        "Collecting trending videos for {} countries",
        country_codes.len()
    );

    let run_date = Local::now().date_naive();

    let youtube_service = YoutubeService::new(
        api_key,
        &config.api_base_url,
        Duration::from_secs(config.request_timeout_secs),
    )?;
    let video_extractor = VideoExtractor::new(
        Sanitizer::new(&UNSAFE_CHARACTERS)?,
        run_date.format(TRENDING_DATE_FORMAT).to_string(),
    );

    let crawler = TrendingCrawler::new(
        TrendingScraper::new(youtube_service, video_extractor),
        CsvRepository::new(config.output_dir.clone()),
        CATEGORIES.to_vec(),
        config.by_category,
        Duration::from_millis(config.category_delay_millis),
        run_date,
    );

    crawler.crawl(&country_codes).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn by_category_defaults_to_config() {
        let cli = Cli::parse_from(["trending-scraper", "--output-dir", "snapshots"]);
        let config = Config::load(None, &cli).unwrap();

        assert!(config.by_category);
        assert_eq!(config.output_dir, PathBuf::from("snapshots"));
        assert_eq!(config.key_path, PathBuf::from("api_key.txt"));
    }

    #[test]
    fn by_category_can_be_disabled() {
        let cli = Cli::parse_from(["trending-scraper", "--by-category", "false"]);
        let config = Config::load(None, &cli).unwrap();

        assert!(!config.by_category);
    }
}

pub mod trending_scraper;
pub mod video_extractor;

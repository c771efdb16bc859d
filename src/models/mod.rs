pub mod category;
pub mod config;
pub mod youtube_trending_response;

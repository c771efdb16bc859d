pub mod trending_crawler;

pub const MAX_RESULTS_PER_PAGE: u32 = 50;
pub const VIDEO_PARTS: &str = "id,statistics,snippet,contentDetails";
pub const MOST_POPULAR_CHART: &str = "mostPopular";

pub const HEADER: [&str; 17] = [
    "video_id",
    "title",
    "publishedAt",
    "channelId",
    "channelTitle",
    "categoryId",
    "trending_date",
    "tags",
    "view_count",
    "likes",
    "dislikes",
    "comment_count",
    "thumbnail_link",
    "comments_disabled",
    "ratings_disabled",
    "description",
    "duration",
];

pub const TRENDING_DATE_FORMAT: &str = "%Y-%m-%d";

use crate::{
    models::youtube_trending_response::{Count, Snippet, YouTubeTrendingItem},
    utils::{consts::HEADER, csv_utils::Sanitizer},
};

const ZERO: Count = Count::Number(0);

/// Turns raw trending items into quoted CSV rows in `HEADER` order.
pub struct VideoExtractor {
    sanitizer: Sanitizer,
    trending_date: String,
}

impl VideoExtractor {
    pub fn new(sanitizer: Sanitizer, trending_date: String) -> VideoExtractor {
        VideoExtractor {
            sanitizer,
            trending_date,
        }
    }

    pub fn header_row(&self) -> String {
        self.sanitizer.prepare_row(&HEADER)
    }

    pub fn get_videos(&self, items: &[YouTubeTrendingItem]) -> Vec<String> {
        items.iter().filter_map(|item| self.get_video(item)).collect()
    }

    /// Items without statistics are usually removed videos and yield no row.
    pub fn get_video(&self, item: &YouTubeTrendingItem) -> Option<String> {
        let statistics = item.statistics.as_ref()?;

        let default_snippet = Snippet::default();
        let snippet = item.snippet.as_ref().unwrap_or(&default_snippet);
        let text = |value: &Option<String>| value.clone().unwrap_or_default();

        let duration = item
            .content_details
            .as_ref()
            .and_then(|details| details.duration.clone())
            .unwrap_or_default();

        let view_count = statistics.view_count.clone().unwrap_or(ZERO);

        let ratings_disabled = statistics.like_count.is_none();
        let (likes, dislikes) = match &statistics.like_count {
            Some(likes) => (
                likes.clone(),
                statistics.dislike_count.clone().unwrap_or(ZERO),
            ),
            None => (ZERO, ZERO),
        };

        let comments_disabled = statistics.comment_count.is_none();
        let comment_count = statistics.comment_count.clone().unwrap_or(ZERO);

        let s = &self.sanitizer;
        let line = vec![
            s.prepare_feature(&item.id),
            s.prepare_feature(text(&snippet.title)),
            s.prepare_feature(text(&snippet.published_at)),
            s.prepare_feature(text(&snippet.channel_id)),
            s.prepare_feature(text(&snippet.channel_title)),
            s.prepare_feature(text(&snippet.category_id)),
            s.prepare_feature(&self.trending_date),
            s.prepare_tags(snippet.tags.as_deref().unwrap_or_default()),
            s.prepare_feature(view_count),
            s.prepare_feature(likes),
            s.prepare_feature(dislikes),
            s.prepare_feature(comment_count),
            s.prepare_feature(snippet.thumbnail_link().unwrap_or_default()),
            s.prepare_flag(comments_disabled),
            s.prepare_flag(ratings_disabled),
            s.prepare_feature(text(&snippet.description)),
            s.prepare_feature(duration),
        ];

        Some(line.join(","))
    }
}

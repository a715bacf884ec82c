pub mod use_articles;
pub mod use_videos;

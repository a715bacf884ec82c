pub mod article_upload;
pub mod record_table;
pub mod video_upload;

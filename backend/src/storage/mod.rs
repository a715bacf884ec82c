//! # Storage Module
//!
//! One repository per table. Each operation is a single parameterized
//! statement against the shared pool; the only multi-step operation is the
//! media insert, which runs inside a transaction so the caller can discard
//! the uploaded file when it fails.

pub mod article_repository;
pub mod message_repository;
mod numeric;
pub mod registration_repository;
pub mod reminder_repository;
pub mod video_repository;

pub use article_repository::{ArticleRepository, NewArticle};
pub use message_repository::MessageRepository;
pub use registration_repository::RegistrationRepository;
pub use reminder_repository::ReminderRepository;
pub use video_repository::{NewVideo, VideoRepository};

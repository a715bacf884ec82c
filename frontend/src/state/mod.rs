pub mod drafts;
pub mod form_state;
pub mod record_cache;
pub mod table;

use anyhow::Result;
use chrono::{SecondsFormat, Utc};
use shared::{Message, NewMessage};
use sqlx::sqlite::SqliteRow;
use sqlx::Row;

use crate::db::DbConnection;

use super::numeric::{numeric_column, BindNumeric};

/// Repository for the `messages` table (the outbox)
#[derive(Clone)]
pub struct MessageRepository {
    db: DbConnection,
}

impl MessageRepository {
    pub fn new(db: DbConnection) -> Self {
        Self { db }
    }

    /// Insert a message stamped with the current time
    pub async fn store_message(&self, message: &NewMessage) -> Result<i64> {
        let sent_at = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
        self.store_message_at(message, &sent_at).await
    }

    /// Insert a message with an explicit `sent_at` (RFC 3339, UTC)
    pub async fn store_message_at(&self, message: &NewMessage, sent_at: &str) -> Result<i64> {
        let result = sqlx::query(
            r#"
            INSERT INTO messages (mother_id, message, recipient_type, sent_at)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind_numeric(&message.mother_id)
        .bind(&message.message)
        .bind(&message.recipient_type)
        .bind(sent_at)
        .execute(self.db.pool())
        .await?;

        Ok(result.last_insert_rowid())
    }

    /// List the outbox, most recently sent first
    pub async fn list_messages(&self) -> Result<Vec<Message>> {
        let rows = sqlx::query(
            r#"
            SELECT id, mother_id, message, recipient_type, sent_at
            FROM messages
            ORDER BY sent_at DESC, id DESC
            "#,
        )
        .fetch_all(self.db.pool())
        .await?;

        let messages = rows
            .iter()
            .map(message_from_row)
            .collect::<Result<Vec<_>, sqlx::Error>>()?;
        Ok(messages)
    }
}

fn message_from_row(row: &SqliteRow) -> Result<Message, sqlx::Error> {
    Ok(Message {
        id: row.try_get("id")?,
        mother_id: numeric_column(row, "mother_id")?,
        message: row.try_get("message")?,
        recipient_type: row.try_get("recipient_type")?,
        sent_at: row.try_get("sent_at")?,
    })
}

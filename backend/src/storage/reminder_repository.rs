use anyhow::Result;
use shared::NewMedicineReminder;

use crate::db::DbConnection;

use super::numeric::BindNumeric;

/// Repository for the `medicine_reminders` table
#[derive(Clone)]
pub struct ReminderRepository {
    db: DbConnection,
}

impl ReminderRepository {
    pub fn new(db: DbConnection) -> Self {
        Self { db }
    }

    /// Insert a reminder. `mother_id` is stored as given; it is not checked
    /// against `users`.
    pub async fn store_reminder(&self, reminder: &NewMedicineReminder) -> Result<i64> {
        let result = sqlx::query(
            r#"
            INSERT INTO medicine_reminders (
                mother_id, medicine_name, dosage, frequency,
                start_date, end_date, additional_notes, recipient_type
            )
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind_numeric(&reminder.mother_id)
        .bind(&reminder.medicine_name)
        .bind(&reminder.dosage)
        .bind(&reminder.frequency)
        .bind(&reminder.start_date)
        .bind(&reminder.end_date)
        .bind(&reminder.additional_notes)
        .bind(&reminder.recipient_type)
        .execute(self.db.pool())
        .await?;

        Ok(result.last_insert_rowid())
    }
}

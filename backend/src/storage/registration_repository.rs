use anyhow::Result;
use shared::{Registration, RegistrationDetails};
use sqlx::sqlite::SqliteRow;
use sqlx::Row;

use crate::db::DbConnection;

use super::numeric::{numeric_column, BindNumeric};

/// Repository for the `users` table
#[derive(Clone)]
pub struct RegistrationRepository {
    db: DbConnection,
}

impl RegistrationRepository {
    pub fn new(db: DbConnection) -> Self {
        Self { db }
    }

    /// Insert a registration and return its id
    pub async fn store_registration(&self, details: &RegistrationDetails) -> Result<i64> {
        let result = sqlx::query(
            r#"
            INSERT INTO users (
                name, age, clinic_area, grama_niladari_division, home_address,
                mobile_number, emergency_number, gravidity, youngest_child_age,
                height, weight, blood_group, allergies, education_level, job,
                husband_name, husband_age, husband_contact, past_medical_report,
                past_pregnancy_history, other_special
            )
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&details.name)
        .bind_numeric(&details.age)
        .bind(&details.clinic_area)
        .bind(&details.grama_niladari_division)
        .bind(&details.home_address)
        .bind(&details.mobile_number)
        .bind(&details.emergency_number)
        .bind_numeric(&details.gravidity)
        .bind_numeric(&details.youngest_child_age)
        .bind_numeric(&details.height)
        .bind_numeric(&details.weight)
        .bind(&details.blood_group)
        .bind(&details.allergies)
        .bind(&details.education_level)
        .bind(&details.job)
        .bind(&details.husband_name)
        .bind_numeric(&details.husband_age)
        .bind(&details.husband_contact)
        .bind(&details.past_medical_report)
        .bind(&details.past_pregnancy_history)
        .bind(&details.other_special)
        .execute(self.db.pool())
        .await?;

        Ok(result.last_insert_rowid())
    }

    /// List every registration, newest (highest id) first
    pub async fn list_registrations(&self) -> Result<Vec<Registration>> {
        let rows = sqlx::query("SELECT * FROM users ORDER BY id DESC")
            .fetch_all(self.db.pool())
            .await?;

        let registrations = rows
            .iter()
            .map(registration_from_row)
            .collect::<Result<Vec<_>, sqlx::Error>>()?;
        Ok(registrations)
    }
}

fn registration_from_row(row: &SqliteRow) -> Result<Registration, sqlx::Error> {
    Ok(Registration {
        id: row.try_get("id")?,
        details: RegistrationDetails {
            name: row.try_get("name")?,
            age: numeric_column(row, "age")?,
            clinic_area: row.try_get("clinic_area")?,
            grama_niladari_division: row.try_get("grama_niladari_division")?,
            home_address: row.try_get("home_address")?,
            mobile_number: row.try_get("mobile_number")?,
            emergency_number: row.try_get("emergency_number")?,
            gravidity: numeric_column(row, "gravidity")?,
            youngest_child_age: numeric_column(row, "youngest_child_age")?,
            height: numeric_column(row, "height")?,
            weight: numeric_column(row, "weight")?,
            blood_group: row.try_get("blood_group")?,
            allergies: row.try_get("allergies")?,
            education_level: row.try_get("education_level")?,
            job: row.try_get("job")?,
            husband_name: row.try_get("husband_name")?,
            husband_age: numeric_column(row, "husband_age")?,
            husband_contact: row.try_get("husband_contact")?,
            past_medical_report: row.try_get("past_medical_report")?,
            past_pregnancy_history: row.try_get("past_pregnancy_history")?,
            other_special: row.try_get("other_special")?,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::Numeric;

    async fn setup_test() -> RegistrationRepository {
        let db = DbConnection::in_memory().await.expect("Failed to create test database");
        RegistrationRepository::new(db)
    }

    fn sample_details(name: &str) -> RegistrationDetails {
        RegistrationDetails {
            name: Some(name.to_string()),
            age: Some(Numeric::Number(29)),
            clinic_area: Some("Kandy".to_string()),
            gravidity: Some(Numeric::Number(2)),
            youngest_child_age: Some(Numeric::Number(3.5)),
            height: Some(Numeric::Number(160.0)),
            weight: Some(Numeric::Number(58.2)),
            blood_group: Some("B+".to_string()),
            husband_age: Some(Numeric::Number(33)),
            other_special: Some("none".to_string()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_store_and_list_round_trips_all_fields() {
        let repo = setup_test().await;
        let details = sample_details("Nimali");

        let id = repo.store_registration(&details).await.expect("Failed to store registration");
        let listed = repo.list_registrations().await.expect("Failed to list registrations");

        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, id);
        assert_eq!(listed[0].details, details);
    }

    #[tokio::test]
    async fn test_list_orders_by_id_descending() {
        let repo = setup_test().await;

        let first = repo.store_registration(&sample_details("First")).await.unwrap();
        let second = repo.store_registration(&sample_details("Second")).await.unwrap();
        let third = repo.store_registration(&sample_details("Third")).await.unwrap();

        let ids: Vec<i64> = repo
            .list_registrations()
            .await
            .unwrap()
            .iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(ids, vec![third, second, first]);
    }

    #[tokio::test]
    async fn test_empty_registration_is_stored() {
        let repo = setup_test().await;

        repo.store_registration(&RegistrationDetails::default()).await.unwrap();
        let listed = repo.list_registrations().await.unwrap();

        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].details, RegistrationDetails::default());
    }

    #[tokio::test]
    async fn test_unparsed_numbers_are_stored_as_text() {
        let repo = setup_test().await;
        let details = RegistrationDetails {
            age: Some(Numeric::Text("twenty".to_string())),
            gravidity: Some(Numeric::Text("2.5".to_string())),
            height: Some(Numeric::Text("tall".to_string())),
            ..sample_details("Sachini")
        };

        repo.store_registration(&details).await.unwrap();
        let listed = repo.list_registrations().await.unwrap();

        assert_eq!(listed[0].details, details);
    }
}

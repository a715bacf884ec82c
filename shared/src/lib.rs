use serde::{Deserialize, Serialize};

pub mod lenient;

pub use lenient::Numeric;

/// Demographic and medical details captured by the registration form.
///
/// Every field is optional on the server side: the form's `required`
/// attributes are the only gate, so whatever the client sends is stored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RegistrationDetails {
    #[serde(deserialize_with = "lenient::optional_text")]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient::optional_integer")]
    pub age: Option<Numeric<i64>>,
    #[serde(deserialize_with = "lenient::optional_text")]
    pub clinic_area: Option<String>,
    #[serde(deserialize_with = "lenient::optional_text")]
    pub grama_niladari_division: Option<String>,
    #[serde(deserialize_with = "lenient::optional_text")]
    pub home_address: Option<String>,
    #[serde(deserialize_with = "lenient::optional_text")]
    pub mobile_number: Option<String>,
    #[serde(deserialize_with = "lenient::optional_text")]
    pub emergency_number: Option<String>,
    #[serde(deserialize_with = "lenient::optional_integer")]
    pub gravidity: Option<Numeric<i64>>,
    #[serde(deserialize_with = "lenient::optional_decimal")]
    pub youngest_child_age: Option<Numeric<f64>>,
    #[serde(deserialize_with = "lenient::optional_decimal")]
    pub height: Option<Numeric<f64>>,
    #[serde(deserialize_with = "lenient::optional_decimal")]
    pub weight: Option<Numeric<f64>>,
    #[serde(deserialize_with = "lenient::optional_text")]
    pub blood_group: Option<String>,
    #[serde(deserialize_with = "lenient::optional_text")]
    pub allergies: Option<String>,
    #[serde(deserialize_with = "lenient::optional_text")]
    pub education_level: Option<String>,
    #[serde(deserialize_with = "lenient::optional_text")]
    pub job: Option<String>,
    #[serde(deserialize_with = "lenient::optional_text")]
    pub husband_name: Option<String>,
    #[serde(deserialize_with = "lenient::optional_integer")]
    pub husband_age: Option<Numeric<i64>>,
    #[serde(deserialize_with = "lenient::optional_text")]
    pub husband_contact: Option<String>,
    #[serde(deserialize_with = "lenient::optional_text")]
    pub past_medical_report: Option<String>,
    #[serde(deserialize_with = "lenient::optional_text")]
    pub past_pregnancy_history: Option<String>,
    #[serde(deserialize_with = "lenient::optional_text")]
    pub other_special: Option<String>,
}

/// A stored registration as returned by `GET /registered-persons`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Registration {
    pub id: i64,
    #[serde(flatten)]
    pub details: RegistrationDetails,
}

/// Body of `POST /medicine-reminder`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewMedicineReminder {
    #[serde(deserialize_with = "lenient::optional_integer")]
    pub mother_id: Option<Numeric<i64>>,
    #[serde(deserialize_with = "lenient::optional_text")]
    pub medicine_name: Option<String>,
    #[serde(deserialize_with = "lenient::optional_text")]
    pub dosage: Option<String>,
    #[serde(deserialize_with = "lenient::optional_text")]
    pub frequency: Option<String>,
    #[serde(deserialize_with = "lenient::optional_text")]
    pub start_date: Option<String>,
    #[serde(deserialize_with = "lenient::optional_text")]
    pub end_date: Option<String>,
    #[serde(alias = "notes", deserialize_with = "lenient::optional_text")]
    pub additional_notes: Option<String>,
    #[serde(deserialize_with = "lenient::optional_text")]
    pub recipient_type: Option<String>,
}

/// Body of `POST /send-message`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewMessage {
    #[serde(deserialize_with = "lenient::optional_integer")]
    pub mother_id: Option<Numeric<i64>>,
    #[serde(deserialize_with = "lenient::optional_text")]
    pub message: Option<String>,
    #[serde(deserialize_with = "lenient::optional_text")]
    pub recipient_type: Option<String>,
}

/// An outbox entry. Serialized with the column names of the `messages` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: i64,
    pub mother_id: Option<Numeric<i64>>,
    pub message: Option<String>,
    pub recipient_type: Option<String>,
    /// RFC 3339 UTC timestamp assigned by the server
    pub sent_at: String,
}

/// An educational article backed by an uploaded PDF
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: i64,
    pub title: String,
    /// Stored blob name, `None` when the upload carried no file
    pub file_name: Option<String>,
    /// Calendar date, `YYYY-MM-DD`
    pub upload_date: String,
}

/// A video, either an uploaded file or an external link
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    pub id: i64,
    pub title: String,
    /// Absolute URI. Freeform for links, derived from the public URL for uploads.
    pub url: String,
    pub file_name: Option<String>,
    pub upload_date: String,
}

/// Body of `POST /video-link`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NewVideoLink {
    #[serde(deserialize_with = "lenient::text")]
    pub title: String,
    #[serde(deserialize_with = "lenient::text")]
    pub url: String,
}

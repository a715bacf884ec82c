use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use shared::{NewMedicineReminder, NewMessage, NewVideoLink, RegistrationDetails};
use tracing::info;

use crate::error::ApiError;
use crate::extract::AppJson;
use crate::AppState;

/// Axum handler function for POST /register
pub async fn register(
    State(state): State<AppState>,
    AppJson(details): AppJson<RegistrationDetails>,
) -> Result<impl IntoResponse, ApiError> {
    info!("POST /register - name: {:?}", details.name);

    let id = state
        .registrations
        .store_registration(&details)
        .await
        .map_err(ApiError::store("Error inserting data"))?;

    info!("Stored registration {}", id);
    Ok((StatusCode::OK, "Registration successful"))
}

/// Axum handler function for GET /registered-persons
pub async fn registered_persons(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    info!("GET /registered-persons");

    let registrations = state
        .registrations
        .list_registrations()
        .await
        .map_err(ApiError::store("Error fetching registered persons"))?;

    Ok((StatusCode::OK, Json(registrations)))
}

/// Axum handler function for POST /medicine-reminder
pub async fn medicine_reminder(
    State(state): State<AppState>,
    AppJson(reminder): AppJson<NewMedicineReminder>,
) -> Result<impl IntoResponse, ApiError> {
    info!("POST /medicine-reminder - mother: {:?}", reminder.mother_id);

    state
        .reminders
        .store_reminder(&reminder)
        .await
        .map_err(ApiError::store("Error inserting data"))?;

    Ok((StatusCode::OK, "Medicine reminder successfully added"))
}

/// Axum handler function for POST /send-message
pub async fn send_message(
    State(state): State<AppState>,
    AppJson(message): AppJson<NewMessage>,
) -> Result<impl IntoResponse, ApiError> {
    info!("POST /send-message - mother: {:?}", message.mother_id);

    state
        .messages
        .store_message(&message)
        .await
        .map_err(ApiError::store("Error inserting data"))?;

    Ok((StatusCode::OK, "Message sent successfully"))
}

/// Axum handler function for GET /outbox
pub async fn outbox(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    info!("GET /outbox");

    let messages = state
        .messages
        .list_messages()
        .await
        .map_err(ApiError::store("Error fetching messages"))?;

    Ok((StatusCode::OK, Json(messages)))
}

/// Axum handler function for POST /upload-article
pub async fn upload_article(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<impl IntoResponse, ApiError> {
    info!("POST /upload-article");

    state.media.publish_article(multipart).await?;
    Ok((StatusCode::OK, "Article uploaded successfully"))
}

/// Axum handler function for GET /get-articles
pub async fn get_articles(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    info!("GET /get-articles");

    let articles = state
        .media
        .list_articles()
        .await
        .map_err(ApiError::store("Error fetching articles"))?;

    Ok((StatusCode::OK, Json(articles)))
}

/// Axum handler function for POST /upload-video
pub async fn upload_video(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<impl IntoResponse, ApiError> {
    info!("POST /upload-video");

    state.media.publish_video(multipart).await?;
    Ok((StatusCode::OK, "Video uploaded successfully"))
}

/// Axum handler function for POST /video-link
pub async fn video_link(
    State(state): State<AppState>,
    AppJson(link): AppJson<NewVideoLink>,
) -> Result<impl IntoResponse, ApiError> {
    info!("POST /video-link - title: {:?}", link.title);

    state
        .media
        .add_video_link(&link)
        .await
        .map_err(ApiError::store("Failed to save video"))?;

    Ok((StatusCode::OK, "Video link saved successfully"))
}

/// Axum handler function for GET /get-videos
pub async fn get_videos(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    info!("GET /get-videos");

    let videos = state
        .media
        .list_videos()
        .await
        .map_err(ApiError::store("Error fetching videos"))?;

    Ok((StatusCode::OK, Json(videos)))
}

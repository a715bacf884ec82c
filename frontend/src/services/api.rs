use gloo::net::http::{Request, Response};
use shared::{Article, NewVideoLink, Video};
use wasm_bindgen::JsValue;
use web_sys::{File, FormData};

pub const DEFAULT_BASE_URL: &str = "http://localhost:5001";

/// API client for communicating with the backend server
#[derive(Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    /// Create a new API client with the default base URL
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get all articles, newest first
    pub async fn get_articles(&self) -> Result<Vec<Article>, String> {
        let url = format!("{}/get-articles", self.base_url);

        match Request::get(&url).send().await {
            Ok(response) => {
                if !response.ok() {
                    return Err(error_text(response).await);
                }
                match response.json::<Vec<Article>>().await {
                    Ok(data) => Ok(data),
                    Err(e) => Err(format!("Failed to parse articles: {}", e)),
                }
            }
            Err(e) => Err(format!("Failed to fetch articles: {}", e)),
        }
    }

    /// Upload an article as `multipart/form-data` with fields `title` and `file`
    pub async fn upload_article(&self, title: &str, file: &File) -> Result<String, String> {
        let url = format!("{}/upload-article", self.base_url);
        let form = upload_form(title, "file", file)?;

        let request = Request::post(&url)
            .body(form)
            .map_err(|e| format!("Failed to build upload: {}", e))?;
        send_for_text(request).await
    }

    /// Get all videos, newest first
    pub async fn get_videos(&self) -> Result<Vec<Video>, String> {
        let url = format!("{}/get-videos", self.base_url);

        match Request::get(&url).send().await {
            Ok(response) => {
                if !response.ok() {
                    return Err(error_text(response).await);
                }
                match response.json::<Vec<Video>>().await {
                    Ok(data) => Ok(data),
                    Err(e) => Err(format!("Failed to parse videos: {}", e)),
                }
            }
            Err(e) => Err(format!("Failed to fetch videos: {}", e)),
        }
    }

    /// Upload a video file as `multipart/form-data` with fields `title` and `video`
    pub async fn upload_video(&self, title: &str, file: &File) -> Result<String, String> {
        let url = format!("{}/upload-video", self.base_url);
        let form = upload_form(title, "video", file)?;

        let request = Request::post(&url)
            .body(form)
            .map_err(|e| format!("Failed to build upload: {}", e))?;
        send_for_text(request).await
    }

    /// Save a video link
    pub async fn add_video_link(&self, link: &NewVideoLink) -> Result<String, String> {
        let url = format!("{}/video-link", self.base_url);

        let request = Request::post(&url)
            .json(link)
            .map_err(|e| format!("Failed to serialize request: {}", e))?;
        send_for_text(request).await
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

fn upload_form(title: &str, file_field: &str, file: &File) -> Result<FormData, String> {
    let form = FormData::new().map_err(|e| js_error("Failed to create form data", e))?;
    form.append_with_str("title", title)
        .map_err(|e| js_error("Failed to add title", e))?;
    form.append_with_blob_and_filename(file_field, file, &file.name())
        .map_err(|e| js_error("Failed to add file", e))?;
    Ok(form)
}

fn js_error(context: &str, error: JsValue) -> String {
    match error.as_string() {
        Some(message) => format!("{}: {}", context, message),
        None => format!("{}: {:?}", context, error),
    }
}

async fn send_for_text(request: Request) -> Result<String, String> {
    match request.send().await {
        Ok(response) => {
            if response.ok() {
                Ok(response.text().await.unwrap_or_default())
            } else {
                Err(error_text(response).await)
            }
        }
        Err(e) => Err(format!("Network error: {}", e)),
    }
}

async fn error_text(response: Response) -> String {
    let status = response.status();
    let text = response
        .text()
        .await
        .unwrap_or_else(|_| "Unknown error".to_string());
    format!("Server error {}: {}", status, text)
}

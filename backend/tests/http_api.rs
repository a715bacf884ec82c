//! End-to-end checks of the HTTP surface, driven through the real router.

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use mcare_backend::config::AppConfig;
use mcare_backend::db::DbConnection;
use mcare_backend::{create_router, AppState};
use serde_json::{json, Value};
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use tower::ServiceExt;

const BOUNDARY: &str = "mcare-test-boundary";
const MAX_UPLOAD_BYTES: usize = 4 * 1024;

struct TestApp {
    router: Router,
    db: DbConnection,
    upload_root: PathBuf,
    _dir: TempDir,
}

struct TestResponse {
    status: StatusCode,
    body: Vec<u8>,
}

impl TestResponse {
    fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).to_string()
    }

    fn json(&self) -> Value {
        serde_json::from_slice(&self.body).expect("response body is not JSON")
    }
}

enum Part<'a> {
    Text(&'a str, &'a str),
    File {
        field: &'a str,
        file_name: &'a str,
        content_type: &'a str,
        data: &'a [u8],
    },
}

fn multipart_body(parts: &[Part<'_>]) -> Vec<u8> {
    let mut body = Vec::new();
    for part in parts {
        body.extend_from_slice(format!("--{}\r\n", BOUNDARY).as_bytes());
        match part {
            Part::Text(name, value) => {
                body.extend_from_slice(
                    format!("Content-Disposition: form-data; name=\"{}\"\r\n\r\n", name).as_bytes(),
                );
                body.extend_from_slice(value.as_bytes());
            }
            Part::File {
                field,
                file_name,
                content_type,
                data,
            } => {
                body.extend_from_slice(
                    format!(
                        "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\nContent-Type: {}\r\n\r\n",
                        field, file_name, content_type
                    )
                    .as_bytes(),
                );
                body.extend_from_slice(data);
            }
        }
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{}--\r\n", BOUNDARY).as_bytes());
    body
}

fn files_in(dir: &Path) -> Vec<PathBuf> {
    std::fs::read_dir(dir)
        .map(|entries| entries.filter_map(|e| e.ok()).map(|e| e.path()).collect())
        .unwrap_or_default()
}

impl TestApp {
    async fn spawn() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let upload_root = dir.path().join("uploads");
        let config = AppConfig {
            upload_dir: upload_root.clone(),
            max_upload_bytes: MAX_UPLOAD_BYTES,
            public_url: "http://mcare.test".to_string(),
            ..AppConfig::default()
        };

        let db = DbConnection::in_memory().await.expect("Failed to create test database");
        let state = AppState::new(db.clone(), &config);
        state.media.uploads().ensure_dirs().await.expect("Failed to create upload dirs");
        let router = create_router(state, &config).expect("Failed to build router");

        Self {
            router,
            db,
            upload_root,
            _dir: dir,
        }
    }

    async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self.router.clone().oneshot(request).await.expect("router is infallible");
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap().to_vec();
        TestResponse { status, body }
    }

    async fn get(&self, uri: &str) -> TestResponse {
        self.send(Request::get(uri).body(Body::empty()).unwrap()).await
    }

    async fn post_json(&self, uri: &str, value: Value) -> TestResponse {
        let request = Request::post(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(value.to_string()))
            .unwrap();
        self.send(request).await
    }

    async fn post_multipart(&self, uri: &str, parts: &[Part<'_>]) -> TestResponse {
        let request = Request::post(uri)
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={}", BOUNDARY),
            )
            .body(Body::from(multipart_body(parts)))
            .unwrap();
        self.send(request).await
    }

    fn dir(&self, kind: &str) -> PathBuf {
        self.upload_root.join(kind)
    }
}

mod registrations {
    use super::*;

    #[tokio::test]
    async fn registered_person_is_listed_first_with_submitted_fields() {
        let app = TestApp::spawn().await;

        let earlier = app.post_json("/register", json!({ "name": "Earlier" })).await;
        assert_eq!(earlier.status, StatusCode::OK);

        let res = app
            .post_json(
                "/register",
                json!({
                    "name": "Sanduni Jayasuriya",
                    "age": "26",
                    "clinicArea": "Galle",
                    "gramaNiladariDivision": "GN-112",
                    "mobileNumber": "0771234567",
                    "gravidity": 1,
                    "height": "154.5",
                    "weight": 52,
                    "bloodGroup": "A+",
                    "husbandName": "Ruwan",
                    "husbandAge": 30,
                }),
            )
            .await;
        assert_eq!(res.status, StatusCode::OK);
        assert_eq!(res.text(), "Registration successful");

        let listed = app.get("/registered-persons").await;
        assert_eq!(listed.status, StatusCode::OK);
        let rows = listed.json();
        let rows = rows.as_array().unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0]["name"], "Sanduni Jayasuriya");
        assert_eq!(rows[0]["age"], 26);
        assert_eq!(rows[0]["clinicArea"], "Galle");
        assert_eq!(rows[0]["gramaNiladariDivision"], "GN-112");
        assert_eq!(rows[0]["height"], 154.5);
        assert_eq!(rows[0]["weight"], 52.0);
        assert_eq!(rows[0]["husbandAge"], 30);
        assert!(rows[0]["allergies"].is_null());
        assert!(rows[0]["id"].as_i64().unwrap() > rows[1]["id"].as_i64().unwrap());
    }

    #[tokio::test]
    async fn concurrent_registrations_produce_distinct_rows() {
        let app = TestApp::spawn().await;

        let (a, b) = tokio::join!(
            app.post_json("/register", json!({ "name": "Client A" })),
            app.post_json("/register", json!({ "name": "Client B" })),
        );
        assert_eq!(a.status, StatusCode::OK);
        assert_eq!(b.status, StatusCode::OK);

        let rows = app.get("/registered-persons").await.json();
        let rows = rows.as_array().unwrap();
        assert_eq!(rows.len(), 2);
        assert_ne!(rows[0]["id"], rows[1]["id"]);

        let mut names: Vec<&str> = rows.iter().map(|r| r["name"].as_str().unwrap()).collect();
        names.sort();
        assert_eq!(names, vec!["Client A", "Client B"]);
    }

    #[tokio::test]
    async fn malformed_json_is_rejected_before_the_store() {
        let app = TestApp::spawn().await;

        let request = Request::post("/register")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{not json"))
            .unwrap();
        let res = app.send(request).await;

        assert_eq!(res.status, StatusCode::BAD_REQUEST);
        assert_eq!(res.text(), "Invalid request body");
        assert_eq!(app.get("/registered-persons").await.json(), json!([]));
    }

    #[tokio::test]
    async fn string_body_gets_the_same_fixed_message() {
        let app = TestApp::spawn().await;

        let res = app.post_json("/register", json!("Nimali")).await;

        assert!(res.status.is_client_error());
        assert_eq!(res.text(), "Invalid request body");
    }

    #[tokio::test]
    async fn numeric_mobile_number_is_stored_as_text() {
        let app = TestApp::spawn().await;

        let res = app
            .post_json("/register", json!({ "name": "Hasini", "mobileNumber": 771234567 }))
            .await;
        assert_eq!(res.status, StatusCode::OK);

        let rows = app.get("/registered-persons").await.json();
        assert_eq!(rows[0]["mobileNumber"], "771234567");
    }

    #[tokio::test]
    async fn integral_float_age_is_stored_as_integer() {
        let app = TestApp::spawn().await;

        let res = app.post_json("/register", json!({ "name": "Madhavi", "age": 26.0 })).await;
        assert_eq!(res.status, StatusCode::OK);

        let rows = app.get("/registered-persons").await.json();
        assert_eq!(rows[0]["age"], 26);
    }

    #[tokio::test]
    async fn non_numeric_age_is_stored_as_sent() {
        let app = TestApp::spawn().await;

        let res = app.post_json("/register", json!({ "name": "Thilini", "age": "twenty" })).await;
        assert_eq!(res.status, StatusCode::OK);
        assert_eq!(res.text(), "Registration successful");

        let rows = app.get("/registered-persons").await.json();
        assert_eq!(rows[0]["age"], "twenty");
        assert_eq!(rows[0]["name"], "Thilini");
    }
}

mod messages {
    use super::*;

    #[tokio::test]
    async fn reminder_is_accepted() {
        let app = TestApp::spawn().await;

        let res = app
            .post_json(
                "/medicine-reminder",
                json!({
                    "motherId": 12,
                    "medicineName": "Folic acid",
                    "dosage": "400mcg",
                    "frequency": "daily",
                    "startDate": "2024-03-01",
                    "endDate": "2024-09-01",
                    "additionalNotes": "",
                    "recipientType": "mother",
                }),
            )
            .await;

        assert_eq!(res.status, StatusCode::OK);
        assert_eq!(res.text(), "Medicine reminder successfully added");
    }

    #[tokio::test]
    async fn outbox_lists_latest_message_first() {
        let app = TestApp::spawn().await;

        for text in ["first", "second"] {
            let res = app
                .post_json(
                    "/send-message",
                    json!({ "motherId": 3, "message": text, "recipientType": "mother" }),
                )
                .await;
            assert_eq!(res.status, StatusCode::OK);
            assert_eq!(res.text(), "Message sent successfully");
        }

        let outbox = app.get("/outbox").await.json();
        let outbox = outbox.as_array().unwrap();
        assert_eq!(outbox[0]["message"], "second");
        assert_eq!(outbox[1]["message"], "first");
        assert_eq!(outbox[0]["mother_id"], 3);
        assert!(outbox[0]["sent_at"].as_str().is_some());
    }

    #[tokio::test]
    async fn reminder_with_text_mother_id_is_accepted() {
        let app = TestApp::spawn().await;

        let res = app
            .post_json(
                "/medicine-reminder",
                json!({ "motherId": "unknown", "medicineName": "Iron", "dosage": 60 }),
            )
            .await;

        assert_eq!(res.status, StatusCode::OK);
        assert_eq!(res.text(), "Medicine reminder successfully added");
    }

    #[tokio::test]
    async fn message_without_json_content_type_is_rejected_plainly() {
        let app = TestApp::spawn().await;

        let request = Request::post("/send-message")
            .body(Body::from(r#"{"message":"hi"}"#))
            .unwrap();
        let res = app.send(request).await;

        assert_eq!(res.status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
        assert_eq!(res.text(), "Invalid request body");
        assert_eq!(app.get("/outbox").await.json(), json!([]));
    }
}

mod articles {
    use super::*;

    #[tokio::test]
    async fn uploaded_article_is_listed_with_generated_pdf_name() {
        let app = TestApp::spawn().await;
        let pdf = vec![b'%'; 1024];

        let res = app
            .post_multipart(
                "/upload-article",
                &[
                    Part::Text("title", "T"),
                    Part::File {
                        field: "file",
                        file_name: "prenatal-exercise.pdf",
                        content_type: "application/pdf",
                        data: &pdf,
                    },
                ],
            )
            .await;
        assert_eq!(res.status, StatusCode::OK);
        assert_eq!(res.text(), "Article uploaded successfully");

        let articles = app.get("/get-articles").await.json();
        let article = &articles.as_array().unwrap()[0];
        assert_eq!(article["title"], "T");
        let file_name = article["fileName"].as_str().unwrap();
        assert!(file_name.ends_with(".pdf"));
        assert_ne!(file_name, "prenatal-exercise.pdf");
        assert!(article["uploadDate"].as_str().is_some());

        let stored = app.dir("articles").join(file_name);
        assert_eq!(std::fs::read(&stored).unwrap(), pdf);

        let served = app.get(&format!("/uploads/articles/{}", file_name)).await;
        assert_eq!(served.status, StatusCode::OK);
        assert_eq!(served.body, pdf);
    }

    #[tokio::test]
    async fn article_without_file_is_stored_with_null_file_name() {
        let app = TestApp::spawn().await;

        let res = app
            .post_multipart("/upload-article", &[Part::Text("title", "Reading list")])
            .await;
        assert_eq!(res.status, StatusCode::OK);

        let articles = app.get("/get-articles").await.json();
        assert_eq!(articles[0]["title"], "Reading list");
        assert!(articles[0]["fileName"].is_null());
    }

    #[tokio::test]
    async fn oversized_article_is_rejected_and_removed() {
        let app = TestApp::spawn().await;
        let too_big = vec![0u8; MAX_UPLOAD_BYTES + 1];

        let res = app
            .post_multipart(
                "/upload-article",
                &[
                    Part::Text("title", "Huge"),
                    Part::File {
                        field: "file",
                        file_name: "huge.pdf",
                        content_type: "application/pdf",
                        data: &too_big,
                    },
                ],
            )
            .await;

        assert_eq!(res.status, StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(app.get("/get-articles").await.json(), json!([]));
        assert!(files_in(&app.dir("articles")).is_empty());
    }

    #[tokio::test]
    async fn store_failure_leaves_no_row_and_no_file() {
        let app = TestApp::spawn().await;
        sqlx::query("DROP TABLE articles").execute(app.db.pool()).await.unwrap();

        let res = app
            .post_multipart(
                "/upload-article",
                &[
                    Part::Text("title", "Doomed"),
                    Part::File {
                        field: "file",
                        file_name: "doomed.pdf",
                        content_type: "application/pdf",
                        data: b"%PDF-1.4",
                    },
                ],
            )
            .await;

        assert_eq!(res.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(res.text(), "Error uploading article");
        assert!(files_in(&app.dir("articles")).is_empty());
    }
}

mod videos {
    use super::*;

    #[tokio::test]
    async fn video_without_file_is_rejected_and_creates_no_row() {
        let app = TestApp::spawn().await;

        let res = app
            .post_multipart("/upload-video", &[Part::Text("title", "No file")])
            .await;

        assert_eq!(res.status, StatusCode::BAD_REQUEST);
        assert_eq!(res.text(), "No video file uploaded");
        assert_eq!(app.get("/get-videos").await.json(), json!([]));
        assert!(files_in(&app.dir("videos")).is_empty());
    }

    #[tokio::test]
    async fn empty_file_input_counts_as_missing() {
        let app = TestApp::spawn().await;

        let res = app
            .post_multipart(
                "/upload-video",
                &[
                    Part::Text("title", "Blank picker"),
                    Part::File {
                        field: "video",
                        file_name: "",
                        content_type: "application/octet-stream",
                        data: b"",
                    },
                ],
            )
            .await;

        assert_eq!(res.status, StatusCode::BAD_REQUEST);
        assert_eq!(app.get("/get-videos").await.json(), json!([]));
    }

    #[tokio::test]
    async fn uploaded_video_gets_absolute_url() {
        let app = TestApp::spawn().await;

        let res = app
            .post_multipart(
                "/upload-video",
                &[
                    Part::Text("title", "Breathing exercises"),
                    Part::File {
                        field: "video",
                        file_name: "breathing.mp4",
                        content_type: "video/mp4",
                        data: b"\x00\x00\x00\x18ftypmp42",
                    },
                ],
            )
            .await;
        assert_eq!(res.status, StatusCode::OK);
        assert_eq!(res.text(), "Video uploaded successfully");

        let videos = app.get("/get-videos").await.json();
        let video = &videos[0];
        let file_name = video["fileName"].as_str().unwrap();
        assert!(file_name.ends_with(".mp4"));
        assert_eq!(
            video["url"],
            format!("http://mcare.test/uploads/videos/{}", file_name)
        );
        assert!(app.dir("videos").join(file_name).exists());
        assert!(video.get("filePath").is_none());
    }

    #[tokio::test]
    async fn video_link_is_listed_before_older_entries() {
        let app = TestApp::spawn().await;

        app.post_json(
            "/video-link",
            json!({ "title": "Older", "url": "https://www.youtube.com/watch?v=XXXXXXXXXXX" }),
        )
        .await;
        let res = app
            .post_json(
                "/video-link",
                json!({ "title": "Newer", "url": "https://vimeo.com/123" }),
            )
            .await;
        assert_eq!(res.status, StatusCode::OK);

        let videos = app.get("/get-videos").await.json();
        assert_eq!(videos[0]["title"], "Newer");
        assert_eq!(videos[0]["url"], "https://vimeo.com/123");
        assert!(videos[0]["fileName"].is_null());
        assert_eq!(videos[1]["title"], "Older");
    }
}

#![allow(dead_code)]

use std::{io::Cursor, sync::Arc};

use axum::http::{HeaderName, HeaderValue};
use axum_test::{
    TestServer,
    multipart::{MultipartForm, Part},
};
use clap::Parser;
use image::{ImageFormat, Rgb, RgbImage};
use nutrilens_api::{
    application::http::server::http_server::{router, state},
    args::Args,
};
use serde_json::{Value, json};
use tempfile::TempDir;
use test_context::AsyncTestContext;

pub const USER_EMAIL: &str = "ada@example.com";

/// A server wired to fresh JSON stores and image directory in a temporary
/// directory, using the mock classifier.
pub struct ApiContext {
    pub server: TestServer,
    pub data_dir: TempDir,
}

impl AsyncTestContext for ApiContext {
    async fn setup() -> Self {
        Self::with_history_capacity(50).await
    }
}

impl ApiContext {
    pub async fn with_history_capacity(capacity: usize) -> Self {
        let data_dir = tempfile::tempdir().expect("tempdir");
        let path = |name: &str| data_dir.path().join(name).display().to_string();

        let args = Args::try_parse_from([
            "nutrilens-api".to_string(),
            "--history-path".to_string(),
            path("history.json"),
            "--profiles-path".to_string(),
            path("profiles.json"),
            "--image-dir".to_string(),
            path("images"),
            "--storage-backend".to_string(),
            "local".to_string(),
            "--history-capacity".to_string(),
            capacity.to_string(),
        ])
        .expect("test args");

        let state = state(Arc::new(args)).await.expect("state");
        let server = TestServer::new(router(state).expect("router")).expect("test server");

        Self { server, data_dir }
    }

    pub async fn register(&self, email: &str, allergies: &str) -> Value {
        let response = self
            .server
            .post("/profiles")
            .json(&json!({
                "name": "Ada",
                "email": email,
                "age": 36,
                "gender": "female",
                "allergies": allergies,
                "medications": "",
            }))
            .await;
        response.assert_status(axum::http::StatusCode::CREATED);
        response.json::<Value>()
    }

    pub async fn analyze(&self, form: MultipartForm) -> axum_test::TestResponse {
        self.server
            .post("/analyses")
            .add_header(
                HeaderName::from_static("x-user-email"),
                HeaderValue::from_static(USER_EMAIL),
            )
            .multipart(form)
            .await
    }
}

pub fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let image = RgbImage::from_pixel(width, height, Rgb([230, 220, 200]));
    let mut buffer = Cursor::new(Vec::new());
    image
        .write_to(&mut buffer, ImageFormat::Png)
        .expect("encode png");
    buffer.into_inner()
}

pub fn analysis_form(portion_pct: &str, save: Option<&str>) -> MultipartForm {
    let form = MultipartForm::new()
        .add_part(
            "image",
            Part::bytes(png_bytes(64, 48))
                .file_name("meal.png")
                .mime_type("image/png"),
        )
        .add_text("portion_pct", portion_pct.to_string());

    match save {
        Some(save) => form.add_text("save", save.to_string()),
        None => form,
    }
}

use std::{path::Path, sync::Arc};

use axum::http::StatusCode;
use axum_test::{
    TestServer,
    multipart::{MultipartForm, Part},
};
use clap::Parser;
use lunchatron_api::{
    application::http::server::{
        api_entities::api_error::ApiErrorResponse,
        http_server::{router, state},
    },
    args::Args,
};
use serde_json::{Value, json};
use tempfile::TempDir;
use test_context::{AsyncTestContext, test_context};

/// Nothing listens on the discard port, so outbound calls fail fast.
const UNREACHABLE: &str = "http://127.0.0.1:9";

struct ApiContext {
    server: TestServer,
    uploads: TempDir,
}

async fn api_context(extra: &[&str]) -> ApiContext {
    let uploads = tempfile::tempdir().unwrap();
    let upload_dir = uploads.path().display().to_string();
    let vision = format!("{UNREACHABLE}/v1/images:annotate");
    let language = format!("{UNREACHABLE}/v1/documents:analyzeEntities");
    let search = format!("{UNREACHABLE}/customsearch/v1");

    let mut argv = vec![
        "lunchatron-api",
        "--vision-api-key",
        "test-key",
        "--vision-endpoint",
        &vision,
        "--language-endpoint",
        &language,
        "--search-engine-id",
        "test-cx",
        "--search-endpoint",
        &search,
        "--recipe-backend",
        "web-search",
        "--http-timeout-secs",
        "2",
        "--upload-dir",
        &upload_dir,
    ];
    argv.extend_from_slice(extra);

    let args = Arc::new(Args::try_parse_from(argv).unwrap());
    let state = state(args).await.unwrap();
    let server = TestServer::new(router(state).unwrap()).unwrap();

    ApiContext { server, uploads }
}

impl AsyncTestContext for ApiContext {
    async fn setup() -> ApiContext {
        api_context(&[]).await
    }
}

fn image_form(field: &str, file_name: &str, mime: &str, data: &[u8]) -> MultipartForm {
    MultipartForm::new().add_part(
        field,
        Part::bytes(data.to_vec())
            .file_name(file_name)
            .mime_type(mime),
    )
}

#[test_context(ApiContext)]
#[tokio::test]
async fn test_liveness(ctx: &mut ApiContext) {
    let response = ctx.server.get("/").await;

    response.assert_status_ok();
    response.assert_json(&json!({
        "status": "ok",
        "message": "Lunchatron API is running"
    }));
}

#[test_context(ApiContext)]
#[tokio::test]
async fn test_recipes_without_ingredients_is_bad_request(ctx: &mut ApiContext) {
    let response = ctx
        .server
        .post("/recipes")
        .json(&json!({ "ingredients": [] }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: ApiErrorResponse = response.json();
    assert_eq!(body.status, 400);
    assert_eq!(body.detail, "No ingredients provided.");
}

#[test_context(ApiContext)]
#[tokio::test]
async fn test_recipes_with_blank_ingredients_is_bad_request(ctx: &mut ApiContext) {
    let response = ctx
        .server
        .post("/recipes")
        .json(&json!({ "ingredients": ["  ", ""], "food_type": "soup" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: ApiErrorResponse = response.json();
    assert_eq!(body.detail, "No ingredients provided.");
}

#[test_context(ApiContext)]
#[tokio::test]
async fn test_recipes_with_malformed_body_is_bad_request(ctx: &mut ApiContext) {
    let response = ctx
        .server
        .post("/recipes")
        .json(&json!({ "ingredients": "tomato" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[test_context(ApiContext)]
#[tokio::test]
async fn test_recipes_search_failure_is_server_error(ctx: &mut ApiContext) {
    let response = ctx
        .server
        .post("/recipes")
        .json(&json!({ "ingredients": ["tomato", "basil"], "foodType": "soup" }))
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let body: ApiErrorResponse = response.json();
    assert_eq!(body.code, "E_INTERNAL_SERVER_ERROR");
    assert!(body.detail.starts_with("recipe search failed"));
    assert!(!body.detail.contains("test-key"));
}

#[test_context(ApiContext)]
#[tokio::test]
async fn test_ingredients_without_file_is_bad_request(ctx: &mut ApiContext) {
    let form = MultipartForm::new().add_text("note", "no image here");

    let response = ctx.server.post("/ingredients").multipart(form).await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[test_context(ApiContext)]
#[tokio::test]
async fn test_ingredients_rejects_non_images(ctx: &mut ApiContext) {
    let form = image_form("file", "notes.txt", "text/plain", b"tomato, cheese");

    let response = ctx.server.post("/ingredients").multipart(form).await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: ApiErrorResponse = response.json();
    assert!(body.detail.contains("text/plain"));
}

#[test_context(ApiContext)]
#[tokio::test]
async fn test_ingredients_rejects_empty_file(ctx: &mut ApiContext) {
    let form = image_form("image", "empty.jpg", "image/jpeg", b"");

    let response = ctx.server.post("/ingredients").multipart(form).await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[test_context(ApiContext)]
#[tokio::test]
async fn test_ingredients_detection_failure_is_server_error(ctx: &mut ApiContext) {
    let form = image_form("file", "salad.jpg", "image/jpeg", b"\xFF\xD8\xFFjpeg");

    let response = ctx.server.post("/ingredients").multipart(form).await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let body: ApiErrorResponse = response.json();
    assert!(body.detail.starts_with("label detection failed"));
    assert!(!body.detail.contains("test-key"));
}

#[test_context(ApiContext)]
#[tokio::test]
async fn test_upload_image_stores_sanitized_file(ctx: &mut ApiContext) {
    let form = image_form("file", "../my lunch.jpg", "image/jpeg", b"\xFF\xD8\xFFjpeg");

    let response = ctx.server.post("/upload-image").multipart(form).await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["message"], "Image uploaded successfully!");

    let path = body["path"].as_str().unwrap();
    let stored = Path::new(path);
    assert_eq!(stored.parent(), Some(ctx.uploads.path()));
    assert!(stored.file_name().unwrap().to_str().unwrap().ends_with("_my_lunch.jpg"));
    assert_eq!(std::fs::read(stored).unwrap(), b"\xFF\xD8\xFFjpeg");
}

#[test_context(ApiContext)]
#[tokio::test]
async fn test_upload_image_requires_file_field(ctx: &mut ApiContext) {
    let form = image_form("image", "salad.jpg", "image/jpeg", b"\xFF\xD8\xFFjpeg");

    let response = ctx.server.post("/upload-image").multipart(form).await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_oversized_image_is_rejected() {
    let ctx = api_context(&["--max-image-bytes", "16"]).await;
    let form = image_form("file", "big.jpg", "image/jpeg", &[0xFF; 64]);

    let response = ctx.server.post("/ingredients").multipart(form).await;

    response.assert_status(StatusCode::PAYLOAD_TOO_LARGE);
    let body: ApiErrorResponse = response.json();
    assert_eq!(body.status, 413);
}

#[tokio::test]
async fn test_root_path_prefixes_routes() {
    let ctx = api_context(&["--server-root-path", "/api"]).await;

    ctx.server.get("/api").await.assert_status_ok();
    ctx.server
        .post("/api/recipes")
        .json(&json!({ "ingredients": [] }))
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}

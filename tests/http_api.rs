use actix_web::{http::StatusCode, test, web, App};
use rgenmedia::server::{configure, AppState, CHART_NAME_HEADER};
use rgenmedia::{
    AssetStore, ChartRenderer, ChartService, ChartStore, FalClient, FalConfig,
};
use serde_json::{json, Value};
use std::fs;
use tempfile::TempDir;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const PNG_SIGNATURE: &[u8] = &[0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1a, b'\n'];

struct Fixture {
    _dir: TempDir,
    state: AppState,
}

fn fixture(queue_url: &str) -> Fixture {
    let dir = TempDir::new().unwrap();
    let images = dir.path().join("images");
    fs::create_dir_all(images.join("asset")).unwrap();
    fs::create_dir_all(images.join("background")).unwrap();
    fs::write(images.join("asset").join("hero.png"), b"hero-bytes").unwrap();
    fs::write(images.join("background").join("forest.jpg"), b"forest-bytes").unwrap();

    let fal = FalClient::new(
        FalConfig::new()
            .with_api_key("test-key")
            .with_queue_url(queue_url)
            .with_poll_interval(5),
    );
    let state = AppState::new(
        AssetStore::new(&images),
        ChartService::new(ChartStore::new(dir.path().join("chart")), ChartRenderer::new()),
        fal,
    );

    Fixture { _dir: dir, state }
}

macro_rules! app {
    ($fixture:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($fixture.state.clone()))
                .configure(configure),
        )
        .await
    };
}

/// Mounts submit, status and result endpoints for one completed request.
async fn mount_completed(server: &MockServer, model: &str, arguments: Value, output: Value) {
    let base = format!("{}/{}/requests/req-1", server.uri(), model);

    Mock::given(method("POST"))
        .and(path(format!("/{}", model)))
        .and(body_json(arguments))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "request_id": "req-1",
            "status_url": format!("{}/status", base),
            "response_url": base,
        })))
        .expect(1)
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path(format!("/{}/requests/req-1/status", model)))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "COMPLETED"})))
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path(format!("/{}/requests/req-1", model)))
        .respond_with(ResponseTemplate::new(200).set_body_json(output))
        .mount(server)
        .await;
}

#[actix_web::test]
async fn root_returns_welcome_message() {
    let fx = fixture("http://127.0.0.1:9");
    let app = app!(fx);

    let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(
        body["message"],
        "Welcome to the Image Server! Use /images/{image_name} to fetch an image."
    );
}

#[actix_web::test]
async fn serves_images_from_both_folders() {
    let fx = fixture("http://127.0.0.1:9");
    let app = app!(fx);

    let req = test::TestRequest::get().uri("/images/asset/hero.png").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(test::read_body(resp).await.as_ref(), b"hero-bytes");

    let req = test::TestRequest::get()
        .uri("/images/background/forest.jpg")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(test::read_body(resp).await.as_ref(), b"forest-bytes");
}

#[actix_web::test]
async fn missing_image_is_404_with_folder_detail() {
    let fx = fixture("http://127.0.0.1:9");
    let app = app!(fx);

    let req = test::TestRequest::get()
        .uri("/images/asset/nonexistent.png")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["detail"], "Image not found in 'asset' folder");

    // Present in asset, not in background.
    let req = test::TestRequest::get()
        .uri("/images/background/hero.png")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["detail"], "Image not found in 'background' folder");
}

#[actix_web::test]
async fn lists_images_with_folder_prefixes() {
    let fx = fixture("http://127.0.0.1:9");
    let app = app!(fx);

    let resp = test::call_service(&app, test::TestRequest::get().uri("/images").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({"images": ["asset/hero.png", "background/forest.jpg"]}));
}

#[actix_web::test]
async fn listing_without_folders_is_404() {
    let dir = TempDir::new().unwrap();
    let state = AppState::new(
        AssetStore::new(dir.path().join("nowhere")),
        ChartService::new(ChartStore::new(dir.path()), ChartRenderer::new()),
        FalClient::new(FalConfig::new()),
    );
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .configure(configure),
    )
    .await;

    let resp = test::call_service(&app, test::TestRequest::get().uri("/images").to_request()).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["detail"], "One or both image folders not found");
}

#[actix_web::test]
async fn image_generation_forwards_jpeg_from_query() {
    let server = MockServer::start().await;
    mount_completed(
        &server,
        "fal-ai/flux/dev",
        json!({"prompt": "cat", "output_format": "jpeg"}),
        json!({"images": [{"url": "https://fal.media/cat.jpeg", "width": 1024, "height": 768}]}),
    )
    .await;

    let fx = fixture(&server.uri());
    let app = app!(fx);

    let req = test::TestRequest::post()
        .uri("/generate/image?prompt=cat&output_format=jpg")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(
        body,
        json!({"url": "https://fal.media/cat.jpeg", "width": 1024, "height": 768})
    );
}

#[actix_web::test]
async fn image_generation_accepts_json_body() {
    let server = MockServer::start().await;
    mount_completed(
        &server,
        "fal-ai/flux/dev",
        json!({"prompt": "cat", "output_format": "jpeg"}),
        json!({"images": [{"url": "https://fal.media/cat.jpeg"}]}),
    )
    .await;

    let fx = fixture(&server.uri());
    let app = app!(fx);

    let req = test::TestRequest::post()
        .uri("/generate/image")
        .set_json(json!({"prompt": "cat", "output_format": "jpg"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["url"], "https://fal.media/cat.jpeg");
}

#[actix_web::test]
async fn video_and_audio_generation_return_media() {
    let server = MockServer::start().await;
    mount_completed(
        &server,
        "fal-ai/minimax/hailuo-02/standard/image-to-video",
        json!({"prompt": "waves", "image_url": "https://example.com/beach.png"}),
        json!({"video": {"url": "https://fal.media/waves.mp4", "content_type": "video/mp4"}}),
    )
    .await;
    mount_completed(
        &server,
        "cassetteai/sound-effects-generator",
        json!({"prompt": "seagulls", "duration": 5}),
        json!({"audio_file": {"url": "https://fal.media/gulls.wav"}}),
    )
    .await;

    let fx = fixture(&server.uri());
    let app = app!(fx);

    let req = test::TestRequest::post()
        .uri("/generate/video")
        .set_json(json!({"prompt": "waves", "image_url": "https://example.com/beach.png"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["url"], "https://fal.media/waves.mp4");
    assert_eq!(body["content_type"], "video/mp4");

    let req = test::TestRequest::post()
        .uri("/generate/audio?prompt=seagulls")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["url"], "https://fal.media/gulls.wav");
}

#[actix_web::test]
async fn invalid_generation_input_is_422() {
    let fx = fixture("http://127.0.0.1:9");
    let app = app!(fx);

    let req = test::TestRequest::post().uri("/generate/image").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let req = test::TestRequest::post()
        .uri("/generate/audio?prompt=")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["detail"], "prompt must not be empty");
}

#[actix_web::test]
async fn missing_query_field_is_named_in_detail() {
    let fx = fixture("http://127.0.0.1:9");
    let app = app!(fx);

    let req = test::TestRequest::post()
        .uri("/generate/video?image_url=https://example.com/a.png")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = test::read_body_json(resp).await;
    let detail = body["detail"].as_str().unwrap();
    assert!(detail.contains("prompt"), "unexpected detail: {}", detail);

    let req = test::TestRequest::post()
        .uri("/generate/image")
        .set_json(json!({"output_format": "png"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["detail"].as_str().unwrap().contains("prompt"));
}

#[actix_web::test]
async fn provider_failure_is_a_server_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream exploded"))
        .mount(&server)
        .await;

    let fx = fixture(&server.uri());
    let app = app!(fx);

    let req = test::TestRequest::post()
        .uri("/generate/audio?prompt=bang")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_server_error());
    let body: Value = test::read_body_json(resp).await;
    assert!(body["detail"].as_str().unwrap().contains("upstream exploded"));
}

#[actix_web::test]
async fn chart_round_trip_returns_identical_png() {
    let fx = fixture("http://127.0.0.1:9");
    let app = app!(fx);

    let req = test::TestRequest::post()
        .uri("/report/chart")
        .set_json(json!({
            "type": ["image", "image", "video"],
            "status": ["Success", "Failed", "Success"]
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.headers().get("content-type").unwrap(), "image/png");

    let name = resp
        .headers()
        .get(CHART_NAME_HEADER)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(name.starts_with("chart_") && name.ends_with(".png"));

    let rendered = test::read_body(resp).await;
    assert!(rendered.starts_with(PNG_SIGNATURE));

    let req = test::TestRequest::get()
        .uri(&format!("/chart/{}", name))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(test::read_body(resp).await, rendered);
}

#[actix_web::test]
async fn empty_chart_request_still_renders() {
    let fx = fixture("http://127.0.0.1:9");
    let app = app!(fx);

    let req = test::TestRequest::post()
        .uri("/report/chart")
        .set_json(json!({"type": [], "status": []}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(test::read_body(resp).await.starts_with(PNG_SIGNATURE));
}

#[actix_web::test]
async fn chart_errors() {
    let fx = fixture("http://127.0.0.1:9");
    let app = app!(fx);

    let req = test::TestRequest::get()
        .uri("/chart/chart_0_0.png")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["detail"], "Chart image not found");

    let req = test::TestRequest::post()
        .uri("/report/chart")
        .set_json(json!({"type": ["image"]}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

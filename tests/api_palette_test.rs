//! Tests for /api/palette endpoints, including export downloads.

mod common;

use axum::http::StatusCode;
use chroma_vision::models::AppConfig;
use common::TestApp;
use pretty_assertions::assert_eq;
use std::io::Cursor;

#[tokio::test]
async fn test_palette_for_red() {
    let app = TestApp::new();

    let response = app.get("/api/palette/FF0000").await;

    common::assert_ok(&response);
    let json: serde_json::Value = response.json();
    assert_eq!(json["base"], "#FF0000");

    let palettes = &json["palettes"];
    common::assert_hex_list(
        &palettes["monochromatic"],
        &["#CC0000", "#990000", "#660000", "#330000"],
    );
    common::assert_hex_list(&palettes["analogous"], &["#FF0080", "#FF8000"]);
    common::assert_hex_list(&palettes["triadic"], &["#00FF00", "#0000FF"]);
    common::assert_hex_list(&palettes["complementary"], &["#00FFFF"]);
    common::assert_hex_list(
        &palettes["tints"],
        &["#FF3333", "#FF6666", "#FF9999", "#FFCCCC"],
    );
    common::assert_hex_list(
        &palettes["shades"],
        &["#CC0000", "#990000", "#660000", "#330000"],
    );

    // Shades repeat monochromatic for this base, so the union is shorter
    assert_eq!(json["combined"].as_array().unwrap().len(), 13);
}

#[tokio::test]
async fn test_palette_analogous_wraps_hue() {
    let app = TestApp::new();

    // Hue 10: minus 30 wraps to 340
    let response = app.get("/api/palette/FF2B00").await;

    common::assert_ok(&response);
    let json: serde_json::Value = response.json();
    assert_eq!(json["palettes"]["analogous"][0], "#FF0055");
}

#[tokio::test]
async fn test_palette_invalid_color() {
    let app = TestApp::new();

    let response = app.get("/api/palette/red").await;

    common::assert_json_error(&response, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_export_defaults_to_json() {
    let app = TestApp::new();

    let response = app.get("/api/palette/FF0000/export").await;

    common::assert_ok(&response);
    assert_eq!(response.header("content-type"), Some("application/json"));
    assert_eq!(
        response.header("content-disposition"),
        Some("attachment; filename=\"palette.json\"")
    );

    let json: serde_json::Value = response.json();
    assert_eq!(json["palettes"]["complementary"][0], "#00FFFF");
    assert_eq!(json["combined"].as_array().unwrap().len(), 13);
    assert_eq!(json["meta"]["app"], "Chroma Vision");
    assert_eq!(json["meta"]["format"], "hex");
    let exported_at = json["meta"]["exportedAt"].as_str().unwrap();
    assert!(chrono::DateTime::parse_from_rfc3339(exported_at).is_ok());
}

#[tokio::test]
async fn test_export_txt() {
    let app = TestApp::new();

    let response = app.get("/api/palette/000000/export?format=txt").await;

    common::assert_ok(&response);
    assert_eq!(
        response.header("content-type"),
        Some("text/plain; charset=utf-8")
    );
    assert_eq!(
        response.text(),
        "#000000\n#333333\n#666666\n#999999\n#CCCCCC\n\nMade with Chroma Vision"
    );
}

#[tokio::test]
async fn test_export_uses_configured_signature() {
    let config = AppConfig::from_yaml_str(
        "export:\n  app_name: Studio Picker\n  signature: \"(c) Studio\"\n",
    )
    .unwrap();
    let app = TestApp::with_config(config);

    let txt = app.get("/api/palette/000000/export?format=txt").await;
    assert!(txt.text().ends_with("\n\n(c) Studio"));

    let json: serde_json::Value = app.get("/api/palette/000000/export").await.json();
    assert_eq!(json["meta"]["app"], "Studio Picker");
    assert_eq!(json["meta"]["signature"], "(c) Studio");
}

#[tokio::test]
async fn test_export_png() {
    let app = TestApp::new();

    let response = app.get("/api/palette/FF0000/export?format=png").await;

    common::assert_png(&response);
    assert_eq!(
        response.header("content-disposition"),
        Some("attachment; filename=\"palette.png\"")
    );

    let decoder = png::Decoder::new(Cursor::new(response.bytes()));
    let mut reader = decoder.read_info().unwrap();
    let mut buf = vec![0; reader.output_buffer_size()];
    let info = reader.next_frame(&mut buf).unwrap();
    // 13 swatches: 10 columns, 2 rows with label strips, then the footer
    assert_eq!(info.width, 24 * 2 + 10 * 56 + 9 * 12);
    assert_eq!(info.height, 24 * 2 + 2 * (56 + 16) + 12 + 28);

    // Centre of the first swatch
    let offset = (((24 + 28) * info.width + 24 + 28) * 3) as usize;
    assert_eq!(&buf[offset..offset + 3], &[0xCC, 0x00, 0x00]);
}

#[tokio::test]
async fn test_export_unsupported_format() {
    let app = TestApp::new();

    let response = app.get("/api/palette/FF0000/export?format=gif").await;

    common::assert_json_error(&response, StatusCode::BAD_REQUEST);
    let json: serde_json::Value = response.json();
    assert!(json["error"].as_str().unwrap().contains("gif"));
}

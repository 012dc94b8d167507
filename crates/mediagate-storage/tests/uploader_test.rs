mod helpers;

use helpers::{failed_upload, ok_upload, uploader_with, MockMediaClient};
use http::StatusCode;
use mediagate_core::models::{
    CropMode, FadeEffect, ImageUpload, RawUpload, TimingWindow, UploadOutcome, UploadRequest,
    VideoUpload,
};
use mediagate_core::{
    AssetKind, MediaError, NamingPolicy, ResourceKind, TransformationDefaults, UploaderConfig,
};
use std::sync::Arc;

fn path_embedded_config() -> UploaderConfig {
    UploaderConfig {
        naming: NamingPolicy::PathEmbedded,
        ..Default::default()
    }
}

#[tokio::test]
async fn test_image_upload_success() {
    let client = Arc::new(
        MockMediaClient::new().with_upload_response(ok_upload("images/cat", "https://x/cat.jpg")),
    );
    let uploader = uploader_with(client.clone(), UploaderConfig::default());

    let mut data: &[u8] = b"fake-jpeg-bytes";
    let outcome = uploader
        .upload_image(ImageUpload::new("cat.jpg", "IMG_0042.png"), &mut data)
        .await
        .unwrap();

    assert_eq!(
        outcome,
        Some(UploadOutcome {
            public_id: "images/cat".to_string(),
            url: "https://x/cat.jpg".to_string(),
        })
    );

    let uploads = client.uploads();
    assert_eq!(uploads.len(), 1);
    let upload = &uploads[0];
    assert_eq!(upload.original_name, "IMG_0042.png");
    assert_eq!(upload.resource_kind, ResourceKind::Image);
    assert_eq!(upload.storage.folder.as_deref(), Some("images"));
    assert_eq!(upload.storage.public_id, "cat");
    assert!(!upload.storage.unique_filename);
    assert_eq!(upload.body, b"fake-jpeg-bytes");

    let spec = upload.transformation.as_ref().unwrap();
    assert_eq!((spec.width(), spec.height()), (320, 320));
    assert!(spec.overlay().is_none());
}

#[tokio::test]
async fn test_image_upload_with_overlay() {
    let client = Arc::new(
        MockMediaClient::new().with_upload_response(ok_upload("images/cat", "https://x/cat.jpg")),
    );
    let uploader = uploader_with(client.clone(), UploaderConfig::default());

    let mut data: &[u8] = b"bytes";
    uploader
        .upload_image(
            ImageUpload::new("cat.jpg", "cat.jpg")
                .with_size(800, 600)
                .with_overlay("© Studio"),
            &mut data,
        )
        .await
        .unwrap();

    let spec = client.uploads()[0].transformation.clone().unwrap();
    let overlay = spec.overlay().unwrap();
    assert_eq!(overlay.font_size, 18);
    assert_eq!(overlay.opacity, 60);
    assert_eq!(overlay.text, "© Studio");
}

#[tokio::test]
async fn test_video_upload_builds_timing_and_format() {
    let client = Arc::new(
        MockMediaClient::new()
            .with_upload_response(ok_upload("videos/intro_x1y2", "https://x/intro.mp4")),
    );
    let defaults = TransformationDefaults {
        crop_mode: CropMode::Fill,
        video_start_offset_secs: 3,
        video_duration_secs: 60,
        ..Default::default()
    };
    let uploader = uploader_with(
        client.clone(),
        UploaderConfig {
            transformation: defaults,
            ..Default::default()
        },
    );

    let mut data: &[u8] = b"video";
    let outcome = uploader
        .upload_video(VideoUpload::new("intro.mov"), &mut data)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(outcome.url, "https://x/intro.mp4");

    let upload = &client.uploads()[0];
    assert_eq!(upload.original_name, "intro.mov");
    assert_eq!(upload.resource_kind, ResourceKind::Video);
    assert_eq!(upload.storage.folder.as_deref(), Some("videos"));
    assert!(upload.storage.unique_filename);
    assert_eq!(upload.storage.overwrite, Some(false));

    let spec = upload.transformation.as_ref().unwrap();
    assert_eq!(spec.crop_mode(), CropMode::Fill);
    assert_eq!((spec.width(), spec.height()), (720, 480));
    assert_eq!(
        spec.timing_window(),
        Some(TimingWindow {
            start_offset_seconds: 3,
            duration_seconds: 60,
        })
    );
    assert_eq!(spec.fade(), Some(FadeEffect::symmetric(1000)));
    assert_eq!(spec.target_format(), Some("mp4"));
}

#[tokio::test]
async fn test_raw_upload_has_no_transformation() {
    let client = Arc::new(MockMediaClient::new().with_upload_response(ok_upload(
        "documents/report_a1",
        "https://x/report_a1.pdf",
    )));
    let uploader = uploader_with(client.clone(), UploaderConfig::default());

    let mut data: &[u8] = b"%PDF-1.7";
    let outcome = uploader
        .upload_raw_file(RawUpload::new("report.pdf", "scan-0001.tmp"), &mut data)
        .await
        .unwrap();
    assert!(outcome.is_some());

    let upload = &client.uploads()[0];
    assert_eq!(upload.resource_kind, ResourceKind::Raw);
    assert!(upload.transformation.is_none());
    assert_eq!(upload.storage.public_id, "report");
    assert_eq!(upload.storage.folder.as_deref(), Some("documents"));
    assert_eq!(upload.storage.access_mode.as_deref(), Some("public"));
}

#[tokio::test]
async fn test_path_embedded_naming() {
    let client = Arc::new(
        MockMediaClient::new().with_upload_response(ok_upload("images/cat", "https://x/cat.jpg")),
    );
    let uploader = uploader_with(client.clone(), path_embedded_config());

    let mut data: &[u8] = b"bytes";
    uploader
        .upload_image(ImageUpload::new("cat.jpg", "cat.heic"), &mut data)
        .await
        .unwrap();

    let storage = &client.uploads()[0].storage;
    assert_eq!(storage.public_id, "images/cat");
    assert_eq!(storage.folder, None);
    assert!(!storage.unique_filename);
}

#[tokio::test]
async fn test_non_ok_status_is_failure_for_every_kind() {
    for kind in [AssetKind::Image, AssetKind::Video, AssetKind::RawDocument] {
        let client = Arc::new(
            MockMediaClient::new().with_upload_response(failed_upload(StatusCode::BAD_REQUEST)),
        );
        let uploader = uploader_with(client.clone(), UploaderConfig::default());

        let mut data: &[u8] = b"bytes";
        let outcome = uploader
            .upload(UploadRequest::new(kind, "asset.bin", "asset.bin"), &mut data)
            .await
            .unwrap();
        assert_eq!(outcome, None, "expected failure for {}", kind);
        assert_eq!(client.uploads().len(), 1);
    }
}

#[tokio::test]
async fn test_absent_response_is_failure_for_every_kind() {
    for kind in [AssetKind::Image, AssetKind::Video, AssetKind::RawDocument] {
        let client = Arc::new(MockMediaClient::new());
        let uploader = uploader_with(client, UploaderConfig::default());

        let mut data: &[u8] = b"bytes";
        let outcome = uploader
            .upload(UploadRequest::new(kind, "asset.bin", "asset.bin"), &mut data)
            .await
            .unwrap();
        assert_eq!(outcome, None, "expected failure for {}", kind);
    }
}

#[tokio::test]
async fn test_blank_logical_name_makes_no_call() {
    let client = Arc::new(
        MockMediaClient::new().with_upload_response(ok_upload("images/cat", "https://x/cat.jpg")),
    );
    let uploader = uploader_with(client.clone(), UploaderConfig::default());

    for name in ["", "  ", "\t\n"] {
        let mut data: &[u8] = b"bytes";
        let outcome = uploader
            .upload_image(ImageUpload::new(name, "cat.jpg"), &mut data)
            .await
            .unwrap();
        assert_eq!(outcome, None);
    }
    assert_eq!(client.call_count(), 0);
}

#[tokio::test]
async fn test_name_without_stem_makes_no_call() {
    for config in [UploaderConfig::default(), path_embedded_config()] {
        let client = Arc::new(
            MockMediaClient::new()
                .with_upload_response(ok_upload("images/cat", "https://x/cat.jpg")),
        );
        let uploader = uploader_with(client.clone(), config);

        for name in ["photos/", "photos\\", "archive/ "] {
            let mut data: &[u8] = b"bytes";
            let outcome = uploader
                .upload_image(ImageUpload::new(name, "cat.jpg"), &mut data)
                .await
                .unwrap();
            assert_eq!(outcome, None, "expected no upload for {:?}", name);
        }
        assert_eq!(client.call_count(), 0);
    }
}

#[tokio::test]
async fn test_untransformed_uploads_send_no_transformation() {
    let client = Arc::new(
        MockMediaClient::new().with_upload_response(ok_upload("videos/raw", "https://x/raw.mov")),
    );
    let uploader = uploader_with(client.clone(), UploaderConfig::default());

    let mut image: &[u8] = b"image";
    uploader
        .upload_image(
            ImageUpload::new("cat.jpg", "IMG_1.heic")
                .with_size(800, 600)
                .untransformed(),
            &mut image,
        )
        .await
        .unwrap();

    let mut video: &[u8] = b"video";
    let outcome = uploader
        .upload_video(VideoUpload::new("clip.mov").untransformed(), &mut video)
        .await
        .unwrap();
    assert!(outcome.is_some());

    let uploads = client.uploads();
    assert_eq!(uploads.len(), 2);
    assert!(uploads[0].transformation.is_none());
    assert_eq!(uploads[0].storage.public_id, "cat");
    assert!(uploads[1].transformation.is_none());
    assert_eq!(uploads[1].resource_kind, ResourceKind::Video);
    assert_eq!(uploads[1].storage.folder.as_deref(), Some("videos"));
    assert_eq!(uploads[1].storage.overwrite, Some(false));
}

#[tokio::test]
async fn test_transport_errors_propagate() {
    let client = Arc::new(MockMediaClient::new().failing_transport());
    let uploader = uploader_with(client, UploaderConfig::default());

    let mut data: &[u8] = b"bytes";
    let result = uploader
        .upload_video(VideoUpload::new("clip.mp4"), &mut data)
        .await;

    assert!(matches!(result, Err(MediaError::Transport { .. })));
}

#[tokio::test]
async fn test_identical_requests_send_identical_parameters() {
    let client = Arc::new(
        MockMediaClient::new().with_upload_response(ok_upload("videos/a", "https://x/a.mp4")),
    );
    let uploader = uploader_with(client.clone(), UploaderConfig::default());

    for _ in 0..2 {
        let mut data: &[u8] = b"bytes";
        uploader
            .upload_video(
                VideoUpload::new("a.mp4")
                    .with_size(1280, 720)
                    .with_window(5, 30)
                    .with_overlay("brand"),
                &mut data,
            )
            .await
            .unwrap();
    }

    let uploads = client.uploads();
    assert_eq!(uploads[0].transformation, uploads[1].transformation);
    assert_eq!(uploads[0].storage, uploads[1].storage);
}

#[tokio::test]
async fn test_concurrent_uploads_share_one_client() {
    let client = Arc::new(
        MockMediaClient::new().with_upload_response(ok_upload("images/a", "https://x/a.jpg")),
    );
    let uploader = uploader_with(client.clone(), UploaderConfig::default());

    let mut handles = Vec::new();
    for i in 0..8 {
        let uploader = uploader.clone();
        handles.push(tokio::spawn(async move {
            let body = format!("image-{}", i).into_bytes();
            let mut data: &[u8] = &body;
            uploader
                .upload_image(ImageUpload::new(format!("a{}.jpg", i), "a.jpg"), &mut data)
                .await
        }));
    }

    for handle in handles {
        assert!(handle.await.unwrap().unwrap().is_some());
    }
    assert_eq!(client.uploads().len(), 8);
}

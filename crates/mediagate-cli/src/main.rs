//! Mediagate CLI: upload and delete assets on the configured media provider.
//!
//! Credentials come from MEDIAGATE_API_KEY, MEDIAGATE_API_SECRET and
//! MEDIAGATE_CLOUD_NAME. Naming and transformation defaults from the other MEDIAGATE_* vars.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use mediagate_api_client::CloudinaryClient;
use mediagate_cli::{file_name_of, init_tracing, CommandReport};
use mediagate_core::models::{ImageUpload, RawUpload, VideoUpload};
use mediagate_core::{ResourceKind, UploaderConfig};
use mediagate_storage::MediaUploader;

#[derive(Parser)]
#[command(name = "mediagate", about = "Upload media through a transformation-aware provider")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Upload an image, resized and optionally watermarked
    UploadImage {
        /// Path to the image file
        file: PathBuf,
        /// Logical name (defaults to the file name)
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        width: Option<u32>,
        #[arg(long)]
        height: Option<u32>,
        /// Text overlay placed in the bottom-right corner
        #[arg(long)]
        overlay: Option<String>,
        /// Upload the file as-is, without resizing
        #[arg(long)]
        untransformed: bool,
    },
    /// Upload a video, trimmed, faded and converted to mp4
    UploadVideo {
        /// Path to the video file
        file: PathBuf,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        width: Option<u32>,
        #[arg(long)]
        height: Option<u32>,
        /// Seconds skipped at the start
        #[arg(long)]
        start_offset: Option<u32>,
        /// Seconds kept after the start offset
        #[arg(long)]
        duration: Option<u32>,
        #[arg(long)]
        overlay: Option<String>,
        /// Upload the file as-is, without trimming or conversion
        #[arg(long)]
        untransformed: bool,
    },
    /// Upload a document without transformation
    UploadRaw {
        file: PathBuf,
        #[arg(long)]
        name: Option<String>,
    },
    /// Delete an asset by its provider public id
    Delete {
        public_id: String,
        /// Resource kind: image, video or raw
        #[arg(long, default_value = "image")]
        kind: ResourceKind,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let client = CloudinaryClient::from_env().context("Failed to configure media provider")?;
    let config = UploaderConfig::from_env().context("Failed to load uploader configuration")?;
    let uploader = MediaUploader::new(Arc::new(client), config);

    let report = match cli.command {
        Commands::UploadImage {
            file,
            name,
            width,
            height,
            overlay,
            untransformed,
        } => {
            let original_name = original_name_of(&file)?;
            let mut options =
                ImageUpload::new(name.unwrap_or_else(|| original_name.clone()), original_name);
            options.width = width;
            options.height = height;
            options.overlay_text = overlay;
            options.untransformed = untransformed;

            let mut stream = open(&file).await?;
            CommandReport::from_upload(uploader.upload_image(options, &mut stream).await?)
        }
        Commands::UploadVideo {
            file,
            name,
            width,
            height,
            start_offset,
            duration,
            overlay,
            untransformed,
        } => {
            let mut options = VideoUpload::new(match name {
                Some(name) => name,
                None => original_name_of(&file)?,
            });
            options.width = width;
            options.height = height;
            options.start_offset_seconds = start_offset;
            options.duration_seconds = duration;
            options.overlay_text = overlay;
            options.untransformed = untransformed;

            let mut stream = open(&file).await?;
            CommandReport::from_upload(uploader.upload_video(options, &mut stream).await?)
        }
        Commands::UploadRaw { file, name } => {
            let original_name = original_name_of(&file)?;
            let options =
                RawUpload::new(name.unwrap_or_else(|| original_name.clone()), original_name);

            let mut stream = open(&file).await?;
            CommandReport::from_upload(uploader.upload_raw_file(options, &mut stream).await?)
        }
        Commands::Delete { public_id, kind } => {
            let deleted = uploader.delete_asset(&public_id, kind).await?;
            CommandReport::from_delete(&public_id, deleted)
        }
    };

    println!("{}", serde_json::to_string_pretty(&report)?);

    if !report.success {
        std::process::exit(1);
    }
    Ok(())
}

fn original_name_of(path: &Path) -> anyhow::Result<String> {
    file_name_of(path).with_context(|| format!("Path has no file name: {}", path.display()))
}

async fn open(path: &Path) -> anyhow::Result<tokio::fs::File> {
    tokio::fs::File::open(path)
        .await
        .with_context(|| format!("Failed to open {}", path.display()))
}

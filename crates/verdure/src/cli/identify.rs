//! The `verdure identify` command: run the relay once on a local photo.

use anyhow::Context;
use clap::Args;
use std::path::PathBuf;
use verdure_core::{Config, Relay, Upload};

/// Arguments for the `identify` command.
#[derive(Args, Debug)]
pub struct IdentifyArgs {
    /// Plant photo to identify
    #[arg(required = true)]
    pub image: PathBuf,

    /// Content type to declare (guessed from the extension by default)
    #[arg(long)]
    pub content_type: Option<String>,

    /// Wrap the care guide in a JSON string, exactly as the HTTP endpoint returns it
    #[arg(long)]
    pub json: bool,
}

/// Execute the identify command.
pub async fn execute(args: IdentifyArgs, config: Config) -> anyhow::Result<()> {
    let upload = read_upload(&args).await?;
    let relay = Relay::from_config(&config);

    let guide = relay
        .identify(&upload)
        .await
        .with_context(|| format!("Failed to identify {}", args.image.display()))?;

    if args.json {
        println!("{}", serde_json::to_string(&guide)?);
    } else {
        println!("{}", guide.as_str());
    }
    Ok(())
}

async fn read_upload(args: &IdentifyArgs) -> anyhow::Result<Upload> {
    let data = tokio::fs::read(&args.image)
        .await
        .with_context(|| format!("Failed to read {}", args.image.display()))?;

    let file_name = args
        .image
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    let content_type = args.content_type.clone().unwrap_or_else(|| {
        mime_guess::from_path(&args.image)
            .first_or_octet_stream()
            .essence_str()
            .to_string()
    });

    tracing::debug!(
        file_name = %file_name,
        content_type = %content_type,
        size = data.len(),
        "Read local image"
    );

    Ok(Upload::new(file_name, content_type, data))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_read_upload_guesses_content_type() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fern.png");
        std::fs::write(&path, [0x89, 0x50, 0x4E, 0x47]).unwrap();

        let args = IdentifyArgs {
            image: path,
            content_type: None,
            json: false,
        };
        let upload = read_upload(&args).await.unwrap();
        assert_eq!(upload.file_name, "fern.png");
        assert_eq!(upload.content_type, "image/png");
        assert_eq!(upload.len(), 4);
    }

    #[tokio::test]
    async fn test_read_upload_honors_content_type_override() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("leaf");
        std::fs::write(&path, [1, 2, 3]).unwrap();

        let args = IdentifyArgs {
            image: path,
            content_type: Some("image/heic".to_string()),
            json: false,
        };
        let upload = read_upload(&args).await.unwrap();
        assert_eq!(upload.content_type, "image/heic");
    }

    #[tokio::test]
    async fn test_read_upload_missing_file() {
        let args = IdentifyArgs {
            image: PathBuf::from("/definitely/not/here.jpg"),
            content_type: None,
            json: false,
        };
        let err = read_upload(&args).await.unwrap_err();
        assert!(err.to_string().contains("Failed to read"));
    }
}

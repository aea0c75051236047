//! Snapshot delivery: share first, download fallback.
//!
//! The share attempt posts the PNG to a configured endpoint (the headless
//! stand-in for a native share sheet). Any share failure, including the
//! absence of a share target, falls through silently to a file download; a
//! failed share never surfaces to the caller. Export therefore resolves to
//! exactly one of {shared, downloaded}.

use std::path::{Path, PathBuf};

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::error::{Error, Result};
use crate::rendering::Snapshot;

/// Filename used for both the download and the share attachment
pub const EXPORT_FILENAME: &str = "magnet-poem.png";

/// How a snapshot ultimately reached the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Delivery {
    /// The share endpoint accepted the PNG
    Shared,
    /// The PNG was written to this path
    Downloaded(PathBuf),
}

/// Delivery configuration for one export.
#[derive(Debug, Clone)]
pub struct ExportOptions {
    /// Share endpoint; `None` means the platform has no share capability
    pub share_url: Option<String>,
    /// Directory the download fallback writes into
    pub output_dir: PathBuf,
    /// Output filename for both delivery paths
    pub filename: String,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            share_url: None,
            output_dir: PathBuf::from("."),
            filename: EXPORT_FILENAME.to_string(),
        }
    }
}

/// Deliver a snapshot. Share is always attempted before download; download
/// only runs after the share attempt has been rejected or skipped, and the
/// two never race.
pub async fn export(snapshot: &Snapshot, opts: &ExportOptions) -> Result<Delivery> {
    #[cfg(feature = "share")]
    if let Some(url) = opts.share_url.as_deref() {
        match share(snapshot, url, &opts.filename).await {
            Ok(()) => {
                log::info!("snapshot shared to {}", url);
                return Ok(Delivery::Shared);
            }
            Err(err) => {
                // Masked by design: the user only ever sees the download
                log::warn!("share to {} rejected ({}); falling back to download", url, err);
            }
        }
    }

    #[cfg(not(feature = "share"))]
    if opts.share_url.is_some() {
        log::warn!("share target configured but the share feature is disabled; downloading");
    }

    let path = download(snapshot, &opts.output_dir, &opts.filename)?;
    Ok(Delivery::Downloaded(path))
}

/// POST the PNG to the share endpoint as an `image/png` attachment.
#[cfg(feature = "share")]
async fn share(snapshot: &Snapshot, url: &str, filename: &str) -> Result<()> {
    let client = reqwest::Client::new();
    let response = client
        .post(url)
        .header("Content-Type", "image/png")
        .header(
            "Content-Disposition",
            format!("attachment; filename=\"{}\"", filename),
        )
        .body(snapshot.png_data.clone())
        .send()
        .await
        .map_err(|e| Error::Share(e.to_string()))?;

    response
        .error_for_status()
        .map_err(|e| Error::Share(e.to_string()))?;
    Ok(())
}

/// Write the PNG into `output_dir`, creating the directory if needed.
pub fn download(snapshot: &Snapshot, output_dir: &Path, filename: &str) -> Result<PathBuf> {
    std::fs::create_dir_all(output_dir)
        .map_err(|e| Error::Download(format!("{}: {}", output_dir.display(), e)))?;
    let path = output_dir.join(filename);
    std::fs::write(&path, &snapshot.png_data)
        .map_err(|e| Error::Download(format!("{}: {}", path.display(), e)))?;
    log::info!("snapshot downloaded to {}", path.display());
    Ok(path)
}

/// Render the snapshot as a `data:image/png;base64,...` URL.
pub fn data_url(snapshot: &Snapshot) -> String {
    format!(
        "data:image/png;base64,{}",
        STANDARD.encode(&snapshot.png_data)
    )
}

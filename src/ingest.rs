//! Image ingestion: local file -> embeddable data URI
//!
//! Reads run on the tokio blocking pool and deliver exactly one result over a
//! oneshot channel. A cancelled picker, an unreadable file or an oversized
//! file all resolve to `None`; the reason is only logged.

use std::future::Future;
use std::path::{Path, PathBuf};
use std::pin::Pin;
use std::task::{Context, Poll};

use anyhow::{bail, Context as _, Result};
use base64::{engine::general_purpose, Engine as _};
use tokio::runtime::Handle;
use tokio::sync::oneshot;
use tracing::{debug, info, warn};

use crate::constants::ingest::{FALLBACK_MIME, MAX_IMAGE_BYTES};
use crate::state::ImageRef;

/// Spawns image reads onto a tokio runtime
#[derive(Debug, Clone)]
pub struct ImageIngestor {
    handle: Handle,
}

impl ImageIngestor {
    pub fn new(handle: Handle) -> Self {
        Self { handle }
    }

    /// Start reading `path`; `None` means the user cancelled selection.
    /// `tag` travels with the result so the caller can route it.
    pub fn ingest<T>(&self, tag: T, path: Option<PathBuf>) -> PendingImage<T> {
        let (tx, rx) = oneshot::channel();

        match path {
            Some(path) => {
                debug!(path = %path.display(), "Starting image read");
                self.handle.spawn_blocking(move || {
                    let image = match read_image(&path) {
                        Ok(image) => Some(image),
                        Err(err) => {
                            warn!(path = %path.display(), error = ?err, "Image ingestion failed");
                            None
                        }
                    };
                    // receiver gone means the modal closed first
                    let _ = tx.send(image);
                });
            }
            None => {
                debug!("Image selection cancelled");
                let _ = tx.send(None);
            }
        }

        PendingImage { tag, rx }
    }
}

/// A single in-flight image read
#[derive(Debug)]
pub struct PendingImage<T> {
    tag: T,
    rx: oneshot::Receiver<Option<ImageRef>>,
}

impl<T> PendingImage<T> {
    pub fn tag(&self) -> &T {
        &self.tag
    }

    /// Non-blocking check for event-loop callers.
    /// `None` while the read is still running.
    pub fn try_take(&mut self) -> Option<Option<ImageRef>> {
        match self.rx.try_recv() {
            Ok(image) => Some(image),
            Err(oneshot::error::TryRecvError::Empty) => None,
            Err(oneshot::error::TryRecvError::Closed) => Some(None),
        }
    }
}

impl<T: Unpin> Future for PendingImage<T> {
    type Output = Option<ImageRef>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.get_mut();
        match Pin::new(&mut this.rx).poll(cx) {
            Poll::Ready(Ok(image)) => Poll::Ready(image),
            Poll::Ready(Err(_)) => Poll::Ready(None),
            Poll::Pending => Poll::Pending,
        }
    }
}

/// Read a file and encode it as `data:<mime>;base64,<payload>`
pub fn read_image(path: &Path) -> Result<ImageRef> {
    let metadata = std::fs::metadata(path)
        .with_context(|| format!("Failed to stat image {}", path.display()))?;
    if metadata.len() > MAX_IMAGE_BYTES {
        bail!(
            "Image too large: {} bytes (max: {})",
            metadata.len(),
            MAX_IMAGE_BYTES
        );
    }

    let bytes = std::fs::read(path)
        .with_context(|| format!("Failed to read image {}", path.display()))?;
    let image = to_data_uri(mime_for(path), &bytes);
    info!(path = %path.display(), bytes = bytes.len(), "Image ingested");
    Ok(image)
}

pub fn to_data_uri(mime: &str, bytes: &[u8]) -> ImageRef {
    let payload = general_purpose::STANDARD.encode(bytes);
    ImageRef::new(format!("data:{mime};base64,{payload}"))
}

fn mime_for(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());

    match extension.as_deref() {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("svg") => "image/svg+xml",
        Some("bmp") => "image/bmp",
        _ => FALLBACK_MIME,
    }
}

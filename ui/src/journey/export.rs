use dioxus::prelude::*;
use tracing::{info, warn};

use crate::core::config::story;
use crate::core::format::format_percent;
use crate::core::scroll::ScrollSeries;
use crate::journey::snapshot::{
    export_snapshot, DownloadSink, ExportError, ExportOutcome, SnapshotLabels,
};
use crate::t;

#[derive(Clone, Debug, PartialEq)]
enum ExportStatus {
    Idle,
    Working,
    Done(String),
    Error(String),
}

/// "Save my reading journey" button and its status line.
#[component]
pub fn SaveJourneyButton(series: Signal<ScrollSeries>) -> Element {
    let mut status = use_signal(|| ExportStatus::Idle);
    let mut busy = use_signal(|| false);

    let on_save = move |_| {
        if busy() {
            return;
        }
        busy.set(true);
        status.set(ExportStatus::Working);

        let values = series.read().as_slice().to_vec();
        let labels = localized_labels(series.read().latest());
        status.set(match save_snapshot(&values, &labels) {
            Ok(ExportOutcome::Downloaded { location: Some(path) }) => {
                ExportStatus::Done(t!("export-done", path = path))
            }
            Ok(ExportOutcome::Downloaded { location: None }) => {
                ExportStatus::Done(t!("export-started"))
            }
            Ok(ExportOutcome::Skipped) => ExportStatus::Idle,
            Err(err) => {
                warn!("Snapshot export failed: {err}");
                ExportStatus::Error(t!("export-failed", error = err.to_string()))
            }
        });
        busy.set(false);
    };

    let feedback = match status() {
        ExportStatus::Idle => None,
        ExportStatus::Working => Some(("journey-export__status", t!("export-working"))),
        ExportStatus::Done(message) => Some((
            "journey-export__status journey-export__status--success",
            message,
        )),
        ExportStatus::Error(message) => Some((
            "journey-export__status journey-export__status--error",
            message,
        )),
    };

    rsx! {
        div { class: "journey-export",
            button {
                r#type: "button",
                class: "journey-export__button",
                disabled: busy(),
                onclick: on_save,
                "📸 "
                {t!("footer-save")}
            }
            if let Some((class_name, message)) = feedback {
                p { class: "{class_name}", "{message}" }
            }
        }
    }
}

fn localized_labels(percent: f64) -> SnapshotLabels {
    SnapshotLabels {
        title: t!("snapshot-title"),
        subtitle: t!("snapshot-subtitle"),
        start: t!("flow-start"),
        end: t!("flow-end"),
        completion: t!("snapshot-completion", percent = format_percent(percent)),
    }
}

fn save_snapshot(values: &[f64], labels: &SnapshotLabels) -> Result<ExportOutcome, ExportError> {
    let config = story();
    let size = (config.export_width, config.export_height);

    #[cfg(target_arch = "wasm32")]
    let outcome = export_snapshot(
        super::canvas::CanvasSurface::new,
        &BrowserDownload,
        &config.export_file_name,
        size,
        values,
        labels,
    );

    #[cfg(not(target_arch = "wasm32"))]
    let outcome = {
        let sink = FolderDownload::project_exports()?;
        export_snapshot(
            super::raster::PixmapSurface::new,
            &sink,
            &config.export_file_name,
            size,
            values,
            labels,
        )
    };

    if let Ok(ExportOutcome::Downloaded { location }) = &outcome {
        info!(?location, samples = values.len(), "Reading journey saved");
    }
    outcome
}

/// Triggers a browser download through a temporary object URL.
#[cfg(target_arch = "wasm32")]
pub struct BrowserDownload;

#[cfg(target_arch = "wasm32")]
impl DownloadSink for BrowserDownload {
    fn deliver(&self, file_name: &str, mime: &str, bytes: Vec<u8>) -> Result<Option<String>, ExportError> {
        use wasm_bindgen::JsCast;
        use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

        let array = js_sys::Uint8Array::from(bytes.as_slice());
        let parts = js_sys::Array::new();
        parts.push(&array.buffer());

        let opts = BlobPropertyBag::new();
        opts.set_type(mime);
        let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &opts)
            .map_err(|_| ExportError::Delivery("failed to create blob".into()))?;
        let url = Url::create_object_url_with_blob(&blob)
            .map_err(|_| ExportError::Delivery("unable to create download".into()))?;

        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| ExportError::Delivery("document unavailable".into()))?;
        let anchor: HtmlAnchorElement = document
            .create_element("a")
            .map_err(|_| ExportError::Delivery("unable to create anchor".into()))?
            .dyn_into()
            .map_err(|_| ExportError::Delivery("anchor cast failed".into()))?;
        anchor.set_href(&url);
        anchor.set_download(file_name);
        anchor.style().set_property("display", "none").ok();

        document
            .body()
            .ok_or_else(|| ExportError::Delivery("missing body".into()))?
            .append_child(&anchor)
            .ok();
        anchor.click();
        anchor.remove();
        Url::revoke_object_url(&url).ok();

        Ok(None)
    }
}

/// Writes exports into a directory, creating it on demand.
#[cfg(not(target_arch = "wasm32"))]
pub struct FolderDownload {
    dir: std::path::PathBuf,
}

#[cfg(not(target_arch = "wasm32"))]
impl FolderDownload {
    pub fn new(dir: impl Into<std::path::PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn project_exports() -> Result<Self, ExportError> {
        let dirs = directories::ProjectDirs::from("com", "MarketVote", "MarketVote")
            .ok_or_else(|| ExportError::Delivery("unable to determine export directory".into()))?;
        Ok(Self::new(dirs.data_dir().join("exports")))
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl DownloadSink for FolderDownload {
    fn deliver(&self, file_name: &str, _mime: &str, bytes: Vec<u8>) -> Result<Option<String>, ExportError> {
        std::fs::create_dir_all(&self.dir).map_err(|err| ExportError::Delivery(err.to_string()))?;
        let path = self.dir.join(file_name);
        std::fs::write(&path, bytes).map_err(|err| ExportError::Delivery(err.to_string()))?;
        Ok(Some(path.to_string_lossy().to_string()))
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use crate::journey::raster::PixmapSurface;

    #[test]
    fn folder_download_writes_the_png() {
        let dir = std::env::temp_dir().join(format!("marketvote-export-{}", std::process::id()));
        let sink = FolderDownload::new(&dir);
        let outcome = export_snapshot(
            PixmapSurface::new,
            &sink,
            "my-reading-journey.png",
            (320, 180),
            &[0.0, 20.0, 60.0],
            &SnapshotLabels::english(60.0),
        )
        .expect("export");

        let expected = dir.join("my-reading-journey.png");
        assert_eq!(
            outcome,
            ExportOutcome::Downloaded {
                location: Some(expected.to_string_lossy().to_string())
            }
        );
        let written = std::fs::read(&expected).expect("file written");
        assert_eq!(&written[1..4], b"PNG");
        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn completion_label_carries_the_bare_percent() {
        let _guard = crate::i18n::language_guard();
        let labels = localized_labels(42.0);
        assert_eq!(labels.completion, "Completion: 42.0%");
        assert_eq!(labels.title, "My Reading Journey");
    }
}

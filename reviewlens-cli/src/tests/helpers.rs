//! Test helpers for staging review batches on disk.

use camino::{Utf8Path, Utf8PathBuf};
use tempfile::TempDir;

use crate::analyze::AnalyzeArgs;

pub(super) const SAMPLE_BATCH: &str = r#"[
    {"text": "Great food but slow service", "rating": "5 stars", "platform": "google"},
    {"text": "Terrible food, dirty place", "rating": 1},
    {"text": null, "rating": null}
]"#;

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent.as_std_path()).expect("create parent directory");
    }
    std::fs::write(path.as_std_path(), contents).expect("write fixture file");
}

/// Temporary directory holding a review batch and receiving artefacts.
#[derive(Debug)]
pub(super) struct Workspace {
    _tmp: TempDir,
    root: Utf8PathBuf,
}

impl Workspace {
    pub(super) fn new() -> Self {
        let tmp = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf-8 workspace");
        Self { _tmp: tmp, root }
    }

    pub(super) fn root(&self) -> &Utf8Path {
        &self.root
    }

    pub(super) fn reviews(&self) -> Utf8PathBuf {
        self.root.join("reviews.json")
    }

    pub(super) fn with_batch(self, contents: &str) -> Self {
        write_utf8(&self.reviews(), contents.as_bytes());
        self
    }

    pub(super) fn args(&self, business_id: &str) -> AnalyzeArgs {
        AnalyzeArgs {
            reviews_path: Some(self.reviews()),
            business_id: Some(business_id.to_owned()),
            ..AnalyzeArgs::default()
        }
    }
}

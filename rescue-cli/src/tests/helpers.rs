//! Test helpers for writing request files into temporary workspaces.

use camino::{Utf8Path, Utf8PathBuf};
use rescue_core::PlanRequest;
use std::fs;
use tempfile::TempDir;

/// Write `contents` to `path`, panicking on failure.
pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    fs::write(path, contents).expect("write test file");
}

/// Serialise `request` as pretty JSON at `path`.
pub(super) fn write_request(path: &Utf8Path, request: &PlanRequest) {
    let payload = serde_json::to_string_pretty(request).expect("serialise request");
    write_utf8(path, payload.as_bytes());
}

/// A temporary directory with a UTF-8 root path.
pub(super) fn utf8_workspace() -> (TempDir, Utf8PathBuf) {
    let tmp = TempDir::new().expect("tempdir");
    let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf-8 workspace");
    (tmp, root)
}

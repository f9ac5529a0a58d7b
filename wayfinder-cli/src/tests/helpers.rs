//! Test helpers for writing requests and catalogs into temporary workspaces.

use camino::{Utf8Path, Utf8PathBuf};
use tempfile::TempDir;

/// Catalog with `A – B – C` (1 km legs) and a 3 km `A – C` shortcut.
pub(super) const TRIANGLE_CATALOG: &str = r#"{
    "locations": [
        {"id": "A", "name": "Alpha", "district": "North", "position": {"x": 0.0, "y": 0.0}},
        {"id": "B", "name": "Bravo", "district": "North", "position": {"x": 1.0, "y": 0.0}},
        {"id": "C", "name": "Charlie", "district": "South", "position": {"x": 2.0, "y": 0.0}}
    ],
    "edges": [
        {"from": "A", "to": "B", "distance_km": 1.0},
        {"from": "B", "to": "C", "distance_km": 1.0},
        {"from": "A", "to": "C", "distance_km": 3.0}
    ]
}"#;

/// Hoàn Kiếm loop over the bundled catalog: 2.3 km, every stop covered.
pub(super) const HOAN_KIEM_REQUEST: &str =
    r#"{"selected": ["hk1", "hk2", "hk3", "hk4"], "start": "hk1"}"#;

/// Mandatory stops whose shortest tour is 8.8 km, against a 3 km budget.
pub(super) const OUT_OF_REACH_REQUEST: &str = r#"{
    "selected": ["hk1", "th1", "hbt2"],
    "start": "hk1",
    "mandatory": ["th1", "hbt2"],
    "budget_km": 3.0
}"#;

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path, contents).expect("write test file");
}

/// Temporary directory holding a request file and optional catalog.
#[derive(Debug)]
pub(super) struct Workspace {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl Workspace {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        Self { _dir: dir, root }
    }

    pub(super) fn path(&self, name: &str) -> Utf8PathBuf {
        self.root.join(name)
    }

    pub(super) fn request(&self, json: &str) -> Utf8PathBuf {
        let path = self.path("request.json");
        write_utf8(&path, json.as_bytes());
        path
    }

    pub(super) fn catalog(&self, json: &str) -> Utf8PathBuf {
        let path = self.path("catalog.json");
        write_utf8(&path, json.as_bytes());
        path
    }
}

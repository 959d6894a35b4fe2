use log::warn;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

use crate::error::{BoardError, BoardResult};

/// One named spot in a board's layout, e.g. "header" or "joke".
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct LayoutRegion {
    #[serde(default)]
    pub position: Option<(i32, i32)>,
}

/// Named regions for one board, as they appear in `layout_{W}x{H}.json`.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
#[serde(transparent)]
pub struct BoardLayout {
    regions: HashMap<String, LayoutRegion>,
}

impl BoardLayout {
    pub fn region(&self, name: &str) -> Option<&LayoutRegion> {
        self.regions.get(name)
    }

    /// A region only counts as placed when it carries a position.
    pub fn position(&self, name: &str) -> Option<(i32, i32)> {
        self.regions.get(name).and_then(|r| r.position)
    }

    pub fn set_position(&mut self, name: impl Into<String>, x: i32, y: i32) {
        self.regions.insert(
            name.into(),
            LayoutRegion {
                position: Some((x, y)),
            },
        );
    }
}

/// Where boards get their layouts from; the host decides the backing store.
pub trait LayoutSource: Send {
    fn board_layout(&self, board_id: &str) -> Option<BoardLayout>;
}

/// File-backed layouts: one JSON file per display resolution, mapping
/// board id to its regions.
pub struct FileLayouts {
    layouts: HashMap<String, BoardLayout>,
}

impl FileLayouts {
    pub fn empty() -> Self {
        Self {
            layouts: HashMap::new(),
        }
    }

    /// Reads `layout_{W}x{H}.json` from `dir`. A missing file means the
    /// plugin ships no layout for this resolution; that is not an error.
    pub fn for_display(dir: impl AsRef<Path>, width: u32, height: u32) -> BoardResult<Self> {
        let path = dir
            .as_ref()
            .join(format!("layout_{}x{}.json", width, height));
        Self::from_file(path)
    }

    pub fn from_file(path: impl AsRef<Path>) -> BoardResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::empty());
        }
        let txt = std::fs::read_to_string(path)
            .map_err(|e| BoardError::layout(path.display().to_string(), e.to_string()))?;
        let layouts = serde_json::from_str(&txt)
            .map_err(|e| BoardError::layout(path.display().to_string(), format!("bad json: {}", e)))?;
        Ok(Self { layouts })
    }

    /// Best-effort variant: a corrupt file logs a warning and yields no
    /// layouts instead of failing board startup.
    pub fn load_or_empty(dir: impl AsRef<Path>, width: u32, height: u32) -> Self {
        match Self::for_display(dir, width, height) {
            Ok(layouts) => layouts,
            Err(e) => {
                warn!("[layout] {}", e);
                Self::empty()
            }
        }
    }
}

impl LayoutSource for FileLayouts {
    fn board_layout(&self, board_id: &str) -> Option<BoardLayout> {
        self.layouts.get(board_id).cloned()
    }
}

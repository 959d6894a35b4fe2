use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{BoardError, BoardResult};

/// `plugin.json` — what the plugin tells the host about itself.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct PluginManifest {
    pub name: String,
    pub version: String,
    pub description: String,
    #[serde(default)]
    pub author: String,
    pub boards: Vec<BoardDecl>,
    #[serde(default)]
    pub requirements: Requirements,
    #[serde(default)]
    pub preserve_files: Vec<String>,
}

/// One board the plugin contributes to the host's rotation.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct BoardDecl {
    pub id: String,
    pub class_name: String,
    pub module: String,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Requirements {
    #[serde(default)]
    pub app_version: String,
    #[serde(default)]
    pub dependencies: Vec<String>,
}

impl PluginManifest {
    pub fn load(path: impl AsRef<Path>) -> BoardResult<Self> {
        let path = path.as_ref();
        let txt = std::fs::read_to_string(path)
            .map_err(|e| BoardError::manifest(format!("read {}: {}", path.display(), e)))?;
        let manifest: PluginManifest = serde_json::from_str(&txt)
            .map_err(|e| BoardError::manifest(format!("parse {}: {}", path.display(), e)))?;
        manifest.validate()?;
        Ok(manifest)
    }

    pub fn validate(&self) -> BoardResult<()> {
        require("name", &self.name)?;
        require("version", &self.version)?;
        require("description", &self.description)?;
        if self.boards.is_empty() {
            return Err(BoardError::manifest("manifest declares no boards"));
        }
        for board in &self.boards {
            require("boards[].id", &board.id)?;
            require("boards[].class_name", &board.class_name)?;
            require("boards[].module", &board.module)?;
        }
        Ok(())
    }

    /// The identity boards report to the host: the manifest `name` (the
    /// stable id), not the human-readable description.
    pub fn board_name(&self) -> &str {
        &self.name
    }

    pub fn board(&self, id: &str) -> Option<&BoardDecl> {
        self.boards.iter().find(|b| b.id == id)
    }
}

fn require(field: &str, value: &str) -> BoardResult<()> {
    if value.trim().is_empty() {
        return Err(BoardError::manifest(format!(
            "missing required field '{}'",
            field
        )));
    }
    Ok(())
}

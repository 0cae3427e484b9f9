//! Layout loading from TOML or JSON files.
//!
//! A layout file describes the cell set of one grid view:
//!
//! ```toml
//! name = "settings"
//! initial = 0
//!
//! [[cell]]
//! id = "network"
//! x = 0
//! y = 0
//! w = 200
//! h = 50
//! ```

use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;

use gridnav_types::{Cell, NavError, Result};

/// A single cell definition in a layout file.
#[derive(Debug, Clone, Deserialize)]
pub struct CellDef {
    #[serde(default)]
    pub id: Option<String>,
    pub x: f64,
    pub y: f64,
    #[serde(alias = "w")]
    pub width: f64,
    #[serde(alias = "h")]
    pub height: f64,
}

impl CellDef {
    pub fn cell(&self) -> Cell {
        Cell::new(self.x, self.y, self.width, self.height)
    }
}

/// A validated collection of cells for one grid view.
#[derive(Debug, Clone, Deserialize)]
pub struct GridLayout {
    #[serde(default)]
    pub name: String,
    /// Cell selected when the grid first receives focus.
    #[serde(default)]
    pub initial: usize,
    #[serde(rename = "cell", alias = "cells", default)]
    pub cells: Vec<CellDef>,
}

impl GridLayout {
    /// Parse and validate a TOML layout.
    pub fn from_toml(src: &str) -> Result<Self> {
        let layout: Self = toml::from_str(src)?;
        layout.validate()?;
        Ok(layout)
    }

    /// Parse and validate a JSON layout.
    pub fn from_json(src: &str) -> Result<Self> {
        let layout: Self = serde_json::from_str(src)?;
        layout.validate()?;
        Ok(layout)
    }

    /// Load a layout file, choosing the format from its extension.
    pub fn load(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        let parse: fn(&str) -> Result<Self> = match ext.as_deref() {
            Some("toml") => Self::from_toml,
            Some("json") => Self::from_json,
            _ => {
                return Err(NavError::Layout(format!(
                    "unsupported layout format: {}",
                    path.display()
                )));
            },
        };
        let layout = parse(&std::fs::read_to_string(path)?)?;
        log::info!(
            "Loaded layout '{}' ({} cells) from {}",
            layout.name,
            layout.cells.len(),
            path.display()
        );
        Ok(layout)
    }

    fn validate(&self) -> Result<()> {
        if self.cells.is_empty() {
            return Err(NavError::Layout("layout has no cells".to_string()));
        }
        let mut seen = HashSet::new();
        for (index, def) in self.cells.iter().enumerate() {
            def.cell()
                .validate()
                .map_err(|reason| NavError::InvalidCell { index, reason })?;
            if let Some(id) = &def.id {
                if id.is_empty() {
                    return Err(NavError::Layout(format!("cell {index} has an empty id")));
                }
                if !seen.insert(id.as_str()) {
                    return Err(NavError::Layout(format!("duplicate cell id '{id}'")));
                }
            }
        }
        if self.initial >= self.cells.len() {
            return Err(NavError::InvalidSelection {
                index: self.initial,
                len: self.cells.len(),
            });
        }
        Ok(())
    }

    /// Geometry of every cell, index-for-index with the definitions.
    pub fn cells(&self) -> Vec<Cell> {
        self.cells.iter().map(CellDef::cell).collect()
    }

    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.cells
            .iter()
            .position(|def| def.id.as_deref() == Some(id))
    }

    pub fn id_of(&self, index: usize) -> Option<&str> {
        self.cells.get(index)?.id.as_deref()
    }
}

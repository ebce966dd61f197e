use serde::{Deserialize, Serialize};

use super::Cell;
use crate::Result;

/// A notebook document: an ordered list of cells plus the format version
/// the file declares.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Document {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nbformat: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nbformat_minor: Option<u32>,
    #[serde(default)]
    pub cells: Vec<Cell>,
}

impl Document {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_cells(cells: Vec<Cell>) -> Self {
        Self {
            nbformat: Some(4),
            nbformat_minor: None,
            cells,
        }
    }

    /// Cells paired with their 1-based position in the document.
    pub fn indexed_cells(&self) -> impl Iterator<Item = (usize, &Cell)> {
        self.cells.iter().enumerate().map(|(idx, cell)| (idx + 1, cell))
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_notebook() {
        let json = r##"{
            "nbformat": 4,
            "nbformat_minor": 5,
            "metadata": {"kernelspec": {"name": "python3"}},
            "cells": [
                {"cell_type": "markdown", "source": ["# Title"]},
                {"cell_type": "code", "source": [], "execution_count": 1, "outputs": []}
            ]
        }"##;
        let document = Document::from_json_str(json).unwrap();
        assert_eq!(document.nbformat, Some(4));
        assert_eq!(document.nbformat_minor, Some(5));
        assert_eq!(document.cell_count(), 2);
    }

    #[test]
    fn test_indexed_cells_are_one_based() {
        let document = Document::from_cells(vec![Cell::default(), Cell::default()]);
        let indices: Vec<_> = document.indexed_cells().map(|(idx, _)| idx).collect();
        assert_eq!(indices, vec![1, 2]);
    }

    #[test]
    fn test_invalid_json_is_parse_error() {
        let err = Document::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, crate::NotebookError::Parse(_)));
    }
}

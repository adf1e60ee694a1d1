//! Export boundary: the plain-data payload handed to the external export
//! collaborator (LaTeX/TikZ/MetaPost generation lives outside this crate).

use serde::Serialize;

use crate::canvas::DrawingObject;
use crate::editor::Editor;

/// Everything the export collaborator consumes: the non-guide shape list
/// plus the view flags. The core makes no assumptions about the output
/// dialect.
#[derive(Debug, Clone, Serialize)]
pub struct ExportRequest {
    pub shapes: Vec<DrawingObject>,
    pub show_axes: bool,
    pub show_grid: bool,
    pub export_nodes: bool,
}

impl ExportRequest {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl Editor {
    /// Builds the export payload. Guide shapes never leave the canvas.
    pub fn export_request(&self, export_nodes: bool) -> ExportRequest {
        ExportRequest {
            shapes: self
                .canvas
                .store
                .iter()
                .filter(|o| !o.guide)
                .cloned()
                .collect(),
            show_axes: self.show_axes,
            show_grid: self.show_grid,
            export_nodes,
        }
    }
}

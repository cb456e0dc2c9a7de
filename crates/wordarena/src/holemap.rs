//! Human-readable hole list.
//!
//! Renders a free-list view as `"[off, len] - [off, len] - …"`, one entry per
//! hole in view order. An empty free list renders as the empty string.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::ExportError;
use crate::view::FreeListView;

/// Separator between two hole entries.
pub const SEPARATOR: &str = " - ";

/// Render `view` as a hole map.
pub fn format(view: &FreeListView) -> String {
    let mut out = String::new();
    for (i, (offset, length)) in view.iter().enumerate() {
        if i > 0 {
            out.push_str(SEPARATOR);
        }
        out.push_str(&format!("[{offset}, {length}]"));
    }
    out
}

/// Write `hole_map` verbatim to `path`, truncating any existing file.
pub fn write_to(path: &Path, hole_map: &str) -> Result<(), ExportError> {
    let mut file = File::create(path)?;
    file.write_all(hole_map.as_bytes())?;
    file.flush()?;
    Ok(())
}

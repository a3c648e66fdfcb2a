//! On-disk preview surface.
//!
//! The escaped preview document is embedded in a host page inside a
//! sandboxed iframe's `srcdoc` attribute, so whatever the AI produced runs
//! isolated from everything else. The host page lives as a file from the
//! moment a reply arrives until the user dismisses it.

use std::error::Error;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// A preview surface written to disk. Dropping the value does not remove
/// the file; surfaces only go away on explicit dismissal.
#[derive(Debug)]
pub struct PreviewSurface {
    path: PathBuf,
}

impl PreviewSurface {
    /// Write a host page for an escaped preview document into `dir`.
    pub fn create(escaped_preview: &str, dir: &Path) -> Result<Self, Box<dyn Error>> {
        fs::create_dir_all(dir)?;
        let mut file = tempfile::Builder::new()
            .prefix("vitrine-preview-")
            .suffix(".html")
            .tempfile_in(dir)?;
        file.write_all(host_page(escaped_preview).as_bytes())?;
        let (_, path) = file.keep()?;
        Ok(PreviewSurface { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Remove the host page from disk.
    pub fn dismiss(self) -> io::Result<()> {
        fs::remove_file(&self.path)
    }
}

fn host_page(escaped_preview: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<title>vitrine preview</title>
<style>
    html, body {{ margin: 0; height: 100%; background: #242424; }}
    iframe {{ border: none; width: 100%; height: 100%; }}
</style>
</head>
<body>
<iframe srcdoc="{escaped_preview}" sandbox="allow-scripts"></iframe>
</body>
</html>"#
    )
}

//! Document selection and rendered page data.
//!
//! A [`DocumentRef`] is the handle the rest of the app passes around; it is
//! only ever created through [`open_document`], which accepts PDF files and
//! nothing else.

use anyhow::{Context, Result, bail};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::debug;

const PDF_MAGIC: &[u8] = b"%PDF-";

/// Handle to the currently selected file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentRef {
    path: PathBuf,
    generation: u64,
}

impl DocumentRef {
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Increases every time the user picks a file, even the same one again.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn display_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}

/// Validate `path` as a PDF and wrap it in a [`DocumentRef`].
pub fn open_document(path: &Path, generation: u64) -> Result<DocumentRef> {
    if path.as_os_str().is_empty() {
        bail!("no file selected");
    }
    if !path.exists() {
        bail!("file not found: {}", path.display());
    }
    if path.is_dir() {
        bail!("{} is a directory", path.display());
    }
    if !has_pdf_extension(path) {
        bail!("{} is not a PDF file", path.display());
    }

    let mut header = [0u8; PDF_MAGIC.len()];
    let mut file =
        File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    let read = file
        .read(&mut header)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    if read < PDF_MAGIC.len() || header != PDF_MAGIC {
        bail!("{} does not contain PDF data", path.display());
    }

    let path = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());
    debug!(path = %path.display(), generation, "Accepted PDF document");
    Ok(DocumentRef { path, generation })
}

fn has_pdf_extension(path: &Path) -> bool {
    matches!(
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase()),
        Some(ext) if ext == "pdf"
    )
}

/// Page size in PDF points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageSize {
    pub width_pt: f32,
    pub height_pt: f32,
}

/// Page sizes of an opened document, read without rasterizing anything.
#[derive(Debug, Clone, Default)]
pub struct DocumentLayout {
    pub pages: Vec<PageSize>,
}

/// One rasterized page in RGBA8.
#[derive(Debug, Clone)]
pub struct RenderedPage {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn scratch_file(name: &str, contents: &[u8]) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("pdf-autoscroll-doc-{}", std::process::id()));
        fs::create_dir_all(&dir).expect("create scratch dir");
        let path = dir.join(name);
        fs::write(&path, contents).expect("write scratch file");
        path
    }

    #[test]
    fn accepts_pdf_with_magic_header() {
        let path = scratch_file("ok.pdf", b"%PDF-1.7\n%fake body\n");
        let doc = open_document(&path, 3).expect("pdf accepted");
        assert_eq!(doc.generation(), 3);
        assert_eq!(doc.display_name(), "ok.pdf");
    }

    #[test]
    fn extension_check_is_case_insensitive() {
        let path = scratch_file("UPPER.PDF", b"%PDF-1.4\n");
        assert!(open_document(&path, 1).is_ok());
    }

    #[test]
    fn rejects_other_extensions() {
        let path = scratch_file("notes.txt", b"%PDF-1.4\n");
        let err = open_document(&path, 1).expect_err("txt rejected");
        assert!(err.to_string().contains("not a PDF"));
    }

    #[test]
    fn rejects_files_without_pdf_data() {
        let path = scratch_file("fake.pdf", b"<html></html>");
        assert!(open_document(&path, 1).is_err());
        let short = scratch_file("short.pdf", b"%PD");
        assert!(open_document(&short, 1).is_err());
    }

    #[test]
    fn rejects_empty_and_missing_paths() {
        assert!(open_document(Path::new(""), 1).is_err());
        let missing = std::env::temp_dir().join("pdf-autoscroll-definitely-missing.pdf");
        assert!(open_document(&missing, 1).is_err());
    }
}

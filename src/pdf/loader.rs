//! PDFium library loader.
//!
//! The library location is an explicit startup parameter. When the config
//! names a path only that path is tried; otherwise a short list of
//! conventional locations is searched before the system library.

use anyhow::{Context, Result, anyhow};
use pdfium_render::prelude::*;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub struct PdfiumLoader;

impl PdfiumLoader {
    /// Bind PDFium, honoring `configured` (a library file or the directory
    /// containing it) when present.
    pub fn load(configured: Option<&Path>) -> Result<Pdfium> {
        if let Some(path) = configured {
            let library = Self::library_file(path);
            let bindings = Pdfium::bind_to_library(&library)
                .map_err(|err| anyhow!("{err}"))
                .with_context(|| {
                    format!("Failed to load PDFium from configured path {}", library.display())
                })?;
            info!(path = %library.display(), "Bound PDFium from configured path");
            return Ok(Pdfium::new(bindings));
        }

        for candidate in Self::search_paths() {
            if !candidate.exists() {
                continue;
            }
            match Pdfium::bind_to_library(&candidate) {
                Ok(bindings) => {
                    info!(path = %candidate.display(), "Bound PDFium");
                    return Ok(Pdfium::new(bindings));
                }
                Err(err) => debug!(path = %candidate.display(), "Skipping PDFium candidate: {err}"),
            }
        }

        let bindings = Pdfium::bind_to_system_library().map_err(|err| {
            let lib_name = Pdfium::pdfium_platform_library_name();
            anyhow!(
                "{err}\n\nPDFium library not found. Install it system-wide, place {} next to the \
                 executable, or set pdfium.library_path in conf/config.toml.",
                lib_name.to_string_lossy()
            )
        })?;
        info!("Bound system PDFium library");
        Ok(Pdfium::new(bindings))
    }

    fn library_file(path: &Path) -> PathBuf {
        if path.is_dir() {
            Pdfium::pdfium_platform_library_name_at_path(path)
        } else {
            path.to_path_buf()
        }
    }

    fn search_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        if let Ok(exe) = std::env::current_exe()
            && let Some(dir) = exe.parent()
        {
            paths.push(Pdfium::pdfium_platform_library_name_at_path(dir));
            paths.push(Pdfium::pdfium_platform_library_name_at_path(&dir.join("lib")));
        }

        paths.push(Pdfium::pdfium_platform_library_name_at_path(Path::new("lib")));
        paths.push(Pdfium::pdfium_platform_library_name_at_path(Path::new(".")));
        paths
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configured_directory_resolves_to_library_file() {
        let dir = std::env::temp_dir();
        let file = PdfiumLoader::library_file(&dir);
        assert_eq!(file.parent(), Some(dir.as_path()));
        assert_eq!(
            file.file_name(),
            Some(Pdfium::pdfium_platform_library_name().as_os_str())
        );
    }

    #[test]
    fn configured_file_is_used_as_is() {
        let path = Path::new("/opt/pdfium/libpdfium.so");
        assert_eq!(PdfiumLoader::library_file(path), path.to_path_buf());
    }

    #[test]
    fn searches_working_directory_candidates() {
        let paths = PdfiumLoader::search_paths();
        assert!(paths.contains(&Pdfium::pdfium_platform_library_name_at_path(Path::new("lib"))));
    }
}

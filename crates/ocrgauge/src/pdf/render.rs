//! PDF page rendering for OCR input.

use std::path::{Path, PathBuf};
use std::process::Command;

use super::error::PdfError;

/// Render every page of a PDF to a PNG image via `pdftoppm`.
///
/// Images land in `out_dir` as `page-NN.png` and are returned in page
/// order. pdftoppm zero-pads the page counter, so lexicographic order of
/// the generated names is page order.
pub fn render_pages(path: &Path, dpi: u32, out_dir: &Path) -> Result<Vec<PathBuf>, PdfError> {
    let dpi_str = dpi.to_string();
    let prefix = out_dir.join("page");

    let status = Command::new("pdftoppm")
        .args(["-png", "-r", &dpi_str])
        .arg(path)
        .arg(&prefix)
        .status();

    match status {
        Ok(s) if s.success() => collect_page_images(out_dir, path),
        Ok(_) => Err(PdfError::RenderFailed(format!(
            "pdftoppm failed to convert {}",
            path.display()
        ))),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(PdfError::ToolNotFound(
            "pdftoppm not found (install poppler-utils)".to_string(),
        )),
        Err(e) => Err(PdfError::IoError(e.to_string())),
    }
}

fn collect_page_images(out_dir: &Path, source: &Path) -> Result<Vec<PathBuf>, PdfError> {
    let entries = std::fs::read_dir(out_dir).map_err(|e| PdfError::IoError(e.to_string()))?;

    let mut images: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|p| {
            p.extension().is_some_and(|ext| ext == "png")
                && p.file_name()
                    .and_then(|name| name.to_str())
                    .is_some_and(|name| name.starts_with("page-"))
        })
        .collect();
    images.sort();

    if images.is_empty() {
        return Err(PdfError::RenderFailed(format!(
            "no pages rendered for {}",
            source.display()
        )));
    }
    Ok(images)
}

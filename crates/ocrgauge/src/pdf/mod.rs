//! PDF collaborators: text-layer extraction and page rendering.
//!
//! Both shell out to poppler-utils (`pdftotext`, `pdftoppm`) and treat the
//! calls as atomic: a value comes back or a typed error does. Retries belong
//! to the caller.

pub mod error;
pub mod render;
pub mod text;

pub use error::PdfError;
pub use render::render_pages;
pub use text::extract_text;

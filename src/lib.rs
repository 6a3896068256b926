//! Bilingual travel-registration PDFs.
//!
//! Takes one completed registration record plus optional photographed
//! documents and produces a paginated A4 PDF. Portuguese is always the
//! primary language; when the active language differs, every title and
//! label gets a second stacked line in that language.
//!
//! The host supplies the label dictionaries and country names through the
//! [`Labels`] and [`CountryNames`] traits; the renderer only looks keys up
//! and falls back to the key text when a translation is missing.

mod error;
mod filename;
mod fonts;
mod i18n;
mod model;
mod pdf;

use std::time::Instant;

pub use error::Error;
pub use filename::{canonicalize, derive_filename};
pub use i18n::{CountryNames, Labels, MapCountries, MapLabels, PRIMARY_LANGUAGE};
pub use model::{
    Attachment, DocumentKind, FormRecord, GeneratedPdf, PurposeOfStay, Sex, TravelDocumentType,
};

/// Render a registration record into a finished PDF.
///
/// Empty record fields are skipped, never rendered as blanks. Attachments
/// are placed strictly in input order; an image that fails to decode leaves
/// an inline error marker and the rest of the document still renders.
pub fn generate(
    record: &FormRecord,
    attachments: &[Attachment],
    language: &str,
    labels: &impl Labels,
    countries: &impl CountryNames,
) -> GeneratedPdf {
    let t0 = Instant::now();

    let (bytes, pages) = pdf::render(record, attachments, language, labels, countries);
    let t_render = t0.elapsed();

    let filename = filename::derive_filename(record);

    log::info!(
        "Timing: render={:.1}ms (output {} bytes, {} pages, {filename})",
        t_render.as_secs_f64() * 1000.0,
        bytes.len(),
        pages,
    );
    GeneratedPdf {
        bytes,
        filename,
        pages,
    }
}

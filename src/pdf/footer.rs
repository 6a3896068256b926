//! Footer pass: runs after layout, once the total page count is known.

use chrono::Local;
use pdf_writer::Content;

use crate::fonts::Fonts;
use crate::i18n::{Labels, PRIMARY_LANGUAGE};
use crate::pdf::flow::{Align, FOOTER_GRAY, PAGE_HEIGHT, PAGE_WIDTH, draw_text};

/// Printed in the footer as the document origin.
pub(crate) const SOURCE_REFERENCE: &str = "https://registo.pt";

/// Stamp every page with a centered footer line, and the last page with a
/// generation timestamp above it.
pub(crate) fn stamp_footers(pages: &mut [Content], fonts: &Fonts, language: &str, labels: &dyn Labels) {
    let total = pages.len();
    for (index, content) in pages.iter_mut().enumerate() {
        let line = format!(
            "{} {} | {} {} / {}",
            labels.active("generatedBy"),
            SOURCE_REFERENCE,
            labels.active("pdfPage"),
            index + 1,
            total,
        );
        draw_text(
            content,
            &fonts.regular,
            8.0,
            FOOTER_GRAY,
            PAGE_WIDTH / 2.0,
            PAGE_HEIGHT - 10.0,
            Align::Center,
            &line,
        );
    }

    if let Some(last) = pages.last_mut() {
        let timestamp = Local::now().format("%d/%m/%Y, %H:%M:%S");
        let label = if language == PRIMARY_LANGUAGE {
            labels.primary("pdfGenerated")
        } else {
            format!(
                "{} / {}",
                labels.primary("pdfGenerated"),
                labels.active("pdfGenerated")
            )
        };
        draw_text(
            last,
            &fonts.regular,
            8.0,
            FOOTER_GRAY,
            PAGE_WIDTH / 2.0,
            PAGE_HEIGHT - 15.0,
            Align::Center,
            &format!("{label}: {timestamp}"),
        );
    }
}

//! Layout and PDF assembly.
//!
//! Layout runs in millimetres on an A4 page with a single downward cursor;
//! coordinates become PDF points only when operators are emitted. Assembly
//! deflates the finished content streams and wires up the page tree.

mod attach;
mod flow;
mod footer;
mod section;

use miniz_oxide::deflate::compress_to_vec_zlib;
use pdf_writer::{Filter, Finish, Name, Pdf, Rect, Ref};

use crate::fonts::register_builtin_fonts;
use crate::i18n::{CountryNames, Labels, PRIMARY_LANGUAGE};
use crate::model::{Attachment, FormRecord};
use flow::{ACCENT, Align, MM_TO_PT, MUTED, PAGE_HEIGHT, PAGE_WIDTH, PageFlow};

/// Lay out the whole document and return the serialized PDF plus its page
/// count. Attachment decode failures are recovered inline and never abort.
pub(crate) fn render(
    record: &FormRecord,
    attachments: &[Attachment],
    language: &str,
    labels: &dyn Labels,
    countries: &dyn CountryNames,
) -> (Vec<u8>, usize) {
    let mut pdf = Pdf::new();
    let mut next_id = 1;
    let mut alloc = || {
        let r = Ref::new(next_id);
        next_id += 1;
        r
    };
    let catalog_id = alloc();
    let page_tree_id = alloc();
    let fonts = register_builtin_fonts(&mut pdf, &mut alloc);

    let bilingual = language != PRIMARY_LANGUAGE;
    let mut flow = PageFlow::new();

    flow.text(
        &fonts.regular,
        16.0,
        ACCENT,
        PAGE_WIDTH / 2.0,
        Align::Center,
        &labels.primary("pdfTitle"),
    );
    if bilingual {
        flow.advance(6.0);
        flow.text(
            &fonts.regular,
            12.0,
            MUTED,
            PAGE_WIDTH / 2.0,
            Align::Center,
            &labels.active("pdfTitle"),
        );
    }
    flow.advance(10.0);

    for section in section::build_sections(record, language, labels, countries) {
        section::render_section(&mut flow, &fonts, &section, language, labels);
    }

    let mut xobjects: Vec<(String, Ref)> = Vec::new();
    if !attachments.is_empty() {
        attach::render_attachments(
            &mut flow,
            &mut pdf,
            &mut alloc,
            &mut xobjects,
            &fonts,
            attachments,
            language,
            labels,
        );
    }

    let mut contents = flow.into_pages();
    footer::stamp_footers(&mut contents, &fonts, language, labels);
    let page_count = contents.len();
    let page_ids: Vec<Ref> = (0..page_count).map(|_| alloc()).collect();

    pdf.catalog(catalog_id).pages(page_tree_id);
    pdf.pages(page_tree_id)
        .kids(page_ids.iter().copied())
        .count(page_count as i32);

    for (content, &page_id) in contents.into_iter().zip(&page_ids) {
        let content_id = alloc();
        let mut page = pdf.page(page_id);
        page.media_box(Rect::new(
            0.0,
            0.0,
            PAGE_WIDTH * MM_TO_PT,
            PAGE_HEIGHT * MM_TO_PT,
        ));
        page.parent(page_tree_id);
        page.contents(content_id);

        let mut resources = page.resources();
        let mut font_dict = resources.fonts();
        font_dict.pair(
            Name(fonts.regular.pdf_name.as_bytes()),
            fonts.regular.font_ref,
        );
        font_dict.pair(Name(fonts.bold.pdf_name.as_bytes()), fonts.bold.font_ref);
        font_dict.finish();
        if !xobjects.is_empty() {
            let mut xobject_dict = resources.x_objects();
            for (name, xobject_ref) in &xobjects {
                xobject_dict.pair(Name(name.as_bytes()), *xobject_ref);
            }
        }
        resources.finish();
        page.finish();

        let deflated = compress_to_vec_zlib(&content.finish(), 6);
        pdf.stream(content_id, &deflated).filter(Filter::FlateDecode);
    }

    (pdf.finish(), page_count)
}

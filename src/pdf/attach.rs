//! Attached document photos: decode, embed as image XObjects, place inline.

use std::io::Cursor;

use image::{ImageFormat, ImageReader};
use miniz_oxide::deflate::compress_to_vec_zlib;
use pdf_writer::{Filter, Pdf, Ref};

use crate::fonts::Fonts;
use crate::i18n::{Labels, PRIMARY_LANGUAGE};
use crate::model::Attachment;
use crate::pdf::flow::{
    ACCENT, Align, BLACK, CONTENT_WIDTH, ERROR_RED, MARGIN, MUTED, PAGE_WIDTH, PageFlow,
    draw_image,
};

pub(crate) const MAX_IMAGE_WIDTH: f32 = CONTENT_WIDTH;
pub(crate) const MAX_IMAGE_HEIGHT: f32 = 100.0;

/// Scale natural pixel dimensions into the display box, preserving aspect
/// ratio. Whichever axis overflows its limit by the larger factor binds;
/// images smaller than the box are scaled up.
pub(crate) fn fit_image(natural_w: u32, natural_h: u32, max_w: f32, max_h: f32) -> (f32, f32) {
    let nw = natural_w as f32;
    let nh = natural_h as f32;
    if nw / max_w > nh / max_h {
        (max_w, max_w * nh / nw)
    } else {
        (max_h * nw / nh, max_h)
    }
}

/// Render the attachments block: a section-style heading followed by one
/// labelled image per attachment, strictly in input order. Each image is
/// decoded before the next is placed since every cursor position depends on
/// the heights that came before it. Returns the number of failed decodes.
pub(crate) fn render_attachments(
    flow: &mut PageFlow,
    pdf: &mut Pdf,
    alloc: &mut dyn FnMut() -> Ref,
    xobjects: &mut Vec<(String, Ref)>,
    fonts: &Fonts,
    attachments: &[Attachment],
    language: &str,
    labels: &dyn Labels,
) -> usize {
    let bilingual = language != PRIMARY_LANGUAGE;

    flow.advance(10.0);
    flow.reserve(40.0);
    flow.text(
        &fonts.regular,
        12.0,
        ACCENT,
        MARGIN,
        Align::Left,
        &labels.primary("attachedDocuments"),
    );
    if bilingual {
        flow.advance(5.0);
        flow.text(
            &fonts.regular,
            10.0,
            MUTED,
            MARGIN,
            Align::Left,
            &labels.active("attachedDocuments"),
        );
    }
    flow.advance(2.0);
    flow.rule(MARGIN, PAGE_WIDTH - MARGIN, ACCENT);
    flow.advance(8.0);

    let mut failures = 0;
    for (index, attachment) in attachments.iter().enumerate() {
        if !render_attachment(flow, pdf, alloc, xobjects, fonts, attachment, index, labels) {
            failures += 1;
        }
    }
    failures
}

/// Place one attachment. A decode failure never aborts the document: the
/// slot gets an inline error marker and the flow continues.
fn render_attachment(
    flow: &mut PageFlow,
    pdf: &mut Pdf,
    alloc: &mut dyn FnMut() -> Ref,
    xobjects: &mut Vec<(String, Ref)>,
    fonts: &Fonts,
    attachment: &Attachment,
    index: usize,
    labels: &dyn Labels,
) -> bool {
    flow.reserve(120.0);

    let label = labels.active(attachment.kind.label_key());
    flow.text(
        &fonts.regular,
        10.0,
        BLACK,
        MARGIN,
        Align::Left,
        &format!("{label}:"),
    );
    flow.advance(5.0);

    match embed_image(pdf, alloc, index, &attachment.data) {
        Ok((name, xobject_ref, width, height)) => {
            let (display_w, display_h) =
                fit_image(width, height, MAX_IMAGE_WIDTH, MAX_IMAGE_HEIGHT);
            let y = flow.y;
            draw_image(flow.content(), &name, MARGIN, y, display_w, display_h);
            xobjects.push((name, xobject_ref));
            flow.advance(display_h + 10.0);
            true
        }
        Err(err) => {
            log::warn!("attachment {} failed to decode: {err}", index + 1);
            flow.text(
                &fonts.regular,
                10.0,
                ERROR_RED,
                MARGIN,
                Align::Left,
                "Error loading image",
            );
            flow.advance(10.0);
            false
        }
    }
}

/// Write one image XObject. JPEG data passes straight through under a
/// DctDecode filter; everything else is decoded, flattened to RGB and
/// deflated, with a grayscale SMask when the source carries alpha.
fn embed_image(
    pdf: &mut Pdf,
    alloc: &mut dyn FnMut() -> Ref,
    index: usize,
    data: &[u8],
) -> image::ImageResult<(String, Ref, u32, u32)> {
    let reader = ImageReader::new(Cursor::new(data))
        .with_guessed_format()
        .map_err(image::ImageError::IoError)?;
    let format = reader.format();
    let decoded = reader.decode()?;
    let (width, height) = (decoded.width(), decoded.height());

    let xobject_ref = alloc();
    let name = format!("Im{}", index + 1);

    if format == Some(ImageFormat::Jpeg) {
        let mut xobject = pdf.image_xobject(xobject_ref, data);
        xobject.filter(Filter::DctDecode);
        xobject.width(width as i32);
        xobject.height(height as i32);
        xobject.color_space().device_rgb();
        xobject.bits_per_component(8);
    } else {
        let rgba = decoded.to_rgba8();
        let mut rgb = Vec::with_capacity((width * height * 3) as usize);
        let mut alpha = Vec::with_capacity((width * height) as usize);
        let mut has_alpha = false;
        for pixel in rgba.pixels() {
            rgb.extend_from_slice(&pixel.0[..3]);
            alpha.push(pixel.0[3]);
            if pixel.0[3] != 255 {
                has_alpha = true;
            }
        }

        let smask_ref = if has_alpha { Some(alloc()) } else { None };
        let compressed = compress_to_vec_zlib(&rgb, 6);
        let mut xobject = pdf.image_xobject(xobject_ref, &compressed);
        xobject.filter(Filter::FlateDecode);
        xobject.width(width as i32);
        xobject.height(height as i32);
        xobject.color_space().device_rgb();
        xobject.bits_per_component(8);
        if let Some(smask_ref) = smask_ref {
            xobject.s_mask(smask_ref);
            drop(xobject);

            let compressed_alpha = compress_to_vec_zlib(&alpha, 6);
            let mut smask = pdf.image_xobject(smask_ref, &compressed_alpha);
            smask.filter(Filter::FlateDecode);
            smask.width(width as i32);
            smask.height(height as i32);
            smask.color_space().device_gray();
            smask.bits_per_component(8);
        }
    }

    Ok((name, xobject_ref, width, height))
}

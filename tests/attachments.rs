mod common;

use common::{content_streams, find_subsequence, jpeg_bytes, png_bytes, sample_record};
use registo_pdf::{Attachment, DocumentKind, MapCountries, MapLabels, generate};

#[test]
fn attachments_flow_across_pages_with_a_footer_on_each() {
    let attachments: Vec<Attachment> = (0..3)
        .map(|_| Attachment {
            data: png_bytes(400, 300),
            kind: DocumentKind::PassportPage,
        })
        .collect();
    let doc = generate(
        &sample_record(),
        &attachments,
        "pt",
        &MapLabels::default(),
        &MapCountries::default(),
    );
    assert!(doc.pages >= 2);

    let streams = content_streams(&doc.bytes);
    assert_eq!(streams.len(), doc.pages);
    for (index, page) in streams.iter().enumerate() {
        assert!(page.contains(&format!("pdfPage {} / {}", index + 1, doc.pages)));
    }

    // The generation stamp appears once, on the last page only.
    let stamped: Vec<bool> = streams.iter().map(|s| s.contains("pdfGenerated")).collect();
    assert_eq!(stamped.iter().filter(|&&s| s).count(), 1);
    assert_eq!(stamped.last(), Some(&true));

    // All three images are registered as page resources.
    for name in ["/Im1", "/Im2", "/Im3"] {
        assert!(find_subsequence(&doc.bytes, name.as_bytes()).is_some());
    }
}

#[test]
fn attachment_labels_precede_their_images() {
    let attachments = vec![Attachment {
        data: png_bytes(200, 100),
        kind: DocumentKind::Visa,
    }];
    let mut labels = MapLabels::default();
    labels.active.insert("visa".into(), "Visa page".into());

    let doc = generate(
        &sample_record(),
        &attachments,
        "en",
        &labels,
        &MapCountries::default(),
    );
    let text = content_streams(&doc.bytes).concat();
    assert!(text.contains("(attachedDocuments)"));
    assert!(text.contains("(Visa page:)"));
    assert!(text.contains("/Im1 Do"));
}

#[test]
fn jpeg_data_is_embedded_without_recompression() {
    let jpeg = jpeg_bytes(320, 240);
    let attachments = vec![Attachment {
        data: jpeg.clone(),
        kind: DocumentKind::IdFront,
    }];
    let doc = generate(
        &sample_record(),
        &attachments,
        "pt",
        &MapLabels::default(),
        &MapCountries::default(),
    );
    assert!(find_subsequence(&doc.bytes, b"/DCTDecode").is_some());
    assert!(find_subsequence(&doc.bytes, &jpeg).is_some());
}

#[test]
fn a_broken_attachment_leaves_a_marker_and_the_rest_still_renders() {
    let attachments = vec![
        Attachment {
            data: b"definitely not an image".to_vec(),
            kind: DocumentKind::IdFront,
        },
        Attachment {
            data: png_bytes(200, 100),
            kind: DocumentKind::IdBack,
        },
    ];
    let doc = generate(
        &sample_record(),
        &attachments,
        "pt",
        &MapLabels::default(),
        &MapCountries::default(),
    );
    let text = content_streams(&doc.bytes).concat();
    assert!(text.contains("(Error loading image)"));
    // The failed slot allocates no image; the good one is still placed.
    assert!(find_subsequence(&doc.bytes, b"/Im1").is_none());
    assert!(text.contains("/Im2 Do"));
}

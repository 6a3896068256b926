#![allow(dead_code)]

use std::io::Cursor;

use registo_pdf::FormRecord;

/// A record with every section populated, in raw form-value shape.
pub fn sample_record() -> FormRecord {
    FormRecord {
        first_name: "Maria".into(),
        last_name: "Silva".into(),
        sex: "female".into(),
        date_of_birth: "1990-04-12".into(),
        place_of_birth: "Braga".into(),
        country_of_birth: "PT".into(),
        nationality: "PT".into(),
        document_type: "passport".into(),
        document_number: "P123456".into(),
        issuing_country: "PT".into(),
        issue_date: "2020-01-15".into(),
        expiry_date: "2030-01-15".into(),
        date_of_entry: "2025-06-01".into(),
        country_of_origin: "ES".into(),
        purpose_of_stay: "tourism".into(),
        intended_destination: "Lisboa".into(),
        accommodation_name: "Casa do Rio".into(),
        address: "Rua das Flores 12".into(),
        postal_code: "4000-123".into(),
        city: "Porto".into(),
        checkin_date: "2025-06-01".into(),
        checkout_date: "2025-06-08".into(),
        phone: "+351 912 345 678".into(),
        email: "maria@example.com".into(),
    }
}

pub fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let img = image::RgbImage::from_pixel(width, height, image::Rgb([120, 30, 30]));
    let mut out = Vec::new();
    img.write_to(&mut Cursor::new(&mut out), image::ImageFormat::Png)
        .unwrap();
    out
}

pub fn jpeg_bytes(width: u32, height: u32) -> Vec<u8> {
    let img = image::RgbImage::from_pixel(width, height, image::Rgb([30, 90, 160]));
    let mut out = Vec::new();
    img.write_to(&mut Cursor::new(&mut out), image::ImageFormat::Jpeg)
        .unwrap();
    out
}

pub fn find_subsequence(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}

/// Inflate and return the page content streams in file order. Streams that
/// are not zlib data (raw JPEG) or not text operators (image pixels) are
/// skipped.
pub fn content_streams(pdf: &[u8]) -> Vec<String> {
    let marker = b"stream\n";
    let mut streams = Vec::new();
    let mut pos = 0;
    while let Some(found) = find_subsequence(&pdf[pos..], marker) {
        let match_start = pos + found;
        // Skip the tail of "endstream".
        if match_start >= 3 && &pdf[match_start - 3..match_start] == b"end" {
            pos = match_start + marker.len();
            continue;
        }
        let data_start = match_start + marker.len();
        let Some(end) = find_subsequence(&pdf[data_start..], b"endstream") else {
            break;
        };
        let mut data = &pdf[data_start..data_start + end];
        if let [rest @ .., b'\n'] = data {
            data = rest;
        }
        if let Ok(inflated) = miniz_oxide::inflate::decompress_to_vec_zlib(data) {
            let text = String::from_utf8_lossy(&inflated).into_owned();
            if text.contains("BT") {
                streams.push(text);
            }
        }
        pos = data_start + end + b"endstream".len();
    }
    streams
}

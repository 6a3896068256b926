use pdf_writer::{Name, Pdf, Ref};

/// A registered base-14 font: PDF resource name, object ref, and approximate
/// glyph widths used for word wrapping and centered text.
pub(crate) struct FontEntry {
    pub(crate) pdf_name: &'static str,
    pub(crate) font_ref: Ref,
    widths_1000: Vec<f32>,
}

impl FontEntry {
    /// Width of a string in points at the given font size. Characters outside
    /// WinAnsi are dropped from the measurement, matching what gets drawn.
    pub(crate) fn text_width(&self, text: &str, font_size: f32) -> f32 {
        to_winansi_bytes(text)
            .iter()
            .filter(|&&b| b >= 32)
            .map(|&b| self.widths_1000[(b - 32) as usize] * font_size / 1000.0)
            .sum()
    }
}

/// The two faces the document uses: Helvetica for values and secondary
/// labels, Helvetica-Bold for primary field labels.
pub(crate) struct Fonts {
    pub(crate) regular: FontEntry,
    pub(crate) bold: FontEntry,
}

pub(crate) fn register_builtin_fonts(pdf: &mut Pdf, alloc: &mut impl FnMut() -> Ref) -> Fonts {
    let regular_ref = alloc();
    pdf.type1_font(regular_ref)
        .base_font(Name(b"Helvetica"))
        .encoding_predefined(Name(b"WinAnsiEncoding"));
    let bold_ref = alloc();
    pdf.type1_font(bold_ref)
        .base_font(Name(b"Helvetica-Bold"))
        .encoding_predefined(Name(b"WinAnsiEncoding"));

    Fonts {
        regular: FontEntry {
            pdf_name: "F1",
            font_ref: regular_ref,
            widths_1000: helvetica_widths(),
        },
        bold: FontEntry {
            pdf_name: "F2",
            font_ref: bold_ref,
            // Bold metrics are close enough to regular for wrap decisions;
            // labels are never wrapped, only measured for overflow checks.
            widths_1000: helvetica_widths(),
        },
    }
}

/// Map a single Unicode char to its WinAnsi (Windows-1252) byte, or 0 if
/// unmappable. Latin-1 covers all Portuguese diacritics.
fn char_to_winansi(c: char) -> u8 {
    match c as u32 {
        0x0020..=0x007F => c as u8,
        0x00A0..=0x00FF => c as u8,
        0x20AC => 0x80,
        0x201A => 0x82,
        0x0192 => 0x83,
        0x201E => 0x84,
        0x2026 => 0x85,
        0x2020 => 0x86,
        0x2021 => 0x87,
        0x02C6 => 0x88,
        0x2030 => 0x89,
        0x0160 => 0x8A,
        0x2039 => 0x8B,
        0x0152 => 0x8C,
        0x017D => 0x8E,
        0x2018 => 0x91,
        0x2019 => 0x92,
        0x201C => 0x93,
        0x201D => 0x94,
        0x2022 => 0x95,
        0x2013 => 0x96,
        0x2014 => 0x97,
        0x02DC => 0x98,
        0x2122 => 0x99,
        0x0161 => 0x9A,
        0x203A => 0x9B,
        0x0153 => 0x9C,
        0x017E => 0x9E,
        0x0178 => 0x9F,
        _ => 0,
    }
}

/// Convert a UTF-8 string to WinAnsi bytes for PDF Str encoding. Unmappable
/// characters are dropped.
pub(crate) fn to_winansi_bytes(s: &str) -> Vec<u8> {
    s.chars()
        .map(char_to_winansi)
        .filter(|&b| b != 0)
        .collect()
}

/// Approximate Helvetica widths at 1000 units/em for WinAnsi chars 32..=255.
fn helvetica_widths() -> Vec<f32> {
    (32u8..=255u8)
        .map(|b| match b {
            32 => 278.0,                          // space
            33..=47 => 333.0,                     // punctuation
            48..=57 => 556.0,                     // digits
            58..=64 => 333.0,                     // more punctuation
            73 | 74 => 278.0,                     // I J (narrow uppercase)
            77 => 833.0,                          // M (wide)
            65..=90 => 667.0,                     // uppercase A-Z (average)
            91..=96 => 333.0,                     // brackets etc.
            102 | 105 | 106 | 108 | 116 => 278.0, // narrow lowercase: f i j l t
            109 | 119 => 833.0,                   // m w (wide)
            97..=122 => 556.0,                    // lowercase a-z (average)
            _ => 556.0,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn winansi_keeps_portuguese_diacritics() {
        assert_eq!(to_winansi_bytes("São João"), b"S\xe3o Jo\xe3o".to_vec());
    }

    #[test]
    fn winansi_drops_unmappable_chars() {
        assert_eq!(to_winansi_bytes("a\u{4e16}b"), b"ab".to_vec());
    }

    #[test]
    fn wider_strings_measure_wider() {
        let entry = FontEntry {
            pdf_name: "F1",
            font_ref: Ref::new(1),
            widths_1000: helvetica_widths(),
        };
        let short = entry.text_width("ab", 9.0);
        let long = entry.text_width("abcdef", 9.0);
        assert!(long > short);
        assert!(short > 0.0);
    }
}

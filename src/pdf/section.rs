//! Field sections: the five fixed blocks of label/value rows.

use crate::fonts::{FontEntry, Fonts};
use crate::i18n::{CountryNames, Labels, PRIMARY_LANGUAGE};
use crate::model::{FormRecord, PurposeOfStay, Sex, TravelDocumentType};
use crate::pdf::flow::{
    ACCENT, Align, BLACK, CONTENT_WIDTH, MARGIN, MM_TO_PT, MUTED, PAGE_WIDTH, PageFlow,
};

/// Label column width; values start after it plus a small gap.
const LABEL_COL_WIDTH: f32 = 55.0;
const COL_GAP: f32 = 5.0;
const VALUE_COL_X: f32 = MARGIN + LABEL_COL_WIDTH + COL_GAP;
const VALUE_COL_WIDTH: f32 = CONTENT_WIDTH - LABEL_COL_WIDTH - COL_GAP;

/// Line height for wrapped value text.
const VALUE_LINE_HEIGHT: f32 = 4.0;

pub(crate) struct Section {
    pub(crate) title_key: &'static str,
    /// Label key and already-formatted display value, in row order.
    pub(crate) fields: Vec<(&'static str, String)>,
}

/// Assemble the fixed sections from a record. Values are formatted here
/// (dates, country names, choice labels); rendering only places text.
///
/// The contact section is included only when at least one of its fields
/// is set, so its title never appears above an empty block.
pub(crate) fn build_sections(
    record: &FormRecord,
    language: &str,
    labels: &dyn Labels,
    countries: &dyn CountryNames,
) -> Vec<Section> {
    let mut sections = vec![
        Section {
            title_key: "personalInfo",
            fields: vec![
                ("firstName", record.first_name.clone()),
                ("lastName", record.last_name.clone()),
                (
                    "sex",
                    choice_value(
                        &record.sex,
                        Sex::from_raw(&record.sex).map(Sex::label_key),
                        language,
                        labels,
                    ),
                ),
                ("dateOfBirth", format_date(&record.date_of_birth)),
                ("placeOfBirth", record.place_of_birth.clone()),
                (
                    "countryOfBirth",
                    countries.name(&record.country_of_birth),
                ),
                ("nationality", countries.name(&record.nationality)),
            ],
        },
        Section {
            title_key: "travelDocument",
            fields: vec![
                (
                    "documentType",
                    choice_value(
                        &record.document_type,
                        TravelDocumentType::from_raw(&record.document_type)
                            .map(TravelDocumentType::label_key),
                        language,
                        labels,
                    ),
                ),
                ("documentNumber", record.document_number.clone()),
                ("issuingCountry", countries.name(&record.issuing_country)),
                ("issueDate", format_date(&record.issue_date)),
                ("expiryDate", format_date(&record.expiry_date)),
            ],
        },
        Section {
            title_key: "travelDetails",
            fields: vec![
                ("dateOfEntry", format_date(&record.date_of_entry)),
                (
                    "countryOfOrigin",
                    countries.name(&record.country_of_origin),
                ),
                (
                    "purposeOfStay",
                    choice_value(
                        &record.purpose_of_stay,
                        PurposeOfStay::from_raw(&record.purpose_of_stay)
                            .map(PurposeOfStay::label_key),
                        language,
                        labels,
                    ),
                ),
                (
                    "intendedDestination",
                    record.intended_destination.clone(),
                ),
            ],
        },
        Section {
            title_key: "accommodation",
            fields: vec![
                ("accommodationName", record.accommodation_name.clone()),
                ("address", record.address.clone()),
                ("postalCode", record.postal_code.clone()),
                ("city", record.city.clone()),
                ("checkinDate", format_date(&record.checkin_date)),
                ("checkoutDate", format_date(&record.checkout_date)),
            ],
        },
    ];

    if !record.phone.is_empty() || !record.email.is_empty() {
        sections.push(Section {
            title_key: "contactInfo",
            fields: vec![
                ("phone", record.phone.clone()),
                ("email", record.email.clone()),
            ],
        });
    }

    sections
}

/// Reformat an ISO `YYYY-MM-DD` form value as `DD/MM/YYYY`. Anything that
/// does not parse renders as empty and the row is skipped.
pub(crate) fn format_date(raw: &str) -> String {
    chrono::NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map(|d| d.format("%d/%m/%Y").to_string())
        .unwrap_or_default()
}

/// Display value for a closed-choice field. Recognised raw values map to a
/// label key; unrecognised non-empty values pass through as their own key
/// (legacy records keep rendering). In a bilingual document the value shows
/// both languages as `primary / active`.
fn choice_value(
    raw: &str,
    label_key: Option<&'static str>,
    language: &str,
    labels: &dyn Labels,
) -> String {
    if raw.is_empty() {
        return String::new();
    }
    let key = label_key.unwrap_or(raw);
    if language == PRIMARY_LANGUAGE {
        labels.primary(key)
    } else {
        format!("{} / {}", labels.primary(key), labels.active(key))
    }
}

/// Render one section: title block, horizontal rule, then one row per
/// non-empty field. Row heights and offsets double up in bilingual mode to
/// make room for the stacked secondary label.
pub(crate) fn render_section(
    flow: &mut PageFlow,
    fonts: &Fonts,
    section: &Section,
    language: &str,
    labels: &dyn Labels,
) {
    let bilingual = language != PRIMARY_LANGUAGE;

    // Keep the title block and at least one row together.
    flow.reserve(30.0);

    flow.text(
        &fonts.regular,
        12.0,
        ACCENT,
        MARGIN,
        Align::Left,
        &labels.primary(section.title_key),
    );
    if bilingual {
        flow.advance(5.0);
        flow.text(
            &fonts.regular,
            10.0,
            MUTED,
            MARGIN,
            Align::Left,
            &labels.active(section.title_key),
        );
    }
    flow.advance(2.0);
    flow.rule(MARGIN, PAGE_WIDTH - MARGIN, ACCENT);
    flow.advance(6.0);

    for (label_key, value) in &section.fields {
        if value.is_empty() {
            continue;
        }
        let row_height = if bilingual { 12.0 } else { 8.0 };
        flow.reserve(row_height);

        let start_y = flow.y;
        flow.text(
            &fonts.bold,
            9.0,
            ACCENT,
            MARGIN,
            Align::Left,
            &labels.primary(label_key),
        );
        if bilingual {
            flow.advance(4.0);
            flow.text(
                &fonts.regular,
                9.0,
                MUTED,
                MARGIN,
                Align::Left,
                &labels.active(label_key),
            );
        }

        // The value column starts level with the primary label and may wrap
        // past the label block; the cursor lands under whichever is taller.
        let lines = wrap_text(value, &fonts.regular, 9.0, VALUE_COL_WIDTH);
        let mut value_y = start_y;
        for line in &lines {
            crate::pdf::flow::draw_text(
                flow.content(),
                &fonts.regular,
                9.0,
                BLACK,
                VALUE_COL_X,
                value_y,
                Align::Left,
                line,
            );
            value_y += VALUE_LINE_HEIGHT;
        }
        flow.y = flow.y.max(value_y - VALUE_LINE_HEIGHT) + 5.0;
    }

    flow.advance(3.0);
}

/// Greedy word wrap against the approximate font metrics. Words wider than
/// the column on their own are hard-broken by character.
pub(crate) fn wrap_text(
    text: &str,
    font: &FontEntry,
    font_size: f32,
    max_width: f32,
) -> Vec<String> {
    let max_pt = max_width * MM_TO_PT;
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        for fragment in split_oversized(word, font, font_size, max_pt) {
            let candidate = if current.is_empty() {
                fragment.clone()
            } else {
                format!("{current} {fragment}")
            };
            if !current.is_empty() && font.text_width(&candidate, font_size) > max_pt {
                lines.push(std::mem::take(&mut current));
                current = fragment;
            } else {
                current = candidate;
            }
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

fn split_oversized(word: &str, font: &FontEntry, font_size: f32, max_pt: f32) -> Vec<String> {
    if font.text_width(word, font_size) <= max_pt {
        return vec![word.to_string()];
    }
    let mut fragments = Vec::new();
    let mut piece = String::new();
    for c in word.chars() {
        piece.push(c);
        if font.text_width(&piece, font_size) > max_pt && piece.chars().count() > 1 {
            piece.pop();
            fragments.push(std::mem::take(&mut piece));
            piece.push(c);
        }
    }
    if !piece.is_empty() {
        fragments.push(piece);
    }
    fragments
}

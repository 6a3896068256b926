//! Download filename derivation: `{checkin}-{place}-{name}.pdf`.

use chrono::Local;

use crate::model::FormRecord;

/// Reduce free text to a short filesystem-safe slug: lowercase, then keep
/// only ASCII letters and digits. Accented characters are dropped rather
/// than transliterated, so "João" becomes "joo".
pub fn canonicalize(text: &str, max_len: usize) -> String {
    text.to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        .take(max_len)
        .collect()
}

/// Build the suggested filename from a record. The check-in date is used
/// verbatim when it is a valid ISO date, otherwise today's date; place and
/// guest parts fall back to fixed literals when their fields are empty.
pub fn derive_filename(record: &FormRecord) -> String {
    let checkin = if chrono::NaiveDate::parse_from_str(&record.checkin_date, "%Y-%m-%d").is_ok() {
        record.checkin_date.clone()
    } else {
        Local::now().format("%Y-%m-%d").to_string()
    };

    let place_source = if !record.city.is_empty() {
        record.city.as_str()
    } else if !record.accommodation_name.is_empty() {
        record.accommodation_name.as_str()
    } else {
        "place"
    };
    let place = canonicalize(place_source, 20);

    let full_name = format!("{}{}", record.first_name, record.last_name);
    let name_source = if full_name.is_empty() {
        "guest".to_string()
    } else {
        full_name
    };
    let name = canonicalize(&name_source, 20);

    format!("{checkin}-{place}-{name}.pdf")
}

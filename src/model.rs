/// One completed travel-registration record. All fields are raw form values
/// and may be empty; the renderer skips empty fields entirely. The record is
/// supplied fully formed by the host and is never validated here.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct FormRecord {
    pub first_name: String,
    pub last_name: String,
    pub sex: String,
    pub date_of_birth: String,
    pub place_of_birth: String,
    pub country_of_birth: String,
    pub nationality: String,
    pub document_type: String,
    pub document_number: String,
    pub issuing_country: String,
    pub issue_date: String,
    pub expiry_date: String,
    pub date_of_entry: String,
    pub country_of_origin: String,
    pub purpose_of_stay: String,
    pub intended_destination: String,
    pub accommodation_name: String,
    pub address: String,
    pub postal_code: String,
    pub city: String,
    pub checkin_date: String,
    pub checkout_date: String,
    pub phone: String,
    pub email: String,
}

/// Kind of document shown on an attached photo. Closed set; the raw form
/// value maps onto exactly one of these.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DocumentKind {
    #[cfg_attr(feature = "serde", serde(rename = "idFront"))]
    IdFront,
    #[cfg_attr(feature = "serde", serde(rename = "idBack"))]
    IdBack,
    #[cfg_attr(feature = "serde", serde(rename = "passportPage"))]
    PassportPage,
    #[cfg_attr(feature = "serde", serde(rename = "visa"))]
    Visa,
    #[cfg_attr(feature = "serde", serde(rename = "otherDocument"))]
    OtherDocument,
}

impl DocumentKind {
    pub fn from_raw(raw: &str) -> Option<Self> {
        match raw {
            "idFront" => Some(DocumentKind::IdFront),
            "idBack" => Some(DocumentKind::IdBack),
            "passportPage" => Some(DocumentKind::PassportPage),
            "visa" => Some(DocumentKind::Visa),
            "otherDocument" => Some(DocumentKind::OtherDocument),
            _ => None,
        }
    }

    pub fn label_key(self) -> &'static str {
        match self {
            DocumentKind::IdFront => "idFront",
            DocumentKind::IdBack => "idBack",
            DocumentKind::PassportPage => "passportPage",
            DocumentKind::Visa => "visa",
            DocumentKind::OtherDocument => "otherDocument",
        }
    }
}

/// One photographic attachment: raw encoded image bytes plus the document
/// kind chosen by the traveller. Order in the input slice is display order.
#[derive(Clone)]
pub struct Attachment {
    pub data: Vec<u8>,
    pub kind: DocumentKind,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sex {
    Male,
    Female,
    Other,
}

impl Sex {
    pub fn from_raw(raw: &str) -> Option<Self> {
        match raw {
            "male" => Some(Sex::Male),
            "female" => Some(Sex::Female),
            "other" => Some(Sex::Other),
            _ => None,
        }
    }

    pub fn label_key(self) -> &'static str {
        match self {
            Sex::Male => "male",
            Sex::Female => "female",
            Sex::Other => "other",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TravelDocumentType {
    Passport,
    IdCard,
    Other,
}

impl TravelDocumentType {
    pub fn from_raw(raw: &str) -> Option<Self> {
        match raw {
            "passport" => Some(TravelDocumentType::Passport),
            "idCard" => Some(TravelDocumentType::IdCard),
            "other" => Some(TravelDocumentType::Other),
            _ => None,
        }
    }

    pub fn label_key(self) -> &'static str {
        match self {
            TravelDocumentType::Passport => "passport",
            TravelDocumentType::IdCard => "idCard",
            TravelDocumentType::Other => "otherDoc",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PurposeOfStay {
    Tourism,
    Business,
    Transit,
    Other,
}

impl PurposeOfStay {
    pub fn from_raw(raw: &str) -> Option<Self> {
        match raw {
            "tourism" => Some(PurposeOfStay::Tourism),
            "business" => Some(PurposeOfStay::Business),
            "transit" => Some(PurposeOfStay::Transit),
            "other" => Some(PurposeOfStay::Other),
            _ => None,
        }
    }

    pub fn label_key(self) -> &'static str {
        match self {
            PurposeOfStay::Tourism => "tourism",
            PurposeOfStay::Business => "business",
            PurposeOfStay::Transit => "transit",
            PurposeOfStay::Other => "otherPurpose",
        }
    }
}

/// The finished document: byte stream, derived filename, and page count.
/// Produced in one piece; there is no partial or streamed output.
pub struct GeneratedPdf {
    pub bytes: Vec<u8>,
    pub filename: String,
    pub pages: usize,
}

impl GeneratedPdf {
    /// Write the document under its derived filename inside `dir` and
    /// return the full path.
    pub fn write_to_dir(&self, dir: &std::path::Path) -> Result<std::path::PathBuf, crate::Error> {
        let path = dir.join(&self.filename);
        std::fs::write(&path, &self.bytes)?;
        Ok(path)
    }
}

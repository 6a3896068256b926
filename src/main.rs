use std::collections::HashMap;
use std::path::PathBuf;

use clap::Parser;

use registo_pdf::{
    Attachment, DocumentKind, FormRecord, MapCountries, MapLabels, PRIMARY_LANGUAGE, generate,
};

#[derive(Parser)]
#[command(version, about = "Render a travel-registration record as a bilingual PDF")]
struct Args {
    /// Registration record as JSON with camelCase field names.
    record: PathBuf,

    /// Attachment as KIND:PATH, repeatable, placed in the given order.
    /// Kinds: idFront, idBack, passportPage, visa, otherDocument.
    #[arg(short, long = "attach", value_name = "KIND:PATH")]
    attach: Vec<String>,

    /// Active language code. Anything other than "pt" renders bilingually.
    #[arg(short, long, default_value = PRIMARY_LANGUAGE)]
    lang: String,

    /// JSON file with "primary", "active" and "countries" dictionaries.
    /// Without it, labels render as their raw keys.
    #[arg(long, value_name = "FILE")]
    labels: Option<PathBuf>,

    /// Directory to write the PDF into, named after the record.
    #[arg(short, long, default_value = ".")]
    out_dir: PathBuf,
}

#[derive(serde::Deserialize, Default)]
#[serde(default)]
struct LabelsFile {
    primary: HashMap<String, String>,
    active: HashMap<String, String>,
    countries: HashMap<String, String>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    let record: FormRecord = serde_json::from_slice(&std::fs::read(&args.record)?)?;

    let mut attachments = Vec::new();
    for entry in &args.attach {
        let (kind, path) = entry
            .split_once(':')
            .ok_or("attachment must be given as KIND:PATH")?;
        let kind = DocumentKind::from_raw(kind)
            .ok_or_else(|| format!("unknown attachment kind '{kind}'"))?;
        attachments.push(Attachment {
            data: std::fs::read(path)?,
            kind,
        });
    }

    let (labels, countries) = match &args.labels {
        Some(path) => {
            let file: LabelsFile = serde_json::from_slice(&std::fs::read(path)?)?;
            (
                MapLabels {
                    primary: file.primary,
                    active: file.active,
                },
                MapCountries {
                    names: file.countries,
                },
            )
        }
        None => (MapLabels::default(), MapCountries::default()),
    };

    let document = generate(&record, &attachments, &args.lang, &labels, &countries);
    let path = document.write_to_dir(&args.out_dir)?;
    println!("{}", path.display());
    Ok(())
}

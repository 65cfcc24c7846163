use serde::{Deserialize, Deserializer};
use std::io::Read;

/// One `question,answer` line from an answer sheet.
#[derive(Debug)]
pub(crate) struct SheetRow {
    pub(crate) key: String,
    pub(crate) answer: Option<String>,
}

pub(crate) fn parse_rows<R: Read>(reader: R) -> Result<Vec<SheetRow>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);
    let mut rows = Vec::new();

    for record in csv_reader.deserialize::<RawRow>() {
        let row = record?;
        let key = normalize_key(&row.question);
        if key.is_empty() {
            continue;
        }

        rows.push(SheetRow {
            key,
            answer: row.answer,
        });
    }

    Ok(rows)
}

#[derive(Debug, Deserialize)]
struct RawRow {
    #[serde(alias = "Question", alias = "key")]
    question: String,
    #[serde(
        alias = "Answer",
        alias = "value",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    answer: Option<String>,
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

/// Lower-cases the key and strips a UTF-8 byte order mark left by spreadsheet exports.
pub(crate) fn normalize_key(raw: &str) -> String {
    raw.trim_start_matches('\u{feff}').trim().to_ascii_lowercase()
}

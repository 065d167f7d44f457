use serde::Serialize;

use crate::Result;

/// One extracted walkthrough entry. Field order is the output column order.
#[derive(Debug, Default, Clone, Serialize)]
pub struct Quest {
    pub id: String,
    pub name: String,
    pub preamble: String,
    pub description: String,
    pub solution: String,
    pub postscript: String,
}

const HEADER: [&str; 6] = [
    "id",
    "name",
    "preamble",
    "description",
    "solution",
    "postscript",
];

/// Renders one chapter's records as a pipe-delimited table. The header row is
/// written unconditionally, so a chapter with no quests still produces a
/// header-only file. Fields holding the delimiter or a newline come out
/// quoted by the csv writer.
pub(crate) fn to_delimited(quests: &[Quest]) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    {
        let mut writer = csv::WriterBuilder::new()
            .delimiter(b'|')
            .has_headers(false)
            .from_writer(&mut buf);
        writer.write_record(HEADER)?;
        for quest in quests {
            writer.serialize(quest)?;
        }
        writer.flush()?;
    }
    Ok(buf)
}

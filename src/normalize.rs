use encoding_rs::ISO_8859_2;

use crate::quest::Quest;
use crate::{Error, Result};

/// Reinterprets `raw` as ISO-8859-2 bytes and decodes it to proper Unicode.
/// The fetch layer carries every page byte through as a `char` in
/// `0x00..=0xFF`, so the original byte values can be recovered here. A char
/// outside that range, or a byte sequence the encoding rejects, is a fatal
/// decode error - there is no best-effort path.
pub(crate) fn decode_latin2(raw: &str) -> Result<String> {
    let mut bytes = Vec::with_capacity(raw.len());
    for ch in raw.chars() {
        let byte =
            u8::try_from(u32::from(ch)).map_err(|_| Error::Decode(raw.to_owned()))?;
        bytes.push(byte);
    }
    let (text, had_errors) = ISO_8859_2.decode_without_bom_handling(&bytes);
    if had_errors {
        return Err(Error::Decode(raw.to_owned()));
    }
    Ok(text.into_owned())
}

/// Full cleanup of one section field: decode, unescape HTML entities, strip
/// the inline markup remnants, drop newlines and trim.
/// `<br>` is stripped next to `<br/>` because re-serializing the parsed tree
/// emits void elements without the self-closing slash.
/// Expects carrier-form input (chars in `0x00..=0xFF`); the pipeline runs it
/// once per field. Re-applying it is a fixpoint only while the output stays
/// in that range - decoded text above U+00FF is rejected by `decode_latin2`.
pub(crate) fn sanitize_field(raw: &str) -> Result<String> {
    let decoded = decode_latin2(raw)?;
    let unescaped = html_escape::decode_html_entities(&decoded);
    let stripped = unescaped
        .replace("<i>", "")
        .replace("</i>", "")
        .replace("<br/>", "")
        .replace("<br>", "")
        .replace('\n', "");
    Ok(stripped.trim().to_owned())
}

/// Cleans the four section fields of a record in place. `id` and `name` are
/// left alone: the title was already decoded at anchor time.
pub(crate) fn sanitize(quest: &mut Quest) -> Result<()> {
    quest.preamble = sanitize_field(&quest.preamble)?;
    quest.description = sanitize_field(&quest.description)?;
    quest.solution = sanitize_field(&quest.solution)?;
    quest.postscript = sanitize_field(&quest.postscript)?;
    Ok(())
}

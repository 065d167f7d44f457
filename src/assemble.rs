use scraper::{ElementRef, Html, Selector};

use crate::normalize::decode_latin2;
use crate::quest::Quest;
use crate::split::split_sections;
use crate::{Error, Result, BLOB_MARKER};

/// Runs the two extraction passes over one fetched chapter page and returns
/// the quest records in anchor order, with raw (not yet normalized) section
/// fields attached.
pub(crate) fn assemble_chapter(page: &str) -> Result<Vec<Quest>> {
    let doc = Html::parse_document(page);
    let mut quests = collect_anchors(&doc)?;
    attach_intro_blob(&doc, &mut quests)?;
    attach_indexed_blobs(&doc, &mut quests)?;
    Ok(quests)
}

/// Anchor pass: every `<b>`-wrapped `<a>` with a non-empty `name` attribute
/// opens a new record. The attribute minus its trailing period becomes the
/// id; a `<u>` title inside the anchor becomes the name, decoded but not
/// otherwise cleaned.
fn collect_anchors(doc: &Html) -> Result<Vec<Quest>> {
    let bold_sel = create_selector("b")?;
    let anchor_sel = create_selector("a[name]")?;
    let title_sel = create_selector("u")?;

    let mut quests = Vec::new();
    for bold in doc.select(&bold_sel) {
        for anchor in bold.select(&anchor_sel) {
            let name_attr = anchor.value().attr("name").unwrap_or("");
            if name_attr.is_empty() {
                continue;
            }
            let mut quest = Quest {
                id: strip_trailing_period(name_attr).to_owned(),
                ..Quest::default()
            };
            if let Some(title) = anchor.select(&title_sel).last() {
                quest.name = decode_latin2(&title.text().collect::<String>())?;
            }
            quests.push(quest);
        }
    }
    Ok(quests)
}

/// Body pass, intro half: the chapter's introductory write-up sits in the
/// first table cell, after the blob marker and before the next paragraph. It
/// always belongs to the first record.
fn attach_intro_blob(doc: &Html, quests: &mut [Quest]) -> Result<()> {
    let cell_sel = create_selector("td")?;
    let Some(cell) = doc.select(&cell_sel).next() else {
        return Ok(());
    };

    let markup = cell.inner_html();
    let (_, after) = markup.split_once(BLOB_MARKER).ok_or_else(|| {
        Error::PageShape("the introductory cell holds no write-up marker".to_owned())
    })?;
    let blob = after.split_once("<p>").map_or(after, |(before, _)| before);

    let Some(intro) = quests.first_mut() else {
        return Err(Error::PageShape(
            "found an introductory write-up but no quest anchors".to_owned(),
        ));
    };
    apply_sections(intro, blob);
    Ok(())
}

/// Body pass, indexed half: every paragraph inside a table cell that carries
/// the blob marker addresses its record explicitly, through the numeric
/// `name` of a `<b>`-wrapped `<a>` it contains (1-based).
fn attach_indexed_blobs(doc: &Html, quests: &mut [Quest]) -> Result<()> {
    let cell_sel = create_selector("td")?;
    let para_sel = create_selector("p")?;
    let bold_sel = create_selector("b")?;
    let anchor_sel = create_selector("a[name]")?;

    for cell in doc.select(&cell_sel) {
        for para in cell.select(&para_sel) {
            let markup = para.inner_html();
            let Some((_, blob)) = markup.split_once(BLOB_MARKER) else {
                continue;
            };
            for bold in para.select(&bold_sel) {
                for anchor in bold.select(&anchor_sel) {
                    let index = anchor_index(anchor)?;
                    let count = quests.len();
                    let quest = index
                        .checked_sub(1)
                        .and_then(|i| quests.get_mut(i))
                        .ok_or_else(|| {
                            Error::QuestIndex(format!(
                                "{index} (chapter holds {count} records)"
                            ))
                        })?;
                    apply_sections(quest, blob);
                }
            }
        }
    }
    Ok(())
}

/// Reads the 1-based record index embedded in a body-pass anchor.
fn anchor_index(anchor: ElementRef) -> Result<usize> {
    let name_attr = anchor.value().attr("name").unwrap_or("");
    strip_trailing_period(name_attr)
        .parse::<usize>()
        .map_err(|_| Error::QuestIndex(name_attr.to_owned()))
}

fn apply_sections(quest: &mut Quest, blob: &str) {
    let sections = split_sections(blob);
    quest.preamble = sections.preamble;
    quest.description = sections.description;
    quest.solution = sections.solution;
    quest.postscript = sections.postscript;
}

fn strip_trailing_period(name_attr: &str) -> &str {
    name_attr.strip_suffix('.').unwrap_or(name_attr)
}

#[inline]
fn create_selector(sel_str: &str) -> Result<Selector> {
    Selector::parse(sel_str).map_err(|_| Error::ParseMissingSelector(sel_str.into()))
}

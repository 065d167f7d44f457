use chrono::Local;
use reqwest::Client;
use tokio::{fs::File, io::AsyncWriteExt};

use crate::assemble::assemble_chapter;
use crate::normalize::sanitize;
use crate::quest::{to_delimited, Quest};
use crate::request::fetch_chapter;
use crate::{info_time, Result, CHAPTER_FILE_PREFIX, CHAPTER_URLS};

/// Walks the five chapter pages in order. Each chapter is fetched, scraped
/// and written before the next one starts; fresh record state is built per
/// chapter, and the first error aborts the whole run with no partial file
/// left behind for the failing chapter.
pub async fn process_site() -> Result<()> {
    let client = Client::new();

    for (ordinal, url) in CHAPTER_URLS.iter().enumerate() {
        let chapter = ordinal + 1;
        let start_time = Local::now();
        info_time!("Visiting {}", url);

        let page = fetch_chapter(&client, url).await?;
        let quests = scrape_chapter(&page)?;
        let table = to_delimited(&quests)?;

        let path = format!("{CHAPTER_FILE_PREFIX}{chapter}.csv");
        let mut file = File::create(&path).await?;
        file.write_all(&table).await?;
        info_time!(start_time, "Wrote {} quests to {}", quests.len(), path);
    }

    Ok(())
}

/// Full extraction for one fetched page: assemble the records, then run the
/// normalizer over every section field.
pub(crate) fn scrape_chapter(page: &str) -> Result<Vec<Quest>> {
    let mut quests = assemble_chapter(page)?;
    for quest in &mut quests {
        sanitize(quest)?;
    }
    Ok(quests)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CHAPTER_PAGE: &str = r#"<html><body><table><tr><td>
<b><a name="1."><u>Stary Oboz</u></a></b><br/>
<!-- NL2BR true //-->Intro text<br/>Opis: desc text<br/>Solucja: sol text<br/>Dodatkowo: extra
<p><b><a name="2."><u>Drugi</u></a></b>
<!-- NL2BR true //-->Opis: second desc<br/>Solucja: second sol</p>
</td></tr></table></body></html>"#;

    #[test]
    fn scrapes_a_chapter_into_clean_records() {
        let quests = scrape_chapter(CHAPTER_PAGE).unwrap();
        assert_eq!(quests.len(), 2);

        assert_eq!(quests[0].id, "1");
        assert_eq!(quests[0].name, "Stary Oboz");
        assert_eq!(quests[0].preamble, "Intro text");
        assert_eq!(quests[0].description, "desc text");
        assert_eq!(quests[0].solution, "sol text");
        assert_eq!(quests[0].postscript, "extra");

        assert_eq!(quests[1].id, "2");
        assert_eq!(quests[1].name, "Drugi");
        assert_eq!(quests[1].preamble, "");
        assert_eq!(quests[1].description, "second desc");
        assert_eq!(quests[1].solution, "second sol");
        assert_eq!(quests[1].postscript, "");
    }

    #[test]
    fn chapter_without_anchors_serializes_to_a_header_only_file() {
        let page = "<html><body><h1>Pusta strona</h1></body></html>";
        let quests = scrape_chapter(page).unwrap();
        assert!(quests.is_empty());
        let table = to_delimited(&quests).unwrap();
        assert_eq!(
            String::from_utf8(table).unwrap(),
            "id|name|preamble|description|solution|postscript\n"
        );
    }

    #[test]
    fn latin2_title_bytes_come_out_as_unicode() {
        // The fetch layer widens page bytes to chars; 0xB3 is Latin-2 'ł'.
        let page = "<b><a name=\"1.\"><u>Prze\u{B3}om</u></a></b>";
        let quests = scrape_chapter(page).unwrap();
        assert_eq!(quests[0].name, "Przełom");
    }

    #[test]
    fn malformed_body_index_aborts_before_any_record_is_usable() {
        let page = r#"<html><body><table><tr><td>
<b><a name="1."></a></b>
<!-- NL2BR true //-->Opis: intro
<p><b><a name="abc."></a></b><!-- NL2BR true //-->Opis: lost</p>
</td></tr></table></body></html>"#;
        assert!(scrape_chapter(page).is_err());
    }
}

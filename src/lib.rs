//! GOTHIC WALKTHROUGH QUEST SCRAPER
//! Visits the five chapter pages of the walkthrough and writes one
//! pipe-delimited table of quest records per chapter.

mod assemble;
mod error;
mod macros;
mod normalize;
pub mod process;
mod quest;
mod request;
mod split;

pub use error::{Error, Result};
pub use quest::Quest;

/// The five chapter pages, in output order.
const CHAPTER_URLS: [&str; 5] = [
    "http://www.gothic.phx.pl/gothic/rozdzial1.php",
    "http://www.gothic.phx.pl/gothic/rozdzial2.php",
    "http://www.gothic.phx.pl/gothic/rozdzial3.php",
    "http://www.gothic.phx.pl/gothic/rozdzial4.php",
    "http://www.gothic.phx.pl/gothic/rozdzial5.php",
];

/// Output files are named `chapter_{n}.csv`, 1-indexed.
const CHAPTER_FILE_PREFIX: &str = "chapter_";

/// Comment token the page generator leaves right before each quest write-up.
const BLOB_MARKER: &str = "<!-- NL2BR true //-->";

// Section markers, in the order they appear inside a write-up. There is no
// separate preamble marker; everything before "Opis:" is the preamble.
const DESCRIPTION_MARKER: &str = "Opis:";
const SOLUTION_MARKER: &str = "Solucja:";
const POSTSCRIPT_MARKER: &str = "Dodatkowo:";

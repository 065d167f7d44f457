use thiserror::Error;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The selector you are trying to scrape for is missing. Selector: {0}")]
    ParseMissingSelector(String),

    #[error("Couldn't decode the text as ISO-8859-2: {0:?}")]
    Decode(String),

    #[error("The page doesn't have the expected shape: {0}")]
    PageShape(String),

    #[error("Couldn't turn the quest anchor {0:?} into a record index.")]
    QuestIndex(String),

    #[error("Io Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Csv Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Reqwest Error: {0}")]
    Reqwest(#[from] reqwest::Error),
}

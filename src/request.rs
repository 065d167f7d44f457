use reqwest::Client;

use crate::Result;

/// Requests one chapter page and returns its body with every byte widened to
/// a `char` in `0x00..=0xFF`. The pages are served as ISO-8859-2 bytes; this
/// carrier form keeps the original byte values intact through HTML parsing so
/// the normalizer can decode them later.
pub(crate) async fn fetch_chapter(client: &Client, url: &str) -> Result<String> {
    let res = client.get(url).send().await?;
    let body = res.bytes().await?;
    Ok(body.iter().map(|&b| char::from(b)).collect())
}

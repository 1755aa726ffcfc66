use std::sync::LazyLock;

use scraper::{Html, Selector};

use crate::common::RelayError;

static SERVER_ITEM: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(".serversList .server").unwrap());

const HASH_ATTR: &str = "data-hash";

/// Collects the `data-hash` token of every server entry, in document order.
/// Duplicates are kept; entries without a token are skipped.
pub fn extract_servers(html: &str) -> Result<Vec<String>, RelayError> {
    let document = Html::parse_document(html);
    let servers: Vec<String> = document
        .select(&SERVER_ITEM)
        .filter_map(|el| el.value().attr(HASH_ATTR))
        .filter(|hash| !hash.is_empty())
        .map(str::to_string)
        .collect();

    if servers.is_empty() {
        return Err(RelayError::NoServersFound);
    }
    Ok(servers)
}

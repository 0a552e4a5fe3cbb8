//! Standalone dashboard page written by the native viewer.
//!
//! Holds the same two containers the browser page provides (`data_table`, `last_update`)
//! so the file can be opened directly.

use std::path::Path;

use anyhow::{Context, Result};

use crate::config::BOARD;
use crate::markup::escape_attr;

const STYLESHEET: &str = "https://cdn.jsdelivr.net/npm/semantic-ui@2.4.2/dist/semantic.min.css";

/// Embed already-serialised container markup into the page skeleton
pub fn compose(cards_html: &str, label_html: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <meta http-equiv="refresh" content="5">
    <title>Crypto Board</title>
    <link rel="stylesheet" href="{stylesheet}">
</head>
<body>
    <div class="ui container">
        <h3 class="ui header" id="{label_id}">{label}</h3>
        <div class="ui cards" id="{grid_id}">
{cards}
        </div>
    </div>
</body>
</html>
"#,
        stylesheet = STYLESHEET,
        label_id = escape_attr(BOARD.ids.last_update),
        grid_id = escape_attr(BOARD.ids.data_table),
        label = label_html,
        cards = cards_html,
    )
}

/// Write the page through a temporary sibling and rename it over `path`,
/// so a reader never sees a half-written file.
pub async fn write_page(path: &Path, html: &str) -> Result<()> {
    let tmp = path.with_extension("html.tmp");
    tokio::fs::write(&tmp, html)
        .await
        .with_context(|| format!("Failed to write {}", tmp.display()))?;
    tokio::fs::rename(&tmp, path)
        .await
        .with_context(|| format!("Failed to move page into place at {}", path.display()))?;
    Ok(())
}

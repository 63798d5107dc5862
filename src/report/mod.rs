//! Epic status report: fetch the board, classify cards, render text.

pub mod members;
pub mod render;
pub mod section;
pub mod snapshot;

use tracing::info;

use crate::error::Result;
use crate::trello::TrelloApi;
use members::MemberDirectory;

/// Build the full report text for `board_name`.
///
/// Nothing is returned until every section has rendered, so a failure part
/// way through never yields a partial report.
pub async fn generate<A: TrelloApi + ?Sized>(api: &A, board_name: &str) -> Result<String> {
    let snapshot = snapshot::fetch(api, board_name).await?;
    let mut members = MemberDirectory::new(api);
    let text = render::render_report(&snapshot, &mut members).await?;
    info!(members = members.resolved_count(), "report rendered");
    Ok(text)
}

use tracing::{debug, info};

use crate::error::Result;
use crate::model::card::Card;
use crate::trello::{resolve_board, resolve_list, TrelloApi};

pub const NEXT_LIST: &str = "Next";
pub const IN_PROGRESS_LIST: &str = "In Progress";
pub const DEV_COMPLETE_LIST: &str = "Dev Complete";
pub const QE_ACCEPTED_LIST: &str = "QE Accepted (Done)";

/// Where a report section draws its cards from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardSource {
    Next,
    InProgress,
    DevComplete,
    QeAccepted,
    Board,
}

/// Every card set the report reads, fetched once per run.
#[derive(Debug, Default)]
pub struct BoardSnapshot {
    pub next: Vec<Card>,
    pub in_progress: Vec<Card>,
    pub dev_complete: Vec<Card>,
    pub qe_accepted: Vec<Card>,
    pub all: Vec<Card>,
}

impl BoardSnapshot {
    pub fn cards(&self, source: CardSource) -> &[Card] {
        match source {
            CardSource::Next => &self.next,
            CardSource::InProgress => &self.in_progress,
            CardSource::DevComplete => &self.dev_complete,
            CardSource::QeAccepted => &self.qe_accepted,
            CardSource::Board => &self.all,
        }
    }
}

pub async fn fetch<A: TrelloApi + ?Sized>(api: &A, board_name: &str) -> Result<BoardSnapshot> {
    let boards = api.boards().await?;
    let board = resolve_board(&boards, board_name)?;
    info!(board = %board.name, id = %board.id, "resolved board");

    let lists = api.lists(&board.id).await?;
    let next = resolve_list(&lists, NEXT_LIST)?;
    let in_progress = resolve_list(&lists, IN_PROGRESS_LIST)?;
    let dev_complete = resolve_list(&lists, DEV_COMPLETE_LIST)?;
    let qe_accepted = resolve_list(&lists, QE_ACCEPTED_LIST)?;
    debug!(
        next = %next.id,
        in_progress = %in_progress.id,
        dev_complete = %dev_complete.id,
        qe_accepted = %qe_accepted.id,
        "resolved lists"
    );

    let (next, in_progress, dev_complete, qe_accepted, all) = tokio::try_join!(
        api.list_cards(&next.id),
        api.list_cards(&in_progress.id),
        api.list_cards(&dev_complete.id),
        api.list_cards(&qe_accepted.id),
        api.board_cards(&board.id),
    )?;
    info!(
        next = next.len(),
        in_progress = in_progress.len(),
        dev_complete = dev_complete.len(),
        qe_accepted = qe_accepted.len(),
        all = all.len(),
        "fetched cards"
    );

    Ok(BoardSnapshot {
        next,
        in_progress,
        dev_complete,
        qe_accepted,
        all,
    })
}

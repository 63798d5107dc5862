pub mod client;

#[cfg(test)]
pub mod mock;

use async_trait::async_trait;

use crate::error::{EntityKind, Result, TrudError};
use crate::model::board::{Board, BoardList};
use crate::model::card::Card;
use crate::model::Named;

/// Read-only view of the Trello REST resources the report needs.
#[async_trait]
pub trait TrelloApi: Send + Sync {
    /// Boards visible to the authenticated member (`/member/me/boards`).
    async fn boards(&self) -> Result<Vec<Board>>;
    async fn lists(&self, board_id: &str) -> Result<Vec<BoardList>>;
    async fn list_cards(&self, list_id: &str) -> Result<Vec<Card>>;
    async fn board_cards(&self, board_id: &str) -> Result<Vec<Card>>;
    async fn member_full_name(&self, member_id: &str) -> Result<String>;
}

/// First item whose name matches `name` exactly.
pub fn find_by_name<'a, T: Named>(items: &'a [T], name: &str, kind: EntityKind) -> Result<&'a T> {
    items
        .iter()
        .find(|item| item.name() == name)
        .ok_or_else(|| TrudError::NotFound {
            kind,
            name: name.to_string(),
        })
}

pub fn resolve_board<'a>(boards: &'a [Board], name: &str) -> Result<&'a Board> {
    find_by_name(boards, name, EntityKind::Board)
}

pub fn resolve_list<'a>(lists: &'a [BoardList], name: &str) -> Result<&'a BoardList> {
    find_by_name(lists, name, EntityKind::List)
}

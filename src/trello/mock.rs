use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use super::TrelloApi;
use crate::error::{Result, TrudError};
use crate::model::board::{Board, BoardList};
use crate::model::card::{Card, Label};

/// In-memory board that records how often each member name is looked up.
#[derive(Default)]
pub struct MockTrello {
    pub boards: Vec<Board>,
    pub lists: HashMap<String, Vec<BoardList>>,
    pub list_cards: HashMap<String, Vec<Card>>,
    pub board_cards: HashMap<String, Vec<Card>>,
    pub members: HashMap<String, String>,
    pub member_lookups: Mutex<Vec<String>>,
}

impl MockTrello {
    /// A board named `board_name` with the four report lists, all empty.
    pub fn with_standard_board(board_name: &str) -> Self {
        let mut mock = Self {
            boards: vec![Board {
                id: "b1".into(),
                name: board_name.into(),
            }],
            ..Default::default()
        };
        let lists = [
            ("l-next", "Next"),
            ("l-wip", "In Progress"),
            ("l-dev", "Dev Complete"),
            ("l-qe", "QE Accepted (Done)"),
        ];
        mock.lists.insert(
            "b1".into(),
            lists
                .iter()
                .map(|(id, name)| BoardList {
                    id: id.to_string(),
                    name: name.to_string(),
                })
                .collect(),
        );
        for (id, _) in lists {
            mock.list_cards.insert(id.into(), Vec::new());
        }
        mock.board_cards.insert("b1".into(), Vec::new());
        mock
    }

    /// Put `card` on list `list_id` and on the board-wide card set.
    pub fn add_card(&mut self, list_id: &str, card: Card) {
        self.board_cards
            .entry("b1".into())
            .or_default()
            .push(card.clone());
        self.list_cards.entry(list_id.into()).or_default().push(card);
    }

    pub fn with_member(mut self, id: &str, full_name: &str) -> Self {
        self.members.insert(id.into(), full_name.into());
        self
    }

    pub fn lookups(&self) -> Vec<String> {
        self.member_lookups.lock().unwrap().clone()
    }
}

pub fn make_card(name: &str, labels: &[&str], members: &[&str]) -> Card {
    Card {
        id: format!("c-{name}"),
        name: name.to_string(),
        due: None,
        short_url: format!("https://trello.com/c/{}", name.replace(' ', "-")),
        labels: labels
            .iter()
            .map(|l| Label {
                name: l.to_string(),
            })
            .collect(),
        id_members: members.iter().map(|m| m.to_string()).collect(),
    }
}

fn missing(path: String) -> TrudError {
    TrudError::ApiRequest {
        path,
        cause: "HTTP 404 Not Found".into(),
    }
}

#[async_trait]
impl TrelloApi for MockTrello {
    async fn boards(&self) -> Result<Vec<Board>> {
        Ok(self.boards.clone())
    }

    async fn lists(&self, board_id: &str) -> Result<Vec<BoardList>> {
        self.lists
            .get(board_id)
            .cloned()
            .ok_or_else(|| missing(format!("boards/{board_id}/lists")))
    }

    async fn list_cards(&self, list_id: &str) -> Result<Vec<Card>> {
        self.list_cards
            .get(list_id)
            .cloned()
            .ok_or_else(|| missing(format!("lists/{list_id}/cards")))
    }

    async fn board_cards(&self, board_id: &str) -> Result<Vec<Card>> {
        self.board_cards
            .get(board_id)
            .cloned()
            .ok_or_else(|| missing(format!("boards/{board_id}/cards")))
    }

    async fn member_full_name(&self, member_id: &str) -> Result<String> {
        self.member_lookups
            .lock()
            .unwrap()
            .push(member_id.to_string());
        self.members
            .get(member_id)
            .cloned()
            .ok_or_else(|| missing(format!("members/{member_id}/fullName")))
    }
}

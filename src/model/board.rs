use serde::Deserialize;

use super::Named;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Board {
    pub id: String,
    pub name: String,
}

/// A column on a board. Trello calls these "lists".
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BoardList {
    pub id: String,
    pub name: String,
}

impl Named for Board {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Named for BoardList {
    fn name(&self) -> &str {
        &self.name
    }
}

use std::collections::HashMap;

use tracing::debug;

use crate::error::Result;
use crate::trello::TrelloApi;

/// Member id → full name, filled on first lookup and kept for the run.
pub struct MemberDirectory<'a, A: ?Sized> {
    api: &'a A,
    names: HashMap<String, String>,
}

impl<'a, A: TrelloApi + ?Sized> MemberDirectory<'a, A> {
    pub fn new(api: &'a A) -> Self {
        Self {
            api,
            names: HashMap::new(),
        }
    }

    pub fn resolved_count(&self) -> usize {
        self.names.len()
    }

    pub async fn full_name(&mut self, member_id: &str) -> Result<String> {
        if let Some(name) = self.names.get(member_id) {
            return Ok(name.clone());
        }
        let name = self.api.member_full_name(member_id).await?;
        debug!(member = member_id, %name, "resolved member");
        self.names.insert(member_id.to_string(), name.clone());
        Ok(name)
    }

    /// Comma-separated full names, or `None` for an unassigned card.
    pub async fn display_names(&mut self, member_ids: &[String]) -> Result<String> {
        if member_ids.is_empty() {
            return Ok("None".to_string());
        }
        let mut names = Vec::with_capacity(member_ids.len());
        for id in member_ids {
            names.push(self.full_name(id).await?);
        }
        Ok(names.join(", "))
    }
}

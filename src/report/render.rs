use chrono::{DateTime, Utc};
use tracing::debug;

use super::members::MemberDirectory;
use super::section::Section;
use super::snapshot::BoardSnapshot;
use crate::error::Result;
use crate::model::card::Card;
use crate::trello::TrelloApi;

pub const RULE: &str = "####################################################################";
pub const INTRO: &str = "This report provides a daily summary of Trello status.";
pub const TRAILER: &str = "This report generated with trud: https://github.com/slagle/trud";

/// `March 15, 2024`, or `None` when the card has no due date.
pub fn format_due(due: Option<&DateTime<Utc>>) -> String {
    match due {
        Some(due) => due.format("%B %d, %Y").to_string(),
        None => "None".to_string(),
    }
}

#[derive(Debug, Default)]
struct ReportText {
    lines: Vec<String>,
}

impl ReportText {
    fn line(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    fn blank(&mut self) {
        self.lines.push(String::new());
    }

    fn finish(self) -> String {
        let mut text = self.lines.join("\n");
        text.push('\n');
        text
    }
}

async fn render_card<A: TrelloApi + ?Sized>(
    out: &mut ReportText,
    card: &Card,
    members: &mut MemberDirectory<'_, A>,
) -> Result<()> {
    debug!(card = %card.id, members = card.id_members.len(), "rendering card");
    let member_names = members.display_names(&card.id_members).await?;
    out.line(format!("# - {}", card.name));
    out.line(format!("#   Due: {}", format_due(card.due.as_ref())));
    out.line(format!("#   Link: {}", card.short_url));
    out.line(format!("#   Members: {member_names}"));
    Ok(())
}

async fn render_section<A: TrelloApi + ?Sized>(
    out: &mut ReportText,
    section: Section,
    snapshot: &BoardSnapshot,
    members: &mut MemberDirectory<'_, A>,
) -> Result<()> {
    let cards = section.select(snapshot);

    out.line(RULE);
    out.line(format!("# {}", section.title()));
    out.line("#");
    for card in &cards {
        render_card(out, card, members).await?;
    }
    out.line("#");
    out.line(format!("# Summary: {}", section.summary(cards.len())));
    out.line(RULE);
    out.blank();
    out.blank();
    Ok(())
}

pub async fn render_report<A: TrelloApi + ?Sized>(
    snapshot: &BoardSnapshot,
    members: &mut MemberDirectory<'_, A>,
) -> Result<String> {
    let mut out = ReportText::default();
    out.line(INTRO);
    out.blank();
    for section in Section::ALL {
        render_section(&mut out, section, snapshot, members).await?;
    }
    out.line(TRAILER);
    out.blank();
    Ok(out.finish())
}

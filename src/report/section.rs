use crate::model::card::{Card, EPIC_LABEL};

use super::snapshot::{BoardSnapshot, CardSource};

pub const BLOCKED_LABEL: &str = "Blocked";
pub const PM_INPUT_LABEL: &str = "PM Input needed";
pub const OFF_TRACK_LABEL: &str = "Off Track";

/// The report's sections, in print order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Blocked,
    PmInput,
    NoOwner,
    OwnerNotInProgress,
    OffTrack,
    InProgress,
    DevComplete,
    QeAccepted,
}

impl Section {
    pub const ALL: [Section; 8] = [
        Section::Blocked,
        Section::PmInput,
        Section::NoOwner,
        Section::OwnerNotInProgress,
        Section::OffTrack,
        Section::InProgress,
        Section::DevComplete,
        Section::QeAccepted,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Section::Blocked => "Blocked Epics:",
            Section::PmInput => "Epics requiring PM input:",
            Section::NoOwner => "Epics off track due to lack of owner:",
            Section::OwnerNotInProgress => "Epics off track with an owner but not in progress:",
            Section::OffTrack => "Epics otherwise off track:",
            Section::InProgress => "Epics in progress:",
            Section::DevComplete => "Epics dev complete:",
            Section::QeAccepted => "Epics qe accepted:",
        }
    }

    pub fn summary(self, count: usize) -> String {
        let phrase = match self {
            Section::Blocked => "are blocked",
            Section::PmInput => "require PM input",
            Section::NoOwner => "are off track due to lack of owner",
            Section::OwnerNotInProgress => "are off track due to not in progress",
            Section::OffTrack => "are otherwise off track",
            Section::InProgress => "are in progress",
            Section::DevComplete => "are dev complete",
            Section::QeAccepted => "are qe accepted",
        };
        format!("{count} epics {phrase}")
    }

    pub fn source(self) -> CardSource {
        match self {
            Section::Blocked | Section::NoOwner | Section::OwnerNotInProgress => CardSource::Next,
            Section::PmInput => CardSource::Board,
            Section::OffTrack | Section::InProgress => CardSource::InProgress,
            Section::DevComplete => CardSource::DevComplete,
            Section::QeAccepted => CardSource::QeAccepted,
        }
    }

    /// Whether `card` belongs in this section, ignoring which list it came from.
    pub fn matches(self, card: &Card) -> bool {
        let labels = card.label_names();
        if !labels.contains(EPIC_LABEL) {
            return false;
        }
        match self {
            Section::Blocked => labels.contains(BLOCKED_LABEL),
            Section::PmInput => labels.contains(PM_INPUT_LABEL),
            Section::NoOwner => !card.has_members(),
            // Every owned epic still sitting in Next counts as not in progress.
            Section::OwnerNotInProgress => card.has_members(),
            Section::OffTrack => labels.contains(OFF_TRACK_LABEL),
            Section::InProgress => !labels.contains(OFF_TRACK_LABEL),
            Section::DevComplete | Section::QeAccepted => true,
        }
    }

    /// Matching cards from this section's source, in API order.
    pub fn select(self, snapshot: &BoardSnapshot) -> Vec<&Card> {
        snapshot
            .cards(self.source())
            .iter()
            .filter(|card| self.matches(card))
            .collect()
    }
}

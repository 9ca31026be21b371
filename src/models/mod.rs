mod flashcard;
mod question;

pub use flashcard::Flashcard;
pub use question::{Question, RawQuestionCandidate, NUM_OPTIONS, OPTION_LABELS};

/// Dashboard panel currently on screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Section {
    #[default]
    Notes,
    Summary,
    Tutor,
    Quiz,
    Flashcards,
    Timer,
    Progress,
    Help,
}

impl Section {
    /// Panels reachable with Tab, in order.
    pub const TABS: [Section; 7] = [
        Section::Notes,
        Section::Summary,
        Section::Tutor,
        Section::Quiz,
        Section::Flashcards,
        Section::Timer,
        Section::Progress,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Section::Notes => "Notes",
            Section::Summary => "Summary",
            Section::Tutor => "Tutor",
            Section::Quiz => "Quiz",
            Section::Flashcards => "Flashcards",
            Section::Timer => "Timer",
            Section::Progress => "Progress",
            Section::Help => "Help",
        }
    }

    /// Parses a panel name as typed in the command bar.
    pub fn parse(name: &str) -> Option<Section> {
        let name = name.to_lowercase();
        Section::TABS
            .into_iter()
            .chain([Section::Help])
            .find(|section| section.title().to_lowercase() == name)
    }

    pub fn next(self) -> Section {
        let index = Section::TABS.iter().position(|s| *s == self).unwrap_or(0);
        Section::TABS[(index + 1) % Section::TABS.len()]
    }

    pub fn previous(self) -> Section {
        let index = Section::TABS.iter().position(|s| *s == self).unwrap_or(0);
        Section::TABS[(index + Section::TABS.len() - 1) % Section::TABS.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_cycle_wraps() {
        assert_eq!(Section::Notes.next(), Section::Summary);
        assert_eq!(Section::Progress.next(), Section::Notes);
        assert_eq!(Section::Notes.previous(), Section::Progress);
        assert_eq!(Section::Help.next(), Section::Summary);
    }

    #[test]
    fn test_section_parse() {
        assert_eq!(Section::parse("quiz"), Some(Section::Quiz));
        assert_eq!(Section::parse("FlashCards"), Some(Section::Flashcards));
        assert_eq!(Section::parse("help"), Some(Section::Help));
        assert_eq!(Section::parse("garden"), None);
    }
}

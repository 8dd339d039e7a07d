//! Line-oriented metadata files.
//!
//! Each item folder carries a small text file whose lines map to record
//! fields by position. Lines are trimmed and blank lines are dropped before
//! positions are assigned; everything after the fixed lines is the
//! description, joined with `\n`.
//!
//! | schema      | line 1 | line 2   | line 3   | line 4 | rest        | min |
//! |-------------|--------|----------|----------|--------|-------------|-----|
//! | Achievement | title  | category | date     |        | description | 4   |
//! | Upload      | title  | date     |          |        | description | 2   |
//! | Notice      | title  | date     | category | pinned | content     | 1   |

use std::str::FromStr;

use super::error::ParseError;
use crate::config::DEFAULT_NOTICE_CATEGORY;
use crate::models::ItemDate;

/// Split metadata text into trimmed, non-blank lines.
pub fn metadata_lines(text: &str) -> Vec<&str> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}

/// Categories an achievement record may declare.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AchievementCategory {
    Achievements,
    Activity,
}

impl AchievementCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Achievements => "Achievements",
            Self::Activity => "Activity",
        }
    }
}

impl FromStr for AchievementCategory {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Achievements" => Ok(Self::Achievements),
            "Activity" => Ok(Self::Activity),
            other => Err(ParseError::InvalidCategory(other.to_string())),
        }
    }
}

/// Field values read from a metadata file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Metadata {
    pub title: String,
    pub category: String,
    pub date: ItemDate,
    pub description: String,
    pub pinned: bool,
}

/// Position-to-field mapping of a listing's metadata file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineSchema {
    Achievement,
    Upload,
    Notice,
}

impl LineSchema {
    /// Fewest non-blank lines a valid file may have.
    pub fn min_lines(self) -> usize {
        match self {
            Self::Achievement => 4,
            Self::Upload => 2,
            Self::Notice => 1,
        }
    }

    /// Map metadata text to fields.
    pub fn parse(self, text: &str) -> Result<Metadata, ParseError> {
        let lines = metadata_lines(text);
        if lines.len() < self.min_lines() {
            return Err(ParseError::TooFewLines {
                expected: self.min_lines(),
                found: lines.len(),
            });
        }

        let line = |i: usize| lines.get(i).copied().unwrap_or_default();
        let rest = |from: usize| lines.get(from..).map(|l| l.join("\n")).unwrap_or_default();

        let metadata = match self {
            Self::Achievement => Metadata {
                title: line(0).to_string(),
                category: line(1).parse::<AchievementCategory>()?.as_str().to_string(),
                date: ItemDate::new(line(2)),
                description: rest(3),
                pinned: false,
            },
            Self::Upload => Metadata {
                title: line(0).to_string(),
                category: String::new(),
                date: ItemDate::new(line(1)),
                description: rest(2),
                pinned: false,
            },
            Self::Notice => Metadata {
                title: line(0).to_string(),
                date: ItemDate::new(line(1)),
                category: match line(2) {
                    "" => DEFAULT_NOTICE_CATEGORY.to_string(),
                    category => category.to_string(),
                },
                pinned: line(3).eq_ignore_ascii_case("true"),
                description: rest(4),
            },
        };

        Ok(metadata)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lines_trimmed_and_blanks_dropped() {
        let text = "  Title \r\n\r\n Activity\n\n2024-03-01\n";
        assert_eq!(metadata_lines(text), vec!["Title", "Activity", "2024-03-01"]);
        assert!(metadata_lines("\n \n\t\n").is_empty());
    }

    #[test]
    fn test_achievement_round_trip() {
        let text = "Spring Fair\nActivity\n2024-03-01\nLine1\nLine2\n";
        let meta = LineSchema::Achievement.parse(text).unwrap();

        assert_eq!(meta.title, "Spring Fair");
        assert_eq!(meta.category, "Activity");
        assert_eq!(meta.date.raw, "2024-03-01");
        assert_eq!(meta.description, "Line1\nLine2");
        assert!(!meta.pinned);
    }

    #[test]
    fn test_achievement_too_few_lines() {
        let err = LineSchema::Achievement
            .parse("Spring Fair\nActivity\n")
            .unwrap_err();
        assert_eq!(
            err,
            ParseError::TooFewLines {
                expected: 4,
                found: 2
            }
        );
    }

    #[test]
    fn test_achievement_invalid_category() {
        let err = LineSchema::Achievement
            .parse("Spring Fair\nSports\n2024-03-01\nDescription")
            .unwrap_err();
        assert_eq!(err, ParseError::InvalidCategory("Sports".into()));
    }

    #[test]
    fn test_achievement_category_is_case_sensitive() {
        assert!(LineSchema::Achievement
            .parse("Title\nactivity\n2024-03-01\nDescription")
            .is_err());
    }

    #[test]
    fn test_upload_schema() {
        let meta = LineSchema::Upload
            .parse("Admission Forms\n2024-06-10\nForms for the new session.")
            .unwrap();
        assert_eq!(meta.title, "Admission Forms");
        assert_eq!(meta.date.raw, "2024-06-10");
        assert_eq!(meta.description, "Forms for the new session.");
        assert_eq!(meta.category, "");

        let minimal = LineSchema::Upload.parse("Title\n2024-06-10").unwrap();
        assert_eq!(minimal.description, "");

        assert!(LineSchema::Upload.parse("Title only").is_err());
    }

    #[test]
    fn test_notice_schema() {
        let meta = LineSchema::Notice
            .parse("Exam Schedule\n2024-02-15\nExams\nTRUE\nRoom 4\nBring ID")
            .unwrap();
        assert_eq!(meta.title, "Exam Schedule");
        assert_eq!(meta.category, "Exams");
        assert!(meta.pinned);
        assert_eq!(meta.description, "Room 4\nBring ID");
    }

    #[test]
    fn test_notice_defaults() {
        let meta = LineSchema::Notice.parse("Holiday").unwrap();
        assert_eq!(meta.title, "Holiday");
        assert_eq!(meta.category, DEFAULT_NOTICE_CATEGORY);
        assert_eq!(meta.date.parsed, None);
        assert!(!meta.pinned);

        let unpinned = LineSchema::Notice
            .parse("Holiday\n2024-01-26\nEvents\nno")
            .unwrap();
        assert!(!unpinned.pinned);

        assert!(LineSchema::Notice.parse("   \n").is_err());
    }
}

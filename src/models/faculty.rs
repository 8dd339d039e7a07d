//! Faculty and staff directory entries.

use serde::Deserialize;

/// A member of the school family, decoded from `faculty.toml`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct FacultyMember {
    pub id: u32,
    pub name: String,
    pub position: String,
    /// Empty for non-teaching staff
    #[serde(default)]
    pub department: String,
    /// Photo path inside the content repository
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub bio: String,
}

impl FacultyMember {
    /// Up to two initials for the avatar fallback, skipping honorifics.
    pub fn initials(&self) -> String {
        const HONORIFICS: &[&str] = &["mr.", "mrs.", "ms.", "dr.", "shri", "smt."];
        self.name
            .split_whitespace()
            .filter(|part| !HONORIFICS.contains(&part.to_lowercase().as_str()))
            .filter_map(|part| part.chars().next())
            .flat_map(char::to_uppercase)
            .take(2)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member(name: &str) -> FacultyMember {
        FacultyMember {
            id: 1,
            name: name.to_string(),
            position: String::new(),
            department: String::new(),
            image: String::new(),
            email: String::new(),
            phone: String::new(),
            bio: String::new(),
        }
    }

    #[test]
    fn test_initials() {
        assert_eq!(member("Mr. Manish Kumar Aditya").initials(), "MK");
        assert_eq!(member("Agash Bai").initials(), "AB");
        assert_eq!(member("mrs. lina patel").initials(), "LP");
        assert_eq!(member("").initials(), "");
    }
}

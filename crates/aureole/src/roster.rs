//! People shown in the bubbles.
//!
//! A [`Roster`] is an ordered list of [`Person`] records, usually loaded from
//! a TOML file of `[[people]]` tables:
//!
//! ```toml
//! [[people]]
//! image = "https://example.com/ada.jpg"
//! name = "Ada"
//! link = "https://example.com/ada"
//! reaction = "love"
//! ```
//!
//! Only `image` is required. [`Roster::sanitized`] drops records that cannot
//! be shown before the roster reaches a layout engine.

use std::collections::HashSet;

use log::{debug, warn};
use serde::Deserialize;

use crate::AureoleError;

/// One person: a photo plus optional display name, link and reaction tag.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Person {
    image: String,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    link: Option<String>,
    #[serde(default)]
    reaction: Option<String>,
}

impl Person {
    /// Creates a person with only an image reference.
    pub fn new(image: impl Into<String>) -> Self {
        Self {
            image: image.into(),
            name: None,
            link: None,
            reaction: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.link = Some(link.into());
        self
    }

    pub fn with_reaction(mut self, reaction: impl Into<String>) -> Self {
        self.reaction = Some(reaction.into());
        self
    }

    pub fn image(&self) -> &str {
        &self.image
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn link(&self) -> Option<&str> {
        self.link.as_deref()
    }

    pub fn reaction(&self) -> Option<&str> {
        self.reaction.as_deref()
    }

    /// Returns the display name, or an empty string when the person has none
    pub fn display_name(&self) -> &str {
        self.name().unwrap_or_default()
    }
}

/// Ordered list of people to place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Roster {
    #[serde(default)]
    people: Vec<Person>,
}

impl Roster {
    pub fn new(people: Vec<Person>) -> Self {
        Self { people }
    }

    /// Parse a roster from TOML source.
    ///
    /// # Errors
    ///
    /// Returns [`AureoleError::Roster`] carrying the source text when the
    /// TOML is malformed or a record lacks an `image`.
    pub fn from_toml_str(src: &str) -> Result<Self, AureoleError> {
        toml::from_str(src).map_err(|err| AureoleError::new_roster_error(err, src))
    }

    pub fn people(&self) -> &[Person] {
        &self.people
    }

    pub fn len(&self) -> usize {
        self.people.len()
    }

    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }

    /// Drop records that cannot be shown, keeping the original order.
    ///
    /// A record is dropped when its image reference is blank, or when an
    /// earlier record already uses the same image. Kept records have their
    /// image reference trimmed.
    pub fn sanitized(self) -> Self {
        let before = self.people.len();
        let mut seen = HashSet::new();

        let people: Vec<Person> = self
            .people
            .into_iter()
            .filter_map(|mut person| {
                let image = person.image.trim();
                if image.is_empty() {
                    warn!(name = person.display_name(); "Dropping person without image");
                    return None;
                }
                if !seen.insert(image.to_string()) {
                    debug!(image; "Dropping duplicate person");
                    return None;
                }
                person.image = image.to_string();
                Some(person)
            })
            .collect();

        debug!(before, after = people.len(); "Sanitized roster");
        Self { people }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_roster() {
        let roster = Roster::from_toml_str(
            r#"
            [[people]]
            image = "a.jpg"
            name = "Ada"
            link = "https://example.com/ada"
            reaction = "love"

            [[people]]
            image = "b.jpg"
            "#,
        )
        .unwrap();

        assert_eq!(roster.len(), 2);
        let ada = &roster.people()[0];
        assert_eq!(ada.image(), "a.jpg");
        assert_eq!(ada.display_name(), "Ada");
        assert_eq!(ada.link(), Some("https://example.com/ada"));
        assert_eq!(ada.reaction(), Some("love"));

        let anonymous = &roster.people()[1];
        assert_eq!(anonymous.display_name(), "");
        assert_eq!(anonymous.reaction(), None);
    }

    #[test]
    fn test_parse_empty_roster() {
        let roster = Roster::from_toml_str("").unwrap();
        assert!(roster.is_empty());
    }

    #[test]
    fn test_parse_missing_image_is_error() {
        let src = r#"
            [[people]]
            name = "Nobody"
        "#;
        let err = Roster::from_toml_str(src).unwrap_err();
        match err {
            AureoleError::Roster { src: kept, .. } => assert_eq!(kept, src),
            other => panic!("Expected roster error, got {other:?}"),
        }
    }

    #[test]
    fn test_sanitized_drops_blank_and_duplicate_images() {
        let roster = Roster::new(vec![
            Person::new("a.jpg").with_name("first"),
            Person::new("  "),
            Person::new("b.jpg"),
            Person::new("a.jpg").with_name("second"),
            Person::new(" b.jpg "),
            Person::new("c.jpg"),
        ])
        .sanitized();

        let images: Vec<&str> = roster.people().iter().map(Person::image).collect();
        assert_eq!(images, ["a.jpg", "b.jpg", "c.jpg"]);
        assert_eq!(roster.people()[0].display_name(), "first");
    }

    #[test]
    fn test_sanitized_trims_kept_images() {
        let roster = Roster::new(vec![
            Person::new("  a.jpg\n").with_name("Ada"),
            Person::new("\tb.jpg"),
        ])
        .sanitized();

        let images: Vec<&str> = roster.people().iter().map(Person::image).collect();
        assert_eq!(images, ["a.jpg", "b.jpg"]);
        assert_eq!(roster.people()[0].display_name(), "Ada");
    }

    #[test]
    fn test_sanitized_empty() {
        assert!(Roster::default().sanitized().is_empty());
    }
}

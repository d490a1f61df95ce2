use std::{fmt, str::FromStr};

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    Hero,
    Skills,
    Projects,
    Sdlc,
    Contact,
}

impl SectionId {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hero => "hero",
            Self::Skills => "skills",
            Self::Projects => "projects",
            Self::Sdlc => "sdlc",
            Self::Contact => "contact",
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown section: {0}")]
pub struct UnknownSection(pub String);

impl FromStr for SectionId {
    type Err = UnknownSection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SECTIONS
            .iter()
            .map(|s| s.id)
            .find(|id| id.as_str() == s)
            .ok_or_else(|| UnknownSection(s.to_string()))
    }
}

/// A named block of the page, addressable by its anchor id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section {
    pub id: SectionId,
    pub label: &'static str,
    pub icon: &'static str,
    pub order: usize,
}

pub static SECTIONS: [Section; 5] = [
    Section {
        id: SectionId::Hero,
        label: "Home",
        icon: "extra-home",
        order: 0,
    },
    Section {
        id: SectionId::Skills,
        label: "Skills",
        icon: "extra-user",
        order: 1,
    },
    Section {
        id: SectionId::Projects,
        label: "Projects",
        icon: "extra-code",
        order: 2,
    },
    Section {
        id: SectionId::Sdlc,
        label: "Engineering",
        icon: "extra-briefcase",
        order: 3,
    },
    Section {
        id: SectionId::Contact,
        label: "Contact",
        icon: "extra-email",
        order: 4,
    },
];

/// Vertical extent of a section in document coordinates, `[top, top + height)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extent {
    pub top: f64,
    pub height: f64,
}

impl Extent {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    pub fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_table_order() {
        for (i, section) in SECTIONS.iter().enumerate() {
            assert_eq!(section.order, i);
            assert_eq!(section.id as usize, i);
        }
        let ids = SECTIONS.iter().map(|s| s.id.as_str()).collect::<Vec<_>>();
        assert_eq!(ids, vec!["hero", "skills", "projects", "sdlc", "contact"]);
    }

    #[test]
    fn test_section_id_parse() {
        for section in SECTIONS.iter() {
            let parsed: SectionId = section.id.as_str().parse().unwrap();
            assert_eq!(parsed, section.id);
        }
        assert_eq!(
            "about".parse::<SectionId>(),
            Err(UnknownSection("about".to_string()))
        );
        assert!("Hero".parse::<SectionId>().is_err());
    }

    #[test]
    fn test_extent_is_half_open() {
        let extent = Extent::new(100.0, 50.0);
        assert!(!extent.contains(99.9));
        assert!(extent.contains(100.0));
        assert!(extent.contains(149.9));
        assert!(!extent.contains(150.0));
        assert_eq!(extent.bottom(), 150.0);
    }
}

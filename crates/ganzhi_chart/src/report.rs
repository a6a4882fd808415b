//! The ordered section report.
//!
//! Sections always come out in [`ALL_SECTIONS`] order regardless of the
//! order stages contribute them.

use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Report sections, in output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Section {
    BasicInfo,
    FourPillars,
    PillarDetail,
    Stems,
    Branches,
    HiddenStems,
    PrimaryRelationships,
    SecondaryRelationships,
    ElementalRoots,
    SoundElement,
    Stars,
    MajorCycle,
    ElementalScores,
    StructureAnalysis,
    FamilyRoles,
    ClassicalMonth,
    ClassicalHour,
    Constellation,
    YearCycleTable,
}

/// All sections in output order.
pub const ALL_SECTIONS: [Section; 19] = [
    Section::BasicInfo,
    Section::FourPillars,
    Section::PillarDetail,
    Section::Stems,
    Section::Branches,
    Section::HiddenStems,
    Section::PrimaryRelationships,
    Section::SecondaryRelationships,
    Section::ElementalRoots,
    Section::SoundElement,
    Section::Stars,
    Section::MajorCycle,
    Section::ElementalScores,
    Section::StructureAnalysis,
    Section::FamilyRoles,
    Section::ClassicalMonth,
    Section::ClassicalHour,
    Section::Constellation,
    Section::YearCycleTable,
];

impl Section {
    /// Stable section name used as the output key.
    pub const fn title(self) -> &'static str {
        match self {
            Self::BasicInfo => "Basic Info",
            Self::FourPillars => "Four Pillars",
            Self::PillarDetail => "Year/Month/Day/Hour",
            Self::Stems => "Stems",
            Self::Branches => "Branches",
            Self::HiddenStems => "Hidden Stems",
            Self::PrimaryRelationships => "Primary Relationships",
            Self::SecondaryRelationships => "Secondary Relationships",
            Self::ElementalRoots => "Elemental Roots",
            Self::SoundElement => "Sound-Element Relations",
            Self::Stars => "Stars",
            Self::MajorCycle => "Major Cycle",
            Self::ElementalScores => "Elemental Scores",
            Self::StructureAnalysis => "Structure Analysis",
            Self::FamilyRoles => "Family-Role Analysis",
            Self::ClassicalMonth => "Classical Text (Month)",
            Self::ClassicalHour => "Classical Text (Hour)",
            Self::Constellation => "Constellation",
            Self::YearCycleTable => "Year-Cycle Table",
        }
    }

    /// Whether the section may be left out of a report.
    pub const fn is_conditional(self) -> bool {
        matches!(self, Self::ClassicalMonth | Self::ClassicalHour)
    }

    pub fn from_title(title: &str) -> Option<Section> {
        ALL_SECTIONS.into_iter().find(|s| s.title() == title)
    }
}

/// Collects section contributions; contributions to one section append.
#[derive(Debug, Default)]
pub struct ReportBuilder {
    sections: BTreeMap<Section, Vec<String>>,
}

impl ReportBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add lines to a section.
    pub fn section(mut self, section: Section, lines: Vec<String>) -> Self {
        self.sections.entry(section).or_default().extend(lines);
        self
    }

    /// Add a conditional section only when `text` is present.
    pub fn optional(self, section: Section, text: Option<String>) -> Self {
        match text {
            Some(t) => self.section(section, vec![t]),
            None => self,
        }
    }

    pub fn build(self) -> Report {
        Report {
            sections: self.sections.into_iter().collect(),
        }
    }
}

/// An immutable, ordered mapping of section to lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    sections: Vec<(Section, Vec<String>)>,
}

impl Report {
    /// Sections in output order.
    pub fn sections(&self) -> impl Iterator<Item = (Section, &[String])> {
        self.sections.iter().map(|(s, l)| (*s, l.as_slice()))
    }

    pub fn lines(&self, section: Section) -> Option<&[String]> {
        self.sections
            .iter()
            .find(|(s, _)| *s == section)
            .map(|(_, l)| l.as_slice())
    }

    pub fn contains(&self, section: Section) -> bool {
        self.lines(section).is_some()
    }

    /// First line in `section` starting with `prefix`.
    pub fn find_line(&self, section: Section, prefix: &str) -> Option<&str> {
        self.lines(section)?
            .iter()
            .find(|l| l.starts_with(prefix))
            .map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

impl Serialize for Report {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.sections.len()))?;
        for (section, lines) in &self.sections {
            map.serialize_entry(section.title(), lines)?;
        }
        map.end()
    }
}

/// Plain-text rendering: a bracketed title per section, then its lines.
impl Display for Report {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for (i, (section, lines)) in self.sections.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            writeln!(f, "[{}]", section.title())?;
            for line in lines {
                writeln!(f, "{line}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sections_sorted_regardless_of_insertion() {
        let r = ReportBuilder::new()
            .section(Section::Stars, vec!["b".into()])
            .section(Section::BasicInfo, vec!["a".into()])
            .section(Section::Stars, vec!["c".into()])
            .build();
        let order: Vec<Section> = r.sections().map(|(s, _)| s).collect();
        assert_eq!(order, vec![Section::BasicInfo, Section::Stars]);
        assert_eq!(r.lines(Section::Stars).unwrap(), ["b", "c"]);
    }

    #[test]
    fn optional_sections_omitted_when_absent() {
        let r = ReportBuilder::new()
            .optional(Section::ClassicalMonth, None)
            .optional(Section::ClassicalHour, Some("x".into()))
            .build();
        assert!(!r.contains(Section::ClassicalMonth));
        assert!(r.contains(Section::ClassicalHour));
    }

    #[test]
    fn json_keys_keep_section_order() {
        let r = ReportBuilder::new()
            .section(Section::YearCycleTable, vec!["z".into()])
            .section(Section::FourPillars, vec!["Four Pillars: 甲子".into()])
            .build();
        let json = serde_json::to_string(&r).unwrap();
        assert_eq!(
            json,
            r#"{"Four Pillars":["Four Pillars: 甲子"],"Year-Cycle Table":["z"]}"#
        );
    }

    #[test]
    fn titles_round_trip() {
        for s in ALL_SECTIONS {
            assert_eq!(Section::from_title(s.title()), Some(s));
        }
        let conditional = ALL_SECTIONS.iter().filter(|s| s.is_conditional()).count();
        assert_eq!(conditional, 2);
    }

    #[test]
    fn text_rendering() {
        let r = ReportBuilder::new()
            .section(Section::BasicInfo, vec!["Sex: Male".into()])
            .section(Section::Stars, vec![])
            .build();
        assert_eq!(r.to_string(), "[Basic Info]\nSex: Male\n\n[Stars]\n");
    }
}

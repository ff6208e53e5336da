use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::ArudError;

/// Identity of one of Al-Khalil's five circles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CircleId {
    #[serde(rename = "circle1-mixed")]
    Mixed,
    #[serde(rename = "circle2-pure")]
    Pure,
    #[serde(rename = "circle3-contracted")]
    Contracted,
    #[serde(rename = "circle4-accordant")]
    Accordant,
    #[serde(rename = "circle5-consonant")]
    Consonant,
}

impl CircleId {
    pub const ALL: [CircleId; 5] = [
        CircleId::Mixed,
        CircleId::Pure,
        CircleId::Contracted,
        CircleId::Accordant,
        CircleId::Consonant,
    ];

    /// Stable slug used in datasets and on the command line.
    pub fn slug(self) -> &'static str {
        match self {
            CircleId::Mixed => "circle1-mixed",
            CircleId::Pure => "circle2-pure",
            CircleId::Contracted => "circle3-contracted",
            CircleId::Accordant => "circle4-accordant",
            CircleId::Consonant => "circle5-consonant",
        }
    }
}

impl fmt::Display for CircleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for CircleId {
    type Err = ArudError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CircleId::ALL
            .into_iter()
            .find(|id| id.slug() == s)
            .ok_or_else(|| ArudError::UnknownCircle(s.to_string()))
    }
}

/// Colours used when drawing a circle. Values are CSS hex strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CircleTheme {
    pub primary_color: String,
    pub accent_color: String,
    pub background_gradient: [String; 2],
    pub border_color: String,
}

/// A verse illustrating a meter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoetryExample {
    pub text: String,
    pub poet: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub translation: Option<String>,
    pub era: String,
}

/// A named meter (bahr): a start offset and a grouping over its circle's
/// atomic sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meter {
    pub id: String,
    pub name: String,
    pub name_transliteration: String,
    pub description: String,
    pub circle_id: CircleId,
    pub start_offset: usize,
    /// Number of atomic units consumed by each foot, in order.
    pub parsing_instructions: Vec<usize>,
    pub pattern_transliteration: String,
    pub historical_usage: String,
    #[serde(default)]
    pub famous_examples: Vec<PoetryExample>,
}

impl Meter {
    /// Total number of atomic units the meter spans.
    pub fn total_units(&self) -> usize {
        self.parsing_instructions.iter().sum()
    }

    /// The example shown in the detail view, if the meter has any.
    pub fn featured_example(&self) -> Option<&PoetryExample> {
        self.famous_examples.first()
    }
}

/// One of the five prosodic circles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Circle {
    pub id: CircleId,
    pub name: String,
    pub name_transliteration: String,
    pub description: String,
    /// Cyclic sequence of syllabic unit symbols such as `0//` or `0/`.
    pub atomic_sequence: Vec<String>,
    pub base_sequence_length: usize,
    pub meters: Vec<Meter>,
    pub visual_theme: CircleTheme,
    /// Display order, 1 to 5.
    pub order: u8,
}

impl Circle {
    pub fn meter_count(&self) -> usize {
        self.meters.len()
    }

    pub fn meter_at(&self, index: usize) -> Option<&Meter> {
        self.meters.get(index)
    }

    /// Unit at `index`, wrapping around the sequence.
    pub fn unit_at(&self, index: usize) -> Option<&str> {
        if self.atomic_sequence.is_empty() {
            return None;
        }
        Some(self.atomic_sequence[index % self.atomic_sequence.len()].as_str())
    }
}

/// A metrical foot in its spaced (`unmerged`) and joined (`merged`) forms.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tafila {
    pub unmerged: String,
    pub merged: String,
}

impl Tafila {
    pub fn new(unmerged: impl Into<String>, merged: impl Into<String>) -> Self {
        Self {
            unmerged: unmerged.into(),
            merged: merged.into(),
        }
    }

    /// Literal foot built from raw unit symbols, used when a grouping has no
    /// known name.
    pub fn literal<S: AsRef<str>>(units: &[S]) -> Self {
        let parts: Vec<&str> = units.iter().map(AsRef::as_ref).collect();
        Self {
            unmerged: parts.join(" "),
            merged: parts.concat(),
        }
    }
}

impl fmt::Display for Tafila {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.merged)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn circle_ids_parse_from_their_slugs() {
        for id in CircleId::ALL {
            assert_eq!(id.slug().parse::<CircleId>().unwrap(), id);
        }
        assert!(matches!(
            "circle6-missing".parse::<CircleId>(),
            Err(ArudError::UnknownCircle(_))
        ));
    }

    #[test]
    fn circle_ids_serialise_as_slugs() {
        let json = serde_json::to_string(&CircleId::Accordant).unwrap();
        assert_eq!(json, "\"circle4-accordant\"");
    }

    #[test]
    fn literal_feet_join_and_concatenate_units() {
        let foot = Tafila::literal(&["0//", "0/", "/0/"]);
        assert_eq!(foot.unmerged, "0// 0/ /0/");
        assert_eq!(foot.merged, "0//0//0/");
    }

    #[test]
    fn unit_lookup_wraps_cyclically() {
        let circle = Circle {
            id: CircleId::Mixed,
            name: String::new(),
            name_transliteration: String::new(),
            description: String::new(),
            atomic_sequence: vec!["0//".into(), "0/".into()],
            base_sequence_length: 2,
            meters: Vec::new(),
            visual_theme: CircleTheme {
                primary_color: "#000000".into(),
                accent_color: "#000000".into(),
                background_gradient: ["#000000".into(), "#000000".into()],
                border_color: "#000000".into(),
            },
            order: 1,
        };
        assert_eq!(circle.unit_at(3), Some("0/"));
        assert!(circle.meter_at(0).is_none());
    }
}

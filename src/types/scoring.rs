use serde::Serialize;
use std::collections::BTreeMap;

pub type QuestionId = u8;
pub type Score = u8;

pub const MIN_ANSWER: u8 = 1;
pub const MAX_ANSWER: u8 = 6;

/// The six interpersonal-needs scales, in report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScaleKind {
    WantedInclusion,
    ExpressedInclusion,
    WantedControl,
    ExpressedControl,
    WantedAffection,
    ExpressedAffection,
}

impl ScaleKind {
    pub const ALL: [ScaleKind; 6] = [
        ScaleKind::WantedInclusion,
        ScaleKind::ExpressedInclusion,
        ScaleKind::WantedControl,
        ScaleKind::ExpressedControl,
        ScaleKind::WantedAffection,
        ScaleKind::ExpressedAffection,
    ];

    pub fn id(self) -> &'static str {
        match self {
            ScaleKind::WantedInclusion => "wanted_inclusion",
            ScaleKind::ExpressedInclusion => "expressed_inclusion",
            ScaleKind::WantedControl => "wanted_control",
            ScaleKind::ExpressedControl => "expressed_control",
            ScaleKind::WantedAffection => "wanted_affection",
            ScaleKind::ExpressedAffection => "expressed_affection",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ScaleKind::WantedInclusion => "Inclusão Desejada",
            ScaleKind::ExpressedInclusion => "Inclusão Expressa",
            ScaleKind::WantedControl => "Controle Desejado",
            ScaleKind::ExpressedControl => "Controle Expressa",
            ScaleKind::WantedAffection => "Afeto Desejado",
            ScaleKind::ExpressedAffection => "Afeto Expressa",
        }
    }
}

/// Each dimension pairs a wanted scale with an expressed one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Inclusion,
    Control,
    Affection,
}

impl Dimension {
    pub const ALL: [Dimension; 3] = [Dimension::Inclusion, Dimension::Control, Dimension::Affection];

    pub fn scales(self) -> (ScaleKind, ScaleKind) {
        match self {
            Dimension::Inclusion => (ScaleKind::WantedInclusion, ScaleKind::ExpressedInclusion),
            Dimension::Control => (ScaleKind::WantedControl, ScaleKind::ExpressedControl),
            Dimension::Affection => (ScaleKind::WantedAffection, ScaleKind::ExpressedAffection),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Dimension::Inclusion => "Inclusão",
            Dimension::Control => "Controle",
            Dimension::Affection => "Afeto",
        }
    }
}

/// Hit counts per scale. Every scale of the scored table has an entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ScaleScores(BTreeMap<ScaleKind, Score>);

impl ScaleScores {
    pub fn get(&self, kind: ScaleKind) -> Score {
        self.0.get(&kind).copied().unwrap_or(0)
    }

    pub(crate) fn entry(&mut self, kind: ScaleKind) -> &mut Score {
        self.0.entry(kind).or_insert(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (ScaleKind, Score)> + '_ {
        self.0.iter().map(|(kind, score)| (*kind, *score))
    }
}

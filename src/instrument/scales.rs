use crate::types::scoring::{QuestionId, ScaleKind};

/// One question of a scale and the answers that count as a hit.
#[derive(Debug, Clone, Copy)]
pub struct ScaleItem {
    pub question: QuestionId,
    pub accepted: &'static [u8],
}

impl ScaleItem {
    pub fn accepts(&self, answer: u8) -> bool {
        self.accepted.contains(&answer)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Scale {
    pub kind: ScaleKind,
    pub items: &'static [ScaleItem],
}

impl Scale {
    pub fn max_score(&self) -> usize {
        self.items.len()
    }
}

const fn item(question: QuestionId, accepted: &'static [u8]) -> ScaleItem {
    ScaleItem { question, accepted }
}

/// Scoring keys of the instrument. Transcription changes alter scores.
pub static SCALES: [Scale; 6] = [
    Scale {
        kind: ScaleKind::WantedInclusion,
        items: &[
            item(28, &[5, 6]),
            item(31, &[5, 6]),
            item(34, &[5, 6]),
            item(37, &[6]),
            item(39, &[6]),
            item(42, &[5, 6]),
            item(45, &[5, 6]),
            item(48, &[5, 6]),
            item(51, &[5, 6]),
        ],
    },
    Scale {
        kind: ScaleKind::ExpressedInclusion,
        items: &[
            item(1, &[4, 5, 6]),
            item(3, &[3, 4, 5, 6]),
            item(5, &[3, 4, 5, 6]),
            item(7, &[4, 5, 6]),
            item(9, &[5, 6]),
            item(11, &[5, 6]),
            item(13, &[5, 6]),
            item(15, &[6]),
            item(16, &[6]),
        ],
    },
    Scale {
        kind: ScaleKind::WantedControl,
        items: &[
            item(2, &[3, 4, 5, 6]),
            item(6, &[3, 4, 5, 6]),
            item(10, &[4, 5, 6]),
            item(14, &[4, 5, 6]),
            item(18, &[4, 5, 6]),
            item(20, &[4, 5, 6]),
            item(22, &[3, 4, 5, 6]),
            item(24, &[4, 5, 6]),
            item(26, &[4, 5, 6]),
        ],
    },
    Scale {
        kind: ScaleKind::ExpressedControl,
        items: &[
            item(30, &[4, 5, 6]),
            item(33, &[4, 5, 6]),
            item(36, &[5, 6]),
            item(41, &[3, 4, 5, 6]),
            item(44, &[4, 5, 6]),
            item(47, &[4, 5, 6]),
            item(50, &[5, 6]),
            item(53, &[5, 6]),
            item(54, &[5, 6]),
        ],
    },
    Scale {
        kind: ScaleKind::WantedAffection,
        items: &[
            item(29, &[5, 6]),
            item(32, &[5, 6]),
            item(35, &[1, 2]),
            item(38, &[5, 6]),
            item(40, &[1, 2]),
            item(43, &[6]),
            item(46, &[1, 2]),
            item(49, &[5, 6]),
            item(52, &[1, 2]),
        ],
    },
    Scale {
        kind: ScaleKind::ExpressedAffection,
        items: &[
            item(4, &[5, 6]),
            item(8, &[5, 6]),
            item(12, &[6]),
            item(17, &[5, 6]),
            item(19, &[1, 2, 3]),
            item(21, &[5, 6]),
            item(23, &[5, 6]),
            item(25, &[1, 2, 3]),
            item(27, &[5, 6]),
        ],
    },
];

#[cfg(test)]
pub fn scale(kind: ScaleKind) -> Option<&'static Scale> {
    SCALES.iter().find(|scale| scale.kind == kind)
}

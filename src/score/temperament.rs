use crate::types::report::Temperament;
use crate::types::scoring::{Dimension, ScaleScores, Score};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Band {
    Low,
    Middle,
    High,
}

fn band(score: Score) -> Band {
    match score {
        0..=3 => Band::Low,
        6..=9 => Band::High,
        _ => Band::Middle,
    }
}

/// Quadrant of a (wanted, expressed) pair. Scores of 4 or 5 on either axis
/// have no label.
pub fn classify(wanted: Score, expressed: Score) -> Option<Temperament> {
    match (band(wanted), band(expressed)) {
        (Band::Low, Band::Low) => Some(Temperament::Melancholic),
        (Band::High, Band::Low) => Some(Temperament::Supine),
        (Band::Low, Band::High) => Some(Temperament::Choleric),
        (Band::High, Band::High) => Some(Temperament::Sanguine),
        _ => None,
    }
}

pub fn classify_all(scores: &ScaleScores) -> BTreeMap<Dimension, Temperament> {
    Dimension::ALL
        .into_iter()
        .filter_map(|dimension| {
            let (wanted, expressed) = dimension.scales();
            classify(scores.get(wanted), scores.get(expressed)).map(|label| (dimension, label))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::scoring::ScaleKind;

    #[test]
    fn quadrants_map_to_labels() {
        assert_eq!(classify(0, 3), Some(Temperament::Melancholic));
        assert_eq!(classify(9, 0), Some(Temperament::Supine));
        assert_eq!(classify(2, 7), Some(Temperament::Choleric));
        assert_eq!(classify(6, 6), Some(Temperament::Sanguine));
    }

    #[test]
    fn middle_band_is_unlabelled() {
        assert_eq!(classify(4, 0), None);
        assert_eq!(classify(0, 5), None);
        assert_eq!(classify(5, 5), None);
    }

    #[test]
    fn classify_all_skips_unlabelled_dimensions() {
        let mut scores = ScaleScores::default();
        *scores.entry(ScaleKind::WantedInclusion) = 9;
        *scores.entry(ScaleKind::ExpressedInclusion) = 9;
        *scores.entry(ScaleKind::WantedControl) = 4;
        *scores.entry(ScaleKind::ExpressedControl) = 1;
        *scores.entry(ScaleKind::WantedAffection) = 1;
        *scores.entry(ScaleKind::ExpressedAffection) = 0;

        let labels = classify_all(&scores);
        assert_eq!(labels.get(&Dimension::Inclusion), Some(&Temperament::Sanguine));
        assert_eq!(labels.get(&Dimension::Control), None);
        assert_eq!(labels.get(&Dimension::Affection), Some(&Temperament::Melancholic));
    }
}

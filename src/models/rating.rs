use serde::Serialize;

pub const MIN_SCORE: f64 = 1.0;
pub const MAX_SCORE: f64 = 5.0;
pub const SCORE_STEP: f64 = 0.5;
const DEFAULT_SCORE: f64 = 3.0;

/// One hygiene dimension a user can rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    WaterQuality,
    Masks,
    Gloves,
    Cleanliness,
}

impl Dimension {
    pub const ALL: [Dimension; 4] = [
        Dimension::WaterQuality,
        Dimension::Masks,
        Dimension::Gloves,
        Dimension::Cleanliness,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Dimension::WaterQuality => "Water Quality",
            Dimension::Masks => "Masks",
            Dimension::Gloves => "Gloves",
            Dimension::Cleanliness => "Cleanliness",
        }
    }

    pub fn slug(self) -> &'static str {
        match self {
            Dimension::WaterQuality => "water-quality",
            Dimension::Masks => "masks",
            Dimension::Gloves => "gloves",
            Dimension::Cleanliness => "cleanliness",
        }
    }
}

/// Body of `POST /ratings`. Every dimension stays within 1..=5 on half steps.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Rating {
    pub stall_id: String,
    pub water_quality: f64,
    pub masks: f64,
    pub gloves: f64,
    pub cleanliness: f64,
}

impl Rating {
    pub fn new(stall_id: impl Into<String>) -> Self {
        Self {
            stall_id: stall_id.into(),
            water_quality: DEFAULT_SCORE,
            masks: DEFAULT_SCORE,
            gloves: DEFAULT_SCORE,
            cleanliness: DEFAULT_SCORE,
        }
    }

    pub fn get(&self, dimension: Dimension) -> f64 {
        match dimension {
            Dimension::WaterQuality => self.water_quality,
            Dimension::Masks => self.masks,
            Dimension::Gloves => self.gloves,
            Dimension::Cleanliness => self.cleanliness,
        }
    }

    pub fn set(&mut self, dimension: Dimension, value: f64) {
        let value = snap_score(value);
        match dimension {
            Dimension::WaterQuality => self.water_quality = value,
            Dimension::Masks => self.masks = value,
            Dimension::Gloves => self.gloves = value,
            Dimension::Cleanliness => self.cleanliness = value,
        }
    }
}

/// Clamps to the slider range and rounds to the nearest half point.
/// NaN falls back to the default score.
pub fn snap_score(value: f64) -> f64 {
    if value.is_nan() {
        return DEFAULT_SCORE;
    }
    let clamped = value.clamp(MIN_SCORE, MAX_SCORE);
    (clamped / SCORE_STEP).round() * SCORE_STEP
}

/// Colour band for an aggregate score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreTier {
    Good,
    Fair,
    Poor,
}

impl ScoreTier {
    pub fn of(score: f64) -> Self {
        if score >= 4.0 {
            ScoreTier::Good
        } else if score >= 3.0 {
            ScoreTier::Fair
        } else {
            ScoreTier::Poor
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            ScoreTier::Good => "score-good",
            ScoreTier::Fair => "score-fair",
            ScoreTier::Poor => "score-poor",
        }
    }
}

pub fn format_score(score: f64) -> String {
    format!("{:.1}", score)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rating_starts_at_three() {
        let rating = Rating::new("s1");
        for dimension in Dimension::ALL {
            assert_eq!(rating.get(dimension), 3.0);
        }
    }

    #[test]
    fn test_set_snaps_and_clamps() {
        let mut rating = Rating::new("s1");
        rating.set(Dimension::Masks, 4.3);
        rating.set(Dimension::Gloves, 9.0);
        rating.set(Dimension::Cleanliness, 0.2);
        rating.set(Dimension::WaterQuality, f64::NAN);
        assert_eq!(rating.masks, 4.5);
        assert_eq!(rating.gloves, 5.0);
        assert_eq!(rating.cleanliness, 1.0);
        assert_eq!(rating.water_quality, 3.0);
    }

    #[test]
    fn test_rating_wire_shape() {
        let mut rating = Rating::new("s1");
        rating.set(Dimension::WaterQuality, 4.5);
        let json = serde_json::to_value(&rating).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "stall_id": "s1",
                "water_quality": 4.5,
                "masks": 3.0,
                "gloves": 3.0,
                "cleanliness": 3.0
            })
        );
    }

    #[test]
    fn test_score_tier_boundaries() {
        assert_eq!(ScoreTier::of(5.0), ScoreTier::Good);
        assert_eq!(ScoreTier::of(4.0), ScoreTier::Good);
        assert_eq!(ScoreTier::of(3.99), ScoreTier::Fair);
        assert_eq!(ScoreTier::of(3.0), ScoreTier::Fair);
        assert_eq!(ScoreTier::of(2.99), ScoreTier::Poor);
        assert_eq!(ScoreTier::of(0.0), ScoreTier::Poor);
    }

    #[test]
    fn test_format_score() {
        assert_eq!(format_score(4.0), "4.0");
        assert_eq!(format_score(3.24), "3.2");
        assert_eq!(format_score(3.26), "3.3");
    }
}

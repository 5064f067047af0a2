//! Static record-type catalogs mirroring the backend's enumerations.
//!
//! The server renders these tables into the page context; the client treats
//! them as read-only inputs. Keys are the backend enum names (`RUNNING`,
//! `BODY_FAT`, ...) and travel unchanged through scope payloads and record
//! `type` fields.

/// Top-level record category selected in the share form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartType {
    Exercises,
    BodyMeasurements,
    Achievements,
}

impl ChartType {
    pub const ALL: [ChartType; 3] = [
        ChartType::Exercises,
        ChartType::BodyMeasurements,
        ChartType::Achievements,
    ];

    /// Wire name, also used for element-id prefixes.
    pub fn as_str(self) -> &'static str {
        match self {
            ChartType::Exercises => "exercises",
            ChartType::BodyMeasurements => "body_measurements",
            ChartType::Achievements => "achievements",
        }
    }

    /// Tolerant parse: unknown or empty input means "nothing selected".
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "exercises" => Some(ChartType::Exercises),
            "body_measurements" => Some(ChartType::BodyMeasurements),
            "achievements" => Some(ChartType::Achievements),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ChartType::Exercises => "Exercises",
            ChartType::BodyMeasurements => "Body Measurements",
            ChartType::Achievements => "Achievements",
        }
    }

    /// The `name` attribute shared by this category's sub-type checkboxes.
    pub fn input_name(self) -> &'static str {
        match self {
            ChartType::Exercises => "exerciseType",
            ChartType::BodyMeasurements => "measurementType",
            ChartType::Achievements => "achievementType",
        }
    }
}

/// One selectable sub-type: backend key plus display label, with a display
/// unit for body measurements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubtypeOption {
    pub key: &'static str,
    pub label: &'static str,
    pub unit: Option<&'static str>,
}

const fn option(key: &'static str, label: &'static str) -> SubtypeOption {
    SubtypeOption {
        key,
        label,
        unit: None,
    }
}

const fn measured(
    key: &'static str,
    label: &'static str,
    unit: &'static str,
) -> SubtypeOption {
    SubtypeOption {
        key,
        label,
        unit: Some(unit),
    }
}

pub const EXERCISE_TYPES: &[SubtypeOption] = &[
    option("CYCLING", "Cycling"),
    option("RUNNING", "Running"),
    option("SWIMMING", "Swimming"),
    option("WEIGHTLIFTING", "Weight Lifting"),
    option("YOGA", "Yoga"),
];

pub const MEASUREMENT_TYPES: &[SubtypeOption] = &[
    measured("WEIGHT", "Weight", "kg"),
    measured("HEIGHT", "Height", "cm"),
    measured("BODY_FAT", "Body Fat", "%"),
];

/// Metric columns recorded per exercise type. Distances are meters,
/// durations minutes, weights kilograms.
pub fn exercise_metrics(key: &str) -> &'static [&'static str] {
    match key {
        "CYCLING" | "RUNNING" | "SWIMMING" => &["distance", "duration"],
        "WEIGHTLIFTING" => &["weight", "sets", "reps"],
        "YOGA" => &["duration"],
        _ => &[],
    }
}

/// Which sub-type options each chart type offers. Injected into the share
/// form so the wiring stays configurable per category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubtypeCatalog {
    pub exercises: &'static [SubtypeOption],
    pub body_measurements: &'static [SubtypeOption],
    pub achievements: &'static [SubtypeOption],
}

impl SubtypeCatalog {
    pub fn options_for(&self, chart: ChartType) -> &'static [SubtypeOption] {
        match chart {
            ChartType::Exercises => self.exercises,
            ChartType::BodyMeasurements => self.body_measurements,
            ChartType::Achievements => self.achievements,
        }
    }
}

/// Achievements are milestones grouped by exercise type on the server, so
/// their sub-type filter reuses the exercise-type table.
pub static DEFAULT_CATALOG: SubtypeCatalog = SubtypeCatalog {
    exercises: EXERCISE_TYPES,
    body_measurements: MEASUREMENT_TYPES,
    achievements: EXERCISE_TYPES,
};

/// Serde helper: chart types persist as their wire name, with the empty
/// string standing in for "nothing selected".
pub mod chart_type_repr {
    use super::ChartType;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &Option<ChartType>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(value.map(ChartType::as_str).unwrap_or(""))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<ChartType>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(ChartType::parse(&raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chart_type_round_trips_through_wire_names() {
        for chart in ChartType::ALL {
            assert_eq!(ChartType::parse(chart.as_str()), Some(chart));
        }
        assert_eq!(ChartType::parse(""), None);
        assert_eq!(ChartType::parse("calories"), None);
    }

    #[test]
    fn achievements_reuse_the_exercise_table() {
        let options = DEFAULT_CATALOG.options_for(ChartType::Achievements);
        assert_eq!(options, EXERCISE_TYPES);
    }

    #[test]
    fn every_exercise_type_has_metrics() {
        for option in EXERCISE_TYPES {
            assert!(
                !exercise_metrics(option.key).is_empty(),
                "{} has no metrics",
                option.key
            );
        }
        assert!(exercise_metrics("PILATES").is_empty());
    }

    #[test]
    fn measurement_types_carry_units() {
        for option in MEASUREMENT_TYPES {
            assert!(option.unit.is_some());
        }
    }
}

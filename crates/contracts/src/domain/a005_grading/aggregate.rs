use serde::{Deserialize, Serialize};

/// One band of the grading scale, e.g. `A-` for 75..=79 worth 11 points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradeBand {
    #[serde(alias = "_id")]
    pub id: i64,
    pub grade: String,
    pub min_mark: f64,
    pub max_mark: f64,
    pub points: u8,
}

impl GradeBand {
    pub fn contains(&self, mark: f64) -> bool {
        mark >= self.min_mark && mark <= self.max_mark
    }
}

/// Body of `PUT /grading/updategrade/:id`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GradeBandDto {
    pub grade: String,
    pub min_mark: f64,
    pub max_mark: f64,
    pub points: u8,
}

impl GradeBandDto {
    pub fn validate(&self) -> Result<(), String> {
        if self.grade.trim().is_empty() {
            return Err("Please enter grade".into());
        }
        if !(0.0..=100.0).contains(&self.min_mark) || !(0.0..=100.0).contains(&self.max_mark) {
            return Err("Marks must be between 0 and 100".into());
        }
        if self.min_mark > self.max_mark {
            return Err("Minimum mark cannot exceed maximum mark".into());
        }
        if self.points > 12 {
            return Err("Points cannot exceed 12".into());
        }
        Ok(())
    }
}

/// Finds the band a mark falls into. Bands are expected not to overlap.
pub fn grade_for(bands: &[GradeBand], mark: f64) -> Option<&GradeBand> {
    bands.iter().find(|b| b.contains(mark))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn band(grade: &str, min: f64, max: f64, points: u8) -> GradeBand {
        GradeBand {
            id: points as i64,
            grade: grade.into(),
            min_mark: min,
            max_mark: max,
            points,
        }
    }

    #[test]
    fn validate_rejects_inverted_and_out_of_range_bands() {
        let ok = GradeBandDto {
            grade: "B+".into(),
            min_mark: 65.0,
            max_mark: 69.0,
            points: 9,
        };
        assert!(ok.validate().is_ok());

        let inverted = GradeBandDto {
            min_mark: 70.0,
            ..ok.clone()
        };
        assert_eq!(
            inverted.validate(),
            Err("Minimum mark cannot exceed maximum mark".into())
        );

        let over = GradeBandDto {
            max_mark: 101.0,
            ..ok
        };
        assert!(over.validate().is_err());
    }

    #[test]
    fn grade_lookup_uses_inclusive_bounds() {
        let bands = vec![band("A", 80.0, 100.0, 12), band("A-", 75.0, 79.99, 11)];
        assert_eq!(grade_for(&bands, 80.0).map(|b| b.grade.as_str()), Some("A"));
        assert_eq!(grade_for(&bands, 75.0).map(|b| b.grade.as_str()), Some("A-"));
        assert!(grade_for(&bands, 40.0).is_none());
    }
}

use serde::*;
use serde_aux::field_attributes::deserialize_number_from_string;
use crate::affinity::MAX_DAMAGE;
use crate::error::RankingError;

/*
    Knobs shared by every engine. The defaults reproduce the published rankings; a JSON file
    can override any subset of them (see data_loader::load_context).
*/
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RankingContext {
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub iterations: usize,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub damping: f64,               // Share of each class's score spread evenly over all other classes
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub max_damage: f64,            // Largest multiplier in the matrix, the Markov threat divisor

    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub full_link_threshold: f64,   // Above this an offensive link is full strength
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub half_link_threshold: f64,   // Above this (and not above full) it is half strength
}

impl Default for RankingContext {
    fn default() -> Self {
        Self {
            iterations: 1000,
            damping: 0.1,
            max_damage: MAX_DAMAGE,

            full_link_threshold: 1.75,
            half_link_threshold: 1.25,
        }
    }
}

impl RankingContext {
    pub fn with_iterations(iterations: usize) -> Self {
        Self { iterations, ..Self::default() }
    }

    pub fn validate(&self) -> Result<(), RankingError> {
        let fields = [
            ("damping", self.damping),
            ("max_damage", self.max_damage),
            ("full_link_threshold", self.full_link_threshold),
            ("half_link_threshold", self.half_link_threshold),
        ];
        for (name, value) in fields {
            if !value.is_finite() {
                return Err(RankingError::InvalidContext(format!("{name} {value} is not a finite number")));
            }
        }

        if self.iterations == 0 {
            return Err(RankingError::InvalidContext("iterations must be positive".to_string()));
        }
        if !(0.0..=1.0).contains(&self.damping) {
            return Err(RankingError::InvalidContext(format!("damping {} is outside [0, 1]", self.damping)));
        }
        // A smaller divisor pushes threat above 1 and the giver's share below zero
        if self.max_damage < MAX_DAMAGE {
            return Err(RankingError::InvalidContext(format!(
                "max_damage {} is below the largest affinity {MAX_DAMAGE}",
                self.max_damage
            )));
        }
        // Below 1.0 a weakness would count as an offensive link
        if self.half_link_threshold < 1.0 {
            return Err(RankingError::InvalidContext(format!(
                "half link threshold {} is below neutral damage",
                self.half_link_threshold
            )));
        }
        if self.half_link_threshold > self.full_link_threshold {
            return Err(RankingError::InvalidContext(format!(
                "half link threshold {} is above full link threshold {}",
                self.half_link_threshold, self.full_link_threshold
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let ctx = RankingContext::default();
        assert_eq!(ctx.iterations, 1000);
        assert_eq!(ctx.damping, 0.1);
        assert!(ctx.validate().is_ok());
    }

    #[test]
    fn rejects_bad_values() {
        assert!(RankingContext::with_iterations(0).validate().is_err());

        let mut ctx = RankingContext::default();
        ctx.damping = 1.5;
        assert!(ctx.validate().is_err());

        let mut ctx = RankingContext::default();
        ctx.half_link_threshold = 1.9;
        assert!(matches!(ctx.validate(), Err(RankingError::InvalidContext(_))));

        let mut ctx = RankingContext::default();
        ctx.half_link_threshold = 0.4;
        assert!(ctx.validate().is_err());

        let mut ctx = RankingContext::default();
        ctx.max_damage = 0.6;
        assert!(ctx.validate().is_err());

        let mut ctx = RankingContext::default();
        ctx.max_damage = 1.99;
        assert!(ctx.validate().is_err());
    }

    #[test]
    fn rejects_non_finite_values() {
        let mut ctx = RankingContext::default();
        ctx.max_damage = f64::NAN;
        assert!(ctx.validate().is_err());

        let mut ctx = RankingContext::default();
        ctx.full_link_threshold = f64::NAN;
        assert!(ctx.validate().is_err());

        let mut ctx = RankingContext::default();
        ctx.half_link_threshold = f64::NAN;
        assert!(ctx.validate().is_err());

        let mut ctx = RankingContext::default();
        ctx.damping = f64::INFINITY;
        assert!(ctx.validate().is_err());
    }

    #[test]
    fn larger_max_damage_is_allowed() {
        let mut ctx = RankingContext::default();
        ctx.max_damage = 4.0;
        assert!(ctx.validate().is_ok());
    }
}

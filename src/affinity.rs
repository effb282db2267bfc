use crate::class::*;

const NEUTRAL: f64 = 1.0;
const ADVANTAGE: f64 = 2.0;
const DISADVANTAGE: f64 = 0.5;
const BERSERKER_ATTACK: f64 = 1.5;
const SPECIAL_ATTACK: f64 = 1.5;

// Largest multiplier the rules ever write. The Markov threat divisor may not be smaller.
pub const MAX_DAMAGE: f64 = ADVANTAGE;

// Each class deals 2x to the next class in its triangle and takes 0.5x back.
pub const TRIANGLES: [[Class; 3]; 4] = [
    [Class::Saber, Class::Lancer, Class::Archer],
    [Class::Caster, Class::Assassin, Class::Rider],
    [Class::Ruler, Class::MoonCancer, Class::Avenger],
    [Class::AlterEgo, Class::Foreigner, Class::Pretender],
];

pub const KNIGHTS: [Class; 3] = [Class::Saber, Class::Lancer, Class::Archer];
pub const CAVALRY: [Class; 3] = [Class::Caster, Class::Assassin, Class::Rider];

/// Damage multipliers between classes. `damage(x, y)` is how much damage x deals to y.
///
/// Built once with [`AffinityMatrix::build`] and only read afterwards; every engine takes it by reference.
#[derive(Debug, Clone, PartialEq)]
pub struct AffinityMatrix {
    dmg_to: [[f64; NUM_CLASSES]; NUM_CLASSES],
}

impl AffinityMatrix {
    pub fn build() -> Self {
        let mut m = Self { dmg_to: [[NEUTRAL; NUM_CLASSES]; NUM_CLASSES] };

        // Berserker takes 2x from everyone and deals 1.5x back, Shielder stays neutral.
        // Berserker itself is part of the sweep, so its diagonal ends up at 1.5.
        for class in Class::ALL.into_iter().skip(1) {
            m.set(class, Class::Berserker, ADVANTAGE);
            m.set(Class::Berserker, class, BERSERKER_ATTACK);
        }

        for triangle in TRIANGLES {
            for idx in 0..3 {
                let strong = triangle[idx];
                let weak = triangle[(idx + 1) % 3];
                m.set(strong, weak, ADVANTAGE);
                m.set(weak, strong, DISADVANTAGE);
            }
        }

        // Ruler resists the six main classes
        for class in KNIGHTS.into_iter().chain(CAVALRY) {
            m.set(class, Class::Ruler, DISADVANTAGE);
        }

        // Alter Ego and Pretender mirror each other against knights and cavalry
        for knight in KNIGHTS {
            m.set(Class::AlterEgo, knight, DISADVANTAGE);
            m.set(Class::Pretender, knight, SPECIAL_ATTACK);
        }
        for cavalry in CAVALRY {
            m.set(Class::AlterEgo, cavalry, SPECIAL_ATTACK);
            m.set(Class::Pretender, cavalry, DISADVANTAGE);
        }

        // Foreigner special cases
        m.set(Class::Foreigner, Class::Foreigner, ADVANTAGE);
        m.set(Class::Berserker, Class::Foreigner, DISADVANTAGE);

        m.assert_in_range();
        m
    }

    fn set(&mut self, attacker: Class, defender: Class, value: f64) {
        self.dmg_to[attacker.index()][defender.index()] = value;
    }

    pub fn damage(&self, attacker: Class, defender: Class) -> f64 {
        self.dmg_to[attacker.index()][defender.index()]
    }

    /// Share of the giver's portion the taker claims in the Markov exchange.
    pub fn threat(&self, taker: Class, giver: Class, max_damage: f64) -> f64 {
        self.damage(taker, giver) / max_damage
    }

    pub fn row(&self, attacker: Class) -> &[f64; NUM_CLASSES] {
        &self.dmg_to[attacker.index()]
    }

    // Thresholds and ratios downstream assume multipliers in (0, MAX_DAMAGE].
    fn assert_in_range(&self) {
        for attacker in Class::ALL {
            for defender in Class::ALL {
                let value = self.damage(attacker, defender);
                assert!(value > 0.0, "affinity {attacker}->{defender} is not positive: {value}");
                assert!(value <= MAX_DAMAGE, "affinity {attacker}->{defender} exceeds {MAX_DAMAGE}: {value}");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_is_deterministic() {
        let a = AffinityMatrix::build();
        let b = AffinityMatrix::build();
        for attacker in Class::ALL {
            for defender in Class::ALL {
                assert_eq!(
                    a.damage(attacker, defender).to_bits(),
                    b.damage(attacker, defender).to_bits()
                );
            }
        }
    }

    #[test]
    fn berserker_and_foreigner_cells() {
        let m = AffinityMatrix::build();
        assert_eq!(m.damage(Class::Berserker, Class::Saber), 1.5);
        assert_eq!(m.damage(Class::Saber, Class::Berserker), 2.0);
        assert_eq!(m.damage(Class::Foreigner, Class::Foreigner), 2.0);
        assert_eq!(m.damage(Class::Berserker, Class::Foreigner), 0.5);
        assert_eq!(m.damage(Class::Foreigner, Class::Berserker), 2.0);
        assert_eq!(m.damage(Class::Berserker, Class::Berserker), 1.5);
    }

    #[test]
    fn shielder_is_neutral() {
        let m = AffinityMatrix::build();
        for class in Class::ALL {
            assert_eq!(m.damage(Class::Shielder, class), 1.0);
            assert_eq!(m.damage(class, Class::Shielder), 1.0);
        }
    }

    #[test]
    fn triangles_cycle() {
        let m = AffinityMatrix::build();
        assert_eq!(m.damage(Class::Saber, Class::Lancer), 2.0);
        assert_eq!(m.damage(Class::Lancer, Class::Saber), 0.5);
        assert_eq!(m.damage(Class::Archer, Class::Saber), 2.0);
        assert_eq!(m.damage(Class::Rider, Class::Caster), 2.0);
        assert_eq!(m.damage(Class::Avenger, Class::Ruler), 2.0);
        assert_eq!(m.damage(Class::Pretender, Class::AlterEgo), 2.0);
        assert_eq!(m.damage(Class::AlterEgo, Class::Pretender), 0.5);
    }

    #[test]
    fn ruler_resists_main_six_only() {
        let m = AffinityMatrix::build();
        for class in KNIGHTS.into_iter().chain(CAVALRY) {
            assert_eq!(m.damage(class, Class::Ruler), 0.5);
        }
        assert_eq!(m.damage(Class::Avenger, Class::Ruler), 2.0);
        assert_eq!(m.damage(Class::Foreigner, Class::Ruler), 1.0);
    }

    #[test]
    fn alter_ego_and_pretender_mirror() {
        let m = AffinityMatrix::build();
        for knight in KNIGHTS {
            assert_eq!(m.damage(Class::AlterEgo, knight), 0.5);
            assert_eq!(m.damage(Class::Pretender, knight), 1.5);
        }
        for cavalry in CAVALRY {
            assert_eq!(m.damage(Class::AlterEgo, cavalry), 1.5);
            assert_eq!(m.damage(Class::Pretender, cavalry), 0.5);
        }
        // Only the attacking direction is touched
        assert_eq!(m.damage(Class::Saber, Class::AlterEgo), 1.0);
    }

    #[test]
    fn no_entry_exceeds_max_damage() {
        let m = AffinityMatrix::build();
        let largest = Class::ALL.iter()
            .flat_map(|c| m.row(*c).iter().copied())
            .fold(0.0, f64::max);
        assert_eq!(largest, MAX_DAMAGE);
    }

    #[test]
    fn threat_scales_by_max_damage() {
        let m = AffinityMatrix::build();
        assert_eq!(m.threat(Class::Saber, Class::Lancer, 2.0), 1.0);
        assert_eq!(m.threat(Class::Shielder, Class::Saber, 2.0), 0.5);
        assert_eq!(m.row(Class::Shielder), &[1.0; NUM_CLASSES]);
    }
}

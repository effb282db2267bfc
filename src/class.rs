use std::fmt;

pub const NUM_CLASSES: usize = 14;

// Order matters: the affinity rules address triangles and groups by position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Class {
    Shielder,
    Saber,
    Lancer,
    Archer,
    Caster,
    Assassin,
    Rider,
    Ruler,
    MoonCancer,
    Avenger,
    AlterEgo,
    Foreigner,
    Pretender,
    Berserker,
}

pub const CLASS_NAMES: [&str; NUM_CLASSES] = [
    "SHD", "SAB", "LAN", "ARC", "CAS", "ASN", "RID",
    "RUL", "MCR", "AVG", "ALR", "FRN", "PRT", "BSK",
];

pub const CLASS_FULL_NAMES: [&str; NUM_CLASSES] = [
    "Shielder", "Saber", "Lancer", "Archer", "Caster", "Assassin", "Rider",
    "Ruler", "Moon Cancer", "Avenger", "Alter Ego", "Foreigner", "Pretender", "Berserker",
];

impl Class {
    pub const ALL: [Class; NUM_CLASSES] = [
        Class::Shielder,
        Class::Saber,
        Class::Lancer,
        Class::Archer,
        Class::Caster,
        Class::Assassin,
        Class::Rider,
        Class::Ruler,
        Class::MoonCancer,
        Class::Avenger,
        Class::AlterEgo,
        Class::Foreigner,
        Class::Pretender,
        Class::Berserker,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    // Three letter name used in every printed table.
    pub fn name(self) -> &'static str {
        CLASS_NAMES[self.index()]
    }

    pub fn full_name(self) -> &'static str {
        CLASS_FULL_NAMES[self.index()]
    }
}

impl fmt::Display for Class {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_is_in_index_order() {
        for (idx, class) in Class::ALL.iter().enumerate() {
            assert_eq!(class.index(), idx);
            assert_eq!(class.name(), CLASS_NAMES[idx]);
        }
    }

    #[test]
    fn names_line_up_with_variants() {
        assert_eq!(Class::Shielder.name(), "SHD");
        assert_eq!(Class::MoonCancer.name(), "MCR");
        assert_eq!(Class::Berserker.to_string(), "BSK");
        assert_eq!(Class::AlterEgo.full_name(), "Alter Ego");
    }
}

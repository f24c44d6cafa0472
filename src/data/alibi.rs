//! Per-suspect alibi records

use super::{Catalog, Location, Solution, Suspect, Weapon};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// What a suspect claims, and where and with what they were seen
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlibiRecord {
    pub alibi: String,
    /// Always exactly one location
    pub places: Vec<Location>,
    /// Always exactly one weapon
    pub weapons: Vec<Weapon>,
}

impl AlibiRecord {
    /// The culprit's record points at the real scene and weapon.
    pub fn for_culprit(solution: &Solution) -> Self {
        Self {
            alibi: format!(
                "{} is known to have been seen near {}, though there is no clear proof of what they did with {}.",
                solution.suspect, solution.location, solution.weapon
            ),
            places: vec![solution.location],
            weapons: vec![solution.weapon],
        }
    }

    /// An innocent suspect claims some other place and is tied to some other weapon.
    pub fn for_innocent<R: Rng + ?Sized>(rng: &mut R, solution: &Solution) -> Self {
        let place = Location::random_except(rng, solution.location);
        let weapon = Weapon::random_except(rng, solution.weapon);
        Self {
            alibi: format!(
                "Claims to have been at {} during the incident, and not to have carried any peculiar weapon.",
                place
            ),
            places: vec![place],
            weapons: vec![weapon],
        }
    }

    pub fn was_at(&self, location: Location) -> bool {
        self.places.contains(&location)
    }

    pub fn carried(&self, weapon: Weapon) -> bool {
        self.weapons.contains(&weapon)
    }
}

/// One alibi per suspect, iterated in catalogue order
pub type AlibiTable = BTreeMap<Suspect, AlibiRecord>;

/// Build the alibi table for a freshly drawn solution
pub fn build_alibis<R: Rng + ?Sized>(rng: &mut R, solution: &Solution) -> AlibiTable {
    Suspect::ALL
        .iter()
        .map(|&suspect| {
            let record = if suspect == solution.suspect {
                AlibiRecord::for_culprit(solution)
            } else {
                AlibiRecord::for_innocent(rng, solution)
            };
            (suspect, record)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn solution() -> Solution {
        Solution {
            suspect: Suspect::CindyMoon,
            location: Location::Wakanda,
            weapon: Weapon::Mjolnir,
        }
    }

    #[test]
    fn culprit_record_points_at_the_solution() {
        let record = AlibiRecord::for_culprit(&solution());
        assert_eq!(record.places, vec![Location::Wakanda]);
        assert_eq!(record.weapons, vec![Weapon::Mjolnir]);
        assert!(record.alibi.starts_with("Cindy Moon is known to have been seen near Wakanda"));
    }

    #[test]
    fn innocent_records_avoid_the_solution() {
        let mut rng = StdRng::seed_from_u64(99);
        for _ in 0..50 {
            let table = build_alibis(&mut rng, &solution());
            assert_eq!(table.len(), 5);
            for (suspect, record) in &table {
                assert_eq!(record.places.len(), 1);
                assert_eq!(record.weapons.len(), 1);
                if *suspect != Suspect::CindyMoon {
                    assert!(!record.was_at(Location::Wakanda));
                    assert!(!record.carried(Weapon::Mjolnir));
                    assert!(record.alibi.contains(record.places[0].name()));
                }
            }
        }
    }
}

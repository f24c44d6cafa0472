//! Narrative engine for the opening story and clue sentences
//!
//! All text is static template data. Templates carry a single `{}` slot
//! that is filled with an entity name.

use crate::data::{Catalog, Category, Entity, Location, Solution, Suspect, Weapon};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Base stories. None of them point at anything.
pub const STORIES: [&str; 5] = [
    "A mysterious shadow was lurking near an important place on the day of the incident.",
    "Rumor has it that someone argued heatedly in a quiet place just before the tragedy.",
    "Witnesses mention seeing an unusual object near the scene of the crime.",
    "A well-known figure was seen going missing just before the fatal event.",
    "The mood was tense in a remote place, and a peculiar object caught the eye of several people.",
];

const SUSPECT_INDICATIONS: [&str; 3] = [
    "Someone whispered that {} was especially nervous that day.",
    "They say {} had an argument with someone close just before the incident.",
    "{} seemed worried about something that happened recently.",
];

const LOCATION_INDICATIONS: [&str; 3] = [
    "A shadow was seen prowling around {} on the night of the incident.",
    "Strange noises were heard coming from {} just before it all happened.",
    "{} has been the scene of frequent conflicts lately.",
];

const WEAPON_INDICATIONS: [&str; 3] = [
    "An object resembling {} was found near the scene.",
    "Traces of {} at the scene suggest it could be an important weapon.",
    "Someone was seen handling {} hours before the event.",
];

/// Red-herring phrases for the opening narrative, per category
pub fn indications(category: Category) -> &'static [&'static str] {
    match category {
        Category::Suspect => &SUSPECT_INDICATIONS,
        Category::Location => &LOCATION_INDICATIONS,
        Category::Weapon => &WEAPON_INDICATIONS,
    }
}

/// Fill the single `{}` slot of a template
pub fn fill(template: &str, name: &str) -> String {
    template.replacen("{}", name, 1)
}

/// Sentence announcing that `entity` is not part of the answer
pub fn elimination_sentence(entity: Entity) -> String {
    let template = match entity.category() {
        Category::Suspect => "The culprit is not {}.",
        Category::Location => "It did not happen at {}.",
        Category::Weapon => "The weapon {} was not used.",
    };
    fill(template, entity.name())
}

/// The story shown when a case opens
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Opening {
    pub victim: Suspect,
    /// The innocent entity the story hints at
    pub red_herring: Entity,
    pub text: String,
}

impl Opening {
    /// Deal the opening for `solution`. Neither the victim nor the red
    /// herring is ever part of the answer.
    pub fn generate<R: Rng + ?Sized>(rng: &mut R, solution: &Solution) -> Self {
        let victim = Suspect::random_except(rng, solution.suspect);

        let category = Category::ALL[rng.gen_range(0..Category::ALL.len())];
        let red_herring = match category {
            Category::Suspect => Suspect::random_except(rng, solution.suspect).into_entity(),
            Category::Location => Location::random_except(rng, solution.location).into_entity(),
            Category::Weapon => Weapon::random_except(rng, solution.weapon).into_entity(),
        };

        let story = STORIES.choose(rng).copied().unwrap_or(STORIES[0]);
        let indication = indications(category)
            .choose(rng)
            .map(|template| fill(template, red_herring.name()))
            .unwrap_or_default();

        let text = format!(
            "A tragedy has struck: {} has been found dead.\n\n{}\n{}\n\nThe investigation begins, and you must uncover the truth.",
            victim, story, indication
        );

        Self {
            victim,
            red_herring,
            text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn elimination_sentences_per_category() {
        assert_eq!(
            elimination_sentence(Entity::Suspect(Suspect::GwenStacy)),
            "The culprit is not Gwen Stacy."
        );
        assert_eq!(
            elimination_sentence(Entity::Location(Location::Asgard)),
            "It did not happen at Asgard."
        );
        assert_eq!(
            elimination_sentence(Entity::Weapon(Weapon::InfinityGauntlet)),
            "The weapon Infinity Gauntlet was not used."
        );
    }

    #[test]
    fn every_indication_has_one_slot() {
        for category in Category::ALL {
            for template in indications(category) {
                assert_eq!(template.matches("{}").count(), 1, "{}", template);
            }
        }
    }

    #[test]
    fn opening_never_points_at_the_solution() {
        let solution = Solution {
            suspect: Suspect::PeterParker,
            location: Location::Helicarrier,
            weapon: Weapon::WebShooters,
        };
        let mut rng = StdRng::seed_from_u64(2024);
        for _ in 0..100 {
            let opening = Opening::generate(&mut rng, &solution);
            assert_ne!(opening.victim, solution.suspect);
            assert!(!solution.contains(opening.red_herring));
            assert!(opening.text.starts_with(&format!(
                "A tragedy has struck: {} has been found dead.",
                opening.victim
            )));
            assert!(opening.text.contains(opening.red_herring.name()));
            assert!(STORIES.iter().any(|story| opening.text.contains(story)));
        }
    }
}

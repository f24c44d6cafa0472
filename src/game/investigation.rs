//! Investigation mechanics
//!
//! Answers interrogations from the alibi table and keeps track of which
//! innocent names have already been ruled out.

use crate::data::*;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// What an interrogation turned up
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum InfoReport {
    Suspect {
        suspect: Suspect,
        alibi: String,
        places: Vec<Location>,
        weapons: Vec<Weapon>,
    },
    Location {
        location: Location,
        /// Suspects whose alibi places them here
        suspects_seen: Vec<Suspect>,
        /// Weapons tied to anyone seen here, without duplicates
        weapons_found: Vec<Weapon>,
    },
    Weapon {
        weapon: Weapon,
        holders: Vec<Suspect>,
    },
}

impl InfoReport {
    /// Question `entity` against the alibi table
    pub fn compile(alibis: &AlibiTable, entity: Entity) -> Self {
        match entity {
            Entity::Suspect(suspect) => {
                let (alibi, places, weapons) = match alibis.get(&suspect) {
                    Some(record) => (
                        record.alibi.clone(),
                        record.places.clone(),
                        record.weapons.clone(),
                    ),
                    None => (String::new(), Vec::new(), Vec::new()),
                };
                InfoReport::Suspect {
                    suspect,
                    alibi,
                    places,
                    weapons,
                }
            }
            Entity::Location(location) => {
                let mut suspects_seen = Vec::new();
                let mut weapons_found: Vec<Weapon> = Vec::new();
                for (suspect, record) in alibis.iter().filter(|(_, r)| r.was_at(location)) {
                    suspects_seen.push(*suspect);
                    for weapon in &record.weapons {
                        if !weapons_found.contains(weapon) {
                            weapons_found.push(*weapon);
                        }
                    }
                }
                InfoReport::Location {
                    location,
                    suspects_seen,
                    weapons_found,
                }
            }
            Entity::Weapon(weapon) => InfoReport::Weapon {
                weapon,
                holders: alibis
                    .iter()
                    .filter(|(_, r)| r.carried(weapon))
                    .map(|(s, _)| *s)
                    .collect(),
            },
        }
    }

    /// The entity that was questioned
    pub fn subject(&self) -> Entity {
        match self {
            InfoReport::Suspect { suspect, .. } => Entity::Suspect(*suspect),
            InfoReport::Location { location, .. } => Entity::Location(*location),
            InfoReport::Weapon { weapon, .. } => Entity::Weapon(*weapon),
        }
    }

    /// Human readable report, one line per entry
    pub fn lines(&self) -> Vec<String> {
        match self {
            InfoReport::Suspect {
                suspect,
                alibi,
                places,
                weapons,
            } => vec![
                format!("Interrogating {}:", suspect),
                format!("Alibi: {}", alibi),
                format!("Places where they were seen: {}", join_or(places, "None")),
                format!("Weapons associated or found: {}", join_or(weapons, "None")),
            ],
            InfoReport::Location {
                location,
                suspects_seen,
                weapons_found,
            } => vec![
                format!("Information about the location: {}", location),
                format!("Characters seen here: {}", join_or(suspects_seen, "None")),
                format!("Weapons found or associated here: {}", join_or(weapons_found, "None")),
            ],
            InfoReport::Weapon { weapon, holders } => vec![
                format!("Information about the weapon: {}", weapon),
                format!("Characters associated with this weapon: {}", join_or(holders, "None")),
            ],
        }
    }
}

fn join_or<T: std::fmt::Display>(items: &[T], empty: &str) -> String {
    if items.is_empty() {
        empty.to_string()
    } else {
        items
            .iter()
            .map(|item| item.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Innocent names already ruled out, in the order they were revealed
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevealedHints {
    order: Vec<Entity>,
    seen: HashSet<Entity>,
}

impl RevealedHints {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns false if `entity` was already revealed
    pub fn insert(&mut self, entity: Entity) -> bool {
        if self.seen.insert(entity) {
            self.order.push(entity);
            true
        } else {
            false
        }
    }

    pub fn contains(&self, entity: Entity) -> bool {
        self.seen.contains(&entity)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Entity> + '_ {
        self.order.iter().copied()
    }

    /// Every entity that is neither part of `solution` nor revealed yet
    pub fn candidates(&self, solution: &Solution) -> Vec<Entity> {
        Entity::all()
            .filter(|e| !solution.contains(*e) && !self.contains(*e))
            .collect()
    }
}

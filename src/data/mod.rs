//! Data structures for the game world
//!
//! Defines the fixed suspect, location and weapon catalogues, the hidden
//! solution, and the alibi records the interrogations are answered from.

pub mod alibi;
pub mod portraits;

pub use alibi::*;
pub use portraits::*;

use crate::{GameError, GameResult};
use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The three kinds of thing the player has to name
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    Suspect,
    Location,
    Weapon,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Suspect, Category::Location, Category::Weapon];

    pub fn title(&self) -> &'static str {
        match self {
            Category::Suspect => "Suspect",
            Category::Location => "Location",
            Category::Weapon => "Weapon",
        }
    }

    pub fn plural(&self) -> &'static str {
        match self {
            Category::Suspect => "Suspects",
            Category::Location => "Locations",
            Category::Weapon => "Weapons",
        }
    }

    /// Names of the catalogue, in display order
    pub fn names(&self) -> Vec<&'static str> {
        match self {
            Category::Suspect => Suspect::ALL.iter().map(|s| s.name()).collect(),
            Category::Location => Location::ALL.iter().map(|l| l.name()).collect(),
            Category::Weapon => Weapon::ALL.iter().map(|w| w.name()).collect(),
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::Suspect => write!(f, "suspect"),
            Category::Location => write!(f, "location"),
            Category::Weapon => write!(f, "weapon"),
        }
    }
}

/// A fixed, ordered catalogue of entities of one category
pub trait Catalog: Copy + Eq + Sized + 'static {
    const CATEGORY: Category;
    const ALL: &'static [Self];

    fn name(&self) -> &'static str;

    fn into_entity(self) -> Entity;

    /// Case-insensitive lookup by display name
    fn from_name(name: &str) -> GameResult<Self> {
        let wanted = name.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|item| item.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| GameError::UnknownEntity {
                category: Self::CATEGORY,
                name: wanted.to_string(),
            })
    }

    /// Uniform draw over the whole catalogue
    fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }

    /// Uniform draw over the catalogue minus `excluded`
    fn random_except<R: Rng + ?Sized>(rng: &mut R, excluded: Self) -> Self {
        let others: Vec<Self> = Self::ALL.iter().copied().filter(|e| *e != excluded).collect();
        others[rng.gen_range(0..others.len())]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suspect {
    PeterParker,
    MilesMorales,
    GwenStacy,
    MiguelOHara,
    CindyMoon,
}

impl Catalog for Suspect {
    const CATEGORY: Category = Category::Suspect;
    const ALL: &'static [Self] = &[
        Suspect::PeterParker,
        Suspect::MilesMorales,
        Suspect::GwenStacy,
        Suspect::MiguelOHara,
        Suspect::CindyMoon,
    ];

    fn name(&self) -> &'static str {
        match self {
            Suspect::PeterParker => "Peter Parker",
            Suspect::MilesMorales => "Miles Morales",
            Suspect::GwenStacy => "Gwen Stacy",
            Suspect::MiguelOHara => "Miguel O'Hara",
            Suspect::CindyMoon => "Cindy Moon",
        }
    }

    fn into_entity(self) -> Entity {
        Entity::Suspect(self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Location {
    AvengersTower,
    SanctumSanctorum,
    Wakanda,
    Asgard,
    Helicarrier,
}

impl Catalog for Location {
    const CATEGORY: Category = Category::Location;
    const ALL: &'static [Self] = &[
        Location::AvengersTower,
        Location::SanctumSanctorum,
        Location::Wakanda,
        Location::Asgard,
        Location::Helicarrier,
    ];

    fn name(&self) -> &'static str {
        match self {
            Location::AvengersTower => "Avengers Tower",
            Location::SanctumSanctorum => "Sanctum Sanctorum",
            Location::Wakanda => "Wakanda",
            Location::Asgard => "Asgard",
            Location::Helicarrier => "Helicarrier",
        }
    }

    fn into_entity(self) -> Entity {
        Entity::Location(self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Weapon {
    WebShooters,
    InfinityGauntlet,
    Mjolnir,
    CaptainAmericasShield,
    IronManArmor,
}

impl Catalog for Weapon {
    const CATEGORY: Category = Category::Weapon;
    const ALL: &'static [Self] = &[
        Weapon::WebShooters,
        Weapon::InfinityGauntlet,
        Weapon::Mjolnir,
        Weapon::CaptainAmericasShield,
        Weapon::IronManArmor,
    ];

    fn name(&self) -> &'static str {
        match self {
            Weapon::WebShooters => "Web Shooters",
            Weapon::InfinityGauntlet => "Infinity Gauntlet",
            Weapon::Mjolnir => "Mjolnir",
            Weapon::CaptainAmericasShield => "Captain America's Shield",
            Weapon::IronManArmor => "Iron Man Armor",
        }
    }

    fn into_entity(self) -> Entity {
        Entity::Weapon(self)
    }
}

impl std::fmt::Display for Suspect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::fmt::Display for Weapon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Suspect {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

impl std::str::FromStr for Location {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

impl std::str::FromStr for Weapon {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

/// Any single suspect, location or weapon
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Entity {
    Suspect(Suspect),
    Location(Location),
    Weapon(Weapon),
}

impl Entity {
    pub fn category(&self) -> Category {
        match self {
            Entity::Suspect(_) => Category::Suspect,
            Entity::Location(_) => Category::Location,
            Entity::Weapon(_) => Category::Weapon,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Entity::Suspect(s) => s.name(),
            Entity::Location(l) => l.name(),
            Entity::Weapon(w) => w.name(),
        }
    }

    /// Every entity of every catalogue, suspects first
    pub fn all() -> impl Iterator<Item = Entity> {
        Suspect::ALL
            .iter()
            .map(|s| s.into_entity())
            .chain(Location::ALL.iter().map(|l| l.into_entity()))
            .chain(Weapon::ALL.iter().map(|w| w.into_entity()))
    }

    /// Look up `name` in the catalogue of `category`
    pub fn parse(category: Category, name: &str) -> GameResult<Self> {
        match category {
            Category::Suspect => Suspect::from_name(name).map(Entity::Suspect),
            Category::Location => Location::from_name(name).map(Entity::Location),
            Category::Weapon => Weapon::from_name(name).map(Entity::Weapon),
        }
    }
}

impl std::fmt::Display for Entity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// The hidden answer of one game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Solution {
    pub suspect: Suspect,
    pub location: Location,
    pub weapon: Weapon,
}

impl Solution {
    /// Independent uniform draw per category
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            suspect: Suspect::random(rng),
            location: Location::random(rng),
            weapon: Weapon::random(rng),
        }
    }

    /// The solution's value in `category`
    pub fn get(&self, category: Category) -> Entity {
        match category {
            Category::Suspect => Entity::Suspect(self.suspect),
            Category::Location => Entity::Location(self.location),
            Category::Weapon => Entity::Weapon(self.weapon),
        }
    }

    /// Whether `entity` is the true answer of its category
    pub fn contains(&self, entity: Entity) -> bool {
        self.get(entity.category()) == entity
    }
}

/// A unique identifier wrapper
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Id(pub Uuid);

impl Id {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Random id drawn from the game's own generator, so seeded games repeat
    pub fn from_rng<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self(uuid::Builder::from_random_bytes(rng.gen()).into_uuid())
    }

    /// First eight hex digits, for case numbers in the header
    pub fn short(&self) -> String {
        self.0.simple().to_string()[..8].to_uppercase()
    }
}

impl Default for Id {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Id {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

//! Console command parsing
//!
//! Turns a typed line into one of the game operations. Entities can be
//! named in full (case-insensitive) or by their number in the side panel.

use crate::data::*;
use crate::GameError;

/// A parsed console command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Clear,
    Story,
    Status,
    Notes,
    New,
    Quit,
    Ask(Entity),
    Clue,
    Guess {
        suspect: Option<Suspect>,
        location: Option<Location>,
        weapon: Option<Weapon>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("Unknown command: {0}. Type 'help' for commands.")]
    Unknown(String),

    #[error("Usage: {0}")]
    Usage(&'static str),

    #[error("{0}")]
    Entity(#[from] GameError),
}

const ASK_USAGE: &str = "ask <who|where|what> <name or number>";
const GUESS_USAGE: &str = "guess <suspect> / <location> / <weapon>";

/// Parse one console line. Blank input yields `None`.
pub fn parse(input: &str) -> Result<Option<Command>, CommandError> {
    let input = input.trim();
    let (verb, rest) = match input.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (input, ""),
    };

    let command = match verb.to_lowercase().as_str() {
        "" => return Ok(None),
        "help" | "?" => Command::Help,
        "clear" | "cls" => Command::Clear,
        "story" => Command::Story,
        "status" => Command::Status,
        "notes" | "log" => Command::Notes,
        "new" | "again" => Command::New,
        "quit" | "exit" => Command::Quit,
        "clue" | "hint" => Command::Clue,
        "ask" | "interrogate" => Command::Ask(parse_ask(rest)?),
        "guess" | "accuse" => parse_guess(rest)?,
        other => return Err(CommandError::Unknown(other.to_string())),
    };
    Ok(Some(command))
}

fn category_alias(word: &str) -> Option<Category> {
    match word.to_lowercase().as_str() {
        "suspect" | "character" | "who" | "s" => Some(Category::Suspect),
        "location" | "place" | "where" | "l" => Some(Category::Location),
        "weapon" | "what" | "w" => Some(Category::Weapon),
        _ => None,
    }
}

fn parse_ask(rest: &str) -> Result<Entity, CommandError> {
    if rest.is_empty() {
        return Err(CommandError::Usage(ASK_USAGE));
    }

    if let Some((first, target)) = rest.split_once(char::is_whitespace) {
        if let Some(category) = category_alias(first) {
            return Ok(resolve_in(category, target.trim())?);
        }
    }

    // No category given: search every catalogue by name
    Entity::all()
        .find(|e| e.name().eq_ignore_ascii_case(rest))
        .ok_or(CommandError::Usage(ASK_USAGE))
}

fn parse_guess(rest: &str) -> Result<Command, CommandError> {
    let parts: Vec<&str> = if rest.contains('/') {
        rest.split('/').map(str::trim).collect()
    } else {
        let tokens: Vec<&str> = rest.split_whitespace().collect();
        if tokens.len() != 3 {
            return Err(CommandError::Usage(GUESS_USAGE));
        }
        tokens
    };
    if parts.len() > 3 {
        return Err(CommandError::Usage(GUESS_USAGE));
    }

    let part = |i: usize| parts.get(i).copied().unwrap_or("");
    Ok(Command::Guess {
        suspect: selection::<Suspect>(part(0))?,
        location: selection::<Location>(part(1))?,
        weapon: selection::<Weapon>(part(2))?,
    })
}

/// Empty text is a missing selection, not an error
fn selection<T: Catalog>(token: &str) -> Result<Option<T>, GameError> {
    if token.is_empty() {
        Ok(None)
    } else {
        resolve::<T>(token).map(Some)
    }
}

/// A 1-based list number or a display name
pub fn resolve<T: Catalog>(token: &str) -> Result<T, GameError> {
    match token.parse::<usize>() {
        Ok(n) if (1..=T::ALL.len()).contains(&n) => Ok(T::ALL[n - 1]),
        _ => T::from_name(token),
    }
}

fn resolve_in(category: Category, token: &str) -> Result<Entity, GameError> {
    match category {
        Category::Suspect => resolve::<Suspect>(token).map(Entity::Suspect),
        Category::Location => resolve::<Location>(token).map(Entity::Location),
        Category::Weapon => resolve::<Weapon>(token).map(Entity::Weapon),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_line_is_not_a_command() {
        assert_eq!(parse("   "), Ok(None));
    }

    #[test]
    fn simple_verbs() {
        assert_eq!(parse("clue"), Ok(Some(Command::Clue)));
        assert_eq!(parse("HELP"), Ok(Some(Command::Help)));
        assert_eq!(parse("new"), Ok(Some(Command::New)));
        assert_eq!(
            parse("dance"),
            Err(CommandError::Unknown("dance".to_string()))
        );
    }

    #[test]
    fn ask_by_category_and_name_or_number() {
        assert_eq!(
            parse("ask who Gwen Stacy"),
            Ok(Some(Command::Ask(Entity::Suspect(Suspect::GwenStacy))))
        );
        assert_eq!(
            parse("ask where 3"),
            Ok(Some(Command::Ask(Entity::Location(Location::Wakanda))))
        );
        assert_eq!(
            parse("interrogate weapon captain america's shield"),
            Ok(Some(Command::Ask(Entity::Weapon(Weapon::CaptainAmericasShield))))
        );
    }

    #[test]
    fn ask_without_category_searches_all_catalogues() {
        assert_eq!(
            parse("ask infinity gauntlet"),
            Ok(Some(Command::Ask(Entity::Weapon(Weapon::InfinityGauntlet))))
        );
        assert_eq!(parse("ask"), Err(CommandError::Usage(ASK_USAGE)));
        assert_eq!(parse("ask Thanos"), Err(CommandError::Usage(ASK_USAGE)));
    }

    #[test]
    fn ask_unknown_name_in_category() {
        assert_eq!(
            parse("ask where Knowhere"),
            Err(CommandError::Entity(GameError::UnknownEntity {
                category: Category::Location,
                name: "Knowhere".to_string()
            }))
        );
    }

    #[test]
    fn guess_with_slashes_keeps_empty_fields() {
        assert_eq!(
            parse("guess / Wakanda / Mjolnir"),
            Ok(Some(Command::Guess {
                suspect: None,
                location: Some(Location::Wakanda),
                weapon: Some(Weapon::Mjolnir),
            }))
        );
        assert_eq!(
            parse("accuse Peter Parker / Asgard"),
            Ok(Some(Command::Guess {
                suspect: Some(Suspect::PeterParker),
                location: Some(Location::Asgard),
                weapon: None,
            }))
        );
    }

    #[test]
    fn guess_by_numbers() {
        assert_eq!(
            parse("guess 1 5 2"),
            Ok(Some(Command::Guess {
                suspect: Some(Suspect::PeterParker),
                location: Some(Location::Helicarrier),
                weapon: Some(Weapon::InfinityGauntlet),
            }))
        );
        assert_eq!(parse("guess 1 5"), Err(CommandError::Usage(GUESS_USAGE)));
        assert_eq!(parse("guess 1/2/3/4"), Err(CommandError::Usage(GUESS_USAGE)));
    }

    #[test]
    fn out_of_range_number_falls_back_to_name_lookup() {
        assert_eq!(
            resolve::<Suspect>("9"),
            Err(GameError::UnknownEntity {
                category: Category::Suspect,
                name: "9".to_string()
            })
        );
    }
}

//! Target selection - Turning "goblin 2" into an enemy in the location

use crate::error::CombatError;
use crate::world::Enemy;

/// A parsed attack argument
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetQuery {
    /// Lowercased enemy name or type
    pub name: String,
    /// Requested 1-based ordinal among the matches
    pub ordinal: usize,
}

impl TargetQuery {
    /// Parse `<name> [n]`; the ordinal defaults to 1
    pub fn parse(argument: &str) -> Result<Self, CombatError> {
        let argument = argument.trim();
        if argument.is_empty() {
            return Err(CombatError::MissingTarget);
        }

        let name_part = argument.trim_end_matches(|c: char| c.is_ascii_digit());
        let digits = &argument[name_part.len()..];
        let name_part = name_part.trim_end();

        let (name, ordinal) = if name_part.is_empty() || digits.is_empty() {
            (argument, 1)
        } else {
            (name_part, digits.parse().unwrap_or(1))
        };

        Ok(TargetQuery {
            name: name.to_lowercase(),
            ordinal,
        })
    }
}

/// An enemy picked out of a location's list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedTarget {
    /// Position in the location's enemy list
    pub index: usize,
    /// 1-based ordinal among enemies matching the query
    pub ordinal: usize,
}

/// Pick the enemy an attack argument refers to
///
/// Matches are exact case-insensitive hits on name or type, in list order.
/// An ordinal past the end (or 0) falls back to the first match.
pub fn select_target(enemies: &[Enemy], argument: &str) -> Result<ResolvedTarget, CombatError> {
    let query = TargetQuery::parse(argument)?;
    let matches: Vec<usize> = enemies
        .iter()
        .enumerate()
        .filter(|(_, enemy)| enemy.answers_to(&query.name))
        .map(|(index, _)| index)
        .collect();

    if matches.is_empty() {
        return Err(CombatError::NoSuchTarget(argument.trim().to_string()));
    }

    let ordinal = if (1..=matches.len()).contains(&query.ordinal) {
        query.ordinal
    } else {
        1
    };

    Ok(ResolvedTarget {
        index: matches[ordinal - 1],
        ordinal,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EnemyCatalog;

    fn cave() -> Vec<Enemy> {
        let catalog = EnemyCatalog::with_defaults();
        vec![
            catalog.spawn("goblin", 1),
            catalog.spawn("wolf", 2),
            catalog.spawn("goblin", 3),
        ]
    }

    #[test]
    fn test_parse_query() {
        assert_eq!(
            TargetQuery::parse("Goblin 2").unwrap(),
            TargetQuery { name: "goblin".to_string(), ordinal: 2 }
        );
        assert_eq!(TargetQuery::parse("goblin").unwrap().ordinal, 1);
        assert_eq!(TargetQuery::parse("goblin2").unwrap().ordinal, 2);
        assert_eq!(TargetQuery::parse("  ").unwrap_err(), CombatError::MissingTarget);
    }

    #[test]
    fn test_bare_number_is_a_name() {
        let query = TargetQuery::parse("42").unwrap();
        assert_eq!(query.name, "42");
        assert_eq!(query.ordinal, 1);
    }

    #[test]
    fn test_select_first_and_second_goblin() {
        let enemies = cave();
        assert_eq!(select_target(&enemies, "goblin").unwrap(), ResolvedTarget { index: 0, ordinal: 1 });
        assert_eq!(select_target(&enemies, "goblin 2").unwrap(), ResolvedTarget { index: 2, ordinal: 2 });
    }

    #[test]
    fn test_out_of_range_falls_back_to_first() {
        let enemies = cave();
        assert_eq!(select_target(&enemies, "goblin 5").unwrap(), ResolvedTarget { index: 0, ordinal: 1 });
        assert_eq!(select_target(&enemies, "goblin 0").unwrap(), ResolvedTarget { index: 0, ordinal: 1 });
    }

    #[test]
    fn test_match_by_name_case_insensitive() {
        let enemies = cave();
        assert_eq!(select_target(&enemies, "WOLF").unwrap().index, 1);
    }

    #[test]
    fn test_no_match() {
        let enemies = cave();
        assert_eq!(
            select_target(&enemies, "troll").unwrap_err(),
            CombatError::NoSuchTarget("troll".to_string())
        );
        assert_eq!(select_target(&[], "goblin").unwrap_err(), CombatError::NoSuchTarget("goblin".to_string()));
    }

    #[test]
    fn test_prefix_is_not_a_match() {
        let enemies = cave();
        assert!(select_target(&enemies, "gob").is_err());
    }
}

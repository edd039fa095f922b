//! Role and level dimensions of the role/level grid.
//!
//! The engine works on a closed four-by-four grid. Every stage that walks the
//! grid does so through [`role_levels`], so the set of pairs cannot differ
//! between stages.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A staff role within an office.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Role {
    /// Billable consultants.
    Consultant,
    /// Sales staff.
    Sales,
    /// Recruitment staff.
    Recruitment,
    /// Operations and support staff.
    Operations,
}

impl Role {
    /// All roles in grid order.
    pub const ALL: [Role; 4] = [Role::Consultant, Role::Sales, Role::Recruitment, Role::Operations];
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Role::Consultant => "Consultant",
            Role::Sales => "Sales",
            Role::Recruitment => "Recruitment",
            Role::Operations => "Operations",
        };
        f.write_str(name)
    }
}

/// A seniority level within a role.
///
/// This grid uses four levels. The career ladder used for headcount planning
/// elsewhere in the product has eight rungs; the two are not mapped onto each
/// other here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Level {
    /// Level A.
    A,
    /// Level B.
    B,
    /// Level C.
    C,
    /// Level D.
    D,
}

impl Level {
    /// All levels in grid order.
    pub const ALL: [Level; 4] = [Level::A, Level::B, Level::C, Level::D];
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Level::A => "A",
            Level::B => "B",
            Level::C => "C",
            Level::D => "D",
        };
        f.write_str(name)
    }
}

/// Iterates every (role, level) pair of the grid, roles outermost.
///
/// # Example
///
/// ```
/// use planning_engine::models::{role_levels, Level, Role};
///
/// let pairs: Vec<_> = role_levels().collect();
/// assert_eq!(pairs.len(), 16);
/// assert_eq!(pairs[0], (Role::Consultant, Level::A));
/// assert_eq!(pairs[15], (Role::Operations, Level::D));
/// ```
pub fn role_levels() -> impl Iterator<Item = (Role, Level)> {
    Role::ALL
        .into_iter()
        .flat_map(|role| Level::ALL.into_iter().map(move |level| (role, level)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_role_levels_covers_every_pair_once() {
        let pairs: HashSet<(Role, Level)> = role_levels().collect();
        assert_eq!(pairs.len(), 16);
        for role in Role::ALL {
            for level in Level::ALL {
                assert!(pairs.contains(&(role, level)));
            }
        }
    }

    #[test]
    fn test_role_serialization_uses_variant_name() {
        assert_eq!(serde_json::to_string(&Role::Recruitment).unwrap(), "\"Recruitment\"");
        let level: Level = serde_json::from_str("\"C\"").unwrap();
        assert_eq!(level, Level::C);
    }

    #[test]
    fn test_unknown_level_is_rejected() {
        let result: Result<Level, _> = serde_json::from_str("\"SrC\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_display_matches_serialized_name() {
        assert_eq!(Role::Operations.to_string(), "Operations");
        assert_eq!(Level::D.to_string(), "D");
    }
}

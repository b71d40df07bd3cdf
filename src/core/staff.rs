use anyhow::{bail, Result};
use std::fmt;

/// Opaque staff identifier
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Assignee(String);

impl Assignee {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Assignee {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl fmt::Display for Assignee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Pool a staff member belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pool {
    Regular,
    Main,
}

impl Pool {
    pub fn all() -> [Pool; 2] {
        [Pool::Regular, Pool::Main]
    }
}

/// The two disjoint staff pools eligible for assignment
#[derive(Debug, Clone, Default)]
pub struct Roster {
    regular: Vec<Assignee>,
    main: Vec<Assignee>,
}

impl Roster {
    /// Build a roster from both pools, rejecting duplicate and overlapping ids
    pub fn new(regular: Vec<Assignee>, main: Vec<Assignee>) -> Result<Self> {
        let mut roster = Roster::default();
        for id in regular {
            roster.add(id, Pool::Regular)?;
        }
        for id in main {
            roster.add(id, Pool::Main)?;
        }
        Ok(roster)
    }

    /// Add a staff member to the given pool
    pub fn add(&mut self, id: Assignee, pool: Pool) -> Result<()> {
        if let Some(existing) = self.pool_of(&id) {
            bail!("duplicate staff id {} (already in {:?} pool)", id, existing);
        }
        match pool {
            Pool::Regular => self.regular.push(id),
            Pool::Main => self.main.push(id),
        }
        Ok(())
    }

    pub fn regular(&self) -> &[Assignee] {
        &self.regular
    }

    pub fn main(&self) -> &[Assignee] {
        &self.main
    }

    /// All staff, regular pool first
    pub fn iter(&self) -> impl Iterator<Item = &Assignee> {
        self.regular.iter().chain(self.main.iter())
    }

    pub fn pool_of(&self, id: &Assignee) -> Option<Pool> {
        if self.regular.contains(id) {
            Some(Pool::Regular)
        } else if self.main.contains(id) {
            Some(Pool::Main)
        } else {
            None
        }
    }

    pub fn len(&self) -> usize {
        self.regular.len() + self.main.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regular.is_empty() && self.main.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roster_rejects_overlapping_pools() {
        let result = Roster::new(
            vec!["alice".into(), "bob".into()],
            vec!["bob".into(), "carol".into()],
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_roster_rejects_duplicates_within_pool() {
        let result = Roster::new(vec!["alice".into(), "alice".into()], vec![]);
        assert!(result.is_err());
    }

    #[test]
    fn test_roster_iterates_regular_then_main() {
        let roster = Roster::new(vec!["a".into(), "b".into()], vec!["c".into()]).unwrap();
        let ids: Vec<&str> = roster.iter().map(|id| id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
        assert_eq!(roster.len(), 3);
        assert_eq!(roster.pool_of(&"c".into()), Some(Pool::Main));
        assert_eq!(roster.pool_of(&"d".into()), None);
    }
}

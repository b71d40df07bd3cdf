use std::fmt;
use std::str::FromStr;

/// Opaque assignable item: a team number or a student roster id.
///
/// Numbers order numerically and sort before names, so an exported table of
/// team numbers comes out in natural order without zero padding.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Item {
    Num(u64),
    Name(String),
}

impl FromStr for Item {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.parse::<u64>() {
            Ok(n) => Ok(Item::Num(n)),
            Err(_) => Ok(Item::Name(s.to_string())),
        }
    }
}

impl From<u64> for Item {
    fn from(n: u64) -> Self {
        Item::Num(n)
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Item::Num(n) => write!(f, "{}", n),
            Item::Name(s) => write!(f, "{}", s),
        }
    }
}

/// How the item collection was supplied; drives export labels only
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ItemKind {
    #[default]
    Teams,
    Students,
}

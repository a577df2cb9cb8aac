//! Objective tags and the purpose phrases inferred from them.

use std::fmt;
use std::str::FromStr;

pub use tripplan_types::request::DEFAULT_PURPOSE;

/// Trip intent tags with a dedicated purpose phrase.
///
/// The UI may send other tags (e.g. `balanced`); those are still forwarded
/// in `prefs.objective` but infer the default purpose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Objective {
    FamilyFriendly,
    Comfort,
    Cheapest,
}

impl Objective {
    pub fn tag(&self) -> &'static str {
        match self {
            Objective::FamilyFriendly => "family_friendly",
            Objective::Comfort => "comfort",
            Objective::Cheapest => "cheapest",
        }
    }

    /// Human-readable purpose phrase sent to the planner.
    ///
    /// | Objective        | Purpose                  |
    /// |------------------|--------------------------|
    /// | family_friendly  | family vacation          |
    /// | comfort          | premium leisure escape   |
    /// | cheapest         | budget getaway           |
    pub fn purpose(&self) -> &'static str {
        match self {
            Objective::FamilyFriendly => "family vacation",
            Objective::Comfort => "premium leisure escape",
            Objective::Cheapest => "budget getaway",
        }
    }
}

impl fmt::Display for Objective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

impl FromStr for Objective {
    type Err = String;

    /// Tags are matched exactly; `Comfort` or ` comfort` are unknown.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "family_friendly" => Ok(Objective::FamilyFriendly),
            "comfort" => Ok(Objective::Comfort),
            "cheapest" => Ok(Objective::Cheapest),
            other => Err(format!("unknown objective: '{other}'")),
        }
    }
}

/// Map an objective tag to a purpose phrase.
///
/// Total over all input: unknown and absent objectives yield
/// [`DEFAULT_PURPOSE`].
pub fn infer_purpose(objective: Option<&str>) -> &'static str {
    objective
        .and_then(|tag| tag.parse::<Objective>().ok())
        .map_or(DEFAULT_PURPOSE, |objective| objective.purpose())
}

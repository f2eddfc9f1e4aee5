use std::fmt;
use std::str::FromStr;

use crate::error::BenchError;

/// Where the tail of a synthesized list links back to, relative to its size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scenario {
    /// Plain chain ending in a null link.
    NoCycle,
    /// Loop covering the last 1% of the list.
    Small,
    /// Loop covering the last 30% of the list.
    Mod30,
    /// Loop covering the last 60% of the list.
    Mod60,
    /// Loop covering 90% of the list.
    Large,
}

impl Scenario {
    pub const ALL: [Scenario; 5] = [
        Scenario::NoCycle,
        Scenario::Small,
        Scenario::Mod30,
        Scenario::Mod60,
        Scenario::Large,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Scenario::NoCycle => "NoCycle",
            Scenario::Small => "Small(1%)",
            Scenario::Mod30 => "Mod(30%)",
            Scenario::Mod60 => "Mod(60%)",
            Scenario::Large => "Large(90%)",
        }
    }

    /// Fraction of the list that precedes the cycle entry.
    fn entry_ratio(self) -> Option<f64> {
        match self {
            Scenario::NoCycle => None,
            Scenario::Small => Some(0.99),
            Scenario::Mod30 => Some(0.7),
            Scenario::Mod60 => Some(0.4),
            Scenario::Large => Some(0.1),
        }
    }

    /// Entry index for a list of `n` nodes, truncating toward zero.
    pub fn resolve(self, n: usize) -> Option<usize> {
        self.entry_ratio().map(|ratio| (n as f64 * ratio) as usize)
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Scenario {
    type Err = BenchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Scenario::ALL
            .into_iter()
            .find(|scenario| scenario.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| BenchError::UnknownScenario(s.to_string()))
    }
}

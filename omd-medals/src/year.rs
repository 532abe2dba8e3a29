use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Year filter for the bar chart: every edition, or one Olympic year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum YearSelection {
    #[default]
    All,
    Year(i32),
}

impl YearSelection {
    /// The selected year, if any.
    pub fn year(&self) -> Option<i32> {
        match self {
            YearSelection::All => None,
            YearSelection::Year(y) => Some(*y),
        }
    }
}

impl fmt::Display for YearSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            YearSelection::All => f.write_str("All"),
            YearSelection::Year(y) => write!(f, "{}", y),
        }
    }
}

impl FromStr for YearSelection {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("all") {
            return Ok(YearSelection::All);
        }
        s.parse::<i32>()
            .map(YearSelection::Year)
            .map_err(|_| anyhow::anyhow!("invalid year '{}' (expected 'All' or a year such as 2012)", s))
    }
}

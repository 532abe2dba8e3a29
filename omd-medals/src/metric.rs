use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A selectable medal quantity. `TotalMedals` is derived as Gold + Silver + Bronze.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum MedalMetric {
    Gold,
    Silver,
    Bronze,
    #[default]
    #[serde(rename = "Total_Medals")]
    TotalMedals,
}

impl MedalMetric {
    /// All metrics in dropdown order.
    pub const ALL: [MedalMetric; 4] = [
        MedalMetric::Gold,
        MedalMetric::Silver,
        MedalMetric::Bronze,
        MedalMetric::TotalMedals,
    ];

    /// The individual medal colors, in pie chart order.
    pub const MEDALS: [MedalMetric; 3] = [MedalMetric::Gold, MedalMetric::Silver, MedalMetric::Bronze];

    /// Column name in the working table.
    pub fn column(&self) -> &'static str {
        match self {
            MedalMetric::Gold => "Gold",
            MedalMetric::Silver => "Silver",
            MedalMetric::Bronze => "Bronze",
            MedalMetric::TotalMedals => "Total_Medals",
        }
    }

    /// Display label, the column name with underscores replaced by spaces.
    pub fn label(&self) -> String {
        self.column().replace('_', " ")
    }

    /// Fixed chart color for a single medal; `None` for the total.
    pub fn color(&self) -> Option<&'static str> {
        match self {
            MedalMetric::Gold => Some("gold"),
            MedalMetric::Silver => Some("silver"),
            MedalMetric::Bronze => Some("#cd7f32"),
            MedalMetric::TotalMedals => None,
        }
    }
}

impl fmt::Display for MedalMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}

impl FromStr for MedalMetric {
    type Err = anyhow::Error;

    /// Accepts the column name or its label, case-insensitively
    /// (`gold`, `Total_Medals`, `total medals`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().replace(' ', "_");
        MedalMetric::ALL
            .iter()
            .copied()
            .find(|m| m.column().eq_ignore_ascii_case(&wanted))
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "unknown medal type '{}' (expected one of: Gold, Silver, Bronze, Total_Medals)",
                    s
                )
            })
    }
}

#[cfg(test)]
mod tests {
    use super::MedalMetric;

    #[test]
    fn labels_replace_underscores() {
        assert_eq!(MedalMetric::TotalMedals.label(), "Total Medals");
        assert_eq!(MedalMetric::Gold.label(), "Gold");
    }

    #[test]
    fn parses_column_names_and_labels() {
        assert_eq!("Gold".parse::<MedalMetric>().unwrap(), MedalMetric::Gold);
        assert_eq!("silver".parse::<MedalMetric>().unwrap(), MedalMetric::Silver);
        assert_eq!(
            "Total_Medals".parse::<MedalMetric>().unwrap(),
            MedalMetric::TotalMedals
        );
        assert_eq!(
            "total medals".parse::<MedalMetric>().unwrap(),
            MedalMetric::TotalMedals
        );
        assert!("Platinum".parse::<MedalMetric>().is_err());
    }

    #[test]
    fn total_has_no_fixed_color() {
        assert_eq!(MedalMetric::Bronze.color(), Some("#cd7f32"));
        assert_eq!(MedalMetric::TotalMedals.color(), None);
    }

    #[test]
    fn serializes_as_column_name() {
        let json = serde_json::to_string(&MedalMetric::TotalMedals).unwrap();
        assert_eq!(json, "\"Total_Medals\"");
        let json = serde_json::to_string(&MedalMetric::Gold).unwrap();
        assert_eq!(json, "\"Gold\"");
    }

    #[test]
    fn default_is_total() {
        assert_eq!(MedalMetric::default(), MedalMetric::TotalMedals);
    }
}

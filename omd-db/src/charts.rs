//! Chart specifications for the four dashboard charts.
//!
//! Each builder runs one query against the working table and wraps the rows
//! with everything the renderer needs: chart kind, title, field bindings,
//! axis labels and fixed colors. A selection that matches nothing produces a
//! placeholder spec (no rows, an annotation explaining why), never an error.

use crate::models::CountryValue;
use crate::queries::all_years_label;
use crate::WorkingTable;
use omd_medals::metric::MedalMetric;
use omd_medals::year::YearSelection;
use omd_medals::{year_range_label, TOP_N};
use serde::Serialize;
use std::collections::BTreeMap;

/// Sequential color scale used by the choropleth.
pub const MAP_COLOR_SCALE: &str = "YlOrRd";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    Pie,
    Choropleth,
    StackedArea,
    Bar,
}

/// Everything a renderer needs to draw one chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub title: String,
    /// Rows to plot, as a JSON array of objects.
    pub data: serde_json::Value,
    /// Category / location / x field.
    pub x_field: String,
    /// Value / y field.
    pub y_field: String,
    /// Field that picks a series or slice color.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_field: Option<String>,
    /// Axis labels keyed by field name.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub labels: BTreeMap<String, String>,
    /// Fixed colors keyed by the value of `color_field`.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub colors: BTreeMap<String, String>,
    /// Single fill color for every mark.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mark_color: Option<String>,
    /// Named continuous color scale.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_scale: Option<String>,
    /// Treat the x field as discrete categories.
    pub x_categorical: bool,
    /// Message drawn in place of data.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annotation: Option<String>,
}

impl ChartSpec {
    fn new(kind: ChartKind, title: String, x_field: &str, y_field: &str) -> Self {
        Self {
            kind,
            title,
            data: serde_json::Value::Array(Vec::new()),
            x_field: x_field.to_string(),
            y_field: y_field.to_string(),
            color_field: None,
            labels: BTreeMap::new(),
            colors: BTreeMap::new(),
            mark_color: None,
            color_scale: None,
            x_categorical: false,
            annotation: None,
        }
    }

    /// Number of plotted rows.
    pub fn row_count(&self) -> usize {
        self.data.as_array().map_or(0, Vec::len)
    }

    /// True for the "no selection" / "no data" stand-ins.
    pub fn is_placeholder(&self) -> bool {
        self.annotation.is_some() && self.row_count() == 0
    }

    pub fn to_json(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl WorkingTable {
    /// Medal breakdown (Gold, Silver, Bronze) for one country across all years.
    ///
    /// `None` or an empty name yields a "no country selected" placeholder; a
    /// country absent from the table yields a "no data" placeholder.
    pub fn pie_chart(&self, country: Option<&str>) -> anyhow::Result<ChartSpec> {
        let country = match country.map(str::trim).filter(|c| !c.is_empty()) {
            Some(c) => c,
            None => {
                let mut spec = ChartSpec::new(
                    ChartKind::Pie,
                    "Please select a country".to_string(),
                    "medal",
                    "count",
                );
                spec.annotation = Some("No country selected".to_string());
                return Ok(spec);
            }
        };

        let medals = match self.query_country_medals(country)? {
            Some(m) => m,
            None => {
                let mut spec = ChartSpec::new(
                    ChartKind::Pie,
                    format!("No data for {} ({})", country, year_range_label()),
                    "medal",
                    "count",
                );
                spec.annotation = Some("No data available".to_string());
                return Ok(spec);
            }
        };

        let mut spec = ChartSpec::new(
            ChartKind::Pie,
            format!("Medal Distribution for {} ({})", country, year_range_label()),
            "medal",
            "count",
        );
        spec.color_field = Some("medal".to_string());
        spec.colors = medals
            .iter()
            .map(|m| (m.medal.column().to_string(), m.color.clone()))
            .collect();
        spec.data = serde_json::to_value(&medals)?;
        Ok(spec)
    }

    /// Every country's sum of `metric`, keyed by country name for the choropleth.
    pub fn map_chart(&self, metric: MedalMetric) -> anyhow::Result<ChartSpec> {
        let rows = self.query_metric_by_country(metric)?;
        let mut spec = ChartSpec::new(
            ChartKind::Choropleth,
            format!("Total {} by Country ({})", metric.label(), year_range_label()),
            "country",
            "value",
        );
        spec.labels.insert("value".to_string(), metric.label());
        spec.color_scale = Some(MAP_COLOR_SCALE.to_string());
        spec.data = serde_json::to_value(&rows)?;
        Ok(spec)
    }

    /// Per-year `metric` for the ten countries with the largest all-years sum.
    pub fn area_chart(&self, metric: MedalMetric) -> anyhow::Result<ChartSpec> {
        let rows = self.query_top_country_trends(metric, TOP_N)?;
        let mut spec = ChartSpec::new(
            ChartKind::StackedArea,
            format!(
                "Top {} Countries by {} ({})",
                TOP_N,
                metric.label(),
                year_range_label()
            ),
            "year",
            "value",
        );
        spec.color_field = Some("country".to_string());
        spec.labels.insert("year".to_string(), "Year".to_string());
        spec.labels
            .insert("value".to_string(), format!("{} Won", metric.label()));
        spec.x_categorical = true;
        spec.data = serde_json::to_value(&rows)?;
        Ok(spec)
    }

    /// The ten countries with the largest sum of `metric`, largest first,
    /// over all years or a single one.
    pub fn bar_chart(&self, metric: MedalMetric, year: YearSelection) -> anyhow::Result<ChartSpec> {
        let rows: Vec<CountryValue> = self.query_top_countries(metric, year, TOP_N)?;
        let year_segment = match year {
            YearSelection::All => all_years_label(),
            YearSelection::Year(_) => self.year_label(year)?,
        };
        let mut spec = ChartSpec::new(
            ChartKind::Bar,
            format!(
                "Top {} Countries by {} in {}",
                TOP_N,
                metric.label(),
                year_segment
            ),
            "country",
            "value",
        );
        spec.labels.insert("country".to_string(), "Country".to_string());
        spec.labels.insert("value".to_string(), metric.label());
        spec.mark_color = metric.color().map(str::to_string);
        spec.x_categorical = true;
        spec.data = serde_json::to_value(&rows)?;
        Ok(spec)
    }
}

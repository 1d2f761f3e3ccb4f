use serde::{Deserialize, Serialize};

use crate::query::{FilterValue, QueryParams};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    Month,
    Year,
}

impl Period {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Month => "month",
            Self::Year => "year",
        }
    }
}

/// Parameters of `GET /actions/statistics`.
#[derive(Debug, Clone, PartialEq)]
pub struct StatisticsQuery {
    pub period: Period,
    pub year: String,
    /// Two-digit month; only sent for monthly statistics.
    pub month: Option<String>,
    pub product_id: Option<String>,
}

impl QueryParams for StatisticsQuery {
    fn entries(&self) -> Vec<(&'static str, FilterValue)> {
        let month = match self.period {
            Period::Month => FilterValue::opt_text(self.month.as_deref()),
            Period::Year => FilterValue::Empty,
        };
        vec![
            ("period", FilterValue::text(self.period.as_str())),
            ("year", FilterValue::text(&self.year)),
            ("month", month),
            ("productId", FilterValue::opt_text(self.product_id.as_deref())),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StatisticItem {
    #[serde(rename = "productId", default)]
    pub product_id: Option<String>,
    #[serde(rename = "productName", default)]
    pub product_name: Option<String>,
    #[serde(rename = "totalوارد", default)]
    pub total_income: f64,
    #[serde(rename = "totalمنصرف", default)]
    pub total_outcome: f64,
    #[serde(rename = "netAmount", default)]
    pub net_amount: f64,
    #[serde(default)]
    pub count: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct StatisticsSummary {
    #[serde(rename = "totalCount", default)]
    pub total_count: u64,
    #[serde(rename = "totalوارد", default)]
    pub total_income: f64,
    #[serde(rename = "totalمنصرف", default)]
    pub total_outcome: f64,
    #[serde(rename = "netAmount", default)]
    pub net_amount: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StatisticsReport {
    #[serde(default)]
    pub period: Option<Period>,
    #[serde(default)]
    pub year: Option<String>,
    #[serde(default)]
    pub month: Option<String>,
    #[serde(rename = "productId", default)]
    pub product_id: Option<String>,
    #[serde(default)]
    pub statistics: Vec<StatisticItem>,
    #[serde(default)]
    pub summary: StatisticsSummary,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::build_query;
    use serde_json::json;

    #[test]
    fn monthly_query_sends_month() {
        let query = StatisticsQuery {
            period: Period::Month,
            year: "2024".to_string(),
            month: Some("03".to_string()),
            product_id: None,
        };
        assert_eq!(build_query(&query), "period=month&year=2024&month=03");
    }

    #[test]
    fn yearly_query_drops_month() {
        let query = StatisticsQuery {
            period: Period::Year,
            year: "2024".to_string(),
            month: Some("03".to_string()),
            product_id: Some("p1".to_string()),
        };
        assert_eq!(build_query(&query), "period=year&year=2024&productId=p1");
    }

    #[test]
    fn report_reads_arabic_totals() {
        let report: StatisticsReport = serde_json::from_value(json!({
            "period": "month",
            "year": "2024",
            "month": "03",
            "productId": null,
            "statistics": [{
                "productId": "p1",
                "productName": "قمح",
                "totalوارد": 500,
                "totalمنصرف": 200,
                "netAmount": 300,
                "count": 4
            }],
            "summary": {"totalCount": 4, "totalوارد": 500, "totalمنصرف": 200, "netAmount": 300}
        }))
        .unwrap();

        assert_eq!(report.period, Some(Period::Month));
        assert_eq!(report.statistics[0].total_income, 500.0);
        assert_eq!(report.summary.net_amount, 300.0);
    }
}

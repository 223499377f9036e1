use crate::error::{HubError, Result};
use crate::types::{AllocationEvent, ServiceLineMetric, TalentRecord};
use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// DateRange
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateRange {
    #[default]
    Last30Days,
    LastQuarter,
}

impl DateRange {
    pub fn all() -> &'static [DateRange] {
        &[DateRange::Last30Days, DateRange::LastQuarter]
    }

    pub fn days(self) -> i64 {
        match self {
            DateRange::Last30Days => 30,
            DateRange::LastQuarter => 90,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DateRange::Last30Days => "Last 30 Days",
            DateRange::LastQuarter => "Last Quarter",
        }
    }

    /// Whether `date` falls within the window ending on `today`, inclusive.
    pub fn contains(self, date: NaiveDate, today: NaiveDate) -> bool {
        date <= today && date >= today - Duration::days(self.days())
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.days())
    }
}

impl std::str::FromStr for DateRange {
    type Err = HubError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "30" | "last_30_days" => Ok(DateRange::Last30Days),
            "90" | "last_quarter" => Ok(DateRange::LastQuarter),
            other => Err(HubError::InvalidDateRange(other.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// DashboardFilter
// ---------------------------------------------------------------------------

/// A query over the dataset. `service_lines: None` selects every service line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardFilter {
    #[serde(default)]
    pub service_lines: Option<Vec<String>>,
    #[serde(default)]
    pub range: DateRange,
}

impl DashboardFilter {
    /// Build from raw query values: `sl` is a comma-separated list of codes or
    /// names, `range` is `30` or `90`.
    pub fn from_query(sl: Option<&str>, range: Option<&str>) -> Result<Self> {
        let service_lines = sl.map(|raw| {
            raw.split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect()
        });
        let range = match range {
            Some(r) if !r.trim().is_empty() => r.parse()?,
            _ => DateRange::default(),
        };
        Ok(Self {
            service_lines,
            range,
        })
    }

    pub fn selects(&self, metric: &ServiceLineMetric) -> bool {
        match &self.service_lines {
            None => true,
            Some(keys) => keys.iter().any(|k| metric.matches(k)),
        }
    }

    pub fn service_lines<'a>(&self, all: &'a [ServiceLineMetric]) -> Vec<&'a ServiceLineMetric> {
        all.iter().filter(|m| self.selects(m)).collect()
    }

    /// Talent records in a selected service line. Records without a service
    /// line are always kept.
    pub fn talent<'a>(
        &self,
        lines: &[ServiceLineMetric],
        pool: &'a [TalentRecord],
    ) -> Vec<&'a TalentRecord> {
        pool.iter()
            .filter(|t| match &t.service_line {
                None => true,
                Some(code) => lines
                    .iter()
                    .find(|m| m.matches(code))
                    .is_none_or(|m| self.selects(m)),
            })
            .collect()
    }

    /// Allocations inside the date range. Undated allocations are always kept.
    pub fn allocations<'a>(
        &self,
        events: &'a [AllocationEvent],
        today: NaiveDate,
    ) -> Vec<&'a AllocationEvent> {
        events
            .iter()
            .filter(|a| a.allocated_on.is_none_or(|d| self.range.contains(d, today)))
            .collect()
    }
}

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// ServiceLineMetric
// ---------------------------------------------------------------------------

/// Headcount split for one service line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceLineMetric {
    #[serde(default)]
    pub code: String,
    #[serde(rename = "name", default)]
    pub display_name: String,
    #[serde(rename = "fullName", default)]
    pub full_name: String,
    #[serde(rename = "total")]
    pub total_headcount: u32,
    #[serde(rename = "billed")]
    pub billed_count: u32,
    #[serde(rename = "bench")]
    pub bench_count: u32,
    #[serde(rename = "enablement")]
    pub enablement_count: u32,
}

impl ServiceLineMetric {
    /// Sum of the three tracked sub-counts. Saturates rather than wrapping.
    pub fn allocated_sum(&self) -> u32 {
        self.billed_count
            .saturating_add(self.bench_count)
            .saturating_add(self.enablement_count)
    }

    pub fn totals_consistent(&self) -> bool {
        self.allocated_sum() <= self.total_headcount
    }

    /// True when `key` names this service line by code or display name.
    pub fn matches(&self, key: &str) -> bool {
        self.code.eq_ignore_ascii_case(key) || self.display_name.eq_ignore_ascii_case(key)
    }
}

// ---------------------------------------------------------------------------
// BenchForecast
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BenchWindow {
    Under15,
    #[serde(rename = "between16and30")]
    Between16And30,
    #[serde(rename = "between31and45")]
    Between31And45,
}

impl BenchWindow {
    pub fn all() -> &'static [BenchWindow] {
        &[
            BenchWindow::Under15,
            BenchWindow::Between16And30,
            BenchWindow::Between31And45,
        ]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            BenchWindow::Under15 => "under15",
            BenchWindow::Between16And30 => "between16and30",
            BenchWindow::Between31And45 => "between31and45",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            BenchWindow::Under15 => "Coming to Bench (<15 Days)",
            BenchWindow::Between16And30 => "Coming to Bench (16-30 Days)",
            BenchWindow::Between31And45 => "Coming to Bench (31-45 Days)",
        }
    }

    /// Nearer buckets are more urgent.
    pub fn tone(self) -> Tone {
        match self {
            BenchWindow::Under15 => Tone::Danger,
            BenchWindow::Between16And30 => Tone::Warning,
            BenchWindow::Between31And45 => Tone::Success,
        }
    }
}

impl fmt::Display for BenchWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Head counts expected to roll onto the bench, per day-range bucket.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BenchForecast {
    #[serde(default)]
    pub under15: u32,
    #[serde(rename = "between16and30", default)]
    pub between16_and30: u32,
    #[serde(rename = "between31and45", default)]
    pub between31_and45: u32,
}

impl BenchForecast {
    pub fn count(&self, window: BenchWindow) -> u32 {
        match window {
            BenchWindow::Under15 => self.under15,
            BenchWindow::Between16And30 => self.between16_and30,
            BenchWindow::Between31And45 => self.between31_and45,
        }
    }
}

// ---------------------------------------------------------------------------
// Tone
// ---------------------------------------------------------------------------

/// Semantic color tag understood by the rendering host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    Primary,
    Success,
    Info,
    Warning,
    Danger,
    Secondary,
}

impl Tone {
    pub fn as_str(self) -> &'static str {
        match self {
            Tone::Primary => "primary",
            Tone::Success => "success",
            Tone::Info => "info",
            Tone::Warning => "warning",
            Tone::Danger => "danger",
            Tone::Secondary => "secondary",
        }
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// FunnelStage
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FunnelStage {
    New,
    Interviewed,
    Offered,
    Allocated,
}

impl FunnelStage {
    pub fn all() -> &'static [FunnelStage] {
        &[
            FunnelStage::New,
            FunnelStage::Interviewed,
            FunnelStage::Offered,
            FunnelStage::Allocated,
        ]
    }

    pub fn label(self) -> &'static str {
        match self {
            FunnelStage::New => "New",
            FunnelStage::Interviewed => "Interviewed",
            FunnelStage::Offered => "Offered",
            FunnelStage::Allocated => "Allocated",
        }
    }
}

impl fmt::Display for FunnelStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// AllocationEvent
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllocationEvent {
    /// Positive; `0` is treated as absent.
    #[serde(default)]
    pub id: u32,
    #[serde(rename = "name", default)]
    pub person_name: String,
    #[serde(rename = "prevClient", default)]
    pub previous_assignment: String,
    #[serde(rename = "newClient", default)]
    pub new_assignment: String,
    #[serde(default)]
    pub role: String,
    #[serde(rename = "recruiter", default)]
    pub recruiter_name: String,
    #[serde(rename = "allocatedOn", default, skip_serializing_if = "Option::is_none")]
    pub allocated_on: Option<NaiveDate>,
}

// ---------------------------------------------------------------------------
// TalentRecord
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TalentStatus {
    #[serde(rename = "On Bench", alias = "on_bench")]
    OnBench,
    #[serde(rename = "Billed", alias = "billed")]
    Billed,
}

impl TalentStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            TalentStatus::OnBench => "On Bench",
            TalentStatus::Billed => "Billed",
        }
    }
}

impl fmt::Display for TalentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TalentRecord {
    /// Positive; `0` is treated as absent.
    #[serde(default)]
    pub id: u32,
    #[serde(rename = "name", default)]
    pub person_name: String,
    #[serde(rename = "eid", default)]
    pub employee_id: String,
    pub status: TalentStatus,
    #[serde(rename = "client", default)]
    pub current_client: String,
    #[serde(rename = "skills", default)]
    pub skill_list: Vec<String>,
    #[serde(default)]
    pub availability: String,
    #[serde(rename = "benchSince", default)]
    pub bench_since_date: Option<String>,
    #[serde(rename = "process", default)]
    pub process_status: String,
    #[serde(rename = "recruiter", default)]
    pub recruiter_name: String,
    /// Code of the owning service line, when known.
    #[serde(rename = "serviceLine", default, skip_serializing_if = "Option::is_none")]
    pub service_line: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metric(total: u32, billed: u32, bench: u32, enablement: u32) -> ServiceLineMetric {
        ServiceLineMetric {
            code: "dpe".into(),
            display_name: "DPE".into(),
            full_name: "Digital Process Engineering".into(),
            total_headcount: total,
            billed_count: billed,
            bench_count: bench,
            enablement_count: enablement,
        }
    }

    #[test]
    fn totals_consistent_allows_equal_sum() {
        assert!(metric(850, 710, 95, 45).totals_consistent());
        assert!(!metric(10, 5, 5, 1).totals_consistent());
    }

    #[test]
    fn allocated_sum_saturates() {
        assert_eq!(metric(1, u32::MAX, 1, 1).allocated_sum(), u32::MAX);
    }

    #[test]
    fn matches_code_or_display_name() {
        let m = metric(1, 0, 0, 0);
        assert!(m.matches("dpe"));
        assert!(m.matches("DPE"));
        assert!(!m.matches("cx"));
    }

    #[test]
    fn talent_status_parses_display_form() {
        let s: TalentStatus = serde_yaml::from_str("On Bench").unwrap();
        assert_eq!(s, TalentStatus::OnBench);
        let s: TalentStatus = serde_yaml::from_str("billed").unwrap();
        assert_eq!(s, TalentStatus::Billed);
    }

    #[test]
    fn bench_windows_ordered_by_urgency() {
        let tones: Vec<Tone> = BenchWindow::all().iter().map(|w| w.tone()).collect();
        assert_eq!(tones, vec![Tone::Danger, Tone::Warning, Tone::Success]);
    }

    #[test]
    fn forecast_reads_camel_case_keys() {
        let f: BenchForecast =
            serde_yaml::from_str("under15: 18\nbetween16and30: 25\nbetween31and45: 32\n").unwrap();
        assert_eq!(f.count(BenchWindow::Between16And30), 25);
        assert_eq!(f.count(BenchWindow::Between31And45), 32);
    }
}

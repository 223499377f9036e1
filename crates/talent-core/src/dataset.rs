//! The immutable dataset every view is derived from.
//!
//! A [`Dataset`] is loaded once (from a YAML/JSON file or the built-in data),
//! validated, and then shared read-only for the lifetime of the process.

use crate::config::{HubConfig, TotalsPolicy, WarnLevel};
use crate::error::{HubError, Result};
use crate::paths;
use crate::types::{
    AllocationEvent, BenchForecast, FunnelStage, ServiceLineMetric, TalentRecord,
};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

const BUILTIN_DATASET: &str = include_str!("../data/builtin.yaml");

/// Number of stages the interview funnel must carry.
pub const FUNNEL_STAGES: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    #[serde(default)]
    pub service_lines: Vec<ServiceLineMetric>,
    #[serde(default)]
    pub bench_forecast: BenchForecast,
    #[serde(default)]
    pub interview_funnel: Vec<u32>,
    #[serde(default)]
    pub recent_allocations: Vec<AllocationEvent>,
    #[serde(default)]
    pub talent_pool: Vec<TalentRecord>,
}

impl Dataset {
    /// The dataset that ships with the binary.
    pub fn builtin() -> Result<Self> {
        Ok(serde_yaml::from_str(BUILTIN_DATASET)?)
    }

    /// Load a dataset file. `.json` files are parsed as JSON, everything else as YAML.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(HubError::DatasetNotFound(path.display().to_string()));
        }
        let data = std::fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("json"));
        let dataset = if is_json {
            serde_json::from_str(&data)?
        } else {
            serde_yaml::from_str(&data)?
        };
        tracing::debug!(path = %path.display(), "loaded dataset");
        Ok(dataset)
    }

    /// Resolve the dataset for a project: the configured file, else
    /// `.talent/dataset.yaml` when present, else the built-in data.
    pub fn for_project(root: &Path, config: &HubConfig) -> Result<Self> {
        if let Some(path) = config.dataset_path(root) {
            return Self::load(&path);
        }
        let default = paths::default_dataset_path(root);
        if default.exists() {
            return Self::load(&default);
        }
        Self::builtin()
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        crate::io::write_yaml(path, self)
    }

    pub fn service_line(&self, key: &str) -> Result<&ServiceLineMetric> {
        self.service_lines
            .iter()
            .find(|m| m.matches(key))
            .ok_or_else(|| HubError::UnknownServiceLine(key.to_string()))
    }

    // -----------------------------------------------------------------------
    // Validation
    // -----------------------------------------------------------------------

    pub fn validate(&self, policy: TotalsPolicy) -> Vec<DatasetWarning> {
        let mut out = Vec::new();
        let mut push = |level: WarnLevel, issue: Issue| {
            out.push(DatasetWarning {
                level,
                message: issue.message(),
                issue,
            })
        };

        // Service lines
        let mut codes = HashSet::new();
        for m in &self.service_lines {
            let id = if m.code.is_empty() {
                m.display_name.clone()
            } else {
                m.code.clone()
            };
            for (field, value) in [
                ("code", &m.code),
                ("name", &m.display_name),
                ("fullName", &m.full_name),
            ] {
                if value.trim().is_empty() {
                    push(WarnLevel::Error, missing("service line", &id, field));
                }
            }
            if !m.code.is_empty() && paths::validate_code(&m.code).is_err() {
                push(
                    WarnLevel::Error,
                    Issue::InvalidCode {
                        code: m.code.clone(),
                    },
                );
            }
            if !codes.insert(m.code.as_str()) {
                push(WarnLevel::Error, duplicate("service line", &m.code));
            }
            if !m.totals_consistent() {
                push(
                    policy.level(),
                    Issue::InconsistentTotals {
                        code: id,
                        total: m.total_headcount,
                        sum: m.allocated_sum(),
                    },
                );
            }
        }

        // Funnel
        if self.interview_funnel.len() != FUNNEL_STAGES {
            push(
                WarnLevel::Error,
                Issue::InvalidFunnelLength {
                    expected: FUNNEL_STAGES,
                    actual: self.interview_funnel.len(),
                },
            );
        } else {
            for (i, pair) in self.interview_funnel.windows(2).enumerate() {
                if pair[1] > pair[0] {
                    push(
                        WarnLevel::Warning,
                        Issue::FunnelNotMonotonic {
                            stage: FunnelStage::all()[i + 1],
                            count: pair[1],
                            previous: pair[0],
                        },
                    );
                }
            }
        }

        // Allocations
        let mut ids = HashSet::new();
        for a in &self.recent_allocations {
            let id = a.id.to_string();
            for (field, value) in [
                ("name", &a.person_name),
                ("prevClient", &a.previous_assignment),
                ("newClient", &a.new_assignment),
                ("role", &a.role),
                ("recruiter", &a.recruiter_name),
            ] {
                if value.trim().is_empty() {
                    push(WarnLevel::Error, missing("allocation", &id, field));
                }
            }
            if a.id == 0 {
                push(WarnLevel::Error, missing("allocation", &a.person_name, "id"));
            } else if !ids.insert(a.id) {
                push(WarnLevel::Error, duplicate("allocation", &id));
            }
        }

        // Talent pool
        let mut ids = HashSet::new();
        for t in &self.talent_pool {
            let id = t.id.to_string();
            for (field, value) in [
                ("name", &t.person_name),
                ("eid", &t.employee_id),
                ("client", &t.current_client),
                ("availability", &t.availability),
                ("process", &t.process_status),
                ("recruiter", &t.recruiter_name),
            ] {
                if value.trim().is_empty() {
                    push(WarnLevel::Error, missing("talent record", &id, field));
                }
            }
            if t.skill_list.iter().any(|s| s.trim().is_empty()) {
                push(WarnLevel::Error, missing("talent record", &id, "skills"));
            }
            if t.id == 0 {
                push(WarnLevel::Error, missing("talent record", &t.person_name, "id"));
            } else if !ids.insert(t.id) {
                push(WarnLevel::Error, duplicate("talent record", &id));
            }
            if let Some(ref sl) = t.service_line {
                if !self.service_lines.iter().any(|m| m.matches(sl)) {
                    push(
                        WarnLevel::Error,
                        Issue::UnknownServiceLine { code: sl.clone() },
                    );
                }
            }
        }

        out
    }

    /// Fail on the first error-level finding.
    pub fn check(&self, policy: TotalsPolicy) -> Result<()> {
        for w in self.validate(policy) {
            if w.level == WarnLevel::Error {
                if let Some(err) = w.issue.into_error() {
                    return Err(err);
                }
            }
        }
        Ok(())
    }
}

fn missing(entity: &str, id: &str, field: &str) -> Issue {
    Issue::MissingRequiredField {
        entity: entity.to_string(),
        id: id.to_string(),
        field: field.to_string(),
    }
}

fn duplicate(entity: &str, id: &str) -> Issue {
    Issue::DuplicateId {
        entity: entity.to_string(),
        id: id.to_string(),
    }
}

// ---------------------------------------------------------------------------
// DatasetWarning / Issue
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DatasetWarning {
    pub level: WarnLevel,
    pub message: String,
    #[serde(flatten)]
    pub issue: Issue,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Issue {
    MissingRequiredField {
        entity: String,
        id: String,
        field: String,
    },
    InconsistentTotals {
        code: String,
        total: u32,
        sum: u32,
    },
    InvalidFunnelLength {
        expected: usize,
        actual: usize,
    },
    FunnelNotMonotonic {
        stage: FunnelStage,
        count: u32,
        previous: u32,
    },
    InvalidCode {
        code: String,
    },
    DuplicateId {
        entity: String,
        id: String,
    },
    UnknownServiceLine {
        code: String,
    },
}

impl Issue {
    pub fn message(&self) -> String {
        match self {
            Issue::FunnelNotMonotonic {
                stage,
                count,
                previous,
            } => format!("funnel stage '{stage}' ({count}) is larger than the stage before it ({previous})"),
            Issue::UnknownServiceLine { code } => {
                format!("talent record references unknown service line '{code}'")
            }
            other => match other.clone().into_error() {
                Some(e) => e.to_string(),
                None => String::new(),
            },
        }
    }

    /// The error this issue becomes when it blocks loading. Advisory-only
    /// issues return `None`.
    pub fn into_error(self) -> Option<HubError> {
        match self {
            Issue::MissingRequiredField { entity, id, field } => {
                Some(HubError::MissingRequiredField { entity, id, field })
            }
            Issue::InconsistentTotals { code, total, sum } => {
                Some(HubError::InconsistentTotals { code, total, sum })
            }
            Issue::InvalidFunnelLength { expected, actual } => {
                Some(HubError::InvalidFunnelLength { expected, actual })
            }
            Issue::InvalidCode { code } => Some(HubError::InvalidCode(code)),
            Issue::DuplicateId { entity, id } => Some(HubError::DuplicateId { entity, id }),
            Issue::UnknownServiceLine { code } => Some(HubError::UnknownServiceLine(code)),
            Issue::FunnelNotMonotonic { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn builtin_dataset_loads_and_is_clean() {
        let ds = Dataset::builtin().unwrap();
        assert_eq!(ds.service_lines.len(), 4);
        assert_eq!(ds.interview_funnel, vec![65, 55, 35, 25]);
        assert_eq!(ds.recent_allocations.len(), 3);
        assert_eq!(ds.talent_pool.len(), 3);
        assert!(ds.validate(TotalsPolicy::Enforce).is_empty());
        ds.check(TotalsPolicy::Enforce).unwrap();
    }

    #[test]
    fn builtin_keeps_service_line_order() {
        let ds = Dataset::builtin().unwrap();
        let codes: Vec<&str> = ds.service_lines.iter().map(|m| m.code.as_str()).collect();
        assert_eq!(codes, vec!["dpe", "cx", "ci", "da"]);
    }

    #[test]
    fn bench_since_null_is_none() {
        let ds = Dataset::builtin().unwrap();
        assert_eq!(ds.talent_pool[0].bench_since_date.as_deref(), Some("June 5"));
        assert_eq!(ds.talent_pool[1].bench_since_date, None);
    }

    #[test]
    fn inconsistent_totals_level_follows_policy() {
        let mut ds = Dataset::builtin().unwrap();
        ds.service_lines[0].billed_count = 900;

        let warn = ds.validate(TotalsPolicy::Warn);
        assert_eq!(warn.len(), 1);
        assert_eq!(warn[0].level, WarnLevel::Warning);
        ds.check(TotalsPolicy::Warn).unwrap();

        let enforce = ds.validate(TotalsPolicy::Enforce);
        assert_eq!(enforce[0].level, WarnLevel::Error);
        assert!(matches!(
            ds.check(TotalsPolicy::Enforce),
            Err(HubError::InconsistentTotals { total: 850, sum: 1040, .. })
        ));
    }

    #[test]
    fn wrong_funnel_length_is_error() {
        let mut ds = Dataset::builtin().unwrap();
        ds.interview_funnel = vec![1, 2, 3];
        assert!(matches!(
            ds.check(TotalsPolicy::Warn),
            Err(HubError::InvalidFunnelLength {
                expected: 4,
                actual: 3
            })
        ));
    }

    #[test]
    fn growing_funnel_is_only_a_warning() {
        let mut ds = Dataset::builtin().unwrap();
        ds.interview_funnel = vec![10, 20, 5, 1];
        let w = ds.validate(TotalsPolicy::Warn);
        assert_eq!(w.len(), 1);
        assert_eq!(w[0].level, WarnLevel::Warning);
        assert!(matches!(
            w[0].issue,
            Issue::FunnelNotMonotonic {
                stage: FunnelStage::Interviewed,
                ..
            }
        ));
        ds.check(TotalsPolicy::Enforce).unwrap();
    }

    fn write(dir: &TempDir, name: &str, body: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn absent_allocation_role_is_a_missing_field() {
        let dir = TempDir::new().unwrap();
        let path = write(
            &dir,
            "dataset.yaml",
            "interviewFunnel: [4, 3, 2, 1]\n\
             recentAllocations:\n  \
             - { id: 1, name: Ananya Sharma, prevClient: On Bench, newClient: CVS, recruiter: Rohan Gupta }\n",
        );
        let ds = Dataset::load(&path).unwrap();
        let warnings = ds.validate(TotalsPolicy::Warn);
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].level, WarnLevel::Error);
        assert!(matches!(
            ds.check(TotalsPolicy::Warn),
            Err(HubError::MissingRequiredField { ref entity, ref id, ref field })
                if entity == "allocation" && id == "1" && field == "role"
        ));
    }

    #[test]
    fn absent_keys_in_json_are_missing_fields() {
        let dir = TempDir::new().unwrap();
        let path = write(
            &dir,
            "dataset.json",
            r#"{
                "serviceLines": [{"name": "CX", "fullName": "Customer Experience",
                                  "total": 10, "billed": 5, "bench": 3, "enablement": 2}],
                "interviewFunnel": [4, 3, 2, 1],
                "talentPool": [{"id": 7, "name": "Vikram Rathore", "status": "On Bench",
                                "client": "Walmart", "availability": "Immediate",
                                "process": "Not in process", "recruiter": "Priya Singh"}]
            }"#,
        );
        let ds = Dataset::load(&path).unwrap();
        let fields: Vec<(String, String)> = ds
            .validate(TotalsPolicy::Warn)
            .into_iter()
            .filter_map(|w| match w.issue {
                Issue::MissingRequiredField { entity, field, .. } => Some((entity, field)),
                _ => None,
            })
            .collect();
        assert_eq!(
            fields,
            vec![
                ("service line".to_string(), "code".to_string()),
                ("talent record".to_string(), "eid".to_string()),
            ]
        );
    }

    #[test]
    fn absent_id_is_a_missing_field_not_a_duplicate() {
        let mut ds = Dataset::builtin().unwrap();
        ds.recent_allocations[0].id = 0;
        ds.recent_allocations[1].id = 0;
        let warnings = ds.validate(TotalsPolicy::Warn);
        assert_eq!(warnings.len(), 2);
        assert!(warnings.iter().all(|w| matches!(
            &w.issue,
            Issue::MissingRequiredField { field, .. } if field == "id"
        )));
    }

    #[test]
    fn blank_required_field_is_reported() {
        let mut ds = Dataset::builtin().unwrap();
        ds.talent_pool[2].employee_id = "  ".into();
        let err = ds.check(TotalsPolicy::Warn).unwrap_err();
        match err {
            HubError::MissingRequiredField { entity, id, field } => {
                assert_eq!(entity, "talent record");
                assert_eq!(id, "3");
                assert_eq!(field, "eid");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn duplicate_ids_and_codes_are_errors() {
        let mut ds = Dataset::builtin().unwrap();
        ds.recent_allocations[1].id = 1;
        ds.service_lines[1].code = "dpe".into();
        let warnings = ds.validate(TotalsPolicy::Warn);
        assert!(warnings.iter().any(
            |w| matches!(&w.issue, Issue::DuplicateId { entity, .. } if entity == "allocation")
        ));
        assert!(warnings.iter().any(
            |w| matches!(&w.issue, Issue::DuplicateId { entity, .. } if entity == "service line")
        ));
    }

    #[test]
    fn unknown_talent_service_line_is_error() {
        let mut ds = Dataset::builtin().unwrap();
        ds.talent_pool[0].service_line = Some("zz".into());
        assert!(matches!(
            ds.check(TotalsPolicy::Warn),
            Err(HubError::UnknownServiceLine(code)) if code == "zz"
        ));
    }

    #[test]
    fn service_line_lookup_by_code_or_name() {
        let ds = Dataset::builtin().unwrap();
        assert_eq!(ds.service_line("cx").unwrap().full_name, "Customer Experience");
        assert_eq!(ds.service_line("DA").unwrap().code, "da");
        assert!(matches!(
            ds.service_line("nope"),
            Err(HubError::UnknownServiceLine(_))
        ));
    }

    #[test]
    fn load_missing_file_is_dataset_not_found() {
        let dir = TempDir::new().unwrap();
        let err = Dataset::load(&dir.path().join("missing.yaml")).unwrap_err();
        assert!(matches!(err, HubError::DatasetNotFound(_)));
    }

    #[test]
    fn load_json_by_extension() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("hub.json");
        std::fs::write(
            &path,
            r#"{"serviceLines":[{"code":"cx","name":"CX","fullName":"Customer Experience","total":3,"billed":1,"bench":1,"enablement":1}],"interviewFunnel":[4,3,2,1]}"#,
        )
        .unwrap();
        let ds = Dataset::load(&path).unwrap();
        assert_eq!(ds.service_lines[0].total_headcount, 3);
        assert!(ds.talent_pool.is_empty());
    }

    #[test]
    fn for_project_prefers_default_file_over_builtin() {
        let dir = TempDir::new().unwrap();
        let mut ds = Dataset::builtin().unwrap();
        ds.interview_funnel = vec![9, 8, 7, 6];
        ds.save(&paths::default_dataset_path(dir.path())).unwrap();

        let loaded = Dataset::for_project(dir.path(), &HubConfig::default()).unwrap();
        assert_eq!(loaded.interview_funnel, vec![9, 8, 7, 6]);
    }

    #[test]
    fn for_project_without_files_uses_builtin() {
        let dir = TempDir::new().unwrap();
        let loaded = Dataset::for_project(dir.path(), &HubConfig::default()).unwrap();
        assert_eq!(loaded, Dataset::builtin().unwrap());
    }
}

//! Row, badge and stat-card models for tabular display.

use crate::config::BadgeHashing;
use crate::types::{AllocationEvent, BenchForecast, BenchWindow, TalentRecord, TalentStatus, Tone};
use serde::Serialize;

/// Badge colors, indexed by the skill hash.
pub const BADGE_PALETTE: [Tone; 6] = [
    Tone::Primary,
    Tone::Success,
    Tone::Info,
    Tone::Warning,
    Tone::Danger,
    Tone::Secondary,
];

pub const MOVEMENT_ARROW: &str = " → ";

pub const ALLOCATION_HEADERS: [&str; 4] = ["Name", "Movement", "Role", "Recruiter"];
pub const TALENT_HEADERS: [&str; 5] = ["Profile", "Status", "Skills", "Availability", "Process"];

// ---------------------------------------------------------------------------
// Badges
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BadgeSpec {
    pub text: String,
    pub color: Tone,
}

/// Badge for a skill using the compatible `length mod 6` mapping.
///
/// Length is counted in Unicode scalar values, so "Java" and "Perl" always
/// share a color.
pub fn format_skill_badge(skill: &str) -> BadgeSpec {
    format_skill_badge_with(skill, BadgeHashing::Length)
}

pub fn format_skill_badge_with(skill: &str, hashing: BadgeHashing) -> BadgeSpec {
    let n = BADGE_PALETTE.len();
    let idx = match hashing {
        BadgeHashing::Length => skill.chars().count() % n,
        BadgeHashing::Fnv => (fnv1a64(skill.as_bytes()) % n as u64) as usize,
    };
    BadgeSpec {
        text: skill.to_string(),
        color: BADGE_PALETTE[idx],
    }
}

fn fnv1a64(bytes: &[u8]) -> u64 {
    const OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0000_0001_0000_01b3;

    let mut hash = OFFSET;
    for byte in bytes {
        hash ^= u64::from(*byte);
        hash = hash.wrapping_mul(PRIME);
    }
    hash
}

// ---------------------------------------------------------------------------
// Allocation rows
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AllocationRow {
    pub id: u32,
    pub name: String,
    pub movement: String,
    pub role: String,
    pub recruiter: String,
}

impl AllocationRow {
    /// Plain cell text in [`ALLOCATION_HEADERS`] order.
    pub fn cells(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.movement.clone(),
            self.role.clone(),
            self.recruiter.clone(),
        ]
    }
}

pub fn format_allocation_row(event: &AllocationEvent) -> AllocationRow {
    AllocationRow {
        id: event.id,
        name: event.person_name.clone(),
        movement: format!(
            "{}{MOVEMENT_ARROW}{}",
            event.previous_assignment, event.new_assignment
        ),
        role: event.role.clone(),
        recruiter: event.recruiter_name.clone(),
    }
}

// ---------------------------------------------------------------------------
// Talent rows
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusIcon {
    Sofa,
    Briefcase,
}

impl StatusIcon {
    pub fn as_str(self) -> &'static str {
        match self {
            StatusIcon::Sofa => "sofa",
            StatusIcon::Briefcase => "briefcase",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileCell {
    pub name: String,
    /// `EID: <employee id>`
    pub detail: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusCell {
    pub icon: StatusIcon,
    pub label: String,
    pub tone: Tone,
    pub secondary: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AvailabilityCell {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub since: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TalentRow {
    pub id: u32,
    pub profile: ProfileCell,
    pub status: StatusCell,
    pub skills: Vec<BadgeSpec>,
    pub availability: AvailabilityCell,
    pub process: String,
}

impl TalentRow {
    /// Plain cell text in [`TALENT_HEADERS`] order.
    pub fn cells(&self) -> Vec<String> {
        let skills: Vec<&str> = self.skills.iter().map(|b| b.text.as_str()).collect();
        let availability = match &self.availability.since {
            Some(since) => format!("{} ({since})", self.availability.text),
            None => self.availability.text.clone(),
        };
        vec![
            format!("{} ({})", self.profile.name, self.profile.detail),
            format!("{} {}", self.status.label, self.status.secondary),
            skills.join(", "),
            availability,
            self.process.clone(),
        ]
    }
}

pub fn format_talent_row(record: &TalentRecord) -> TalentRow {
    format_talent_row_with(record, BadgeHashing::Length)
}

pub fn format_talent_row_with(record: &TalentRecord, hashing: BadgeHashing) -> TalentRow {
    let status = match record.status {
        TalentStatus::OnBench => StatusCell {
            icon: StatusIcon::Sofa,
            label: TalentStatus::OnBench.to_string(),
            tone: Tone::Warning,
            secondary: format!("(Ex: {})", record.current_client),
        },
        TalentStatus::Billed => StatusCell {
            icon: StatusIcon::Briefcase,
            label: TalentStatus::Billed.to_string(),
            tone: Tone::Primary,
            secondary: format!("Client: {}", record.current_client),
        },
    };

    TalentRow {
        id: record.id,
        profile: ProfileCell {
            name: record.person_name.clone(),
            detail: format!("EID: {}", record.employee_id),
        },
        status,
        skills: record
            .skill_list
            .iter()
            .map(|s| format_skill_badge_with(s, hashing))
            .collect(),
        availability: AvailabilityCell {
            text: record.availability.clone(),
            since: record
                .bench_since_date
                .as_deref()
                .filter(|s| !s.is_empty())
                .map(|s| format!("Since: {s}")),
        },
        process: record.process_status.clone(),
    }
}

// ---------------------------------------------------------------------------
// Bench forecast cards
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatCard {
    pub window: BenchWindow,
    pub label: String,
    pub value: u32,
    pub tone: Tone,
}

pub fn format_forecast_cards(forecast: &BenchForecast) -> Vec<StatCard> {
    BenchWindow::all()
        .iter()
        .map(|&window| StatCard {
            window,
            label: window.label().to_string(),
            value: forecast.count(window),
            tone: window.tone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn allocation(prev: &str, new: &str) -> AllocationEvent {
        AllocationEvent {
            id: 1,
            person_name: "Ananya Sharma".into(),
            previous_assignment: prev.into(),
            new_assignment: new.into(),
            role: "Sr. Java Developer".into(),
            recruiter_name: "Rohan Gupta".into(),
            allocated_on: None,
        }
    }

    fn talent(status: TalentStatus, since: Option<&str>) -> TalentRecord {
        TalentRecord {
            id: 1,
            person_name: "Vikram Rathore".into(),
            employee_id: "10234".into(),
            status,
            current_client: "Walmart".into(),
            skill_list: vec!["Java".into(), "Spring".into(), "Kafka".into()],
            availability: "Immediate".into(),
            bench_since_date: since.map(String::from),
            process_status: "Interviewing w/ CVS".into(),
            recruiter_name: "Priya Singh".into(),
            service_line: None,
        }
    }

    #[test]
    fn equal_length_skills_share_a_color() {
        let pairs = [("Java", "Perl"), ("Go", "C#"), ("Python", "Kotlin"), ("SQL", "Terraform")];
        for (a, b) in pairs {
            assert_eq!(
                a.chars().count() % 6,
                b.chars().count() % 6,
                "fixture {a}/{b} should collide"
            );
            assert_eq!(format_skill_badge(a).color, format_skill_badge(b).color);
        }
    }

    #[test]
    fn badge_color_follows_length_mod_six() {
        assert_eq!(format_skill_badge("").color, Tone::Primary);
        assert_eq!(format_skill_badge("R").color, Tone::Success);
        assert_eq!(format_skill_badge("Go").color, Tone::Info);
        assert_eq!(format_skill_badge("AWS").color, Tone::Warning);
        assert_eq!(format_skill_badge("Java").color, Tone::Danger);
        assert_eq!(format_skill_badge("Spark").color, Tone::Secondary);
        assert_eq!(format_skill_badge("Python").color, Tone::Primary);
        assert_eq!(format_skill_badge("Kafka").text, "Kafka");
    }

    #[test]
    fn badge_length_counts_chars_not_bytes() {
        // 4 chars, 5 bytes
        assert_eq!(format_skill_badge("Café").color, format_skill_badge("Java").color);
    }

    #[test]
    fn fnv_hashing_is_deterministic_and_in_palette() {
        for skill in ["Java", "Perl", "Kubernetes", ""] {
            let a = format_skill_badge_with(skill, BadgeHashing::Fnv);
            let b = format_skill_badge_with(skill, BadgeHashing::Fnv);
            assert_eq!(a, b);
            assert!(BADGE_PALETTE.contains(&a.color));
        }
    }

    #[test]
    fn fnv_matches_reference_vector() {
        assert_eq!(fnv1a64(b""), 0xcbf2_9ce4_8422_2325);
        assert_eq!(fnv1a64(b"a"), 0xaf63_dc4c_8601_ec8c);
    }

    #[test]
    fn movement_joins_with_arrow() {
        let row = format_allocation_row(&allocation("On Bench", "CVS"));
        assert_eq!(row.movement, "On Bench → CVS");
        assert_eq!(row.cells(), vec!["Ananya Sharma", "On Bench → CVS", "Sr. Java Developer", "Rohan Gupta"]);
    }

    #[test]
    fn on_bench_row_uses_sofa_and_ex_client() {
        let row = format_talent_row(&talent(TalentStatus::OnBench, Some("June 5")));
        assert_eq!(row.status.icon, StatusIcon::Sofa);
        assert_eq!(row.status.label, "On Bench");
        assert_eq!(row.status.secondary, "(Ex: Walmart)");
        assert_eq!(row.availability.since.as_deref(), Some("Since: June 5"));
        assert_eq!(row.profile.detail, "EID: 10234");
    }

    #[test]
    fn billed_row_uses_briefcase_and_client() {
        let row = format_talent_row(&talent(TalentStatus::Billed, None));
        assert_eq!(row.status.icon, StatusIcon::Briefcase);
        assert_eq!(row.status.secondary, "Client: Walmart");
        assert_eq!(row.status.tone, Tone::Primary);
    }

    #[test]
    fn absent_bench_since_renders_nothing() {
        let row = format_talent_row(&talent(TalentStatus::OnBench, None));
        assert!(row.availability.since.is_none());
        let json = serde_json::to_value(&row).unwrap();
        assert!(json["availability"].get("since").is_none());
        assert!(!row.cells()[3].contains("Since"));
    }

    #[test]
    fn skills_keep_their_order() {
        let row = format_talent_row(&talent(TalentStatus::OnBench, None));
        let texts: Vec<&str> = row.skills.iter().map(|b| b.text.as_str()).collect();
        assert_eq!(texts, vec!["Java", "Spring", "Kafka"]);
    }

    #[test]
    fn forecast_cards_follow_bucket_order() {
        let cards = format_forecast_cards(&BenchForecast {
            under15: 18,
            between16_and30: 25,
            between31_and45: 32,
        });
        let values: Vec<u32> = cards.iter().map(|c| c.value).collect();
        assert_eq!(values, vec![18, 25, 32]);
        assert_eq!(cards[0].label, "Coming to Bench (<15 Days)");
        assert_eq!(cards[2].tone, Tone::Success);
    }
}

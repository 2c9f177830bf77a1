use crate::{
    availability::{AvailabilityBook, MemberAvailability},
    roster::{Member, Office},
};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_WEEK_COUNT: u32 = 1;

/// Knobs of a generation run. Every field has a default so a partial
/// `generator.json` is valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Weeks covered by one batch (operators usually pick 1–4).
    pub week_count: u32,
    /// Refuse the whole run when any member lacks an office. When false,
    /// such members are excluded and reported instead.
    pub strict_office_assignment: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            week_count: DEFAULT_WEEK_COUNT,
            strict_office_assignment: true,
        }
    }
}

impl GeneratorConfig {
    /// Config with hardcoded defaults for use in unit tests.
    pub fn default_test() -> Self {
        Self::default()
    }

    pub fn with_weeks(mut self, week_count: u32) -> Self {
        self.week_count = week_count;
        self
    }

    pub fn relaxed(mut self) -> Self {
        self.strict_office_assignment = false;
        self
    }
}

#[derive(Debug, Clone, Deserialize)]
struct MembersFile {
    members: Vec<Member>,
}

#[derive(Debug, Clone, Deserialize)]
struct OfficesFile {
    offices: Vec<Office>,
}

#[derive(Debug, Clone, Deserialize)]
struct AvailabilityFile {
    availability: Vec<MemberAvailability>,
}

/// Snapshot of everything one run reads, loaded from a data directory.
#[derive(Debug, Clone)]
pub struct RosterData {
    pub members:      Vec<Member>,
    pub offices:      Vec<Office>,
    pub availability: AvailabilityBook,
    pub generator:    GeneratorConfig,
}

impl RosterData {
    /// Load from the data/ directory.
    /// `generator.json` is optional; the three roster files are not.
    pub fn load(data_dir: &str) -> anyhow::Result<Self> {
        let members_path = format!("{data_dir}/members.json");
        let members_content = std::fs::read_to_string(&members_path)
            .map_err(|e| anyhow::anyhow!("Cannot read {members_path}: {e}"))?;
        let members_file: MembersFile = serde_json::from_str(&members_content)
            .map_err(|e| anyhow::anyhow!("Invalid {members_path}: {e}"))?;

        let offices_path = format!("{data_dir}/offices.json");
        let offices_content = std::fs::read_to_string(&offices_path)
            .map_err(|e| anyhow::anyhow!("Cannot read {offices_path}: {e}"))?;
        let offices_file: OfficesFile = serde_json::from_str(&offices_content)
            .map_err(|e| anyhow::anyhow!("Invalid {offices_path}: {e}"))?;

        let availability_path = format!("{data_dir}/availability.json");
        let availability_content = std::fs::read_to_string(&availability_path)
            .map_err(|e| anyhow::anyhow!("Cannot read {availability_path}: {e}"))?;
        let availability_file: AvailabilityFile = serde_json::from_str(&availability_content)
            .map_err(|e| anyhow::anyhow!("Invalid {availability_path}: {e}"))?;

        let generator_path = format!("{data_dir}/generator.json");
        let generator = if Path::new(&generator_path).exists() {
            let content = std::fs::read_to_string(&generator_path)
                .map_err(|e| anyhow::anyhow!("Cannot read {generator_path}: {e}"))?;
            serde_json::from_str::<GeneratorConfig>(&content)
                .map_err(|e| anyhow::anyhow!("Invalid {generator_path}: {e}"))?
        } else {
            log::debug!("{generator_path} not found, using default generator config");
            GeneratorConfig::default()
        };

        log::info!(
            "Loaded {} members, {} offices, {} availability records from {data_dir}",
            members_file.members.len(),
            offices_file.offices.len(),
            availability_file.availability.len(),
        );

        Ok(Self {
            members:      members_file.members,
            offices:      offices_file.offices,
            availability: AvailabilityBook::from_records(availability_file.availability),
            generator,
        })
    }
}

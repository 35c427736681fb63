//! Audit score rubric and compliance tiers.

/// A scored audit section and its upper bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    DataCleaning,
    DataStorage,
    Compliance,
    Improvement,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::DataCleaning,
        Section::DataStorage,
        Section::Compliance,
        Section::Improvement,
    ];

    /// Form field carrying this section's score.
    pub fn field(&self) -> &'static str {
        match self {
            Section::DataCleaning => "data_cleaning",
            Section::DataStorage => "data_storage",
            Section::Compliance => "compliance",
            Section::Improvement => "improvement",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Section::DataCleaning => "Data Cleaning & Processing",
            Section::DataStorage => "Data Storage, Security & Privacy",
            Section::Compliance => "Compliance & Accountability",
            Section::Improvement => "Continuous Improvement & Culture",
        }
    }

    pub fn max(&self) -> u32 {
        match self {
            Section::DataCleaning => 40,
            Section::DataStorage => 30,
            Section::Compliance => 20,
            Section::Improvement => 10,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Compliant,
    PartiallyCompliant,
    NonCompliant,
}

impl Tier {
    /// 90..=100 compliant, 70..=89 partially compliant, anything else non-compliant.
    pub fn for_total(total: u32) -> Self {
        match total {
            90..=100 => Tier::Compliant,
            70..=89 => Tier::PartiallyCompliant,
            _ => Tier::NonCompliant,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Tier::Compliant => "✅ Compliant",
            Tier::PartiallyCompliant => "⚠️ Partially Compliant",
            Tier::NonCompliant => "❌ Non-Compliant",
        }
    }

    pub fn meaning(&self) -> &'static str {
        match self {
            Tier::Compliant => {
                "This domain meets or exceeds the required compliance standards. No major risks were identified, though minor improvements should be considered to maintain a high level of performance."
            }
            Tier::PartiallyCompliant => {
                "This domain is generally compliant but has identified areas of risk and non-conformance. A formal remediation plan is required to address the gaps and prevent potential future non-compliance."
            }
            Tier::NonCompliant => {
                "This domain does not meet core compliance requirements. Immediate and urgent action is needed. A comprehensive corrective action plan must be developed and a re-audit is required to restore compliance."
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreInput {
    pub data_cleaning: u32,
    pub data_storage: u32,
    pub compliance: u32,
    pub improvement: u32,
}

impl ScoreInput {
    pub fn get(&self, section: Section) -> u32 {
        match section {
            Section::DataCleaning => self.data_cleaning,
            Section::DataStorage => self.data_storage,
            Section::Compliance => self.compliance,
            Section::Improvement => self.improvement,
        }
    }

    pub fn set(&mut self, section: Section, value: u32) {
        match section {
            Section::DataCleaning => self.data_cleaning = value,
            Section::DataStorage => self.data_storage = value,
            Section::Compliance => self.compliance = value,
            Section::Improvement => self.improvement = value,
        }
    }

    pub fn total(&self) -> u32 {
        Section::ALL.iter().map(|s| self.get(*s)).sum()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreResult {
    pub total: u32,
    pub tier: Tier,
}

pub fn evaluate(input: &ScoreInput) -> ScoreResult {
    let total = input.total();
    ScoreResult {
        total,
        tier: Tier::for_total(total),
    }
}

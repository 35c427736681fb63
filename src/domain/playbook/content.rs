//! Static playbook content: audit roles, lifecycle stages and supporting files.

#[derive(Debug, Clone, Copy)]
pub struct RoleEntry {
    pub title: &'static str,
    pub personnel: &'static str,
    pub responsibilities: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct LifecycleStage {
    pub stage: &'static str,
    pub timeline: &'static str,
    pub details: &'static [&'static str],
}

#[derive(Debug, Clone, Copy)]
pub struct SupportingFile {
    pub title: &'static str,
    pub purpose: &'static str,
    /// Either a file name served under `/files/` or an in-app route name.
    pub link: &'static str,
}

impl SupportingFile {
    pub fn is_document(&self) -> bool {
        self.link.contains('.')
    }
}

const ROLES: &[RoleEntry] = &[
    RoleEntry {
        title: "Audit Team Lead",
        personnel: "Ross Browne",
        responsibilities: "Oversee audit process, maintain SOP, review annually or after each cycle",
    },
    RoleEntry {
        title: "Audit Team Members",
        personnel: "Akira Devonish, Cherelle Griffith, etc.",
        responsibilities: "Conduct audits per SOP, suggest improvements",
    },
    RoleEntry {
        title: "Domain Lead",
        personnel: "Terry Bennett",
        responsibilities: "Submit self-assessments, provide accurate info during interviews",
    },
    RoleEntry {
        title: "Domain Co-Lead",
        personnel: "Destiny Holder",
        responsibilities: "Assist Domain Lead in submitting self-assessments and providing information during interviews",
    },
    RoleEntry {
        title: "Data Librarian",
        personnel: "Roger Barrow",
        responsibilities: "Version control, secure storage of audit documentation",
    },
    RoleEntry {
        title: "Domain Coordinator",
        personnel: "Dale Edwards",
        responsibilities: "Oversight, SOP adherence checks, improvement recommendations",
    },
];

const LIFECYCLE: &[LifecycleStage] = &[
    LifecycleStage {
        stage: "1. Audit Preparation",
        timeline: "1–2 weeks before audit",
        details: &[
            "Select domain(s) to be audited.",
            "Share Preliminary Self-Assessment Form. (Includes: team structure, current activities, baseline compliance questions.)",
            "Set deadline for submission.",
            "Assign roles for interviews: Lead Interviewer, Scribe, Compliance Checker.",
        ],
    },
    LifecycleStage {
        stage: "2. Question Development",
        timeline: "1 week before interview",
        details: &[
            "Customize the Master Audit Template (V2) for the domain.",
            "Base questions on: Self-assessment responses, Known risks/gaps, Regulatory frameworks (GDPR, BDPA, EU AI Act, etc.)",
            "Include a mix of yes/no, short answer, and open-ended questions.",
            "Reference Template: Master_Audit_Template_V2.pdf",
        ],
    },
    LifecycleStage {
        stage: "3. Conducting Interviews",
        timeline: "Scheduled per domain availability",
        details: &[
            "Set up interviews with domain leads.",
            "Use customized audit template as a guide.",
            "Remind participants about structure, confidentiality, and recording (if applicable).",
            "Stick to roles unless reassignment is needed due to team size.",
        ],
    },
    LifecycleStage {
        stage: "4. Scoring & Evaluation",
        timeline: "2–3 days post-interview",
        details: &[
            "Each team member scores their assigned sections. Use the provided rubric:",
            "Data Cleaning & Processing (Max: 40)",
            "Data Storage, Security & Privacy (Max: 30)",
            "Compliance & Accountability (Max: 20)",
            "Continuous Improvement & Culture (Max: 10)",
            "Compliance Score Summary: 90–100% (Compliant), 70–89% (Partially Compliant), < 70% (Non-Compliant)",
        ],
    },
    LifecycleStage {
        stage: "5. Compiling the Report",
        timeline: "3–5 days post-scoring",
        details: &[
            "Include in final audit report: Domain overview, Interview summary, Scores per section, Risks, findings, and action recommendations.",
            "Example Report: Domain_C_ReportExample_2025_V1.pdf",
        ],
    },
    LifecycleStage {
        stage: "6. Submission & Feedback",
        timeline: "1 week after reporting",
        details: &[
            "Submit reports to: Compliance Team Lead",
            "Relevant Domain Lead.",
            "Request feedback: Agree on remediation actions, Offer compliance support where needed.",
        ],
    },
    LifecycleStage {
        stage: "7. Archiving & Continuous Improvement",
        timeline: "Ongoing",
        details: &[
            "Archive all reports and notes securely (Data Librarian role).",
            "Conduct post-audit debrief: Lessons learned, SOP/process refinement, Feedback loop for the team.",
            "Example Form: DClean_Compliance_Q1-2025_VFinal.pdf",
        ],
    },
];

const SUPPORTING_FILES: &[SupportingFile] = &[
    SupportingFile {
        title: "Master_Audit_Template_V2.pdf",
        purpose: "Guide for customizing audit questions",
        link: "Master_Audit_Template_V2.pdf",
    },
    SupportingFile {
        title: "Domain_C_ReportExample_2025_V1.pdf",
        purpose: "Sample final report",
        link: "Domain_C_ReportExample_2025_V1.pdf",
    },
    SupportingFile {
        title: "DClean_Compliance_Q1-2025_VFinal.pdf",
        purpose: "Completed domain audit form",
        link: "DClean_Compliance_Q1-2025_VFinal.pdf",
    },
    SupportingFile {
        title: "Compliance_Audit_SOP (1).pdf",
        purpose: "Standard Operating Procedure for Compliance Audits",
        link: "Compliance_Audit_SOP (1).pdf",
    },
    SupportingFile {
        title: "Self-Assessment Form",
        purpose: "Baseline data gathering (Microsoft Form)",
        link: "self_assessment_form_page",
    },
];

pub fn roles() -> &'static [RoleEntry] {
    ROLES
}

pub fn lifecycle_stages() -> &'static [LifecycleStage] {
    LIFECYCLE
}

pub fn supporting_files() -> &'static [SupportingFile] {
    SUPPORTING_FILES
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_tables_are_complete() {
        assert_eq!(roles().len(), 6);
        assert_eq!(lifecycle_stages().len(), 7);
        assert_eq!(supporting_files().len(), 5);
        assert!(lifecycle_stages().iter().all(|s| !s.details.is_empty()));
    }

    #[test]
    fn self_assessment_link_is_a_route() {
        let docs: Vec<_> = supporting_files()
            .iter()
            .filter(|f| f.is_document())
            .collect();
        assert_eq!(docs.len(), 4);
        let form = supporting_files().last().unwrap();
        assert!(!form.is_document());
        assert_eq!(form.link, "self_assessment_form_page");
    }
}

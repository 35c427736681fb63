/// Answer options offered for every radio question.
pub const RADIO_OPTIONS: &[&str] = &["Yes", "No", "N/A"];

/// Answer recorded for a question left blank on submission.
pub const NO_RESPONSE: &str = "No Response";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionKind {
    Radio { options: &'static [&'static str] },
    Textarea { placeholder: &'static str },
    Text { placeholder: &'static str },
}

#[derive(Debug, Clone, Copy)]
pub struct Question {
    pub id: &'static str,
    pub text: &'static str,
    pub kind: QuestionKind,
}

#[derive(Debug, Clone, Copy)]
pub struct Domain {
    pub name: &'static str,
    pub questions: &'static [Question],
}

const fn radio(id: &'static str, text: &'static str) -> Question {
    Question {
        id,
        text,
        kind: QuestionKind::Radio {
            options: RADIO_OPTIONS,
        },
    }
}

const fn textarea(id: &'static str, text: &'static str, placeholder: &'static str) -> Question {
    Question {
        id,
        text,
        kind: QuestionKind::Textarea { placeholder },
    }
}

const fn text(id: &'static str, text: &'static str, placeholder: &'static str) -> Question {
    Question {
        id,
        text,
        kind: QuestionKind::Text { placeholder },
    }
}

const DOMAINS: &[Domain] = &[
    Domain {
        name: "Data Collection",
        questions: &[
            radio("q1_dc", "Is there a clear data collection policy in place?"),
            textarea(
                "q2_dc",
                "Describe the primary methods used for data collection.",
                "e.g., APIs, manual input, web scraping...",
            ),
            radio(
                "q3_dc",
                "Are user consents obtained for all personal data collected?",
            ),
            text(
                "q4_dc",
                "What tools are used for data ingestion?",
                "e.g., Kafka, NiFi, custom scripts...",
            ),
        ],
    },
    Domain {
        name: "Data Cleaning",
        questions: &[
            radio(
                "q1_dcl",
                "Are formal data validation rules applied during cleaning?",
            ),
            textarea(
                "q2_dcl",
                "Outline the process for handling missing or inconsistent data.",
                "e.g., imputation, deletion, flagging...",
            ),
            radio("q3_dcl", "Is data quality regularly monitored and reported?"),
            text(
                "q4_dcl",
                "Which data cleaning tools or scripts are utilized?",
                "e.g., Pandas, Spark, Trifacta...",
            ),
        ],
    },
    Domain {
        name: "Data Engineering",
        questions: &[
            radio("q1_de", "Are data pipelines documented and version-controlled?"),
            textarea(
                "q2_de",
                "Describe the architecture of your data storage solutions.",
                "e.g., Data Lake, Data Warehouse, specific databases...",
            ),
            radio(
                "q3_de",
                "Are there automated tests for data pipeline integrity?",
            ),
            text(
                "q4_de",
                "What is the frequency of data backups?",
                "e.g., daily, weekly, continuously...",
            ),
        ],
    },
    Domain {
        name: "Compliance, Ethics and Regulations",
        questions: &[
            radio("q1_cer", "Does the team adhere to GDPR/BDPA regulations?"),
            textarea(
                "q2_cer",
                "How are ethical considerations addressed in AI development?",
                "e.g., bias detection, fairness metrics...",
            ),
            radio("q3_cer", "Are internal compliance audits conducted annually?"),
            text(
                "q4_cer",
                "Which regulatory frameworks are most relevant to your current projects?",
                "e.g., EU AI Act, HIPAA...",
            ),
        ],
    },
];

pub fn domains() -> &'static [Domain] {
    DOMAINS
}

pub fn find_domain(name: &str) -> Option<&'static Domain> {
    DOMAINS.iter().find(|d| d.name == name)
}

/// Questions for `name`; empty for an unknown domain.
pub fn questions_for(name: &str) -> &'static [Question] {
    find_domain(name).map(|d| d.questions).unwrap_or(&[])
}

use std::collections::HashMap;

use crate::domain::playbook::questionnaire::{self, NO_RESPONSE};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditResponse {
    pub question: &'static str,
    pub answer: String,
}

/// Answers for each of the domain's questions, in question order.
pub fn summarize_responses(
    domain: Option<&str>,
    form: &HashMap<String, String>,
) -> Vec<AuditResponse> {
    let Some(domain) = domain.and_then(questionnaire::find_domain) else {
        return Vec::new();
    };
    domain
        .questions
        .iter()
        .map(|q| AuditResponse {
            question: q.text,
            answer: form
                .get(q.id)
                .cloned()
                .unwrap_or_else(|| NO_RESPONSE.to_string()),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_answers_read_no_response() {
        let mut form = HashMap::new();
        form.insert("q1_dc".to_string(), "Yes".to_string());
        form.insert("q4_dc".to_string(), "Kafka".to_string());
        form.insert("unrelated".to_string(), "ignored".to_string());

        let out = summarize_responses(Some("Data Collection"), &form);
        let answers: Vec<_> = out.iter().map(|r| r.answer.as_str()).collect();
        assert_eq!(answers, vec!["Yes", "No Response", "No Response", "Kafka"]);
        assert_eq!(
            out[0].question,
            "Is there a clear data collection policy in place?"
        );
    }

    #[test]
    fn submitted_blank_is_kept_empty() {
        let mut form = HashMap::new();
        form.insert("q2_dc".to_string(), String::new());
        let out = summarize_responses(Some("Data Collection"), &form);
        assert_eq!(out[1].answer, "");
        assert_eq!(out[0].answer, NO_RESPONSE);
    }

    #[test]
    fn unknown_domain_is_empty() {
        let form = HashMap::new();
        assert!(summarize_responses(Some("Nope"), &form).is_empty());
        assert!(summarize_responses(None, &form).is_empty());
    }
}

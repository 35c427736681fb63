use crate::domain::playbook::questionnaire::{self, Question};

#[derive(Debug, Clone, Default)]
pub struct DomainSelection {
    /// Echoed back even when it names no known domain.
    pub selected: Option<String>,
    pub questions: &'static [Question],
}

pub fn select_domain(submitted: Option<&str>) -> DomainSelection {
    let Some(name) = submitted.filter(|s| !s.is_empty()) else {
        return DomainSelection::default();
    };
    DomainSelection {
        selected: Some(name.to_string()),
        questions: questionnaire::questions_for(name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_domain_yields_questions() {
        let sel = select_domain(Some("Data Engineering"));
        assert_eq!(sel.selected.as_deref(), Some("Data Engineering"));
        assert_eq!(sel.questions.len(), 4);
        assert_eq!(sel.questions[0].id, "q1_de");
    }

    #[test]
    fn unknown_or_missing_domain_yields_nothing() {
        let sel = select_domain(Some("Finance"));
        assert_eq!(sel.selected.as_deref(), Some("Finance"));
        assert!(sel.questions.is_empty());

        let sel = select_domain(None);
        assert!(sel.selected.is_none());
        assert!(sel.questions.is_empty());
    }
}

use crate::application::use_cases::audit::select_domain::DomainSelection;
use crate::application::use_cases::audit::summarize_responses::AuditResponse;
use crate::domain::playbook::questionnaire::{self, Question, QuestionKind};
use crate::presentation::http::auth::CurrentAccount;
use crate::presentation::views::{esc, layout};

fn question_field(q: &Question) -> String {
    let id = esc(q.id);
    match q.kind {
        QuestionKind::Radio { options } => {
            let mut out = String::new();
            for opt in options {
                out.push_str(&format!(
                    "<label><input type=\"radio\" name=\"{id}\" value=\"{v}\" /> {v}</label>",
                    id = id,
                    v = esc(opt)
                ));
            }
            out
        }
        QuestionKind::Textarea { placeholder } => format!(
            "<textarea id=\"{id}\" name=\"{id}\" rows=\"4\" cols=\"60\" placeholder=\"{p}\"></textarea>",
            id = id,
            p = esc(placeholder)
        ),
        QuestionKind::Text { placeholder } => format!(
            "<input type=\"text\" id=\"{id}\" name=\"{id}\" size=\"60\" placeholder=\"{p}\" />",
            id = id,
            p = esc(placeholder)
        ),
    }
}

pub fn audit_form(
    session: Option<&CurrentAccount>,
    flash: Option<&str>,
    selection: &DomainSelection,
) -> String {
    let selected = selection.selected.as_deref();
    let mut options = String::from("<option value=\"\">-- Select a domain --</option>");
    for d in questionnaire::domains() {
        let mark = if Some(d.name) == selected {
            " selected"
        } else {
            ""
        };
        options.push_str(&format!(
            "<option value=\"{n}\"{mark}>{n}</option>",
            n = esc(d.name),
            mark = mark
        ));
    }
    let mut body = format!(
        "<form method=\"post\" action=\"/audit_form\" class=\"card\">\
         <label for=\"domain_select\">Domain</label>\
         <select id=\"domain_select\" name=\"domain_select\">{options}</select>\
         <button type=\"submit\">Load questions</button></form>\n"
    );

    if let Some(name) = selected {
        if selection.questions.is_empty() {
            body.push_str(&format!(
                "<p>No questions are defined for <strong>{}</strong>.</p>",
                esc(name)
            ));
        } else {
            let mut fields = String::new();
            for (i, q) in selection.questions.iter().enumerate() {
                fields.push_str(&format!(
                    "<fieldset class=\"card\"><legend>{n}. {text}</legend>{field}</fieldset>\n",
                    n = i + 1,
                    text = esc(q.text),
                    field = question_field(q)
                ));
            }
            body.push_str(&format!(
                "<h2>{name}</h2>\n<form method=\"post\" action=\"/submit_audit\">\
                 <input type=\"hidden\" name=\"domain\" value=\"{name}\" />\n{fields}\
                 <button type=\"submit\">Submit audit</button></form>",
                name = esc(name),
                fields = fields
            ));
        }
    }
    layout("Domain Audit Form", session, flash, &body)
}

pub fn audit_summary(
    session: Option<&CurrentAccount>,
    domain: Option<&str>,
    responses: &[AuditResponse],
) -> String {
    let heading = match domain {
        Some(d) if !d.is_empty() => format!("<h2>{}</h2>", esc(d)),
        _ => "<h2>No domain selected</h2>".to_string(),
    };
    let body = if responses.is_empty() {
        format!(
            "{heading}<p>No responses were recorded. <a href=\"/audit_form\">Start a new audit</a>.</p>"
        )
    } else {
        let mut rows = String::new();
        for r in responses {
            rows.push_str(&format!(
                "<tr><td>{}</td><td>{}</td></tr>\n",
                esc(r.question),
                esc(&r.answer)
            ));
        }
        format!(
            "{heading}\n<table>\n<thead><tr><th>Question</th><th>Response</th></tr></thead>\n<tbody>\n{rows}</tbody>\n</table>\n\
             <p><a href=\"/audit_form\">Audit another domain</a> or <a href=\"/score_calculator\">score this audit</a>.</p>"
        )
    };
    layout("Audit Summary", session, None, &body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::use_cases::audit::select_domain::select_domain;

    #[test]
    fn renders_questions_for_selected_domain() {
        let html = audit_form(None, None, &select_domain(Some("Data Collection")));
        assert!(html.contains("<option value=\"Data Collection\" selected>"));
        assert!(html.contains("name=\"q1_dc\" value=\"N/A\""));
        assert!(html.contains("<textarea id=\"q2_dc\""));
        assert!(html.contains("action=\"/submit_audit\""));
    }

    #[test]
    fn blank_form_has_no_questions() {
        let html = audit_form(None, None, &select_domain(None));
        assert!(!html.contains("/submit_audit"));
        assert!(html.contains("Compliance, Ethics and Regulations"));
    }

    #[test]
    fn summary_escapes_answers() {
        let responses = vec![AuditResponse {
            question: "Q?",
            answer: "<script>".into(),
        }];
        let html = audit_summary(None, Some("Data Cleaning"), &responses);
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<td><script>"));
    }
}

use crate::domain::playbook::content::{self, LifecycleStage};
use crate::presentation::http::auth::CurrentAccount;
use crate::presentation::views::{esc, layout};

pub fn index(session: Option<&CurrentAccount>, flash: Option<&str>) -> String {
    let body = "<div class=\"card\"><p>This playbook guides the audit team through every step of a \
        compliance audit: who is responsible for what, how an audit moves from preparation to \
        archiving, which templates to use, and how domains are scored.</p></div>\n\
        <ul>\n\
        <li><a href=\"/roles\">Roles &amp; responsibilities</a></li>\n\
        <li><a href=\"/lifecycle\">Audit lifecycle</a> or the <a href=\"/interactive_workflow\">interactive workflow</a></li>\n\
        <li><a href=\"/audit_form\">Domain audit questionnaire</a></li>\n\
        <li><a href=\"/score_calculator\">Compliance score calculator</a></li>\n\
        <li><a href=\"/supporting_files\">Supporting files</a></li>\n\
        <li><a href=\"/sign_off\">Sign off</a> once you have reviewed the Playbook and SOP</li>\n\
        </ul>";
    layout("Welcome", session, flash, body)
}

pub fn roles(session: Option<&CurrentAccount>, flash: Option<&str>) -> String {
    let mut rows = String::new();
    for role in content::roles() {
        rows.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td></tr>\n",
            esc(role.title),
            esc(role.personnel),
            esc(role.responsibilities)
        ));
    }
    let body = format!(
        "<table>\n<thead><tr><th>Role</th><th>Personnel</th><th>Responsibilities</th></tr></thead>\n<tbody>\n{rows}</tbody>\n</table>"
    );
    layout("Roles & Responsibilities", session, flash, &body)
}

fn stage_details(stage: &LifecycleStage) -> String {
    let mut items = String::new();
    for d in stage.details {
        items.push_str(&format!("<li>{}</li>", esc(d)));
    }
    format!("<ul>{items}</ul>")
}

pub fn lifecycle(session: Option<&CurrentAccount>, flash: Option<&str>) -> String {
    let mut body = String::new();
    for stage in content::lifecycle_stages() {
        body.push_str(&format!(
            "<section class=\"card\"><h2>{}</h2><p><em>Timeline: {}</em></p>{}</section>\n",
            esc(stage.stage),
            esc(stage.timeline),
            stage_details(stage)
        ));
    }
    layout("Audit Lifecycle", session, flash, &body)
}

pub fn interactive_workflow(session: Option<&CurrentAccount>, flash: Option<&str>) -> String {
    let stages = content::lifecycle_stages();
    let mut steps = String::new();
    for (i, stage) in stages.iter().enumerate() {
        steps.push_str(&format!(
            "<section class=\"card step\" data-step=\"{i}\"{hidden}><h2>{title}</h2>\
             <p><em>Timeline: {timeline}</em></p>{details}\
             <label><input type=\"checkbox\" class=\"done\" /> Stage complete</label></section>\n",
            i = i,
            hidden = if i == 0 { "" } else { " hidden" },
            title = esc(stage.stage),
            timeline = esc(stage.timeline),
            details = stage_details(stage),
        ));
    }
    let body = format!(
        "<p>Step through the audit lifecycle one stage at a time.</p>\n\
         <p><progress id=\"progress\" max=\"{total}\" value=\"1\"></progress> \
         Stage <span id=\"current\">1</span> of {total}</p>\n{steps}\
         <button type=\"button\" id=\"prev\">Previous</button> \
         <button type=\"button\" id=\"next\">Next</button>\n\
         <script>\n(function() {{\n\
         var steps = document.querySelectorAll('.step'); var idx = 0;\n\
         function show(n) {{ idx = Math.max(0, Math.min(steps.length - 1, n));\n\
           steps.forEach(function(s, i) {{ s.hidden = i !== idx; }});\n\
           document.getElementById('current').textContent = idx + 1;\n\
           document.getElementById('progress').value = idx + 1; }}\n\
         document.getElementById('prev').addEventListener('click', function() {{ show(idx - 1); }});\n\
         document.getElementById('next').addEventListener('click', function() {{ show(idx + 1); }});\n\
         }})();\n</script>",
        total = stages.len(),
        steps = steps,
    );
    layout("Interactive Workflow", session, flash, &body)
}

pub fn supporting_files(session: Option<&CurrentAccount>, flash: Option<&str>) -> String {
    let mut rows = String::new();
    for file in content::supporting_files() {
        let href = if file.is_document() {
            format!("/files/{}", urlencoding::encode(file.link))
        } else {
            format!("/{}", file.link)
        };
        rows.push_str(&format!(
            "<tr><td><a href=\"{}\">{}</a></td><td>{}</td></tr>\n",
            esc(&href),
            esc(file.title),
            esc(file.purpose)
        ));
    }
    let body = format!(
        "<table>\n<thead><tr><th>File</th><th>Purpose</th></tr></thead>\n<tbody>\n{rows}</tbody>\n</table>"
    );
    layout("Supporting Files", session, flash, &body)
}

pub fn self_assessment_form(session: Option<&CurrentAccount>, flash: Option<&str>) -> String {
    let body = "<div class=\"card\"><p>Domain leads complete the Preliminary Self-Assessment \
        Form one to two weeks before the audit. It covers team structure, current activities \
        and baseline compliance questions, and must be submitted by the agreed deadline.</p>\
        <p>The form is hosted in Microsoft Forms; ask the Audit Team Lead for the current link.</p></div>";
    layout("Self-Assessment Form", session, flash, body)
}

pub fn not_found(session: Option<&CurrentAccount>) -> String {
    layout(
        "Page not found",
        session,
        None,
        "<p>The page you asked for does not exist. <a href=\"/\">Back to the playbook</a>.</p>",
    )
}

//! Server-rendered HTML. Every interpolated value goes through [`esc`].

pub mod accounts;
pub mod audit;
pub mod pages;
pub mod score;
pub mod sign_off;

use htmlescape::encode_minimal;

use crate::presentation::http::auth::CurrentAccount;

pub(crate) fn esc(s: &str) -> String {
    encode_minimal(s)
}

const NAV: &[(&str, &str)] = &[
    ("/", "Home"),
    ("/roles", "Roles"),
    ("/lifecycle", "Lifecycle"),
    ("/interactive_workflow", "Interactive Workflow"),
    ("/audit_form", "Audit Form"),
    ("/score_calculator", "Score Calculator"),
    ("/supporting_files", "Supporting Files"),
    ("/sign_off", "Sign Off"),
];

const STYLE: &str = "body{font-family:system-ui,sans-serif;margin:0;color:#1f2933;background:#f7f9fb}\
header{background:#12355b;color:#fff;padding:0.75rem 1.5rem;display:flex;flex-wrap:wrap;gap:1rem;align-items:center}\
header a{color:#fff;text-decoration:none}header nav{display:flex;flex-wrap:wrap;gap:0.9rem;flex:1}\
main{max-width:960px;margin:1.5rem auto;padding:0 1.5rem}\
table{border-collapse:collapse;width:100%}th,td{border:1px solid #cbd2d9;padding:0.5rem;text-align:left;vertical-align:top}\
.flash{background:#fff8c5;border:1px solid #e3c000;padding:0.6rem 1rem;margin-bottom:1rem}\
.card{background:#fff;border:1px solid #d9e2ec;border-radius:6px;padding:1rem;margin-bottom:1rem}\
label{display:block;margin-top:0.6rem}button{margin-top:0.8rem}";

/// Wraps a page body in the shared chrome: navigation, session badge and flash message.
pub fn layout(
    title: &str,
    session: Option<&CurrentAccount>,
    flash: Option<&str>,
    body: &str,
) -> String {
    let mut nav = String::new();
    for (href, label) in NAV {
        nav.push_str(&format!("<a href=\"{}\">{}</a>", esc(href), esc(label)));
    }
    let account = match session {
        Some(a) => format!(
            "<span>Signed in as <strong>{}</strong> ({})</span>\
             <form method=\"post\" action=\"/logout\" style=\"display:inline\"><button type=\"submit\">Log out</button></form>",
            esc(&a.name),
            esc(a.role.as_str())
        ),
        None => "<a href=\"/login\">Log in</a> <a href=\"/register\">Register</a>".to_string(),
    };
    let flash_html = flash
        .map(|m| format!("<div class=\"flash\" role=\"status\">{}</div>", esc(m)))
        .unwrap_or_default();
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\" />\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\" />\n\
         <title>{title} | Compliance Audit Playbook</title>\n<style>{style}</style>\n</head>\n<body>\n\
         <header><strong>Compliance Audit Playbook</strong><nav>{nav}</nav><div>{account}</div></header>\n\
         <main>\n{flash}<h1>{title}</h1>\n{body}\n</main>\n</body>\n</html>\n",
        title = esc(title),
        style = STYLE,
        nav = nav,
        account = account,
        flash = flash_html,
        body = body,
    )
}

/// Inline message shown inside a form card.
pub(crate) fn message_block(message: Option<&str>) -> String {
    message
        .map(|m| format!("<p class=\"flash\">{}</p>", esc(m)))
        .unwrap_or_default()
}

use crate::domain::accounts::account::AnalystSignOff;
use crate::presentation::http::auth::CurrentAccount;
use crate::presentation::views::{esc, layout, message_block};

const ACKNOWLEDGEMENT: &str =
    "By signing off you confirm that you have reviewed the Playbook and the Compliance Audit SOP.";

fn format_time(at: chrono::DateTime<chrono::Utc>) -> String {
    at.format("%Y-%m-%d %H:%M UTC").to_string()
}

/// Anonymous sign-off backed by the log file.
pub fn file_sign_off(
    session: Option<&CurrentAccount>,
    flash: Option<&str>,
    message: Option<&str>,
    show_form: bool,
) -> String {
    let form = if show_form {
        format!(
            "<form method=\"post\" action=\"/sign_off\" class=\"card\">\
             <p>{ack}</p>\
             <label for=\"user_name\">Your name</label><input id=\"user_name\" name=\"user_name\" />\
             <button type=\"submit\">Sign off</button></form>",
            ack = esc(ACKNOWLEDGEMENT)
        )
    } else {
        String::new()
    };
    let body = format!("{}{}", message_block(message), form);
    layout("Sign Off", session, flash, &body)
}

/// What a logged-in account sees on the sign-off page.
pub enum AccountSignOffState {
    NotSigned,
    Signed(chrono::DateTime<chrono::Utc>),
    Lead,
}

pub fn account_sign_off(
    session: &CurrentAccount,
    flash: Option<&str>,
    message: Option<&str>,
    state: &AccountSignOffState,
) -> String {
    let content = match state {
        AccountSignOffState::NotSigned => format!(
            "<form method=\"post\" action=\"/sign_off\" class=\"card\"><p>{ack}</p>\
             <p>Signing off as <strong>{name}</strong>.</p>\
             <button type=\"submit\">Sign off</button></form>",
            ack = esc(ACKNOWLEDGEMENT),
            name = esc(&session.name)
        ),
        AccountSignOffState::Signed(at) => format!(
            "<div class=\"card\"><p>You signed off on {}.</p></div>",
            esc(&format_time(*at))
        ),
        AccountSignOffState::Lead => "<div class=\"card\"><p>Leads do not sign off. \
            See <a href=\"/sign_off/status\">sign-off tracking</a> for your team.</p></div>"
            .to_string(),
    };
    let body = format!("{}{}", message_block(message), content);
    layout("Sign Off", Some(session), flash, &body)
}

pub fn tracking(session: &CurrentAccount, rows: &[AnalystSignOff]) -> String {
    let signed = rows.iter().filter(|r| r.signed_at.is_some()).count();
    let mut table = String::new();
    for r in rows {
        let status = match r.signed_at {
            Some(at) => format!("Signed {}", esc(&format_time(at))),
            None => "Pending".to_string(),
        };
        table.push_str(&format!(
            "<tr><td>{}</td><td>{}</td></tr>\n",
            esc(&r.name),
            status
        ));
    }
    let body = if rows.is_empty() {
        "<p>No analysts have registered yet.</p>".to_string()
    } else {
        format!(
            "<p>{signed} of {total} analysts have signed off.</p>\n<table>\n\
             <thead><tr><th>Analyst</th><th>Status</th></tr></thead>\n<tbody>\n{table}</tbody>\n</table>",
            total = rows.len()
        )
    };
    layout("Sign-Off Tracking", Some(session), None, &body)
}

pub fn forbidden(session: Option<&CurrentAccount>, message: &str) -> String {
    layout("Not allowed", session, None, &message_block(Some(message)))
}

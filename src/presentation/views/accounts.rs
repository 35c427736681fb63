use crate::presentation::http::auth::CurrentAccount;
use crate::presentation::views::{layout, message_block};

pub fn register_page(
    session: Option<&CurrentAccount>,
    flash: Option<&str>,
    message: Option<&str>,
) -> String {
    let body = format!(
        "<form method=\"post\" action=\"/register\" class=\"card\">{msg}\
         <label for=\"name\">Username</label><input id=\"name\" name=\"name\" required />\
         <label for=\"password\">Password</label><input id=\"password\" name=\"password\" type=\"password\" required />\
         <label for=\"role\">Role</label>\
         <select id=\"role\" name=\"role\"><option value=\"analyst\">Analyst</option><option value=\"lead\">Lead</option></select>\
         <label for=\"lead_code\">Lead access code (leads only)</label>\
         <input id=\"lead_code\" name=\"lead_code\" type=\"password\" />\
         <button type=\"submit\">Register</button></form>\
         <p>Already registered? <a href=\"/login\">Log in</a>.</p>",
        msg = message_block(message)
    );
    layout("Register", session, flash, &body)
}

pub fn login_page(
    session: Option<&CurrentAccount>,
    flash: Option<&str>,
    message: Option<&str>,
) -> String {
    let body = format!(
        "<form method=\"post\" action=\"/login\" class=\"card\">{msg}\
         <label for=\"name\">Username</label><input id=\"name\" name=\"name\" required />\
         <label for=\"password\">Password</label><input id=\"password\" name=\"password\" type=\"password\" required />\
         <button type=\"submit\">Log in</button></form>\
         <p>No account yet? <a href=\"/register\">Register</a>.</p>",
        msg = message_block(message)
    );
    layout("Log In", session, flash, &body)
}

// Module layout (Clean Architecture style)
// - bootstrap: configuration and shared application context
// - infrastructure: Postgres repositories and the sign-off log file
// - presentation: HTTP handlers, session cookies and HTML views
// - application: ports and use cases
// - domain: playbook content, scoring rubric and accounts

pub mod application;
pub mod bootstrap;
pub mod domain;
pub mod infrastructure;
pub mod presentation;

//! HTML page rendering.
//!
//! Pages are deliberately plain: a shared layout plus small render
//! functions per page. All user-supplied content is escaped.

use crate::db::Project;

/// Escape a string for safe inclusion in HTML.
pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{} - Portal</title>\n\
         <link rel=\"stylesheet\" href=\"/assets/portal.css\">\n\
         </head>\n<body>\n{}\n</body>\n</html>\n",
        escape(title),
        body
    )
}

fn error_block(error: Option<&str>) -> String {
    match error {
        Some(msg) => format!("<p class=\"error\">{}</p>", escape(msg)),
        None => String::new(),
    }
}

/// Render the signup form, optionally with an error message.
pub fn signup_page(error: Option<&str>) -> String {
    let body = format!(
        "<h1>Sign up</h1>\n{}\
         <form method=\"post\" action=\"/signup\">\n\
         <label>Username <input type=\"text\" name=\"username\"></label>\n\
         <label>Password <input type=\"password\" name=\"password\"></label>\n\
         <button type=\"submit\">Sign up</button>\n\
         </form>\n\
         <p><a href=\"/login\">Log in</a></p>",
        error_block(error)
    );
    layout("Sign up", &body)
}

/// Render the login form, optionally with an error message.
pub fn login_page(error: Option<&str>) -> String {
    let body = format!(
        "<h1>Log in</h1>\n{}\
         <form method=\"post\" action=\"/login\">\n\
         <label>Username <input type=\"text\" name=\"username\"></label>\n\
         <label>Password <input type=\"password\" name=\"password\"></label>\n\
         <button type=\"submit\">Log in</button>\n\
         </form>\n\
         <p><a href=\"/signup\">Sign up</a></p>",
        error_block(error)
    );
    layout("Log in", &body)
}

/// Render the dashboard with the current user's projects.
pub fn dashboard_page(projects: &[Project]) -> String {
    let rows: String = projects
        .iter()
        .map(|p| {
            format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td>\
                 <td>{}</td><td>{}</td><td>{}</td></tr>\n",
                escape(&p.name),
                escape(&p.start_date),
                escape(&p.end_date),
                escape(&p.tech_stack),
                escape(&p.os),
                escape(&p.assignee),
                escape(&p.role),
            )
        })
        .collect();

    let table = if projects.is_empty() {
        "<p>No projects registered yet.</p>".to_string()
    } else {
        format!(
            "<table>\n<tr><th>Name</th><th>Start</th><th>End</th>\
             <th>Tech stack</th><th>OS</th><th>Assignee</th><th>Role</th></tr>\n\
             {rows}</table>"
        )
    };

    let body = format!(
        "<h1>Dashboard</h1>\n{table}\n<p><a href=\"/register\">Register a project</a></p>"
    );
    layout("Dashboard", &body)
}

/// Render the project registration form, optionally with an error message.
pub fn register_page(error: Option<&str>) -> String {
    let body = format!(
        "<h1>Register project</h1>\n{}\
         <form method=\"post\" action=\"/register\">\n\
         <label>Name <input type=\"text\" name=\"name\"></label>\n\
         <label>Start date <input type=\"date\" name=\"start_date\"></label>\n\
         <label>End date <input type=\"date\" name=\"end_date\"></label>\n\
         <label>Content <textarea name=\"content\"></textarea></label>\n\
         <label>Tech stack <input type=\"text\" name=\"tech_stack\"></label>\n\
         <label>OS <input type=\"text\" name=\"os\"></label>\n\
         <label>Environment <input type=\"text\" name=\"environment\"></label>\n\
         <label>Assignee <input type=\"text\" name=\"assignee\"></label>\n\
         <label>Role <input type=\"text\" name=\"role\"></label>\n\
         <label>Memo <textarea name=\"memo\"></textarea></label>\n\
         <button type=\"submit\">Register</button>\n\
         </form>\n\
         <p><a href=\"/dashboard\">Back to dashboard</a></p>",
        error_block(error)
    );
    layout("Register project", &body)
}

/// Render a static informational page.
pub fn static_page(title: &str, body_text: &str) -> String {
    let body = format!("<h1>{}</h1>\n<p>{}</p>", escape(title), escape(body_text));
    layout(title, &body)
}

/// Render the generic failure page shown for persistence errors.
pub fn error_page() -> String {
    layout(
        "Something went wrong",
        "<h1>Something went wrong</h1>\n<p>Please try again later.</p>",
    )
}

//! HTML pages served by the planner.

use axum::response::Html;

use crate::models::submission::{Field, Submission};

const STYLE: &str = "body{font-family:sans-serif;max-width:40rem;margin:2rem auto;padding:0 1rem}\
label{display:block;margin-top:1rem}\
input,select{width:100%;padding:.4rem}\
.flash{background:#fff3cd;border:1px solid #ffe69c;padding:.5rem 1rem}\
dt{font-weight:bold;margin-top:.75rem}";

/// Escape text for use in element content or a quoted attribute.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

fn layout(title: &str, body: &str) -> Html<String> {
    Html(format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{title}</title>\n<style>{STYLE}</style>\n</head>\n<body>\n{body}</body>\n</html>\n",
        title = escape(title),
    ))
}

fn input(field: Field) -> String {
    let name = field.form_name();
    match field {
        Field::RiskTolerance => format!(
            "<label for=\"{name}\">{prompt}</label>\n\
             <select id=\"{name}\" name=\"{name}\">\n\
             <option value=\"\">Select...</option>\n\
             <option value=\"low\">Low</option>\n\
             <option value=\"medium\">Medium</option>\n\
             <option value=\"high\">High</option>\n\
             </select>\n",
            prompt = escape(field.prompt()),
        ),
        _ => format!(
            "<label for=\"{name}\">{prompt}</label>\n\
             <input type=\"text\" id=\"{name}\" name=\"{name}\">\n",
            prompt = escape(field.prompt()),
        ),
    }
}

/// The planner form, preceded by any flashed messages.
pub fn form_page(messages: &[String]) -> Html<String> {
    let mut body = String::from("<h1>Financial Planner</h1>\n");

    if !messages.is_empty() {
        body.push_str("<ul class=\"flash\">\n");
        for message in messages {
            body.push_str(&format!("<li>{}</li>\n", escape(message)));
        }
        body.push_str("</ul>\n");
    }

    body.push_str("<form method=\"post\" action=\"/results\">\n");
    for field in Field::ALL {
        body.push_str(&input(field));
    }
    body.push_str("<p><button type=\"submit\">Get my plan</button></p>\n</form>\n");

    layout("Financial Planner", &body)
}

/// Confirmation page echoing a validated submission.
pub fn results_page(submission: &Submission) -> Html<String> {
    let mut body = String::from("<h1>Your Financial Plan</h1>\n<dl>\n");
    for field in Field::ALL {
        body.push_str(&format!(
            "<dt>{}</dt>\n<dd>{}</dd>\n",
            escape(field.label()),
            escape(submission.value(field))
        ));
    }
    body.push_str("</dl>\n<p><a href=\"/\">Start over</a></p>\n");

    layout("Your Financial Plan", &body)
}

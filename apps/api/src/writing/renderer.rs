//! Prompt rendering — fills a template with request fields, tone and date.
//!
//! Rendering never fails. A meeting template invoked without raw notes falls back
//! to the description as its source text.

use chrono::NaiveDate;
use tracing::debug;

use crate::llm_client::prompts::{language_directive, normalize_language};
use crate::writing::generator::RequestFields;
use crate::writing::templates::{Placeholder, Template};

/// Calendar date format used in prompts and date-bearing fallback entries.
pub const DATE_FORMAT: &str = "%d/%m/%Y";

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Renders the final prompt text, prefixed with the language directive.
pub fn render(template: &Template, fields: &RequestFields, tone: &str, today: NaiveDate) -> String {
    let date = format_date(today);
    let date = date.as_str();
    let name = fields.name.trim();
    let description = fields.description.trim();
    let source_text = match fields.source_text() {
        Some(text) => text,
        None => {
            if template.placeholders().contains(&Placeholder::SourceText) {
                debug!(mode = %template.mode, "no raw text supplied, rendering from description");
            }
            description
        }
    };

    let body = fill(template.body, |p| match p {
        Placeholder::Name => name,
        Placeholder::Description => description,
        Placeholder::Tone => tone,
        Placeholder::Date => date,
        Placeholder::SourceText => source_text,
    });

    let language = normalize_language(fields.language.as_deref());
    format!("{}{}", language_directive(&language), body.trim_start())
}

/// Single left-to-right substitution pass. Values are never rescanned, so user
/// text containing `{tone}` or similar stays literal.
fn fill<'a>(body: &str, value: impl Fn(Placeholder) -> &'a str) -> String {
    let mut out = String::with_capacity(body.len() + 256);
    let mut rest = body;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];
        match Placeholder::ALL.into_iter().find(|p| tail.starts_with(p.token())) {
            Some(p) => {
                out.push_str(value(p));
                rest = &tail[p.token().len()..];
            }
            None => {
                out.push('{');
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

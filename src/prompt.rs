use crate::domain::release::{ReleaseForm, present_value};
use crate::format::{format_date, format_time};

const BACKEND_LABEL: &str = "BE v";
const WEB_LABEL: &str = "Web v";
const MOBILE_LABEL: &str = "Mobile v";
// The native build identifier already reads as a full version string.
const NATIVE_LABEL: &str = "Native ";

/// Joins the labelled, non-empty version components in backend, web, mobile,
/// native order. All fields absent yields an empty line.
pub fn version_line(form: &ReleaseForm) -> String {
    let mut parts = Vec::new();
    if let Some(version) = present_value(&form.backend_version) {
        parts.push(format!("{BACKEND_LABEL}{version}"));
    }
    if let Some(version) = present_value(&form.web_version) {
        parts.push(format!("{WEB_LABEL}{version}"));
    }
    if let Some(version) = present_value(&form.mobile_version) {
        parts.push(format!("{MOBILE_LABEL}{version}"));
    }
    if let Some(version) = present_value(&form.native_version) {
        parts.push(format!("{NATIVE_LABEL}{version}"));
    }
    parts.join(" / ")
}

/// The immutable prompt snapshot handed to the generation service. Built once
/// from a form; later form edits never reach an in-flight request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    prompt: String,
}

impl GenerationRequest {
    pub fn from_form(form: &ReleaseForm) -> Self {
        let prompt = build_prompt(
            &version_line(form),
            &format_date(form.release_date),
            &format_time(form.release_time),
            &form.downtime.closing_statement(form.has_native_release()),
            &form.ticket_details,
        );
        Self { prompt }
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }
}

// The downstream model is sensitive to the exact directive wording.
fn build_prompt(
    version_line: &str,
    release_date: &str,
    release_time: &str,
    closing_statement: &str,
    ticket_details: &str,
) -> String {
    format!(
        r#"You are writing a release message for the company's internal team. The audience is non-technical end users of the web platform (web-based tool) and the mobile app.

Version: {version_line}
Release Date: {release_date}
Release Time: {release_time}
Closing Statement: {closing_statement}

Ticket Details:
{ticket_details}

Generate a release message following this exact format and style:

1. Start with emoji header containing version and date/time info
2. Add a clear Subject line based on the nature of changes
3. Begin with "Dear all,"
4. Write a brief intro explaining what this release includes
5. Organize changes into clear numbered sections with bold headers
6. Use simple, non-technical language focused on business impact
7. End with the closing statement provided above
8. Keep it concise and professional

Style guidelines:
- Use emojis sparingly (calendar, clock, phone icons in header)
- Bold important headers and key terms
- Number main points (1., 2., 3.)
- Use sub-bullets (-) for details under main points where needed
- Focus on WHAT changed and WHY it matters, not HOW it works
- Group related changes together
- Use clear section headers like "Key Fixes:", "New Features:", "Improvements:", etc.
- Keep sentences clear and concise

Return ONLY the formatted release message, nothing else."#
    )
}

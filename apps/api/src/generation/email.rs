//! Interview-invitation email generation: request model, prompt builder,
//! and the deterministic fallback.

use serde::Deserialize;

use crate::generation::prompts;

/// Stylistic variant of the invitation. Unrecognized wire values fall back to
/// `Standard` rather than failing deserialization.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmailTemplate {
    Technical,
    Cultural,
    #[default]
    #[serde(other)]
    Standard,
}

/// Urgency of the invitation. Matched exactly against the wire values
/// "Urgent" and "High Priority"; anything else is standard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
pub enum UrgencyLevel {
    #[serde(rename = "Urgent")]
    Urgent,
    #[serde(rename = "High Priority")]
    HighPriority,
    #[default]
    #[serde(other)]
    Standard,
}

/// A proposed interview slot, as picked in the scheduling UI.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TimeSlot {
    pub date: String,
    pub time: String,
}

/// Caller-supplied inputs for `POST /generate-email`. Every field is
/// optional on the wire; missing fields take defaults. There is no
/// server-side validation beyond the method check.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EmailGenerationRequest {
    pub template: EmailTemplate,
    pub interview_type: String,
    pub urgency_level: UrgencyLevel,
    pub include_calendar_link: bool,
    pub include_interview_prep: bool,
    pub request_portfolio: bool,
    pub selected_time_slot: Option<TimeSlot>,
    pub candidate_summary: String,
    pub candidate_score: f64,
}

/// Renders the generation prompt for an invitation email.
///
/// Always produces a prompt, whatever the inputs: the summary and score are
/// embedded verbatim, the time-slot line appears only when a slot was picked,
/// and one clause per enabled flag is appended, joined by ", ".
pub fn build_email_prompt(request: &EmailGenerationRequest) -> String {
    let template_context = match request.template {
        EmailTemplate::Technical => prompts::TECHNICAL_TEMPLATE_CONTEXT,
        EmailTemplate::Cultural => prompts::CULTURAL_TEMPLATE_CONTEXT,
        EmailTemplate::Standard => prompts::STANDARD_TEMPLATE_CONTEXT,
    };

    let urgency_context = match request.urgency_level {
        UrgencyLevel::Urgent => prompts::URGENT_CONTEXT,
        UrgencyLevel::HighPriority => prompts::HIGH_PRIORITY_CONTEXT,
        UrgencyLevel::Standard => prompts::STANDARD_URGENCY_CONTEXT,
    };

    let mut instructions: Vec<&str> = Vec::new();
    if request.include_calendar_link {
        instructions.push("include a calendar scheduling link");
    }
    if request.include_interview_prep {
        instructions.push("include interview preparation guidance");
    }
    if request.request_portfolio {
        instructions.push("ask the candidate to share a portfolio or recent work samples");
    }

    let mut prompt = format!(
        "Write a professional interview invitation email for the following candidate.\n\n\
         {template_context} {urgency_context}\n\n\
         Candidate profile:\n{summary}\n\n\
         Overall match score: {score}/100.\n\n\
         Interview type: {interview_type}.\n",
        summary = request.candidate_summary,
        score = request.candidate_score,
        interview_type = request.interview_type,
    );

    if let Some(slot) = &request.selected_time_slot {
        prompt.push_str(&format!(
            "Proposed time slot: {} at {}.\n",
            slot.date, slot.time
        ));
    }

    if !instructions.is_empty() {
        prompt.push_str(&format!("The email should {}.\n", instructions.join(", ")));
    }

    prompt.push_str("\nReturn only the email text, ready to send.");
    prompt
}

/// Deterministic fallback when the generation service fails. Ignores the
/// request entirely, so the result loses personalization but is always a
/// complete, sendable email.
pub fn fallback_email() -> String {
    prompts::FALLBACK_EMAIL.to_string()
}

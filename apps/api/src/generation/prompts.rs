// Prompt fragments and fallback texts for the generation endpoints.
// The builders in email.rs / job_description.rs assemble these; nothing here
// performs I/O.

/// Template-context sentences, selected by exact match on the email template.
pub const TECHNICAL_TEMPLATE_CONTEXT: &str = "This is a technical interview invitation. \
    Reference the candidate's engineering background and mention that the conversation \
    will include a hands-on technical discussion.";

pub const CULTURAL_TEMPLATE_CONTEXT: &str = "This is a culture-fit conversation. \
    Keep the tone warm and emphasize getting to know the candidate's working style \
    and values.";

pub const STANDARD_TEMPLATE_CONTEXT: &str =
    "This is a standard interview invitation with a professional, friendly tone.";

/// Urgency sentences, selected by exact match on the urgency level.
pub const URGENT_CONTEXT: &str = "This request is urgent. \
    Ask the candidate to confirm their availability within 24 hours.";

pub const HIGH_PRIORITY_CONTEXT: &str = "This role is high priority. \
    Encourage the candidate to respond at their earliest convenience.";

pub const STANDARD_URGENCY_CONTEXT: &str = "There is no particular time pressure. \
    Close with a standard invitation to reply.";

/// Fixed fallback email used whenever the generation service is unavailable.
/// Intentionally generic: it ignores the request's personalization fields, so
/// a degraded response loses personalization but is always sendable.
pub const FALLBACK_EMAIL: &str = "Subject: Interview Invitation

Dear Candidate,

Thank you for your interest in this position. We were impressed by your background and would like to invite you to an interview with our team.

Please reply to this email with your availability over the next week, and we will confirm a time that works for everyone. If you have any questions in the meantime, feel free to reach out.

We look forward to speaking with you.

Best regards,
The Recruiting Team";

/// Job-description prompt. The builder substitutes every `{placeholder}`;
/// optional fields arrive already defaulted ("Not specified", "Full-time",
/// "Competitive").
pub const JOB_DESCRIPTION_PROMPT_TEMPLATE: &str = r#"Create a complete, professional job description for the following position.

Position details:
- Job title: {job_title}
- Experience level: {experience_level}
- Years of experience: {years_of_experience}
- Department: {department}
- Employment type: {employment_type}
- Location: {location}
- Company size: {company_size}
- Industry: {industry}
- Key skills: {key_skills}
- Company name: {company_name}
- Salary range: {salary_range}
- Additional requirements: {additional_requirements}

Structure the job description with exactly these seven sections:
1. Position Overview
2. Key Responsibilities
3. Required Qualifications
4. Preferred Qualifications
5. Technical Skills
6. Soft Skills
7. What We Offer

Write in clear, professional language. Do not use markdown formatting."#;

/// Fallback job description. The builder substitutes `{job_title}`,
/// `{experience_level}`, `{years_of_experience}`, `{company_name}` and
/// `{key_skills}`, each defaulted when the request omits them.
pub const FALLBACK_JOB_DESCRIPTION_TEMPLATE: &str = r#"{job_title} ({experience_level})

We are looking for a {experience_level} {job_title} to join {company_name}.

Key Responsibilities:
• Contribute to the design, development, and delivery of team projects
• Collaborate with cross-functional partners to meet business goals
• Maintain high standards of quality and reliability in day-to-day work

Required Qualifications:
• {years_of_experience} years of relevant professional experience
• Hands-on experience with {key_skills}
• Strong communication and problem-solving skills

What We Offer:
• Competitive compensation and benefits
• Professional growth and development opportunities
• A collaborative and inclusive working environment"#;

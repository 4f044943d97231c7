//! Job-description generation: request model, prompt builder, and the
//! deterministic fallback.

use serde::Deserialize;

use crate::generation::prompts;

/// Caller-supplied inputs for `POST /generate-job-description`.
///
/// `job_title` and `experience_level` are required; the handler rejects the
/// request with 400 before this module sees it otherwise. Everything else is
/// optional and defaulted at prompt-build time.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JobDescriptionRequest {
    pub job_title: String,
    pub experience_level: String,
    pub years_of_experience: Option<String>,
    pub department: Option<String>,
    pub employment_type: Option<String>,
    pub location: Option<String>,
    pub company_size: Option<String>,
    pub industry: Option<String>,
    pub key_skills: Option<String>,
    pub company_name: Option<String>,
    pub salary_range: Option<String>,
    pub additional_requirements: Option<String>,
}

fn or_default<'a>(value: &'a Option<String>, default: &'a str) -> &'a str {
    match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => default,
    }
}

/// Renders the generation prompt for a job description.
///
/// Absent optional fields become "Not specified", except the two with
/// domain-specific defaults: employment type ("Full-time") and salary range
/// ("Competitive"). The prompt enumerates the fixed seven-section structure
/// the generated text must follow.
pub fn build_job_description_prompt(request: &JobDescriptionRequest) -> String {
    prompts::JOB_DESCRIPTION_PROMPT_TEMPLATE
        .replace("{job_title}", &request.job_title)
        .replace("{experience_level}", &request.experience_level)
        .replace(
            "{years_of_experience}",
            or_default(&request.years_of_experience, "Not specified"),
        )
        .replace(
            "{department}",
            or_default(&request.department, "Not specified"),
        )
        .replace(
            "{employment_type}",
            or_default(&request.employment_type, "Full-time"),
        )
        .replace("{location}", or_default(&request.location, "Not specified"))
        .replace(
            "{company_size}",
            or_default(&request.company_size, "Not specified"),
        )
        .replace("{industry}", or_default(&request.industry, "Not specified"))
        .replace(
            "{key_skills}",
            or_default(&request.key_skills, "Not specified"),
        )
        .replace(
            "{company_name}",
            or_default(&request.company_name, "Not specified"),
        )
        .replace(
            "{salary_range}",
            or_default(&request.salary_range, "Competitive"),
        )
        .replace(
            "{additional_requirements}",
            or_default(&request.additional_requirements, "Not specified"),
        )
}

/// Deterministic fallback when the generation service fails. Unlike the email
/// fallback this one keeps a little personalization: title, level, years,
/// company, and skills survive (defaulted when absent). Fixed four-section
/// structure: title line, responsibilities, required qualifications, offer.
pub fn fallback_job_description(request: &JobDescriptionRequest) -> String {
    prompts::FALLBACK_JOB_DESCRIPTION_TEMPLATE
        .replace("{job_title}", &request.job_title)
        .replace("{experience_level}", &request.experience_level)
        .replace(
            "{years_of_experience}",
            or_default(&request.years_of_experience, "2-5"),
        )
        .replace(
            "{company_name}",
            or_default(&request.company_name, "[Company Name]"),
        )
        .replace(
            "{key_skills}",
            or_default(
                &request.key_skills,
                "the tools and technologies relevant to the role",
            ),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_request() -> JobDescriptionRequest {
        JobDescriptionRequest {
            job_title: "Backend Engineer".to_string(),
            experience_level: "Senior".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_request_deserializes_camel_case_fields() {
        let json = r#"{
            "jobTitle": "Backend Engineer",
            "experienceLevel": "Senior",
            "yearsOfExperience": "5+",
            "employmentType": "Contract",
            "keySkills": "Rust, PostgreSQL",
            "companyName": "Acme",
            "salaryRange": "$150k-$180k"
        }"#;
        let request: JobDescriptionRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.job_title, "Backend Engineer");
        assert_eq!(request.years_of_experience.as_deref(), Some("5+"));
        assert_eq!(request.salary_range.as_deref(), Some("$150k-$180k"));
        assert!(request.department.is_none());
    }

    #[test]
    fn test_prompt_substitutes_supplied_fields() {
        let request = JobDescriptionRequest {
            key_skills: Some("Rust, PostgreSQL, Kubernetes".to_string()),
            company_name: Some("Acme Robotics".to_string()),
            ..minimal_request()
        };
        let prompt = build_job_description_prompt(&request);
        assert!(prompt.contains("Job title: Backend Engineer"));
        assert!(prompt.contains("Experience level: Senior"));
        assert!(prompt.contains("Key skills: Rust, PostgreSQL, Kubernetes"));
        assert!(prompt.contains("Company name: Acme Robotics"));
        assert!(!prompt.contains('{'), "no unsubstituted placeholders");
    }

    #[test]
    fn test_prompt_defaults_absent_fields() {
        let prompt = build_job_description_prompt(&minimal_request());
        assert!(prompt.contains("Department: Not specified"));
        assert!(prompt.contains("Location: Not specified"));
        // Domain-specific defaults, not "Not specified"
        assert!(prompt.contains("Employment type: Full-time"));
        assert!(prompt.contains("Salary range: Competitive"));
    }

    #[test]
    fn test_prompt_treats_blank_fields_as_absent() {
        let request = JobDescriptionRequest {
            department: Some("   ".to_string()),
            ..minimal_request()
        };
        let prompt = build_job_description_prompt(&request);
        assert!(prompt.contains("Department: Not specified"));
    }

    #[test]
    fn test_prompt_enumerates_all_seven_sections() {
        let prompt = build_job_description_prompt(&minimal_request());
        for section in [
            "Position Overview",
            "Key Responsibilities",
            "Required Qualifications",
            "Preferred Qualifications",
            "Technical Skills",
            "Soft Skills",
            "What We Offer",
        ] {
            assert!(prompt.contains(section), "missing section: {section}");
        }
    }

    #[test]
    fn test_fallback_defaults_years_company_and_skills() {
        let text = fallback_job_description(&minimal_request());
        assert!(text.contains("Backend Engineer"));
        assert!(text.contains("2-5 years of relevant professional experience"));
        assert!(text.contains("[Company Name]"));
        assert!(text.contains("the tools and technologies relevant to the role"));
    }

    #[test]
    fn test_fallback_keeps_supplied_personalization() {
        let request = JobDescriptionRequest {
            years_of_experience: Some("7+".to_string()),
            company_name: Some("Acme Robotics".to_string()),
            key_skills: Some("Rust and Kafka".to_string()),
            ..minimal_request()
        };
        let text = fallback_job_description(&request);
        assert!(text.contains("7+ years"));
        assert!(text.contains("join Acme Robotics"));
        assert!(text.contains("Hands-on experience with Rust and Kafka"));
        assert!(!text.contains("[Company Name]"));
    }

    #[test]
    fn test_fallback_has_four_sections() {
        let text = fallback_job_description(&minimal_request());
        assert!(text.starts_with("Backend Engineer (Senior)"));
        assert!(text.contains("Key Responsibilities:"));
        assert!(text.contains("Required Qualifications:"));
        assert!(text.contains("What We Offer:"));
    }
}

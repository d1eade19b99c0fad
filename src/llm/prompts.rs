//! Prompt for the hosted-model match analysis

/// Prompt template with `{resume}` and `{job}` placeholders
#[derive(Debug, Clone)]
pub struct PromptTemplates {
    pub system: String,
    pub match_analysis: String,
}

impl Default for PromptTemplates {
    fn default() -> Self {
        Self {
            system: SYSTEM_PROMPT.to_string(),
            match_analysis: MATCH_ANALYSIS_TEMPLATE.to_string(),
        }
    }
}

impl PromptTemplates {
    pub fn render_match_analysis(&self, resume_text: &str, job_text: &str) -> String {
        self.match_analysis
            .replace("{resume}", resume_text.trim())
            .replace("{job}", job_text.trim())
    }
}

const SYSTEM_PROMPT: &str =
    "You are an expert recruiter analyzing resume matches. Provide a match percentage and detailed analysis.";

const MATCH_ANALYSIS_TEMPLATE: &str = r#"Please analyze this resume against the job description.
Provide a match percentage and list specific matching skills and qualifications.

Resume:
{resume}

Job Description:
{job}"#;

// Analysis LLM prompt templates.
// All prompts for the analysis module are defined here.

pub const REVIEW_PROMPT: &str = r#"You are a professional resume reviewer AI. Analyze this resume and return feedback in JSON format only. DO NOT include markdown, do not use triple backticks. Return raw JSON only.

Use this structure exactly:
{
  "summary": "A short overview of the resume",
  "score": 0-100,
  "suggestions": ["Quick improvements to make"],
  "strengths": ["What the resume does well"],
  "weaknesses": ["Areas to work on"],
  "issues": ["Formatting, grammar, or structure problems"],
  "jobReadiness": "Entry-level | Mid-level | Senior"
}


Here is the resume text extracted from a pdf:
{resume_text}"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_review_prompt_names_every_field() {
        for field in [
            "summary",
            "score",
            "suggestions",
            "strengths",
            "weaknesses",
            "issues",
            "jobReadiness",
        ] {
            assert!(REVIEW_PROMPT.contains(field), "missing field: {field}");
        }
    }

    #[test]
    fn test_review_prompt_has_resume_placeholder() {
        assert!(REVIEW_PROMPT.ends_with("{resume_text}"));
    }
}

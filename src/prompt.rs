//! Prompt construction for the CLIL glossary generator.
//!
//! Pure string templating. Any inputs are accepted verbatim, including
//! empty strings.

/// System prompt sent alongside every glossary request.
pub const SYSTEM_PROMPT: &str = "You are a professional CLIL glossary generator.";

/// Build the user prompt for a glossary of 15 terms on `topic` at the
/// given English proficiency level.
pub fn build_glossary_prompt(topic: &str, language_level: &str) -> String {
    format!(
        r#"
You are a CLIL glossary generator for Kazakhstani Informatics teachers.

Generate a glossary of 15 English terms related to the topic "{topic}" suitable for students with {language_level} English proficiency.

For each term, provide:
1. Term (in English)
2. Translation in Kazakh
3. Translation in Russian
4. IPA pronunciation (e.g., /ˈælgərɪðəm/)
5. A simple Cyrillic transcription of how it is read (e.g., 'алгоритм')
6. A brief English definition written in simplified English, matching the {language_level} level

Return the glossary as a markdown table with this structure:
| Term | Kazakh | Russian | IPA | How to Read | Definition |
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_contains_topic_and_level() {
        let prompt = build_glossary_prompt("Algorithms", "A2");
        assert!(prompt.contains("Algorithms"));
        assert!(prompt.contains("A2"));
    }

    #[test]
    fn prompt_requests_markdown_table() {
        let prompt = build_glossary_prompt("Networks", "B1-B2");
        assert!(prompt.contains("| Term | Kazakh | Russian | IPA | How to Read | Definition |"));
        assert!(prompt.contains("15 English terms"));
    }

    #[test]
    fn empty_inputs_are_accepted() {
        let prompt = build_glossary_prompt("", "");
        assert!(prompt.contains("related to the topic \"\""));
    }
}

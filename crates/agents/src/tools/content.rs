//! Style-templated content generation for writing tasks.

/// Writing style selected from the query text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Style {
    #[default]
    Informative,
    Summary,
    Technical,
    Creative,
}

impl Style {
    /// Pick a style from query cues; defaults to informative.
    pub fn from_query(query: &str) -> Self {
        let lower = query.to_lowercase();
        if lower.contains("summary") || lower.contains("summarize") {
            Style::Summary
        } else if lower.contains("technical") {
            Style::Technical
        } else if lower.contains("creative") {
            Style::Creative
        } else {
            Style::Informative
        }
    }
}

/// Fill the style template with the requested topic.
pub fn generate(topic: &str, style: Style) -> String {
    match style {
        Style::Informative => format!(
            "Comprehensive guide on {} covering key concepts, applications, and best practices.",
            topic
        ),
        Style::Summary => format!(
            "Quick summary: {} is an important concept with significant practical applications.",
            topic
        ),
        Style::Technical => format!(
            "Technical documentation for {} including implementation details and specifications.",
            topic
        ),
        Style::Creative => format!(
            "Creative exploration of {} from unique perspectives and innovative angles.",
            topic
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_from_query() {
        assert_eq!(Style::from_query("write a technical summary"), Style::Summary);
        assert_eq!(Style::from_query("technical docs please"), Style::Technical);
        assert_eq!(Style::from_query("something creative"), Style::Creative);
        assert_eq!(Style::from_query("tell me about rust"), Style::Informative);
    }

    #[test]
    fn test_generate_mentions_topic() {
        for style in [Style::Informative, Style::Summary, Style::Technical, Style::Creative] {
            let content = generate("distributed systems", style);
            assert!(content.contains("distributed systems"));
        }
    }
}

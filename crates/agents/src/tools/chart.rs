//! Simulated data visualization descriptions.

/// Choose a chart type from the description cues. Deterministic so runs
/// are reproducible; defaults to a bar chart.
fn chart_type(description: &str) -> &'static str {
    let lower = description.to_lowercase();
    if lower.contains("line") {
        "line graph"
    } else if lower.contains("pie") {
        "pie chart"
    } else if lower.contains("scatter") || lower.contains("plot") {
        "scatter plot"
    } else {
        "bar chart"
    }
}

/// Simulate creating a visualization for the described data.
pub fn describe_chart(description: &str) -> String {
    format!(
        "Created {} for: {}. Visualization shows clear trends and patterns.",
        chart_type(description),
        description
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chart_type_from_cues() {
        assert!(describe_chart("line of revenue by month").contains("line graph"));
        assert!(describe_chart("pie of market share").contains("pie chart"));
        assert!(describe_chart("plot the residuals").contains("scatter plot"));
        assert!(describe_chart("visualize sales").contains("bar chart"));
    }

    #[test]
    fn test_description_included() {
        let result = describe_chart("quarterly revenue");
        assert!(result.contains("quarterly revenue"));
    }
}

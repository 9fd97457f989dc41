//! Simulated web search over a canned topic table.

/// Canned summaries keyed by topic substring.
const SEARCH_RESULTS: &[(&str, &str)] = &[
    (
        "python programming",
        "Python is a high-level programming language known for its simplicity and versatility. Latest version is 3.12.",
    ),
    (
        "machine learning",
        "Machine learning is a subset of AI that enables computers to learn without explicit programming. Popular frameworks include TensorFlow and PyTorch.",
    ),
    (
        "climate change",
        "Climate change refers to long-term shifts in global temperatures and weather patterns. Human activities are the main driver since the 1800s.",
    ),
    (
        "artificial intelligence",
        "AI is intelligence demonstrated by machines, as opposed to human intelligence. It includes machine learning, natural language processing, and robotics.",
    ),
    (
        "data science",
        "Data science combines statistics, programming, and domain expertise to extract insights from data.",
    ),
    (
        "blockchain",
        "Blockchain is a distributed ledger technology that maintains a secure and decentralized record of transactions.",
    ),
    (
        "quantum computing",
        "Quantum computing uses quantum mechanical phenomena to process information in ways classical computers cannot.",
    ),
];

/// Simulate a web search: match the query against known topics, falling
/// back to a generic line for anything unknown.
pub fn web_search(query: &str) -> String {
    let lower = query.to_lowercase();

    for (topic, result) in SEARCH_RESULTS {
        if lower.contains(topic) {
            return format!("Search results: {}", result);
        }
    }

    format!(
        "Search results: Found general information about '{}'. This topic is actively researched with many recent developments.",
        query
    )
}

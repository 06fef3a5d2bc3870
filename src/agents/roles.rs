//! Role instructions for the conversation participants.
//!
//! The defaults mirror the tool's original role prompts; callers may swap in
//! their own wording without touching the coordinator.

/// System instructions for the three conversation roles.
#[derive(Debug, Clone)]
pub struct RoleInstructions {
    /// Frames the retrieved paper set against the query.
    pub retriever: String,
    /// Extracts per-paper insights.
    pub summarizer: String,
    /// Compares findings across papers.
    pub synthesizer: String,
}

impl Default for RoleInstructions {
    fn default() -> Self {
        Self {
            retriever: "You are a research paper retriever. You are given papers fetched \
                        from the Semantic Scholar API for a research query. Assess how \
                        well they cover the query, favoring recent papers (last 2 years) \
                        that are directly related to it."
                .to_string(),
            summarizer: "You are a research paper summarizer. Your task is to extract key \
                         insights from papers. Focus on the problem statement, \
                         methodology, results, and novel contributions."
                .to_string(),
            synthesizer: "You are a research synthesis expert. Your task is to compare \
                          findings across papers and create a comprehensive synthesis \
                          highlighting common techniques, innovations, and challenges."
                .to_string(),
        }
    }
}

use crate::{
    agents::{roles::RoleInstructions, ConversationOrchestrator},
    llm::LLMClient,
    types::{Completion, ConversationOutcome, PaperRecord, PaperResultSet, Result},
};
use async_trait::async_trait;
use std::collections::BTreeMap;

/// Fixed-order conversation coordinator over a single [`LLMClient`].
///
/// One run spends at most `max_rounds` LLM turns: a retrieval-framing turn,
/// one summarize turn per paper, and a final synthesis turn. Exhausting the
/// budget or losing a turn mid-run ends the conversation with an explicit
/// [`Completion`] signal and keeps whatever findings were already gathered.
pub struct ResearchCoordinator {
    llm: Box<dyn LLMClient>,
    roles: RoleInstructions,
    max_rounds: u32,
}

impl ResearchCoordinator {
    /// Create a coordinator with the given client, role instructions, and
    /// round budget.
    pub fn new(llm: Box<dyn LLMClient>, roles: RoleInstructions, max_rounds: u32) -> Self {
        Self {
            llm,
            roles,
            max_rounds,
        }
    }

    fn outcome(
        findings: BTreeMap<String, String>,
        synthesis: String,
        completion: Completion,
    ) -> ConversationOutcome {
        ConversationOutcome {
            findings,
            synthesis,
            completion,
        }
    }
}

#[async_trait]
impl ConversationOrchestrator for ResearchCoordinator {
    async fn run(&self, query: &str, papers: &PaperResultSet) -> Result<ConversationOutcome> {
        let mut rounds_used: u32 = 0;
        let mut findings: BTreeMap<String, String> = BTreeMap::new();
        let mut scope_note = String::new();

        // Framing turn. Skipped entirely when nothing was retrieved; the
        // synthesizer is told about the empty grounding instead.
        if !papers.is_empty() {
            if rounds_used >= self.max_rounds {
                return Ok(Self::outcome(
                    findings,
                    String::new(),
                    Completion::ExhaustedRounds,
                ));
            }
            rounds_used += 1;
            tracing::info!(round = rounds_used, max = self.max_rounds, "framing turn");

            match self
                .llm
                .generate_with_system(&self.roles.retriever, &framing_prompt(query, papers))
                .await
            {
                Ok(note) => scope_note = note,
                Err(e) => {
                    return Ok(Self::outcome(
                        findings,
                        String::new(),
                        Completion::Failed(e.to_string()),
                    ))
                }
            }
        }

        // Summary turns, one per paper, in set order.
        for paper in papers.records() {
            if rounds_used >= self.max_rounds {
                return Ok(Self::outcome(
                    findings,
                    String::new(),
                    Completion::ExhaustedRounds,
                ));
            }
            rounds_used += 1;
            tracing::info!(
                round = rounds_used,
                max = self.max_rounds,
                title = %paper.title,
                "summary turn"
            );

            match self
                .llm
                .generate_with_system(&self.roles.summarizer, &summary_prompt(paper))
                .await
            {
                Ok(text) => {
                    findings.insert(paper.title.clone(), text);
                }
                Err(e) => {
                    return Ok(Self::outcome(
                        findings,
                        String::new(),
                        Completion::Failed(e.to_string()),
                    ))
                }
            }
        }

        // Synthesis turn.
        if rounds_used >= self.max_rounds {
            return Ok(Self::outcome(
                findings,
                String::new(),
                Completion::ExhaustedRounds,
            ));
        }
        rounds_used += 1;
        tracing::info!(round = rounds_used, max = self.max_rounds, "synthesis turn");

        match self
            .llm
            .generate_with_system(
                &self.roles.synthesizer,
                &synthesis_prompt(query, &scope_note, &findings),
            )
            .await
        {
            Ok(synthesis) => Ok(Self::outcome(findings, synthesis, Completion::Done)),
            Err(e) => Ok(Self::outcome(
                findings,
                String::new(),
                Completion::Failed(e.to_string()),
            )),
        }
    }
}

fn framing_prompt(query: &str, papers: &PaperResultSet) -> String {
    let listing = papers
        .records()
        .iter()
        .enumerate()
        .map(|(i, p)| match p.year {
            Some(year) => format!("{}. {} ({})", i + 1, p.title, year),
            None => format!("{}. {}", i + 1, p.title),
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"Research query: {}

Papers retrieved:
{}

Briefly assess how well this set covers the query and note any gaps."#,
        query, listing
    )
}

fn summary_prompt(paper: &PaperRecord) -> String {
    let mut prompt = format!("Title: {}\n", paper.title);
    if let Some(year) = paper.year {
        prompt.push_str(&format!("Year: {}\n", year));
    }
    if !paper.authors.is_empty() {
        prompt.push_str(&format!("Authors: {}\n", paper.authors.join(", ")));
    }
    match &paper.abstract_text {
        Some(abstract_text) => prompt.push_str(&format!("Abstract: {}\n", abstract_text)),
        None => prompt.push_str("Abstract: (not available)\n"),
    }
    prompt.push_str("\nExtract the key insights from this paper.");
    prompt
}

fn synthesis_prompt(query: &str, scope_note: &str, findings: &BTreeMap<String, String>) -> String {
    if findings.is_empty() {
        return format!(
            r#"Research query: {}

No papers were retrieved for this query. State that no grounding literature
was available and suggest how the query could be refined."#,
            query
        );
    }

    let per_paper = findings
        .iter()
        .map(|(title, text)| format!("### {}\n{}", title, text))
        .collect::<Vec<_>>()
        .join("\n\n");

    let mut prompt = format!(
        r#"Research query: {}

Per-paper findings:
{}
"#,
        query, per_paper
    );
    if !scope_note.is_empty() {
        prompt.push_str(&format!("\nRetrieval notes:\n{}\n", scope_note));
    }
    prompt.push_str(
        "\nCompare the findings and write a synthesis covering common techniques, \
         innovations, and open challenges.",
    );
    prompt
}

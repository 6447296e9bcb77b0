//! Builtin demo challenge content
//!
//! A small compiled-in catalog spanning all nine challenge types and all
//! eight concept areas, used when no catalog file is configured. Production
//! deployments point `[catalog] path` at their own content file.

use crate::catalog::types::{Challenge, ChallengeType, ConceptArea};
use serde_json::json;

/// The builtin challenge set
pub fn builtin_challenges() -> Vec<Challenge> {
    vec![
        Challenge {
            id: "pf-01".to_string(),
            challenge_type: ChallengeType::PromptForge,
            concept_area: ConceptArea::PromptCraft,
            title: "The Apology Email".to_string(),
            brief: "Write a prompt that produces a usable apology email on the first try."
                .to_string(),
            difficulty: 1,
            payload: json!({
                "task": "Get a sincere, non-groveling apology email to a manager for a missed deadline",
                "hint": "Name the recipient, the situation, the structure, and the tone",
                "evaluationCriteria": [
                    "names the recipient",
                    "states the concrete situation",
                    "asks for specific corrective actions",
                    "sets an explicit tone"
                ]
            }),
        },
        Challenge {
            id: "pf-02".to_string(),
            challenge_type: ChallengeType::PromptForge,
            concept_area: ConceptArea::CodingWithAi,
            title: "Regex Without Tears".to_string(),
            brief: "Prompt for a regex that matches ISO dates, with tests.".to_string(),
            difficulty: 2,
            payload: json!({
                "task": "Get a regex matching ISO-8601 dates plus a table of passing and failing examples",
                "evaluationCriteria": [
                    "specifies the exact date format",
                    "asks for negative examples",
                    "asks for an explanation of each part"
                ]
            }),
        },
        Challenge {
            id: "re-01".to_string(),
            challenge_type: ChallengeType::ReverseEngineer,
            concept_area: ConceptArea::PromptCraft,
            title: "The Haiku Collection".to_string(),
            brief: "These programming haiku came from one of these prompts. Which one?"
                .to_string(),
            difficulty: 1,
            payload: json!({
                "output": "Semicolon lost—\nthe compiler screams in red.\nOne character. Fixed.",
                "outputType": "poem",
                "options": [
                    "Write some haiku about coding. Make them funny.",
                    "Write 4 haiku about programming frustrations, strict 5-7-5, each ending in a resolution beat. Tone: wry humor.",
                    "Can you write poetry about computers and technology?"
                ],
                "correctIndex": 1,
                "explanation": "Only the second option pins the count, the syllable structure, the resolution beat, and the tone."
            }),
        },
        Challenge {
            id: "re-02".to_string(),
            challenge_type: ChallengeType::ReverseEngineer,
            concept_area: ConceptArea::CriticalThinking,
            title: "The Suspicious Summary".to_string(),
            brief: "Which prompt produced this oddly confident summary?".to_string(),
            difficulty: 2,
            payload: json!({
                "output": "The study conclusively proves that remote teams ship 40% faster.",
                "outputType": "analysis",
                "options": [
                    "Summarize this study neutrally, flagging any limitations the authors note.",
                    "Summarize this study in one punchy sentence for a landing page.",
                    "List the methodology concerns in this study."
                ],
                "correctIndex": 1,
                "explanation": "Marketing framing invites overclaiming; the neutral prompt would have kept the hedges."
            }),
        },
        Challenge {
            id: "tc-01".to_string(),
            challenge_type: ChallengeType::TasteCurator,
            concept_area: ConceptArea::HumanJudgment,
            title: "Pick the Landing Page".to_string(),
            brief: "Three AI-drafted hero sections. Which would the expert panel ship?"
                .to_string(),
            difficulty: 1,
            payload: json!({
                "domain": "copywriting",
                "brief": "Hero copy for a developer tools startup",
                "variants": [
                    { "id": "a", "label": "A", "content": "Revolutionize your workflow with AI-powered synergy." },
                    { "id": "b", "label": "B", "content": "Ship twice as often. Debug half as much." },
                    { "id": "c", "label": "C", "content": "The future of development is here, today." }
                ],
                "expertTopPick": "b",
                "expertReasoning": "Concrete, measurable, and free of filler adjectives."
            }),
        },
        Challenge {
            id: "tc-02".to_string(),
            challenge_type: ChallengeType::TasteCurator,
            concept_area: ConceptArea::ToolLandscape,
            title: "Choose the Diagram".to_string(),
            brief: "Which generated architecture diagram actually communicates?".to_string(),
            difficulty: 2,
            payload: json!({
                "domain": "technical-communication",
                "brief": "System overview for onboarding new engineers",
                "variants": [
                    { "id": "a", "label": "A", "content": "Twelve boxes, every arrow bidirectional" },
                    { "id": "b", "label": "B", "content": "Four layers, data flowing one direction" },
                    { "id": "c", "label": "C", "content": "One giant cloud labeled 'platform'" }
                ],
                "expertTopPick": "b",
                "expertReasoning": "Layered flow matches how readers build a mental model."
            }),
        },
        Challenge {
            id: "trc-01".to_string(),
            challenge_type: ChallengeType::TrustCall,
            concept_area: ConceptArea::CriticalThinking,
            title: "The Confident Citation".to_string(),
            brief: "The model cites a paper you cannot find. What do you do?".to_string(),
            difficulty: 1,
            payload: json!({
                "scenario": "An AI-drafted report cites 'Chen et al. 2021' for a key statistic, but the paper does not surface in any search",
                "context": "The report ships to a client tomorrow",
                "options": [
                    { "id": "a", "label": "Ship it, the rest checks out", "risk": "high" },
                    { "id": "b", "label": "Remove the statistic and its claim", "risk": "low" },
                    { "id": "c", "label": "Replace with a verifiable source or drop the claim", "risk": "low" }
                ],
                "bestChoice": "c",
                "explanation": "Unverifiable citations are the classic hallucination shape; keep the claim only with a real source."
            }),
        },
        Challenge {
            id: "trc-02".to_string(),
            challenge_type: ChallengeType::TrustCall,
            concept_area: ConceptArea::HumanJudgment,
            title: "Medical Adjacent".to_string(),
            brief: "A chatbot answer strays into dosage advice. Trust it?".to_string(),
            difficulty: 2,
            payload: json!({
                "scenario": "A wellness app's assistant suggests a supplement dosage",
                "context": "No clinician reviewed the response path",
                "options": [
                    { "id": "a", "label": "Allow it, the advice is generic", "risk": "high" },
                    { "id": "b", "label": "Route dosage questions to vetted reference content", "risk": "low" }
                ],
                "bestChoice": "b",
                "explanation": "Dosage is a regulated, high-harm category; generated numbers are never the right source."
            }),
        },
        Challenge {
            id: "fp-01".to_string(),
            challenge_type: ChallengeType::FirstPrinciples,
            concept_area: ConceptArea::CriticalThinking,
            title: "The Birthday Paradox".to_string(),
            brief: "The AI's combinatorics answer looks plausible. Is it right?".to_string(),
            difficulty: 2,
            payload: json!({
                "question": "How many people make a shared birthday more likely than not?",
                "domain": "probability",
                "aiAnswer": "You need 183 people, half of 365.",
                "aiIsCorrect": false,
                "correctAnswer": "23",
                "reasoning": "Pairs grow quadratically; the complement product crosses 0.5 at 23 people."
            }),
        },
        Challenge {
            id: "cs-01".to_string(),
            challenge_type: ChallengeType::ContextSurgeon,
            concept_area: ConceptArea::ContextEngineering,
            title: "Token Budget Triage".to_string(),
            brief: "Fit the right documents into a tight context budget.".to_string(),
            difficulty: 2,
            payload: json!({
                "task": "Answer a billing dispute with only 4000 tokens of context",
                "documents": [
                    { "id": "d1", "label": "Customer invoice history", "tokens": 1500, "relevance": "high" },
                    { "id": "d2", "label": "Full refund policy", "tokens": 2000, "relevance": "high" },
                    { "id": "d3", "label": "Company blog post on pricing", "tokens": 1800, "relevance": "low" },
                    { "id": "d4", "label": "Support transcript", "tokens": 500, "relevance": "medium" }
                ],
                "budgetTokens": 4000,
                "optimalIds": ["d1", "d2", "d4"]
            }),
        },
        Challenge {
            id: "dd-01".to_string(),
            challenge_type: ChallengeType::DebugDetective,
            concept_area: ConceptArea::PromptCraft,
            title: "The Contradictory Brief".to_string(),
            brief: "This prompt produced garbage. Find the bugs.".to_string(),
            difficulty: 2,
            payload: json!({
                "prompt": "Write a detailed summary. Keep it to one sentence. Use formal language that sounds casual.",
                "badOutput": "A lengthy, tonally confused paragraph",
                "bugs": [
                    { "region": "detailed summary / one sentence", "bugType": "contradictory" },
                    { "region": "formal that sounds casual", "bugType": "contradictory" }
                ],
                "fixedPrompt": "Summarize in one sentence, plain professional tone.",
                "explanation": "Contradictory constraints force the model to satisfy neither."
            }),
        },
        Challenge {
            id: "tlc-01".to_string(),
            challenge_type: ChallengeType::ToolChain,
            concept_area: ConceptArea::ToolUse,
            title: "Podcast to Blog Post".to_string(),
            brief: "Order the tools to turn raw audio into a draft post.".to_string(),
            difficulty: 1,
            payload: json!({
                "goal": "Publish a blog post from a recorded interview",
                "availableTools": [
                    { "id": "t1", "name": "Transcriber", "category": "audio" },
                    { "id": "t2", "name": "Summarizer", "category": "text" },
                    { "id": "t3", "name": "Style rewriter", "category": "text" },
                    { "id": "t4", "name": "Image generator", "category": "media" }
                ],
                "optimalChain": ["t1", "t2", "t3"],
                "explanation": "Each step's output is the next step's input; images are optional garnish."
            }),
        },
        Challenge {
            id: "aa-01".to_string(),
            challenge_type: ChallengeType::AgentArchitect,
            concept_area: ConceptArea::AgentDesign,
            title: "The Inbox Triage Agent".to_string(),
            brief: "Design the steps and guardrails for an email triage agent.".to_string(),
            difficulty: 3,
            payload: json!({
                "goal": "Label and draft replies for a support inbox without sending anything unreviewed",
                "constraints": ["no outbound email without human approval", "escalate legal threats"],
                "steps": [
                    { "id": "s1", "label": "Classify", "tool": "classifier", "instruction": "Label intent and urgency" },
                    { "id": "s2", "label": "Draft", "tool": "writer", "instruction": "Draft a reply for routine intents" },
                    { "id": "s3", "label": "Queue", "tool": "review-queue", "instruction": "Hold drafts for human approval" }
                ],
                "failureMode": "Auto-sending a reply to a legal threat",
                "guardRail": "Send action is gated on explicit human approval"
            }),
        },
        Challenge {
            id: "aa-02".to_string(),
            challenge_type: ChallengeType::AgentArchitect,
            concept_area: ConceptArea::ToolUse,
            title: "Handoff or Monolith".to_string(),
            brief: "Split one sprawling agent into steps with clean handoffs.".to_string(),
            difficulty: 3,
            payload: json!({
                "goal": "Weekly competitor report",
                "constraints": ["sources must be cited", "under 10 minutes of compute"],
                "steps": [
                    { "id": "s1", "label": "Collect", "tool": "search", "instruction": "Gather this week's mentions" },
                    { "id": "s2", "label": "Verify", "tool": "fetcher", "instruction": "Resolve and confirm each source" },
                    { "id": "s3", "label": "Compose", "tool": "writer", "instruction": "Write the report from verified items only" }
                ],
                "failureMode": "Composing from unverified search snippets",
                "guardRail": "Compose step only consumes verified items"
            }),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_builtin_ids_unique() {
        let challenges = builtin_challenges();
        let ids: HashSet<_> = challenges.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids.len(), challenges.len());
    }

    #[test]
    fn test_builtin_covers_all_types() {
        let challenges = builtin_challenges();
        for ty in ChallengeType::all() {
            assert!(
                challenges.iter().any(|c| c.challenge_type == ty),
                "missing challenge type {}",
                ty
            );
        }
    }

    #[test]
    fn test_builtin_covers_all_areas() {
        let challenges = builtin_challenges();
        for area in ConceptArea::all() {
            assert!(
                challenges.iter().any(|c| c.concept_area == area),
                "missing concept area {}",
                area
            );
        }
    }

    #[test]
    fn test_builtin_difficulty_in_range() {
        for c in builtin_challenges() {
            assert!((1..=3).contains(&c.difficulty), "{} out of range", c.id);
        }
    }
}

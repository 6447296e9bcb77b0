//! Human-readable insight copy for comparison responses

use crate::catalog::types::ChallengeType;

/// Insight shown when a challenge has no submissions yet
pub const FIRST_SUBMISSION_INSIGHT: &str = "Be the first to complete this challenge!";

/// Pick the insight line for a challenge type and percentile
///
/// Three tiers: high (>= 70), mid (>= 40), low. `None` covers submissions
/// against challenge ids the catalog does not know, which fall back to
/// generic encouragement rather than a wrong type guess.
pub fn generate_insight(challenge_type: Option<ChallengeType>, percentile: u8) -> &'static str {
    let high = percentile >= 70;
    let mid = percentile >= 40;

    match challenge_type {
        Some(ChallengeType::TasteCurator) => {
            if high {
                "Your taste aligns strongly with the expert panel. You've got a sharp eye for quality."
            } else if mid {
                "Your picks were reasonable, though the experts saw something different. Taste develops with exposure."
            } else {
                "You and the experts went different directions. That's not wrong, but understanding why they chose differently is the skill."
            }
        }

        Some(ChallengeType::TrustCall) | Some(ChallengeType::FirstPrinciples) => {
            if high {
                "Strong critical thinking. You caught what most people miss."
            } else if mid {
                "Decent instincts, but there's room to sharpen your reasoning."
            } else {
                "This one trips up a lot of people. The key is slowing down and reasoning from first principles."
            }
        }

        Some(ChallengeType::PromptForge) | Some(ChallengeType::ContextSurgeon) => {
            if high {
                "You completed this faster and more thoroughly than most. Your prompting instincts are strong."
            } else if mid {
                "Solid approach. With practice, you'll develop the muscle memory for great prompts."
            } else {
                "This is a skill that improves dramatically with practice. Try the hint next time for a boost."
            }
        }

        Some(ChallengeType::ReverseEngineer) => {
            if high {
                "You can read AI output like a fingerprint. That's a genuinely valuable skill."
            } else if mid {
                "Good eye. Reverse-engineering prompts gets easier as you write more of them."
            } else {
                "Prompt-to-output mapping is tricky. The more you practice writing prompts, the better you'll read them."
            }
        }

        Some(ChallengeType::DebugDetective) => {
            if high {
                "Sharp debugging instincts. You spotted the issues that most people overlook."
            } else if mid {
                "You caught some bugs but missed others. The subtle ones are where the real skill is."
            } else {
                "Prompt debugging is one of the hardest skills. Each miss teaches you what to look for next time."
            }
        }

        Some(ChallengeType::ToolChain) => {
            if high {
                "Your workflow design is efficient and logical. You understand how AI tools fit together."
            } else if mid {
                "Good pipeline thinking. Consider the data flow between tools, that's where optimization happens."
            } else {
                "Orchestrating tools is complex. Think about what each tool needs as input and what it produces."
            }
        }

        Some(ChallengeType::AgentArchitect) => {
            if high {
                "Your agent design shows strong systems thinking. You understand decomposition and tool assignment."
            } else if mid {
                "Good architecture. Think about failure modes and what guardrails each step needs."
            } else {
                "Agent design has a lot of moving parts. Focus on clear handoffs between steps, that's where agents break."
            }
        }

        None => {
            if high {
                "Impressive performance! You're building strong AI skills."
            } else if mid {
                "Solid work. Keep practicing to sharpen these skills."
            } else {
                "Every challenge you complete builds the skill. Keep going."
            }
        }
    }
}

//! Challenge definition types
//!
//! Wire types for the challenge catalog. All types use camelCase JSON
//! serialization; enum variants travel as kebab-case strings.

use serde::{Deserialize, Serialize};

/// Kind of interaction a challenge presents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChallengeType {
    PromptForge,
    ReverseEngineer,
    TasteCurator,
    TrustCall,
    FirstPrinciples,
    ContextSurgeon,
    DebugDetective,
    ToolChain,
    AgentArchitect,
}

impl ChallengeType {
    /// Whether completing this challenge invokes an outside generative
    /// capability (constrains feed sequencing and is recorded on submissions)
    pub fn uses_assist(&self) -> bool {
        matches!(self, Self::PromptForge | Self::ContextSurgeon)
    }

    /// All challenge types, in catalog order
    pub fn all() -> [ChallengeType; 9] {
        [
            Self::PromptForge,
            Self::ReverseEngineer,
            Self::TasteCurator,
            Self::TrustCall,
            Self::FirstPrinciples,
            Self::ContextSurgeon,
            Self::DebugDetective,
            Self::ToolChain,
            Self::AgentArchitect,
        ]
    }
}

impl std::fmt::Display for ChallengeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::PromptForge => "prompt-forge",
            Self::ReverseEngineer => "reverse-engineer",
            Self::TasteCurator => "taste-curator",
            Self::TrustCall => "trust-call",
            Self::FirstPrinciples => "first-principles",
            Self::ContextSurgeon => "context-surgeon",
            Self::DebugDetective => "debug-detective",
            Self::ToolChain => "tool-chain",
            Self::AgentArchitect => "agent-architect",
        };
        write!(f, "{}", s)
    }
}

impl std::str::FromStr for ChallengeType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "prompt-forge" => Ok(Self::PromptForge),
            "reverse-engineer" => Ok(Self::ReverseEngineer),
            "taste-curator" => Ok(Self::TasteCurator),
            "trust-call" => Ok(Self::TrustCall),
            "first-principles" => Ok(Self::FirstPrinciples),
            "context-surgeon" => Ok(Self::ContextSurgeon),
            "debug-detective" => Ok(Self::DebugDetective),
            "tool-chain" => Ok(Self::ToolChain),
            "agent-architect" => Ok(Self::AgentArchitect),
            other => Err(format!("unknown challenge type: {}", other)),
        }
    }
}

/// Skill tag used to diversify the feed and report coverage
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum ConceptArea {
    PromptCraft,
    ContextEngineering,
    ToolLandscape,
    ToolUse,
    AgentDesign,
    CodingWithAi,
    CriticalThinking,
    HumanJudgment,
}

impl ConceptArea {
    /// All concept areas, in reporting order
    pub fn all() -> [ConceptArea; 8] {
        [
            Self::PromptCraft,
            Self::ContextEngineering,
            Self::ToolLandscape,
            Self::ToolUse,
            Self::AgentDesign,
            Self::CodingWithAi,
            Self::CriticalThinking,
            Self::HumanJudgment,
        ]
    }
}

impl std::fmt::Display for ConceptArea {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::PromptCraft => "prompt-craft",
            Self::ContextEngineering => "context-engineering",
            Self::ToolLandscape => "tool-landscape",
            Self::ToolUse => "tool-use",
            Self::AgentDesign => "agent-design",
            Self::CodingWithAi => "coding-with-ai",
            Self::CriticalThinking => "critical-thinking",
            Self::HumanJudgment => "human-judgment",
        };
        write!(f, "{}", s)
    }
}

impl std::str::FromStr for ConceptArea {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "prompt-craft" => Ok(Self::PromptCraft),
            "context-engineering" => Ok(Self::ContextEngineering),
            "tool-landscape" => Ok(Self::ToolLandscape),
            "tool-use" => Ok(Self::ToolUse),
            "agent-design" => Ok(Self::AgentDesign),
            "coding-with-ai" => Ok(Self::CodingWithAi),
            "critical-thinking" => Ok(Self::CriticalThinking),
            "human-judgment" => Ok(Self::HumanJudgment),
            other => Err(format!("unknown concept area: {}", other)),
        }
    }
}

/// A single practice challenge definition
///
/// Immutable: created once at catalog load, never mutated, never destroyed
/// during the process lifetime. The payload is opaque to the engine; each
/// challenge type's UI knows how to render it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Challenge {
    pub id: String,
    #[serde(rename = "type")]
    pub challenge_type: ChallengeType,
    pub concept_area: ConceptArea,
    pub title: String,
    pub brief: String,
    pub difficulty: u8,
    pub payload: serde_json::Value,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_challenge_type_wire_format() {
        let json = serde_json::to_string(&ChallengeType::PromptForge).unwrap();
        assert_eq!(json, "\"prompt-forge\"");

        let parsed: ChallengeType = serde_json::from_str("\"agent-architect\"").unwrap();
        assert_eq!(parsed, ChallengeType::AgentArchitect);
    }

    #[test]
    fn test_challenge_type_display_from_str_round_trip() {
        for ty in ChallengeType::all() {
            let parsed: ChallengeType = ty.to_string().parse().unwrap();
            assert_eq!(parsed, ty);
        }
        assert!("unknown".parse::<ChallengeType>().is_err());
    }

    #[test]
    fn test_concept_area_display_from_str_round_trip() {
        for area in ConceptArea::all() {
            let parsed: ConceptArea = area.to_string().parse().unwrap();
            assert_eq!(parsed, area);
        }
        assert!("not-an-area".parse::<ConceptArea>().is_err());
    }

    #[test]
    fn test_uses_assist_flags() {
        assert!(ChallengeType::PromptForge.uses_assist());
        assert!(ChallengeType::ContextSurgeon.uses_assist());
        assert!(!ChallengeType::ReverseEngineer.uses_assist());
        assert!(!ChallengeType::TrustCall.uses_assist());
    }

    #[test]
    fn test_challenge_serialization() {
        let challenge = Challenge {
            id: "re-01".to_string(),
            challenge_type: ChallengeType::ReverseEngineer,
            concept_area: ConceptArea::PromptCraft,
            title: "Read the fingerprint".to_string(),
            brief: "Which prompt produced this output?".to_string(),
            difficulty: 1,
            payload: serde_json::json!({
                "output": "Dear team, ...",
                "options": ["a", "b", "c"],
                "correctIndex": 1
            }),
        };

        let json = serde_json::to_string(&challenge).unwrap();
        assert!(json.contains("\"type\":\"reverse-engineer\""));
        assert!(json.contains("\"conceptArea\":\"prompt-craft\""));
        assert!(json.contains("\"correctIndex\":1"));

        let parsed: Challenge = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.id, "re-01");
        assert_eq!(parsed.challenge_type, ChallengeType::ReverseEngineer);
        assert_eq!(parsed.difficulty, 1);
    }
}

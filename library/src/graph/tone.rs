use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Writing tone used for AI generated text in a flow.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tone {
    Formal,
    Friendly,
    #[default]
    Professional,
    Playful,
}

impl Tone {
    pub const ALL: [Tone; 4] = [Tone::Formal, Tone::Friendly, Tone::Professional, Tone::Playful];

    pub fn as_str(self) -> &'static str {
        match self {
            Tone::Formal => "Formal",
            Tone::Friendly => "Friendly",
            Tone::Professional => "Professional",
            Tone::Playful => "Playful",
        }
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tone {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tone::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown tone '{}'", s))
    }
}

/// Business area a flow belongs to. Sent to the assistant as context.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WorkflowCategory {
    #[default]
    #[serde(rename = "Lettings Residential")]
    LettingsResidential,
    #[serde(rename = "Sales Residential")]
    SalesResidential,
    #[serde(rename = "Valuation")]
    Valuation,
    #[serde(rename = "Lettings Commercials")]
    LettingsCommercial,
    #[serde(rename = "Sales Commercials")]
    SalesCommercial,
    #[serde(rename = "Compliance")]
    Compliance,
    #[serde(rename = "Maintenance")]
    Maintenance,
    #[serde(rename = "Inspection")]
    Inspection,
    #[serde(rename = "Marketing")]
    Marketing,
}

impl WorkflowCategory {
    pub const ALL: [WorkflowCategory; 9] = [
        WorkflowCategory::LettingsResidential,
        WorkflowCategory::SalesResidential,
        WorkflowCategory::Valuation,
        WorkflowCategory::LettingsCommercial,
        WorkflowCategory::SalesCommercial,
        WorkflowCategory::Compliance,
        WorkflowCategory::Maintenance,
        WorkflowCategory::Inspection,
        WorkflowCategory::Marketing,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            WorkflowCategory::LettingsResidential => "Lettings Residential",
            WorkflowCategory::SalesResidential => "Sales Residential",
            WorkflowCategory::Valuation => "Valuation",
            WorkflowCategory::LettingsCommercial => "Lettings Commercials",
            WorkflowCategory::SalesCommercial => "Sales Commercials",
            WorkflowCategory::Compliance => "Compliance",
            WorkflowCategory::Maintenance => "Maintenance",
            WorkflowCategory::Inspection => "Inspection",
            WorkflowCategory::Marketing => "Marketing",
        }
    }
}

impl fmt::Display for WorkflowCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

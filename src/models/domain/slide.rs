use std::fmt;

use serde::{Deserialize, Serialize};

/// One slide as produced by the deck parser.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Slide {
    pub slide_no: u32,
    pub raw_text: String,
}

/// Keyword-derived slide category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlideCategory {
    Process,
    Comparison,
    Hierarchy,
    Definition,
    List,
    Unknown,
}

impl SlideCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            SlideCategory::Process => "process",
            SlideCategory::Comparison => "comparison",
            SlideCategory::Hierarchy => "hierarchy",
            SlideCategory::Definition => "definition",
            SlideCategory::List => "list",
            SlideCategory::Unknown => "unknown",
        }
    }

    /// Diagram shape the frontend renders for this category.
    pub fn diagram_type(&self) -> DiagramType {
        match self {
            SlideCategory::Process => DiagramType::Flowchart,
            SlideCategory::Comparison => DiagramType::Split,
            SlideCategory::Hierarchy => DiagramType::Tree,
            SlideCategory::Definition => DiagramType::Concept,
            SlideCategory::List => DiagramType::Bullets,
            SlideCategory::Unknown => DiagramType::Unknown,
        }
    }
}

impl fmt::Display for SlideCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagramType {
    Flowchart,
    Split,
    Tree,
    Concept,
    Bullets,
    Unknown,
}

/// Slide enriched with its category and a title/points breakdown.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct StructuredSlide {
    pub slide_no: u32,
    pub raw_text: String,
    pub category: SlideCategory,
    pub title: String,
    pub points: Vec<String>,
    pub diagram_type: DiagramType,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn categories_map_to_diagram_types() {
        assert_eq!(SlideCategory::Process.diagram_type(), DiagramType::Flowchart);
        assert_eq!(SlideCategory::Comparison.diagram_type(), DiagramType::Split);
        assert_eq!(SlideCategory::Hierarchy.diagram_type(), DiagramType::Tree);
        assert_eq!(SlideCategory::Definition.diagram_type(), DiagramType::Concept);
        assert_eq!(SlideCategory::List.diagram_type(), DiagramType::Bullets);
        assert_eq!(SlideCategory::Unknown.diagram_type(), DiagramType::Unknown);
    }

    #[test]
    fn category_serializes_as_label() {
        let json = serde_json::to_string(&SlideCategory::Hierarchy).expect("should serialize");
        assert_eq!(json, "\"hierarchy\"");
        assert_eq!(SlideCategory::Hierarchy.to_string(), "hierarchy");
    }
}

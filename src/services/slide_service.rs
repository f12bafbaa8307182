use crate::models::domain::{build_context, Slide, SlideCategory, StructuredSlide};

const PROCESS_KEYWORDS: [&str; 6] = ["step", "steps", "process", "workflow", "lifecycle", "phases"];
const COMPARISON_KEYWORDS: [&str; 3] = ["vs", "versus", "compare"];
const HIERARCHY_KEYWORDS: [&str; 3] = ["types", "kinds", "categories"];
const BULLET_MARKERS: [char; 4] = ['-', '•', '*', ' '];

/// Keyword classification on substrings, first match wins.
pub fn classify(raw_text: &str) -> SlideCategory {
    let lower = raw_text.to_lowercase();

    if PROCESS_KEYWORDS.iter().any(|k| lower.contains(k)) {
        return SlideCategory::Process;
    }
    if COMPARISON_KEYWORDS.iter().any(|k| lower.contains(k)) {
        return SlideCategory::Comparison;
    }
    if HIERARCHY_KEYWORDS.iter().any(|k| lower.contains(k)) {
        return SlideCategory::Hierarchy;
    }
    if lower.starts_with("what is") || lower.contains("definition") {
        return SlideCategory::Definition;
    }
    if raw_text.contains('\n') {
        return SlideCategory::List;
    }
    SlideCategory::Unknown
}

/// Classifies a slide and splits it into a title and bullet-stripped points.
pub fn structure_slide(slide: Slide) -> StructuredSlide {
    let category = classify(&slide.raw_text);
    let ctx = build_context(&slide.raw_text, Some(category.as_str()));

    let points = ctx
        .points()
        .iter()
        .map(|p| p.trim_start_matches(BULLET_MARKERS).trim().to_string())
        .filter(|p| !p.is_empty())
        .collect();

    StructuredSlide {
        slide_no: slide.slide_no,
        title: ctx.title().to_string(),
        points,
        category,
        diagram_type: category.diagram_type(),
        raw_text: slide.raw_text,
    }
}

pub fn structure_slides(slides: Vec<Slide>) -> Vec<StructuredSlide> {
    slides.into_iter().map(structure_slide).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::domain::DiagramType;

    #[test]
    fn classify_follows_rule_order() {
        assert_eq!(classify("Steps vs phases"), SlideCategory::Process);
        assert_eq!(classify("Python versus Rust"), SlideCategory::Comparison);
        assert_eq!(classify("Types of rock"), SlideCategory::Hierarchy);
        assert_eq!(classify("What is a noun?"), SlideCategory::Definition);
        assert_eq!(classify("Noun\nA definition"), SlideCategory::Definition);
        assert_eq!(classify("Fruits\nApple\nPear"), SlideCategory::List);
        assert_eq!(classify("Hello world"), SlideCategory::Unknown);
    }

    #[test]
    fn definition_prefix_must_start_the_slide() {
        assert_eq!(classify("So, what is a noun"), SlideCategory::Unknown);
    }

    #[test]
    fn structure_strips_bullets_and_maps_diagram() {
        let structured = structure_slide(Slide {
            slide_no: 3,
            raw_text: "Baking process\n- mix\n• bake\n* cool\n  -  \n".to_string(),
        });

        assert_eq!(structured.slide_no, 3);
        assert_eq!(structured.category, SlideCategory::Process);
        assert_eq!(structured.diagram_type, DiagramType::Flowchart);
        assert_eq!(structured.title, "Baking process");
        assert_eq!(structured.points, vec!["mix", "bake", "cool"]);
    }

    #[test]
    fn structure_preserves_order() {
        let slides = vec![
            Slide { slide_no: 1, raw_text: "Intro".to_string() },
            Slide { slide_no: 2, raw_text: "Types of cells\nPlant\nAnimal".to_string() },
        ];

        let structured = structure_slides(slides);
        assert_eq!(structured[0].category, SlideCategory::Unknown);
        assert!(structured[0].points.is_empty());
        assert_eq!(structured[1].diagram_type, DiagramType::Tree);
        assert_eq!(structured[1].points, vec!["Plant", "Animal"]);
    }
}

use serde::Serialize;

pub const UNKNOWN_CATEGORY: &str = "unknown";

/// Normalized, read-only view of one slide (or a whole deck) used to build prompts.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SlideContext {
    raw_text: String,
    lines: Vec<String>,
    title: String,
    points: Vec<String>,
    category: String,
}

impl SlideContext {
    pub fn raw_text(&self) -> &str {
        &self.raw_text
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn points(&self) -> &[String] {
        &self.points
    }

    pub fn category(&self) -> &str {
        &self.category
    }
}

/// Splits `raw_text` into trimmed non-blank lines; the first line becomes the
/// title and the rest the points. A missing or empty category becomes `"unknown"`.
pub fn build_context(raw_text: &str, category: Option<&str>) -> SlideContext {
    let lines: Vec<String> = raw_text
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();

    let title = lines.first().cloned().unwrap_or_default();
    let points = lines.iter().skip(1).cloned().collect();

    let category = match category {
        Some(c) if !c.is_empty() => c.to_string(),
        _ => UNKNOWN_CATEGORY.to_string(),
    };

    SlideContext {
        raw_text: raw_text.to_string(),
        lines,
        title,
        points,
        category,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lines_are_trimmed_and_blank_lines_dropped() {
        let ctx = build_context("  Photosynthesis \n\n   \n- light\r\n  - water  ", Some("list"));

        assert_eq!(ctx.lines(), ["Photosynthesis", "- light", "- water"]);
        assert_eq!(ctx.title(), "Photosynthesis");
        assert_eq!(ctx.points(), ["- light", "- water"]);
        assert_eq!(ctx.category(), "list");
        assert_eq!(ctx.raw_text(), "  Photosynthesis \n\n   \n- light\r\n  - water  ");
    }

    #[test]
    fn empty_text_yields_empty_context() {
        let ctx = build_context("", None);

        assert!(ctx.lines().is_empty());
        assert_eq!(ctx.title(), "");
        assert!(ctx.points().is_empty());
        assert_eq!(ctx.category(), UNKNOWN_CATEGORY);
    }

    #[test]
    fn single_line_has_title_and_no_points() {
        let ctx = build_context("Only a title", Some(""));

        assert_eq!(ctx.title(), "Only a title");
        assert!(ctx.points().is_empty());
        assert_eq!(ctx.category(), UNKNOWN_CATEGORY);
    }

    #[test]
    fn title_and_points_partition_lines() {
        let samples = [
            "a\nb\nc",
            "\n\n x \n",
            "first\n\n\nsecond\n third \n",
            "   ",
            "one line",
        ];

        for sample in samples {
            let ctx = build_context(sample, None);
            let mut rebuilt: Vec<String> = Vec::new();
            if !ctx.title().is_empty() {
                rebuilt.push(ctx.title().to_string());
            }
            rebuilt.extend(ctx.points().iter().cloned());
            assert_eq!(rebuilt, ctx.lines(), "partition broken for {sample:?}");
        }
    }

    #[test]
    fn build_context_is_deterministic() {
        let text = "Cell Division\nMitosis\nMeiosis";
        assert_eq!(build_context(text, Some("process")), build_context(text, Some("process")));
    }
}

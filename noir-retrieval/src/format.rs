//! Few-shot block formatting.
//!
//! Blocks carry the topic, difficulty, and premise only. The solution is
//! deliberately withheld: leaking a matched example's twist into the
//! generation prompt would bias the new story toward it.

use noir_core::story::StoryExample;

/// Render the selected records as labeled example blocks.
///
/// Empty selection renders the empty string.
pub fn render_blocks(selected: &[&StoryExample]) -> String {
    let mut out = String::new();
    for (i, example) in selected.iter().enumerate() {
        if i > 0 {
            out.push_str("\n\n");
        }
        out.push_str(&format!(
            "Example {n}:\nTopic: {topic}\nDifficulty: {difficulty}\nPremise: {premise}",
            n = i + 1,
            topic = example.topic,
            difficulty = example.difficulty,
            premise = example.premise,
        ));
    }
    out
}

/// Count the example blocks in rendered output (test helper for callers).
pub fn count_blocks(rendered: &str) -> usize {
    if rendered.is_empty() {
        return 0;
    }
    rendered
        .lines()
        .filter(|l| l.starts_with("Example ") && l.ends_with(':'))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn example(topic: &str) -> StoryExample {
        StoryExample {
            topic: topic.to_string(),
            difficulty: "Detective".to_string(),
            premise: format!("{topic} premise"),
            solution: "NEVER-SHOWN".to_string(),
        }
    }

    #[test]
    fn empty_selection_renders_empty_string() {
        assert_eq!(render_blocks(&[]), "");
        assert_eq!(count_blocks(""), 0);
    }

    #[test]
    fn blocks_are_ordinal_and_labeled() {
        let a = example("Cyberpunk");
        let b = example("Medieval");
        let rendered = render_blocks(&[&a, &b]);

        assert!(rendered.starts_with("Example 1:\nTopic: Cyberpunk"));
        assert!(rendered.contains("Example 2:\nTopic: Medieval"));
        assert!(rendered.contains("Difficulty: Detective"));
        assert!(rendered.contains("Premise: Cyberpunk premise"));
        assert_eq!(count_blocks(&rendered), 2);
    }

    #[test]
    fn solutions_never_appear() {
        let a = example("Cyberpunk");
        let rendered = render_blocks(&[&a]);
        assert!(!rendered.contains("NEVER-SHOWN"));
        assert!(!rendered.to_lowercase().contains("solution"));
    }
}

//! Line joining and paragraph grouping.
//!
//! Extractors frequently split one visual word into several fragments, or
//! drop the space glyph between two words. [`join_line`] infers word breaks
//! from the horizontal gap between adjacent fragments relative to the line's
//! average character width. [`group_paragraphs`] then breaks a column's
//! lines into paragraphs wherever the vertical gap between consecutive lines
//! is large relative to the median line height.

use crate::layout::fragment::PositionedItem;
use crate::layout::line_grouper::Line;
use crate::pipeline::config::ParagraphConfig;
use crate::utils::median;

/// Join a line's items into one string, inserting a single space wherever
/// the gap to the next item exceeds `avg_char_width * word_gap_factor`.
///
/// # Examples
///
/// ```
/// use pdf_reflow::layout::{paragraph::join_line, PositionedItem, RawFragment};
///
/// let items = vec![
///     PositionedItem::from_raw(&RawFragment::new("Hello", 0.0, 0.0, 40.0, 12.0), 10.0),
///     PositionedItem::from_raw(&RawFragment::new("World", 70.0, 0.0, 40.0, 12.0), 10.0),
///     PositionedItem::from_raw(&RawFragment::new("!", 110.0, 0.0, 4.0, 12.0), 10.0),
/// ];
/// assert_eq!(join_line(&items, 0.55), "Hello World!");
/// ```
pub fn join_line(items: &[PositionedItem], word_gap_factor: f64) -> String {
    if items.is_empty() {
        return String::new();
    }

    let avg_char = items
        .iter()
        .map(|i| i.width / i.char_count().max(1) as f64)
        .sum::<f64>()
        / items.len() as f64;
    let gap_threshold = avg_char * word_gap_factor;

    let mut out = String::new();
    for (idx, cur) in items.iter().enumerate() {
        out.push_str(&cur.text);
        if let Some(next) = items.get(idx + 1) {
            let gap = next.x - cur.right();
            if gap > gap_threshold {
                out.push(' ');
            }
        }
    }
    out
}

/// Paragraph break threshold for a run of lines:
/// `max(min_gap, median_line_height * gap_factor)`.
pub fn paragraph_gap(lines: &[Line], config: &ParagraphConfig) -> f64 {
    let heights: Vec<f64> = lines.iter().map(Line::height).collect();
    let median_h = median(&heights)
        .filter(|m| *m != 0.0 && !m.is_nan())
        .unwrap_or(config.default_line_height);
    config.min_gap.max(median_h * config.gap_factor)
}

/// Group consecutive lines into paragraphs.
///
/// Lines must already be in top-to-bottom order. Each paragraph is the
/// joined text of its lines separated by `\n`. A column with no lines has
/// no paragraphs.
pub fn group_paragraphs(
    lines: &[Line],
    config: &ParagraphConfig,
    word_gap_factor: f64,
) -> Vec<String> {
    if lines.is_empty() {
        return Vec::new();
    }

    let para_gap = paragraph_gap(lines, config);

    let mut paragraphs = Vec::new();
    let mut current: Vec<String> = Vec::new();

    for (idx, line) in lines.iter().enumerate() {
        current.push(line.text(word_gap_factor));

        let Some(next) = lines.get(idx + 1) else {
            break;
        };

        // y grows upward, so the gap to the line below is positive
        let vgap = line.baseline() - next.baseline();
        if vgap > para_gap {
            paragraphs.push(current.join("\n"));
            current.clear();
        }
    }

    if !current.is_empty() {
        paragraphs.push(current.join("\n"));
    }

    log::trace!(
        "Paragraphs: lines={}, para_gap={:.2}, paragraphs={}",
        lines.len(),
        para_gap,
        paragraphs.len()
    );

    paragraphs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::fragment::RawFragment;

    fn item(text: &str, x: f64, y: f64, width: f64) -> PositionedItem {
        PositionedItem::from_raw(&RawFragment::new(text, x, y, width, 12.0), 10.0)
    }

    fn line_at(text: &str, y: f64) -> Line {
        Line {
            anchor_y: y,
            items: vec![item(text, 0.0, y, text.len() as f64 * 6.0)],
        }
    }

    #[test]
    fn test_join_empty() {
        assert_eq!(join_line(&[], 0.55), "");
    }

    #[test]
    fn test_join_inserts_space_on_gap() {
        // avg char 8 => threshold 4.4; gap 30
        let items = vec![item("Hello", 0.0, 0.0, 40.0), item("World", 70.0, 0.0, 40.0)];
        assert_eq!(join_line(&items, 0.55), "Hello World");
    }

    #[test]
    fn test_join_split_word_without_space() {
        // Gap of 1pt is below the 4.4 threshold
        let items = vec![item("Hel", 0.0, 0.0, 24.0), item("lo", 25.0, 0.0, 16.0)];
        assert_eq!(join_line(&items, 0.55), "Hello");
    }

    #[test]
    fn test_join_overlapping_fragments() {
        let items = vec![item("ab", 0.0, 0.0, 16.0), item("cd", 10.0, 0.0, 16.0)];
        assert_eq!(join_line(&items, 0.55), "abcd");
    }

    #[test]
    fn test_join_astral_runs_use_utf16_width() {
        // Four code units per 16pt run => avg char 4, threshold 2.2; gap 3
        let items = vec![
            item("\u{1D400}\u{1D401}", 0.0, 100.0, 16.0),
            item("\u{1D402}\u{1D403}", 19.0, 100.0, 16.0),
        ];
        assert_eq!(join_line(&items, 0.55), "\u{1D400}\u{1D401} \u{1D402}\u{1D403}");
    }

    #[test]
    fn test_join_single_space_only() {
        let items = vec![item("a", 0.0, 0.0, 8.0), item("b", 500.0, 0.0, 8.0)];
        assert_eq!(join_line(&items, 0.55), "a b");
    }

    #[test]
    fn test_group_paragraphs_empty() {
        assert!(group_paragraphs(&[], &ParagraphConfig::default(), 0.55).is_empty());
    }

    #[test]
    fn test_group_paragraphs_single_paragraph() {
        // Heights 12 => para gap 10.2; spacing 10 keeps one paragraph
        let lines = vec![line_at("one", 700.0), line_at("two", 690.0), line_at("three", 680.0)];
        let paras = group_paragraphs(&lines, &ParagraphConfig::default(), 0.55);
        assert_eq!(paras, vec!["one\ntwo\nthree".to_string()]);
    }

    #[test]
    fn test_group_paragraphs_breaks_on_gap() {
        let lines = vec![
            line_at("Experience", 700.0),
            line_at("Engineer at Acme", 690.0),
            line_at("Education", 660.0),
            line_at("BSc Physics", 650.0),
        ];
        let paras = group_paragraphs(&lines, &ParagraphConfig::default(), 0.55);
        assert_eq!(paras.len(), 2);
        assert_eq!(paras[0], "Experience\nEngineer at Acme");
        assert_eq!(paras[1], "Education\nBSc Physics");
    }

    #[test]
    fn test_paragraph_gap_uses_min_gap() {
        let tiny: Vec<Line> = (0..3)
            .map(|i| Line {
                anchor_y: i as f64,
                items: vec![PositionedItem::from_raw(
                    &RawFragment::new("x", 0.0, i as f64, 1.0, 1.0),
                    10.0,
                )],
            })
            .collect();
        assert_eq!(paragraph_gap(&tiny, &ParagraphConfig::default()), 2.0);
    }

    #[test]
    fn test_paragraph_gap_zero_heights_fall_back() {
        let lines: Vec<Line> = (0..2)
            .map(|i| Line {
                anchor_y: i as f64,
                items: vec![PositionedItem::from_raw(
                    &RawFragment::new("x", 0.0, i as f64, 1.0, 12.0).with_height(0.0),
                    10.0,
                )],
            })
            .collect();
        let gap = paragraph_gap(&lines, &ParagraphConfig::default());
        assert!((gap - 10.2).abs() < 1e-9);
    }

    #[test]
    fn test_paragraph_lines_split_back() {
        let lines = vec![line_at("alpha", 700.0), line_at("beta", 690.0)];
        let paras = group_paragraphs(&lines, &ParagraphConfig::default(), 0.55);
        let split: Vec<&str> = paras[0].split('\n').collect();
        assert_eq!(split, vec!["alpha", "beta"]);
    }
}

//! Integration tests for layout reconstruction.
//!
//! These tests drive the complete pipeline with synthetic fragment data
//! simulating realistic resume and document page structures.

use pdf_reflow::converters::render_pages;
use pdf_reflow::layout::{
    assign_lines_to_columns, detect_columns, group_lines, join_line, normalize_fragments,
    PositionedItem, RawFragment,
};
use pdf_reflow::pipeline::{
    ColumnDetectionConfig, LayoutConfig, LayoutPipeline, LineGroupingConfig,
};

// ============================================================================
// Helper Functions for Creating Mock Data
// ============================================================================

/// Fragment whose width is `chars * size * 0.5`.
fn mock_fragment(text: &str, x: f64, y: f64, size: f64) -> RawFragment {
    let width = text.chars().count() as f64 * size * 0.5;
    RawFragment::new(text, x, y, width, size)
}

/// One fragment per word, separated by a visible gap.
fn mock_line(words: &[&str], x: f64, y: f64, size: f64) -> Vec<RawFragment> {
    let mut cursor = x;
    words
        .iter()
        .map(|w| {
            let frag = mock_fragment(w, cursor, y, size);
            cursor += frag.width + size * 0.5;
            frag
        })
        .collect()
}

/// Two columns: left lines centred near x=100, right lines near x=400.
///
/// Right column baselines sit 10pt below the left ones so the two columns
/// never share a baseline.
fn create_two_column_page(lines_per_column: usize) -> Vec<RawFragment> {
    let mut fragments = Vec::new();
    for i in 0..lines_per_column {
        let y = 700.0 - i as f64 * 20.0;
        let jitter = (i % 3) as f64 * 2.0;
        // 16 chars at 10pt => 80pt wide, midpoint 100 + jitter
        fragments.push(RawFragment::new(
            format!("Left line {:>6}", i),
            60.0 + jitter,
            y,
            80.0,
            10.0,
        ));
        fragments.push(RawFragment::new(
            format!("Right line {:>5}", i),
            360.0 - jitter,
            y - 10.0,
            80.0,
            10.0,
        ));
    }
    fragments
}

// ============================================================================
// Normalization + Line Grouping
// ============================================================================

#[test]
fn test_split_word_fragments_rejoin() {
    // An extractor split "Experience" into three runs with no gap
    let fragments = vec![
        RawFragment::new("Exp", 72.0, 700.0, 18.0, 12.0),
        RawFragment::new("eri", 90.0, 700.0, 18.0, 12.0),
        RawFragment::new("ence", 108.0, 700.0, 24.0, 12.0),
    ];
    let page = LayoutPipeline::new().process_page(1, &fragments);
    assert_eq!(page.columns[0].paragraphs, vec!["Experience".to_string()]);
}

#[test]
fn test_hello_world_spacing() {
    // avg char = 8 => threshold 4.4; the 30pt gap gets one space
    let items = normalize_fragments(
        &[
            RawFragment::new("Hello", 0.0, 100.0, 40.0, 12.0),
            RawFragment::new("World", 70.0, 100.0, 40.0, 12.0),
        ],
        10.0,
    );
    let lines = group_lines(items, &LineGroupingConfig::default());
    assert_eq!(lines.len(), 1);
    assert_eq!(join_line(&lines[0].items, 0.55), "Hello World");
}

#[test]
fn test_superscript_stays_on_line() {
    // A footnote marker raised 3pt stays within the 5.4pt tolerance
    let fragments = vec![
        mock_fragment("Published", 72.0, 700.0, 12.0),
        mock_fragment("1", 126.0, 703.0, 7.0),
        mock_fragment("Next line", 72.0, 686.0, 12.0),
    ];
    let items = normalize_fragments(&fragments, 10.0);
    let lines = group_lines(items, &LineGroupingConfig::default());
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0].len(), 2);
}

#[test]
fn test_reading_order_independent_of_input_order() {
    let mut fragments = Vec::new();
    fragments.extend(mock_line(&["Jane", "Doe"], 72.0, 740.0, 14.0));
    fragments.extend(mock_line(&["Senior", "Engineer"], 72.0, 728.0, 11.0));
    let mut reversed = fragments.clone();
    reversed.reverse();

    let pipeline = LayoutPipeline::new();
    assert_eq!(
        pipeline.process_page(1, &fragments),
        pipeline.process_page(1, &reversed)
    );
}

// ============================================================================
// Column Detection
// ============================================================================

#[test]
fn test_two_column_detection_and_assignment() {
    let fragments = create_two_column_page(5);
    let items = normalize_fragments(&fragments, 10.0);
    let lines = group_lines(items, &LineGroupingConfig::default());
    assert_eq!(lines.len(), 10);

    let columns = detect_columns(&lines, &ColumnDetectionConfig::default());
    assert_eq!(columns.len(), 2);
    assert!(columns[0].x_min < columns[1].x_min);
    assert!(columns[0].x_max < 200.0);
    assert!(columns[1].x_min > 300.0);

    let assigned = assign_lines_to_columns(lines, &columns);
    for line in &assigned[0] {
        assert!(line.items.iter().all(|i| i.text.starts_with("Left")));
    }
    for line in &assigned[1] {
        assert!(line.items.iter().all(|i| i.text.starts_with("Right")));
    }
    assert_eq!(assigned[0].len(), 5);
    assert_eq!(assigned[1].len(), 5);
}

#[test]
fn test_two_column_page_output() {
    let fragments = create_two_column_page(4);
    let text = LayoutPipeline::new().extract_text(&[fragments]);

    assert!(text.starts_with("--- Page 1 ---\n-- Column 1 --\nLeft line"));
    let col2 = text.find("-- Column 2 --").unwrap();
    let left_part = &text[..col2];
    let right_part = &text[col2..];
    assert_eq!(left_part.matches("Left line").count(), 4);
    assert_eq!(left_part.matches("Right line").count(), 0);
    assert_eq!(right_part.matches("Right line").count(), 4);
    assert_eq!(right_part.matches("Left line").count(), 0);
}

#[test]
fn test_stray_indented_line_is_not_a_column() {
    let mut fragments = Vec::new();
    for i in 0..8 {
        fragments.push(RawFragment::new(
            format!("Body text line number {}", i),
            72.0,
            700.0 - i as f64 * 14.0,
            400.0,
            11.0,
        ));
    }
    // One short, deeply indented line
    fragments.push(RawFragment::new("- indented note", 380.0, 580.0, 80.0, 11.0));

    let pipeline = LayoutPipeline::new();
    let (page, stats) = pipeline.analyze_page(1, &fragments);
    assert_eq!(stats.columns, 1);
    assert_eq!(page.columns.len(), 1);

    let text = render_pages(&[page]);
    assert!(!text.contains("-- Column"));
    assert!(text.contains("- indented note"));
}

#[test]
fn test_identical_x_lines_single_column() {
    let fragments: Vec<RawFragment> = (0..6)
        .map(|i| {
            RawFragment::new(format!("item {}", i), 100.0, 500.0 - i as f64 * 12.0, 0.0, 10.0)
        })
        .collect();
    let (page, stats) = LayoutPipeline::new().analyze_page(1, &fragments);
    assert_eq!(stats.columns, 1);
    assert_eq!(page.columns.len(), 1);
}

// ============================================================================
// Paragraphs + Rendering
// ============================================================================

#[test]
fn test_resume_sections_become_paragraphs() {
    let mut fragments = Vec::new();
    fragments.extend(mock_line(&["EXPERIENCE"], 72.0, 700.0, 12.0));
    fragments.extend(mock_line(&["Engineer,", "Acme", "Corp"], 72.0, 688.0, 10.0));
    fragments.extend(mock_line(&["Built", "the", "billing", "system"], 72.0, 680.0, 10.0));
    fragments.extend(mock_line(&["EDUCATION"], 72.0, 650.0, 12.0));
    fragments.extend(mock_line(&["BSc", "Physics"], 72.0, 638.0, 10.0));

    let page = LayoutPipeline::new().process_page(1, &fragments);
    assert_eq!(page.columns.len(), 1);
    let paras = &page.columns[0].paragraphs;
    // Median line height 10 => paragraph gap 8.5; the 8pt step stays joined
    assert_eq!(
        paras,
        &vec![
            "EXPERIENCE".to_string(),
            "Engineer, Acme Corp\nBuilt the billing system".to_string(),
            "EDUCATION".to_string(),
            "BSc Physics".to_string(),
        ]
    );
}

#[test]
fn test_empty_page_in_document() {
    let pages = vec![
        vec![mock_fragment("Page one", 72.0, 700.0, 12.0)],
        vec![mock_fragment("Page two", 72.0, 700.0, 12.0)],
        vec![],
    ];
    let text = LayoutPipeline::new().extract_text(&pages);
    assert!(text.contains("--- Page 3 ---"));
    assert!(text.ends_with("--- Page 3 ---\n"));
    assert_eq!(
        text,
        "--- Page 1 ---\nPage one\n\n--- Page 2 ---\nPage two\n\n--- Page 3 ---\n"
    );
}

#[test]
fn test_whitespace_only_page_is_empty() {
    let pages = vec![vec![mock_fragment("   ", 72.0, 700.0, 12.0)]];
    assert_eq!(LayoutPipeline::new().extract_text(&pages), "--- Page 1 ---\n");
}

#[test]
fn test_degenerate_transforms_do_not_panic() {
    let mut frag = mock_fragment("odd", 10.0, 10.0, 12.0);
    frag.transform = [0.0; 6];
    let mut nan = mock_fragment("nan", 50.0, 10.0, 12.0);
    nan.transform[1] = f64::NAN;
    let text = LayoutPipeline::new().extract_text(&[vec![frag, nan]]);
    assert!(text.starts_with("--- Page 1 ---\n"));
    assert!(text.contains("odd"));
}

#[test]
fn test_tuned_word_gap() {
    let fragments = vec![
        RawFragment::new("ab", 0.0, 100.0, 10.0, 10.0),
        RawFragment::new("cd", 14.0, 100.0, 10.0, 10.0),
    ];
    // avg char 5 and a 4pt gap: 2.75 threshold inserts a space, 5.0 does not
    let default = LayoutPipeline::new().process_page(1, &fragments);
    assert_eq!(default.columns[0].paragraphs[0], "ab cd");

    let tight = LayoutPipeline::with_config(LayoutConfig::new().with_word_gap_factor(1.0))
        .process_page(1, &fragments);
    assert_eq!(tight.columns[0].paragraphs[0], "abcd");
}

#[test]
fn test_positioned_item_is_public_value_type() {
    let item = PositionedItem::from_raw(&mock_fragment("x", 1.0, 2.0, 12.0), 10.0);
    let copy = item.clone();
    assert_eq!(item, copy);
}

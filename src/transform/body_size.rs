//! Body-size baseline estimation.

use crate::model::PageText;

/// Fewer sized spans than this and the page falls back to the default size.
pub const MIN_SIZE_SAMPLES: usize = 5;

/// Median of a list of values; the mean of the middle pair for even counts.
pub fn median(mut values: Vec<f32>) -> Option<f32> {
    if values.is_empty() {
        return None;
    }
    values.sort_by(f32::total_cmp);
    let mid = values.len() / 2;
    if values.len() % 2 == 0 {
        Some((values[mid - 1] + values[mid]) / 2.0)
    } else {
        Some(values[mid])
    }
}

/// Median size over the non-blank, sized spans of a page.
pub fn estimate_body_size(page: &PageText, default_size: f32) -> f32 {
    let sizes: Vec<f32> = page
        .spans()
        .filter(|s| s.is_visible())
        .filter_map(|s| s.known_size())
        .collect();
    if sizes.len() < MIN_SIZE_SAMPLES {
        return default_size;
    }
    median(sizes).unwrap_or(default_size)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Block, Line, Span};

    #[test]
    fn test_median() {
        assert_eq!(median(vec![]), None);
        assert_eq!(median(vec![3.0, 1.0, 2.0]), Some(2.0));
        assert_eq!(median(vec![4.0, 1.0, 2.0, 3.0]), Some(2.5));
    }

    #[test]
    fn test_estimate_body_size() {
        let spans = vec![
            Span::new("a", 10.0),
            Span::new("b", 10.0),
            Span::new("c", 10.0),
            Span::new("d", 18.0),
            Span::new("e", 10.0),
            Span::new("   ", 40.0),
            Span::new("f", 0.0),
        ];
        let page = PageText::from_blocks(vec![Block::from_lines(vec![Line::new(spans)])]);
        assert_eq!(estimate_body_size(&page, 11.0), 10.0);
    }

    #[test]
    fn test_too_few_samples() {
        let page = PageText::from_blocks(vec![Block::from_text_lines(&["x", "y"], 9.0)]);
        assert_eq!(estimate_body_size(&page, 11.0), 11.0);
        assert_eq!(estimate_body_size(&PageText::default(), 12.0), 12.0);
    }
}

/// Category label drawn under the indicator.
///
/// The label names the bucket the displayed value falls into. Buckets are
/// either equal-width slices of the `[min, max]` range or, when an explicit
/// breakpoint table with one entry per category is configured, the ranges
/// ending at each breakpoint.
use super::text::TextStyle;
use crate::error::HealthBarError;
use crate::widget::Invalidation;

/// Categories used until the host configures its own.
pub const DEFAULT_CATEGORIES: &[&str] = &[
    "Poor",
    "Below Average",
    "Average",
    "Above Average",
    "Good",
    "Excellent",
];

/// Separator used when categories or breakpoints arrive as one string.
pub const DEFAULT_SEPARATOR: &str = ",";

#[derive(Debug, Clone, PartialEq)]
pub struct LabelElement {
    pub(crate) style: TextStyle,
    categories: Vec<String>,
    breakpoints: Option<Vec<f64>>,
    resolved: Option<String>,
}

impl LabelElement {
    pub fn new() -> Self {
        Self {
            style: TextStyle::new(true),
            categories: DEFAULT_CATEGORIES.iter().map(|s| s.to_string()).collect(),
            breakpoints: None,
            resolved: None,
        }
    }

    pub fn style(&self) -> &TextStyle {
        &self.style
    }

    pub fn style_mut(&mut self) -> &mut TextStyle {
        &mut self.style
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn breakpoints(&self) -> Option<&[f64]> {
        self.breakpoints.as_deref()
    }

    /// Category picked by the most recent draw.
    pub fn resolved(&self) -> Option<&str> {
        self.resolved.as_deref()
    }

    pub(crate) fn set_resolved(&mut self, resolved: Option<String>) {
        self.resolved = resolved;
    }

    pub fn set_categories(&mut self, categories: Vec<String>) -> Invalidation {
        let changed = self.categories != categories;
        self.categories = categories;
        Invalidation::when(changed, Invalidation::NeedsRelayout)
    }

    /// Split `text` on `separator`. Trailing empty pieces are dropped.
    pub fn set_categories_delimited(&mut self, text: &str, separator: &str) -> Invalidation {
        self.set_categories(split_list(text, separator))
    }

    pub fn set_breakpoints(&mut self, breakpoints: Option<Vec<f64>>) -> Invalidation {
        let changed = self.breakpoints != breakpoints;
        self.breakpoints = breakpoints;
        Invalidation::when(changed, Invalidation::NeedsRepaint)
    }

    /// Parse `text` as `separator`-delimited numbers.
    ///
    /// A list with an unparseable entry is rejected whole: the error is
    /// logged and the previous table kept.
    pub fn set_breakpoints_delimited(&mut self, text: &str, separator: &str) -> Invalidation {
        match parse_number_list(text, separator) {
            Ok(values) => self.set_breakpoints(Some(values)),
            Err(e) => {
                tracing::warn!("Rejected label range {:?}: {}", text, e);
                Invalidation::NoOp
            }
        }
    }

    /// Category for `value` within `[min, max]`. See [`resolve_category`].
    pub fn category_for(&self, value: f64, min: f64, max: f64) -> Option<&str> {
        resolve_category(&self.categories, self.breakpoints.as_deref(), value, min, max)
    }
}

impl Default for LabelElement {
    fn default() -> Self {
        Self::new()
    }
}

/// Pick the category for `value`.
///
/// Without a breakpoint table whose length matches `categories`, the range
/// is cut into equal-width buckets; an inverted range (`min > max`) reads
/// the categories in reverse. With a matching table, the first category
/// whose breakpoint is `>= value` wins, and values above every breakpoint
/// get the last category.
///
/// Returns `None` only for an empty category list.
pub fn resolve_category<'a>(
    categories: &'a [String],
    breakpoints: Option<&[f64]>,
    value: f64,
    min: f64,
    max: f64,
) -> Option<&'a str> {
    let count = categories.len();
    if count == 0 {
        return None;
    }

    if let Some(bounds) = breakpoints.filter(|b| b.len() == count) {
        let index = bounds
            .iter()
            .position(|&upper| value <= upper)
            .unwrap_or(count - 1);
        return Some(categories[index].as_str());
    }

    let fraction = (max - min).abs() / count as f64;
    let raw = (value - min).abs() / fraction;
    let bucket = if raw.is_finite() {
        (raw.floor() as usize).min(count - 1)
    } else {
        0
    };

    let index = if min > max { count - 1 - bucket } else { bucket };
    Some(categories[index].as_str())
}

/// Split on `separator`, dropping trailing empty pieces.
pub fn split_list(text: &str, separator: &str) -> Vec<String> {
    let mut parts: Vec<String> = if separator.is_empty() {
        vec![text.to_string()]
    } else {
        text.split(separator).map(str::to_string).collect()
    };
    while parts.last().is_some_and(|p| p.is_empty()) {
        parts.pop();
    }
    parts
}

/// Parse a `separator`-delimited list of numbers. Whitespace around each
/// entry is ignored.
pub fn parse_number_list(text: &str, separator: &str) -> Result<Vec<f64>, HealthBarError> {
    split_list(text, separator)
        .iter()
        .enumerate()
        .map(|(index, part)| {
            part.trim()
                .parse::<f64>()
                .map_err(|_| HealthBarError::InvalidRangeValue {
                    index,
                    value: part.clone(),
                })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cats(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_equal_width_buckets() {
        let c = cats(&["Bad", "Good", "Better", "Best"]);
        assert_eq!(resolve_category(&c, None, -20.0, -20.0, 34.0), Some("Bad"));
        assert_eq!(resolve_category(&c, None, -6.6, -20.0, 34.0), Some("Bad"));
        assert_eq!(resolve_category(&c, None, -6.5, -20.0, 34.0), Some("Good"));
        assert_eq!(resolve_category(&c, None, 20.6, -20.0, 34.0), Some("Best"));
        assert_eq!(resolve_category(&c, None, 34.0, -20.0, 34.0), Some("Best"));
    }

    #[test]
    fn test_breakpoints() {
        let c = cats(&["Poor", "Below Average", "Average", "Above Average", "Good", "Excellent"]);
        let b = [-10.0, 0.0, 10.0, 15.0, 28.0, 34.0];
        assert_eq!(resolve_category(&c, Some(&b[..]), 16.0, -20.0, 34.0), Some("Good"));
        assert_eq!(resolve_category(&c, Some(&b[..]), -20.0, -20.0, 34.0), Some("Poor"));
        assert_eq!(resolve_category(&c, Some(&b[..]), 0.0, -20.0, 34.0), Some("Below Average"));
        assert_eq!(resolve_category(&c, Some(&b[..]), 34.0, -20.0, 34.0), Some("Excellent"));
    }

    #[test]
    fn test_value_above_every_breakpoint_gets_last_category() {
        let c = cats(&["Low", "High"]);
        assert_eq!(resolve_category(&c, Some(&[1.0, 2.0][..]), 99.0, 0.0, 100.0), Some("High"));
    }

    #[test]
    fn test_mismatched_breakpoints_fall_back_to_buckets() {
        let c = cats(&["A", "B"]);
        assert_eq!(resolve_category(&c, Some(&[1.0][..]), 75.0, 0.0, 100.0), Some("B"));
        assert_eq!(resolve_category(&c, Some(&[][..]), 10.0, 0.0, 100.0), Some("A"));
    }

    #[test]
    fn test_inverted_range_reads_categories_backwards() {
        let c = cats(&["A", "B", "C"]);
        assert_eq!(resolve_category(&c, None, 100.0, 100.0, 0.0), Some("C"));
        assert_eq!(resolve_category(&c, None, 0.0, 100.0, 0.0), Some("A"));
        // The stored order is untouched between calls.
        assert_eq!(c, cats(&["A", "B", "C"]));
    }

    #[test]
    fn test_resolution_is_total() {
        let single = cats(&["Only"]);
        let many = cats(&["A", "B", "C", "D", "E"]);
        let values = [f64::NEG_INFINITY, -1e9, -1.0, 0.0, 0.5, 50.0, 1e9, f64::INFINITY, f64::NAN];
        let ranges = [(0.0, 100.0), (100.0, 0.0), (0.0, 0.0), (-5.0, -5.0), (-20.0, 34.0)];
        for &(min, max) in &ranges {
            for &v in &values {
                assert_eq!(resolve_category(&single, None, v, min, max), Some("Only"));
                let picked = resolve_category(&many, None, v, min, max).unwrap();
                assert!(many.iter().any(|c| c == picked));
            }
        }
        assert_eq!(resolve_category(&[], None, 1.0, 0.0, 10.0), None);
    }

    #[test]
    fn test_delimited_setters() {
        let mut label = LabelElement::new();
        label.set_categories_delimited("Poor,Good,", ",");
        assert_eq!(label.categories(), &cats(&["Poor", "Good"])[..]);

        label.set_breakpoints_delimited("-10, 0", ",");
        assert_eq!(label.breakpoints(), Some(&[-10.0, 0.0][..]));

        assert_eq!(label.set_breakpoints_delimited("1,x", ","), Invalidation::NoOp);
        assert_eq!(label.breakpoints(), Some(&[-10.0, 0.0][..]));
    }

    #[test]
    fn test_parse_number_list_reports_position() {
        let err = parse_number_list("1;2;three", ";").unwrap_err();
        assert!(matches!(err, HealthBarError::InvalidRangeValue { index: 2, .. }));
    }
}

//! Label filter deciding whether an item is processed at all.

use std::fmt;

/// How the configured labels are combined against an item's labels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LabelOperator {
    /// Item must carry every configured label.
    And,
    /// Item must carry at least one configured label.
    #[default]
    Or,
    /// Item must carry none of the configured labels.
    Not,
}

impl LabelOperator {
    /// Parse the `label-operator` input.
    ///
    /// Input is trimmed and lower-cased. `and` and `not` are recognised;
    /// every other value, including the empty string, means [`LabelOperator::Or`].
    pub fn from_input(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "and" => Self::And,
            "not" => Self::Not,
            _ => Self::Or,
        }
    }
}

impl fmt::Display for LabelOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::And => "and",
            Self::Or => "or",
            Self::Not => "not",
        };
        f.write_str(s)
    }
}

/// Configured label filter (`labeled` + `label-operator` inputs).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelFilter {
    /// Lower-cased labels, empty entries removed.
    pub labeled: Vec<String>,
    pub operator: LabelOperator,
}

impl LabelFilter {
    /// Create a filter from already normalised labels.
    pub fn new(labeled: Vec<String>, operator: LabelOperator) -> Self {
        Self { labeled, operator }
    }

    /// Build a filter from the raw comma-separated `labeled` input and the
    /// raw `label-operator` input.
    pub fn from_inputs(labeled: &str, operator: &str) -> Self {
        let labeled = labeled
            .split(',')
            .map(|l| l.trim().to_lowercase())
            .filter(|l| !l.is_empty())
            .collect();
        Self {
            labeled,
            operator: LabelOperator::from_input(operator),
        }
    }

    /// Decide whether an item with `item_labels` (lower-cased) passes.
    ///
    /// An empty filter passes every item for every operator, `not` included.
    pub fn matches(&self, item_labels: &[String]) -> bool {
        match self.operator {
            LabelOperator::And => self.labeled.iter().all(|l| item_labels.contains(l)),
            LabelOperator::Not => {
                self.labeled.is_empty() || !item_labels.iter().any(|l| self.labeled.contains(l))
            }
            LabelOperator::Or => {
                self.labeled.is_empty() || item_labels.iter().any(|l| self.labeled.contains(l))
            }
        }
    }

    /// Human readable reason an item was rejected, for the skip log line.
    pub fn skip_reason(&self) -> String {
        let labels = self.labeled.join(", ");
        match self.operator {
            LabelOperator::And => format!("it doesn't match all the labels: {labels}"),
            LabelOperator::Not => format!("it contains one of the labels: {labels}"),
            LabelOperator::Or => format!("it does not have one of the labels: {labels}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn test_operator_parsing() {
        assert_eq!(LabelOperator::from_input("and"), LabelOperator::And);
        assert_eq!(LabelOperator::from_input("  AND "), LabelOperator::And);
        assert_eq!(LabelOperator::from_input("Not"), LabelOperator::Not);
        assert_eq!(LabelOperator::from_input("or"), LabelOperator::Or);
        assert_eq!(LabelOperator::from_input(""), LabelOperator::Or);
        assert_eq!(LabelOperator::from_input("xor"), LabelOperator::Or);
    }

    #[test]
    fn test_from_inputs_normalises_labels() {
        let filter = LabelFilter::from_inputs(" Bug, ,P1 ,,needs triage", "and");
        assert_eq!(filter.labeled, labels(&["bug", "p1", "needs triage"]));
        assert_eq!(filter.operator, LabelOperator::And);
    }

    #[test]
    fn test_from_inputs_empty_labeled() {
        let filter = LabelFilter::from_inputs("", "");
        assert!(filter.labeled.is_empty());
        assert_eq!(filter.operator, LabelOperator::Or);
    }

    #[test]
    fn test_and_requires_every_label() {
        let filter = LabelFilter::new(labels(&["bug", "p1"]), LabelOperator::And);
        assert!(!filter.matches(&labels(&["bug"])));
        assert!(filter.matches(&labels(&["bug", "p1", "extra"])));
    }

    #[test]
    fn test_not_rejects_excluded_label() {
        let filter = LabelFilter::new(labels(&["wontfix"]), LabelOperator::Not);
        assert!(filter.matches(&labels(&["bug"])));
        assert!(!filter.matches(&labels(&["bug", "wontfix"])));
    }

    #[test]
    fn test_or_requires_any_label() {
        let filter = LabelFilter::new(labels(&["bug"]), LabelOperator::Or);
        assert!(!filter.matches(&[]));
        assert!(filter.matches(&labels(&["enhancement", "bug"])));
    }

    #[test]
    fn test_empty_filter_passes_for_every_operator() {
        for op in [LabelOperator::And, LabelOperator::Or, LabelOperator::Not] {
            let filter = LabelFilter::new(vec![], op);
            assert!(filter.matches(&[]), "{op} with no labels");
            assert!(filter.matches(&labels(&["bug"])), "{op} with labels");
        }
    }

    #[test]
    fn test_skip_reason_mentions_labels() {
        let filter = LabelFilter::new(labels(&["bug", "p1"]), LabelOperator::And);
        assert_eq!(filter.skip_reason(), "it doesn't match all the labels: bug, p1");
    }
}

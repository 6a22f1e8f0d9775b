use regex::Regex;

/// Reconciles a question's declared answer index with the natural-language
/// explanation that accompanies it.
///
/// The strategy is deliberately pluggable: answer reconciliation is a fuzzy
/// heuristic (substring containment, marker words) and should be swappable
/// without touching the parsing pipeline.
pub trait RepairStrategy: Send + Sync {
    /// Returns the option index the explanation points at when it disagrees
    /// with `correct`, or `None` to keep the current index.
    fn reconcile(&self, options: &[String], correct: usize, explanation: &str) -> Option<usize>;
}

/// Default heuristic: trust the explanation over the structured index.
///
/// If the currently-selected option does not appear in the opening of the
/// explanation, scan all options in their original order and pick the first
/// one that is both mentioned early in the explanation and accompanied by a
/// "this is correct" marker word. Model output for the index field is
/// observed to be less reliable than the model's own prose.
pub struct ExplanationMarkerRepair {
    marker: Regex,
    confirm_window: usize,
    scan_window: usize,
}

impl ExplanationMarkerRepair {
    /// `marker_patterns` are regex alternatives matched against the
    /// lower-cased opening of the explanation. Windows are measured in
    /// characters, not bytes; explanations are mostly Cyrillic.
    pub fn new(marker_patterns: &[&str], confirm_window: usize, scan_window: usize) -> Self {
        let pattern = marker_patterns.join("|");
        Self {
            marker: Regex::new(&pattern).expect("marker pattern is valid"),
            confirm_window,
            scan_window,
        }
    }
}

impl Default for ExplanationMarkerRepair {
    fn default() -> Self {
        Self::new(&["правильн"], 300, 200)
    }
}

impl RepairStrategy for ExplanationMarkerRepair {
    fn reconcile(&self, options: &[String], correct: usize, explanation: &str) -> Option<usize> {
        let selected = options.get(correct)?.to_lowercase();
        let explanation = explanation.to_lowercase();

        let confirm: String = explanation.chars().take(self.confirm_window).collect();
        if confirm.contains(&selected) {
            return None;
        }

        let scan: String = explanation.chars().take(self.scan_window).collect();
        if !self.marker.is_match(&scan) {
            return None;
        }

        // First match wins, in original option order.
        options
            .iter()
            .position(|option| scan.contains(&option.to_lowercase()))
    }
}

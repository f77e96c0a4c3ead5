use crate::flux::FeatureState;
use crate::models::Listing;

/// Most recent keywords kept; older ones are dropped front-first.
pub const HISTORY_KEYWORDS_CAP: usize = 20;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SearchState {
    pub keyword: String,
    /// The keyword the current listing was fetched with; `fetch_more`
    /// continues this search even while `keyword` is being edited.
    pub last_keyword: String,
    pub history_keywords: Vec<String>,
    pub quick_search_words: Vec<String>,
    pub listing: Listing,
}

impl FeatureState for SearchState {}

impl SearchState {
    /// Append keywords to the history, most recent last.
    ///
    /// A keyword already present (case-insensitively) moves to the end
    /// instead of duplicating; the history is capped at
    /// [`HISTORY_KEYWORDS_CAP`].
    pub fn append_history_keywords(&mut self, keywords: &[String]) {
        for keyword in keywords {
            if keyword.is_empty() {
                continue;
            }
            if let Some(index) = self
                .history_keywords
                .iter()
                .position(|k| k.eq_ignore_ascii_case(keyword))
            {
                if self.history_keywords.last().map(String::as_str) != Some(keyword.as_str()) {
                    self.history_keywords.remove(index);
                    self.history_keywords.push(keyword.clone());
                }
            } else {
                self.history_keywords.push(keyword.clone());
                let overflow = self.history_keywords.len().saturating_sub(HISTORY_KEYWORDS_CAP);
                if overflow > 0 {
                    self.history_keywords.drain(..overflow);
                }
            }
        }
    }

    pub fn remove_history_keyword(&mut self, keyword: &str) {
        self.history_keywords.retain(|k| k != keyword);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_history(keywords: &[&str]) -> SearchState {
        SearchState {
            history_keywords: keywords.iter().map(|k| k.to_string()).collect(),
            ..SearchState::default()
        }
    }

    #[test]
    fn append_skips_empty_keywords() {
        let mut state = SearchState::default();
        state.append_history_keywords(&[String::new()]);
        assert!(state.history_keywords.is_empty());
    }

    #[test]
    fn append_moves_known_keyword_to_end() {
        let mut state = with_history(&["alpha", "beta", "gamma"]);
        state.append_history_keywords(&["Alpha".to_string()]);
        assert_eq!(state.history_keywords, vec!["beta", "gamma", "Alpha"]);
    }

    #[test]
    fn append_keeps_last_keyword_in_place() {
        let mut state = with_history(&["alpha", "beta"]);
        state.append_history_keywords(&["beta".to_string()]);
        assert_eq!(state.history_keywords, vec!["alpha", "beta"]);
    }

    #[test]
    fn history_is_capped() {
        let mut state = SearchState::default();
        for n in 0..(HISTORY_KEYWORDS_CAP + 5) {
            state.append_history_keywords(&[format!("keyword-{n}")]);
        }
        assert_eq!(state.history_keywords.len(), HISTORY_KEYWORDS_CAP);
        assert_eq!(state.history_keywords[0], "keyword-5");
    }

    #[test]
    fn remove_deletes_exact_match() {
        let mut state = with_history(&["alpha", "beta"]);
        state.remove_history_keyword("alpha");
        assert_eq!(state.history_keywords, vec!["beta"]);
    }
}

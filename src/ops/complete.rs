/// Candidate filtering and commit policy for the timezone field.
///
/// The candidate set is loaded once at startup and never changes. Filtering
/// is case-insensitive; `match_anywhere` picks substring over prefix
/// matching. `force_match` makes commit reject any text that is not exactly
/// (case-sensitively) one of the candidates.
#[derive(Debug, Clone)]
pub struct Completion {
    candidates: Vec<String>,
    pub match_anywhere: bool,
    pub force_match: bool,
}

impl Completion {
    pub fn new(candidates: Vec<String>, match_anywhere: bool, force_match: bool) -> Self {
        Completion {
            candidates,
            match_anywhere,
            force_match,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Candidates matching `query`, lazily, in candidate-set order.
    pub fn filter<'a>(&'a self, query: &str) -> impl Iterator<Item = &'a str> + 'a {
        let needle = query.to_lowercase();
        let anywhere = self.match_anywhere;
        self.candidates.iter().map(String::as_str).filter(move |c| {
            let hay = c.to_lowercase();
            if anywhere {
                hay.contains(&needle)
            } else {
                hay.starts_with(&needle)
            }
        })
    }

    /// Whether a commit of `text` should be accepted. Rejections are silent:
    /// the caller leaves the field value unchanged and fires no notification.
    pub fn accepts(&self, text: &str) -> bool {
        !self.force_match || self.candidates.iter().any(|c| c == text)
    }
}

/// Query box state plus the in-flight guard for the advisory call.
///
/// The guard is cooperative: the owning surface must route every dispatch
/// through [`begin`](Self::begin) or [`begin_prompt`](Self::begin_prompt) and
/// disable its submit control whenever `in_flight` is set. The client itself
/// neither queues nor cancels, so at most one request is ever outstanding.
#[derive(Debug, Clone, Default)]
pub struct AdvisoryPanel {
    pub query: String,
    pub guidance: Option<String>,
    pub in_flight: bool,
}

impl AdvisoryPanel {
    pub fn set_query(&mut self, query: String) {
        self.query = query;
    }

    /// Blank or whitespace-only queries never dispatch.
    pub fn can_submit(&self) -> bool {
        !self.in_flight && !self.query.trim().is_empty()
    }

    /// Claims the in-flight slot for the typed query, or refuses.
    pub fn begin(&mut self) -> Option<String> {
        if !self.can_submit() {
            return None;
        }
        self.in_flight = true;
        Some(self.query.trim().to_string())
    }

    /// Claims the in-flight slot for a canned prompt, or refuses.
    pub fn begin_prompt(&mut self, prompt: String) -> Option<String> {
        if self.in_flight {
            return None;
        }
        self.in_flight = true;
        Some(prompt)
    }

    /// Settles the outstanding request with either the service text or the
    /// fallback sentence; both arrive through the same path.
    pub fn resolve(&mut self, guidance: String) {
        self.guidance = Some(guidance);
        self.in_flight = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_queries_never_dispatch() {
        let mut panel = AdvisoryPanel::default();
        assert!(!panel.can_submit());
        assert_eq!(panel.begin(), None);

        panel.set_query("   \t".into());
        assert!(!panel.can_submit());
        assert_eq!(panel.begin(), None);
        assert!(!panel.in_flight);
    }

    #[test]
    fn second_submission_is_refused_until_settled() {
        let mut panel = AdvisoryPanel::default();
        panel.set_query("What is NDVI?".into());
        assert_eq!(panel.begin(), Some("What is NDVI?".into()));

        panel.set_query("Second question".into());
        assert_eq!(panel.begin(), None);
        assert_eq!(panel.begin_prompt("canned".into()), None);

        panel.resolve("An answer.".into());
        assert!(!panel.in_flight);
        assert_eq!(panel.guidance.as_deref(), Some("An answer."));
        assert_eq!(panel.begin(), Some("Second question".into()));
    }

    #[test]
    fn canned_prompt_respects_the_same_guard() {
        let mut panel = AdvisoryPanel::default();
        assert_eq!(panel.begin_prompt("analyze".into()), Some("analyze".into()));
        assert!(panel.in_flight);
        assert_eq!(panel.begin_prompt("again".into()), None);
    }
}

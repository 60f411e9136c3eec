/// Terminal result of one generation attempt. A new attempt's outcome
/// replaces the previous one wholesale; outcomes are never merged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationOutcome {
    Message(String),
    Failed(String),
}

impl GenerationOutcome {
    /// The displayable text for either variant.
    pub fn text(&self) -> &str {
        match self {
            GenerationOutcome::Message(text) => text,
            GenerationOutcome::Failed(text) => text,
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, GenerationOutcome::Failed(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exposes_text_for_both_variants() {
        assert_eq!(GenerationOutcome::Message("hello".into()).text(), "hello");
        assert_eq!(GenerationOutcome::Failed("oops".into()).text(), "oops");
    }

    #[test]
    fn reports_failures() {
        assert!(!GenerationOutcome::Message("hello".into()).is_failure());
        assert!(GenerationOutcome::Failed("oops".into()).is_failure());
    }
}

//! Group lifecycle
//!
//! ```text
//! mount ok   → Active
//! mount fail → Inert      (terminal)
//! destroy    → Destroyed  (terminal)
//! ```
//!
//! There is no Active → Inert transition and no re-initialization path.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// A construction precondition failed; no listeners bound, no pair active.
    Inert,
    /// Fully initialized: exactly one pair active, listeners bound.
    Active,
    /// Torn down: listeners detached, panels restored to visible.
    Destroyed,
}

impl Phase {
    /// Only an active group accepts `switch` and `destroy`.
    pub fn is_usable(&self) -> bool {
        matches!(self, Phase::Active)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Inert => "inert",
            Phase::Active => "active",
            Phase::Destroyed => "destroyed",
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usability() {
        assert!(Phase::Active.is_usable());
        assert!(!Phase::Inert.is_usable());
        assert!(!Phase::Destroyed.is_usable());
    }

    #[test]
    fn test_display() {
        assert_eq!(Phase::Inert.to_string(), "inert");
        assert_eq!(Phase::Active.to_string(), "active");
        assert_eq!(Phase::Destroyed.to_string(), "destroyed");
    }
}

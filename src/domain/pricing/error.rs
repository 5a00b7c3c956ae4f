#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PricingError {
    #[error("Unknown plan: {0}. Plan must be one of: diet, protein, royal")]
    UnknownPlan(String),
    #[error("Invalid selection: {0}")]
    InvalidSelection(String),
}

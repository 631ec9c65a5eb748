#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    /// The value failed the integer/range rule. Raised before any numeral
    /// text is built.
    #[error("Invalid Input: {0}")]
    InvalidInput(String),

    /// A table lookup missed while composing a numeral.
    #[error("Computational error during Roman numeral conversion: {0}")]
    Computation(String),
}

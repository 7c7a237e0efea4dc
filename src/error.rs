//! Error types for crossover, selection, and chromosome operations.
//!
//! Operator errors carry the **type name** of the strategy that raised them
//! rather than a reference to the strategy itself. A generic caller (for
//! example an evolutionary loop) can log which pluggable operator failed
//! without knowing anything about the concrete operator.
//!
//! Every operator error is formatted as `"<OperatorTypeName>: <message>"`.

/// Error raised by a chromosome when a gene write falls outside its bounds.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChromosomeError {
    #[error("gene index {index} is out of range for a chromosome of length {length}")]
    IndexOutOfRange { index: usize, length: usize },

    #[error(
        "cannot replace {count} genes starting at index {start} in a chromosome of length {length}"
    )]
    RangeOutOfBounds {
        start: usize,
        count: usize,
        length: usize,
    },
}

/// Error raised by a crossover operator.
///
/// Precondition failures are reported before any offspring is constructed and
/// before the randomization service is consulted. A failed call never yields
/// partial offspring.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CrossoverError {
    /// The number of parents does not match [`CrossoverParams::parents_number`](crate::crossover::CrossoverParams).
    #[error("{operator}: the number of parents should be {expected}, but {actual} were supplied")]
    ParentsNumber {
        operator: String,
        expected: usize,
        actual: usize,
    },

    /// A parent is shorter than the operator's minimum chromosome length.
    #[error(
        "{operator}: a chromosome should have at least {min_length} genes, but a parent has {actual}"
    )]
    ChromosomeTooShort {
        operator: String,
        min_length: usize,
        actual: usize,
    },

    /// Parents of one call do not share the same length.
    #[error("{operator}: all parents should have {expected} genes, but a parent has {actual}")]
    LengthMismatch {
        operator: String,
        expected: usize,
        actual: usize,
    },

    /// The configured swap point leaves no gene on one side of the cut.
    #[error(
        "{operator}: the swap point index is {swap_point_index}, but there are only {length} genes. \
         The swap should result at least one gene to each side"
    )]
    SwapPointOutOfRange {
        operator: String,
        swap_point_index: usize,
        length: usize,
    },

    /// Operator-specific failure, e.g. a representation violation.
    #[error("{operator}: {message}")]
    Operator { operator: String, message: String },

    /// A recombination pass was configured with invalid parameters.
    #[error("invalid recombination config: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Chromosome(#[from] ChromosomeError),
}

impl CrossoverError {
    /// Creates an operator-specific error.
    ///
    /// An absent operator formats as an empty name.
    pub fn new(operator: Option<&str>, message: impl Into<String>) -> Self {
        CrossoverError::Operator {
            operator: operator.unwrap_or_default().to_string(),
            message: message.into(),
        }
    }

    /// Type name of the operator that raised the error.
    ///
    /// Empty for errors that did not originate from an operator.
    pub fn operator(&self) -> &str {
        match self {
            CrossoverError::ParentsNumber { operator, .. }
            | CrossoverError::ChromosomeTooShort { operator, .. }
            | CrossoverError::LengthMismatch { operator, .. }
            | CrossoverError::SwapPointOutOfRange { operator, .. }
            | CrossoverError::Operator { operator, .. } => operator,
            CrossoverError::InvalidConfig(_) | CrossoverError::Chromosome(_) => "",
        }
    }
}

/// Error raised by a selection strategy.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{selection}: {message}")]
pub struct SelectionError {
    selection: String,
    message: String,
}

impl SelectionError {
    /// Creates a selection error. An absent selection formats as an empty name.
    pub fn new(selection: Option<&str>, message: impl Into<String>) -> Self {
        Self {
            selection: selection.unwrap_or_default().to_string(),
            message: message.into(),
        }
    }

    /// Type name of the selection strategy that raised the error.
    pub fn selection(&self) -> &str {
        &self.selection
    }

    /// The unformatted message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operator_error_format() {
        let err = CrossoverError::new(Some("PartiallyMappedCrossover"), "bad input");
        assert_eq!(err.to_string(), "PartiallyMappedCrossover: bad input");
        assert_eq!(err.operator(), "PartiallyMappedCrossover");
    }

    #[test]
    fn test_operator_error_without_operator() {
        let err = CrossoverError::new(None, "bad input");
        assert_eq!(err.to_string(), ": bad input");
        assert_eq!(err.operator(), "");
    }

    #[test]
    fn test_swap_point_message_names_index_and_length() {
        let err = CrossoverError::SwapPointOutOfRange {
            operator: "OnePointCrossover".into(),
            swap_point_index: 2,
            length: 3,
        };
        let msg = err.to_string();
        assert!(msg.starts_with("OnePointCrossover: "));
        assert!(msg.contains("swap point index is 2"));
        assert!(msg.contains("only 3 genes"));
    }

    #[test]
    fn test_chromosome_error_is_transparent() {
        let inner = ChromosomeError::IndexOutOfRange {
            index: 5,
            length: 3,
        };
        let err: CrossoverError = inner.clone().into();
        assert_eq!(err.to_string(), inner.to_string());
        assert_eq!(err.operator(), "");
    }

    #[test]
    fn test_selection_error_format() {
        let err = SelectionError::new(Some("Tournament"), "too few");
        assert_eq!(err.to_string(), "Tournament: too few");
        assert_eq!(err.selection(), "Tournament");
        assert_eq!(err.message(), "too few");

        let err = SelectionError::new(None, "too few");
        assert_eq!(err.to_string(), ": too few");
    }
}

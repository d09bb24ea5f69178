use std::fmt;

/// Errors that can occur while building, compiling or evaluating expressions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExprError {
    // Construction errors
    /// Operator tag outside `+`, `-`, `*`
    InvalidOperator { op: String },
    /// Operand that is not a Symbol, Expression or number
    InvalidOperand { type_name: &'static str },

    // Evaluation errors
    /// A named symbol was reached while it had no bound value
    UnboundSymbol { name: String },
    /// Instruction mnemonic outside `PUSH`, `ADD`, `SUB`, `MULT`
    UnrecognizedOperator { op: String },
    /// An operator instruction found fewer than two values on the stack
    StackUnderflow { index: usize },
    /// The program did not leave exactly one value on the stack
    UnbalancedProgram { depth: usize },

    // Safety limits
    MaxDepthExceeded { limit: usize },
    MaxNodesExceeded { limit: usize },
}

impl ExprError {
    /// Create `InvalidOperand` for the given Rust type
    pub fn invalid_operand<T: ?Sized>() -> Self {
        ExprError::InvalidOperand {
            type_name: std::any::type_name::<T>(),
        }
    }

    /// Create `UnboundSymbol` for the given name
    pub fn unbound(name: impl Into<String>) -> Self {
        ExprError::UnboundSymbol { name: name.into() }
    }
}

impl fmt::Display for ExprError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExprError::InvalidOperator { op } => {
                write!(f, "Unrecognized operation '{op}', expected one of '+', '-', '*'")
            }
            ExprError::InvalidOperand { type_name } => {
                write!(
                    f,
                    "Unrecognized object type when building an expression: {type_name}"
                )
            }
            ExprError::UnboundSymbol { name } => {
                write!(f, "Symbol '{name}' has no assigned value")
            }
            ExprError::UnrecognizedOperator { op } => {
                write!(f, "Unrecognized instruction '{op}'")
            }
            ExprError::StackUnderflow { index } => {
                write!(
                    f,
                    "Stack underflow at instruction {index}: operator needs two operands"
                )
            }
            ExprError::UnbalancedProgram { depth } => {
                write!(
                    f,
                    "Program left {depth} values on the stack, expected exactly one"
                )
            }
            ExprError::MaxDepthExceeded { limit } => {
                write!(f, "Expression nesting depth exceeds maximum limit of {limit}")
            }
            ExprError::MaxNodesExceeded { limit } => {
                write!(f, "Expression size exceeds maximum node count of {limit}")
            }
        }
    }
}

impl std::error::Error for ExprError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_operand_names_type() {
        let err = ExprError::invalid_operand::<&str>();
        assert_eq!(err, ExprError::InvalidOperand { type_name: "&str" });
        assert!(err.to_string().contains("&str"));
    }

    #[test]
    fn test_unbound_message() {
        let err = ExprError::unbound("a");
        assert_eq!(err.to_string(), "Symbol 'a' has no assigned value");
    }
}

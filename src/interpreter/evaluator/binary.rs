use crate::{ast::BinaryOperator, error::RuntimeError, interpreter::evaluator::core::EvalResult};

impl BinaryOperator {
    /// Applies the operator to `(left, right)`.
    ///
    /// Division truncates toward zero. All four operations are checked, so
    /// overflow is reported instead of wrapping.
    ///
    /// # Parameters
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `position`: Offset of the operator, for error reporting.
    ///
    /// # Returns
    /// The computed value.
    ///
    /// # Errors
    /// `DivisionByZero` if `right` is zero for `/`, `Overflow` if the result
    /// does not fit in `i64`.
    ///
    /// # Example
    /// ```
    /// use intcalc::{ast::BinaryOperator, error::RuntimeError};
    ///
    /// assert_eq!(BinaryOperator::Div.apply(-7, 2, 0), Ok(-3));
    /// assert_eq!(BinaryOperator::Div.apply(1, 0, 1),
    ///            Err(RuntimeError::DivisionByZero { position: 1 }));
    /// ```
    pub fn apply(self, left: i64, right: i64, position: usize) -> EvalResult<i64> {
        let result = match self {
            Self::Add => left.checked_add(right),
            Self::Sub => left.checked_sub(right),
            Self::Mul => left.checked_mul(right),
            Self::Div => {
                if right == 0 {
                    return Err(RuntimeError::DivisionByZero { position });
                }
                left.checked_div(right)
            },
        };

        result.ok_or(RuntimeError::Overflow { position })
    }
}

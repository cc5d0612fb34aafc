//! Expression evaluation
//!
//! All arithmetic and boolean evaluation is delegated to the external
//! [`evalexpr`] crate; this module only adapts its results to what the
//! engine needs (rendered strings, booleans, repeat counts) and folds its
//! errors into [`LsystemError::Expression`].

use evalexpr::Value;

use crate::engine::errors::LsystemError;

fn expression_error(expr: &str, message: impl ToString) -> LsystemError {
    LsystemError::Expression {
        expr: expr.to_string(),
        message: message.to_string(),
    }
}

/// Evaluate a branch condition to a boolean.
///
/// A condition that evaluates to anything other than a boolean is an
/// expression error, not `false`.
pub fn eval_condition(expr: &str) -> Result<bool, LsystemError> {
    evalexpr::eval_boolean(expr).map_err(|e| expression_error(expr, e))
}

/// Evaluate an expression and render the result as command-string text.
///
/// Integers render without a fractional part, so `1+1` becomes `2`, ready
/// to be spliced back into a `<...>` argument list.
pub fn eval_to_string(expr: &str) -> Result<String, LsystemError> {
    match evalexpr::eval(expr).map_err(|e| expression_error(expr, e))? {
        Value::Int(n) => Ok(n.to_string()),
        Value::Float(x) => Ok(x.to_string()),
        Value::Boolean(b) => Ok(b.to_string()),
        other => Err(expression_error(
            expr,
            format!("expected a numeric or boolean result, got {:?}", other),
        )),
    }
}

/// Evaluate a repeat-block count expression.
///
/// Floats truncate toward zero; counts below zero behave as zero, so the
/// block simply contributes nothing.
pub fn eval_count(expr: &str) -> Result<usize, LsystemError> {
    let n = match evalexpr::eval(expr).map_err(|e| expression_error(expr, e))? {
        Value::Int(n) => n,
        Value::Float(x) => x as i64,
        other => {
            return Err(expression_error(
                expr,
                format!("expected a numeric count, got {:?}", other),
            ))
        }
    };
    Ok(n.max(0) as usize)
}

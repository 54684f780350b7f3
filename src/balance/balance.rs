use log::trace;

use crate::errors::errors::ErrorImpl;

/// Returns true if every `(` in `expr` is closed by a later `)` and no `)`
/// appears without an open partner.
pub fn is_balanced(expr: &str) -> bool {
    check_balance(expr).is_ok()
}

/// Like `is_balanced`, but reports where the imbalance is.
///
/// A stray `)` is reported as soon as it is seen. Otherwise, the innermost
/// `(` still open at the end of input is reported.
pub fn check_balance(expr: &str) -> Result<(), ErrorImpl> {
    let mut open: Vec<usize> = vec![];

    for (offset, ch) in expr.char_indices() {
        match ch {
            '(' => open.push(offset),
            ')' => {
                if open.pop().is_none() {
                    trace!("unmatched ')' at {} in {:?}", offset, expr);
                    return Err(ErrorImpl::UnmatchedCloseParen { offset });
                }
            }
            _ => {}
        }
    }

    match open.pop() {
        Some(offset) => Err(ErrorImpl::UnclosedOpenParen { offset }),
        None => Ok(()),
    }
}

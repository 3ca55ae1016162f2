use filter_syntax::Comparator;
use model::core::value::Value;
use std::cmp::Ordering;

/// Applies `op` to a record value and a literal. Ordering comparisons
/// involving `Null` never hold; `eq null` holds only for a missing value.
pub fn test(op: Comparator, actual: &Value, target: &Value) -> bool {
    match op {
        Comparator::Equal => actual.equal(target),
        Comparator::NotEqual => !actual.equal(target),

        Comparator::GreaterThan => matches!(actual.compare(target), Some(Ordering::Greater)),
        Comparator::GreaterOrEqual => matches!(
            actual.compare(target),
            Some(Ordering::Greater) | Some(Ordering::Equal)
        ),
        Comparator::LessThan => matches!(actual.compare(target), Some(Ordering::Less)),
        Comparator::LessOrEqual => matches!(
            actual.compare(target),
            Some(Ordering::Less) | Some(Ordering::Equal)
        ),
    }
}

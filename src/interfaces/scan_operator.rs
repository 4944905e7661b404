// ============================================================================
// Scan Operator Interface
// Defines the contract for pluggable prefix-scan operators
// ============================================================================

/// Strategy pattern interface for prefix-scan operators
/// Implementations: CumulativeSum, CumulativeProduct, CumulativeMin, CumulativeMax
///
/// Operators only ever see non-missing operands: the missing-value
/// protocol is applied by [`crate::engine::scan`] before `combine` is called.
pub trait ScanOperator: Send + Sync {
    /// Identity element: `combine(acc, identity()) == acc`
    fn identity(&self) -> f64;

    /// Combine the running accumulator with the next input element
    fn combine(&self, acc: f64, value: f64) -> f64;

    /// Get the operator name for logging/benchmarks
    fn name(&self) -> &'static str;
}

#[cfg(test)]
mod tests {
    use super::*;

    // Mock implementation for testing the trait
    struct CountingOperator;

    impl ScanOperator for CountingOperator {
        fn identity(&self) -> f64 {
            0.0
        }

        fn combine(&self, acc: f64, _value: f64) -> f64 {
            acc + 1.0
        }

        fn name(&self) -> &'static str {
            "Counting"
        }
    }

    #[test]
    fn test_trait_can_be_implemented() {
        let op = CountingOperator;
        assert_eq!(op.name(), "Counting");
        assert_eq!(op.combine(op.identity(), 42.0), 1.0);
    }

    #[test]
    fn test_trait_object() {
        let op: Box<dyn ScanOperator> = Box::new(CountingOperator);
        assert_eq!(op.combine(2.0, 7.0), 3.0);
    }
}

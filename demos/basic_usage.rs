// ============================================================================
// Basic Usage Example
// ============================================================================

use std::sync::Arc;
use vector_kernels::prelude::*;
use vector_kernels::simd::SimdLevel;

fn main() -> Result<(), KernelError> {
    println!("=== Vector Kernels Example ===\n");
    println!("SIMD: {}\n", SimdLevel::detect());

    let x = [3.0, 1.0, MISSING, 4.0, 1.0, 5.0, 9.0, 2.0, 6.0];

    // Free functions: the skip flag is chosen per call
    println!("Reductions over {:?}", x);
    println!("  sum (propagate):   {}", sum(&x, false));
    println!("  sum (skip):        {}", sum(&x, true));
    println!("  mean (skip):       {:.4}", mean(&x, true));
    println!("  variance (skip):   {:.4}", variance(&x, true));
    println!("  rmse from 4 (skip): {:.4}", rmse(&x, 4.0, true));

    println!("\nScans");
    println!("  cumsum (propagate): {:?}", cumulative_sum(&x, false));
    println!("  cumsum (skip):      {:?}", cumulative_sum(&x, true));
    println!("  cummax (skip):      {:?}", cumulative_max(&x, true));

    let present: Vec<f64> = x.iter().copied().filter(|&v| !is_missing(v)).collect();
    println!("\nOn the {} present values", present.len());
    println!("  range:        {:?}", range(&present)?);
    println!("  diff (lag 2): {:?}", diff(&present, 2)?);
    println!("  which > 3:    {:?}", which(&present, |&v| v > 3.0));
    println!("  which > 100:  {:?}", which(&present, |&v| v > 100.0));

    let flags: Vec<bool> = present.iter().map(|&v| v > 0.0).collect();
    println!("  all positive: {}", all(&flags));

    // Configured engine with logging of every event
    let engine = KernelEngineBuilder::new()
        .skip_missing(true)
        .with_parallel_threshold(4)
        .with_worker_threads(2)
        .build(Arc::new(LoggingEventHandler))?;

    println!("\nEngine ({} backend, {} policy)", engine.backend_name(), engine.missing_policy());
    println!("  squares:        {:?}", engine.square(&present)?);
    println!("  sum of squares: {}", engine.sum_of_squares(&present)?);

    // Invalid arguments are errors, missing values are not
    match diff(&present, present.len()) {
        Ok(_) => println!("\nunexpected success"),
        Err(e) => println!("\nExpected failure: {}", e),
    }

    Ok(())
}

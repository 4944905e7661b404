// ============================================================================
// Data-Parallel Transform
// Element-wise transforms over a static contiguous partition of the input
// ============================================================================
//
// The index range [0, n) is cut into at most `workers` contiguous chunks of
// ceil(n / workers) elements (the last one may be shorter). Each worker owns
// the matching slice of the output, so no synchronization is needed and the
// result does not depend on the worker count or on scheduling order.

use crate::interfaces::{EventHandler, KernelEvent};
use crate::numeric::{KernelError, KernelResult};
use crate::simd::SimdKernel;
use chrono::Utc;

/// Contiguous `[start, end)` chunks covering `0..len` for `workers` workers.
///
/// Returns fewer chunks than `workers` when `len` is small; an empty
/// range yields no chunks.
pub fn chunk_bounds(len: usize, workers: usize) -> Vec<(usize, usize)> {
    if len == 0 {
        return Vec::new();
    }
    let chunk = len.div_ceil(workers.clamp(1, len));
    (0..len)
        .step_by(chunk)
        .map(|start| (start, (start + chunk).min(len)))
        .collect()
}

/// Square every element of `x` using `backend`, split across `workers`.
///
/// # Example
/// ```
/// use vector_kernels::engine::parallel;
/// use vector_kernels::interfaces::NoOpEventHandler;
/// use vector_kernels::simd::ScalarKernel;
///
/// let squares = parallel::square(&[1.0, -2.0, 3.0], 2, &ScalarKernel, &NoOpEventHandler).unwrap();
/// assert_eq!(squares, vec![1.0, 4.0, 9.0]);
/// ```
pub fn square(
    x: &[f64],
    workers: usize,
    backend: &dyn SimdKernel,
    handler: &dyn EventHandler,
) -> KernelResult<Vec<f64>> {
    run_partitioned(x, workers, handler, |src, dst| backend.square_into(src, dst))
}

/// Apply `f` to every element of `x`, split across `workers`.
///
/// A panic inside `f` on a worker thread is reported as
/// [`KernelError::WorkerPanicked`].
pub fn map<F>(
    x: &[f64],
    workers: usize,
    f: F,
    handler: &dyn EventHandler,
) -> KernelResult<Vec<f64>>
where
    F: Fn(f64) -> f64 + Sync,
{
    run_partitioned(x, workers, handler, |src, dst| {
        for (out, &v) in dst.iter_mut().zip(src) {
            *out = f(v);
        }
    })
}

/// Run `kernel` over matching input/output chunks.
///
/// A single chunk runs on the calling thread; otherwise each chunk gets a
/// scoped worker thread.
fn run_partitioned<K>(
    x: &[f64],
    workers: usize,
    handler: &dyn EventHandler,
    kernel: K,
) -> KernelResult<Vec<f64>>
where
    K: Fn(&[f64], &mut [f64]) + Sync,
{
    let mut out = vec![0.0; x.len()];
    let bounds = chunk_bounds(x.len(), workers);

    if bounds.len() <= 1 {
        kernel(x, &mut out);
        if !x.is_empty() {
            handler.on_event(KernelEvent::ChunkProcessed {
                worker: 0,
                start: 0,
                end: x.len(),
                timestamp: Utc::now(),
            });
        }
        return Ok(out);
    }

    let chunk = bounds[0].1;
    tracing::debug!(
        len = x.len(),
        workers = bounds.len(),
        chunk,
        "Starting partitioned transform"
    );

    let panicked = crossbeam::thread::scope(|s| {
        let kernel = &kernel;
        let handles: Vec<_> = x
            .chunks(chunk)
            .zip(out.chunks_mut(chunk))
            .zip(&bounds)
            .enumerate()
            .map(|(worker, ((src, dst), &(start, end)))| {
                s.spawn(move |_| {
                    kernel(src, dst);
                    tracing::trace!(worker, start, end, "Chunk processed");
                    handler.on_event(KernelEvent::ChunkProcessed {
                        worker,
                        start,
                        end,
                        timestamp: Utc::now(),
                    });
                })
            })
            .collect();

        // Join every worker so the scope never sees an unjoined panic
        handles
            .into_iter()
            .enumerate()
            .filter_map(|(worker, handle)| handle.join().err().map(|_| worker))
            .min()
    });

    match panicked {
        Ok(None) => Ok(out),
        Ok(Some(worker)) => {
            tracing::warn!(worker, "Parallel worker panicked");
            Err(KernelError::WorkerPanicked { worker })
        },
        Err(_) => Err(KernelError::WorkerPanicked { worker: 0 }),
    }
}

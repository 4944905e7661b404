// ============================================================================
// Engine Module
// Contains the kernels and the configured kernel engine
// ============================================================================

mod kernel_engine;
mod lagged;
mod predicates;
mod reductions;
mod scans;

pub mod factory;
pub mod parallel;

pub use factory::{create_from_config, KernelEngineBuilder};
pub use kernel_engine::KernelEngine;
pub use lagged::{diff, range};
pub use predicates::{all, any, which};
pub use reductions::{mean, rmse, rmse_between, std_dev, sum, variance};
pub use scans::{
    cumulative_max, cumulative_min, cumulative_product, cumulative_sum, scan, CumulativeMax,
    CumulativeMin, CumulativeProduct, CumulativeSum,
};

//! Forecasting the opponent's next gesture.
//!
//! Three independent [`Estimator`]s read the [`crate::pattern::Pattern`] and
//! each produce a [`Distribution`]. The [`Predictor`] blends them with a
//! fixed [`Weights`] triple and picks the arg-max as its forecast.
pub mod distribution;
pub use distribution::*;

pub mod estimator;
pub use estimator::*;

pub mod predictor;
pub use predictor::*;

pub mod weights;
pub use weights::*;

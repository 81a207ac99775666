//! Predictive Rock Paper Scissors.
//!
//! The agent never observes its opponent's gesture. It commits to a counter
//! before each round, learns the opponent's gesture from the reported outcome,
//! and folds that observation into a rolling [`pattern::Pattern`] that the
//! [`predict::Predictor`] ensemble reads on the next round.
pub mod gesture;
pub mod pattern;
pub mod players;
pub mod predict;
pub mod session;

#[cfg(feature = "wasm")]
pub mod wasm;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Estimator outputs, ensemble weights, and blended scores.
pub type Probability = f32;
/// One-based round counter.
pub type Round = usize;
/// Milliseconds since the Unix epoch.
pub type Millis = u64;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for testing and sparring.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// PATTERN STORE
// ============================================================================
/// Opponent gestures retained for trend detection (FIFO beyond this).
pub const RECENT_WINDOW: usize = 10;
/// Trailing slice of the window read by the recency estimator.
pub const RECENCY_SLICE: usize = 3;
/// Trailing slice of the window shown in the analysis summary.
pub const TREND_SLICE: usize = 3;

// ============================================================================
// PREDICTION ENSEMBLE
// Blended score s(g) = r(g)·W_RECENCY + a(g)·W_RESPONSE + f(g)·W_FREQUENCY
// ============================================================================
/// Weight of the short-term recency estimator.
pub const WEIGHT_RECENCY: Probability = 0.3;
/// Weight of the post-outcome response estimator.
pub const WEIGHT_RESPONSE: Probability = 0.4;
/// Weight of the lifetime frequency estimator.
pub const WEIGHT_FREQUENCY: Probability = 0.3;
/// Fallback distribution for estimators with no data, in catalog order.
pub const PRIOR: [Probability; 3] = [0.33, 0.33, 0.34];

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Wall clock in milliseconds. Uses the JS clock on wasm32, where
/// `SystemTime` is unavailable.
#[cfg(not(target_arch = "wasm32"))]
pub fn now() -> Millis {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as Millis)
        .unwrap_or_default()
}
#[cfg(target_arch = "wasm32")]
pub fn now() -> Millis {
    js_sys::Date::now() as Millis
}

/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "cli")]
pub fn log() -> anyhow::Result<()> {
    std::fs::create_dir_all("logs")?;
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", now() / 1000))?,
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file])?;
    Ok(())
}

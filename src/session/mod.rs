//! Round lifecycle: forecast, commit, await outcome, learn, advance.
mod analysis;
mod error;
mod phase;
mod record;
mod report;
mod session;
mod state;

pub use analysis::*;
pub use error::*;
pub use phase::*;
pub use record::*;
pub use report::*;
pub use session::*;
pub use state::*;

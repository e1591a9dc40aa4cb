pub mod ladder;
pub mod results;
pub mod server;

pub use ladder::{LadderService, Standing};
pub use results::{MatchOutcome, report_result};

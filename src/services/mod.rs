pub mod gate;
pub mod report;

pub use gate::{
    AllowReason, DEFAULT_LABEL, GateInput, Outcome, blocked_message, decide, skipped_reason,
};
pub use report::{GateReport, Reporter, escape_data, workflow_command};

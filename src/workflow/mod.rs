pub mod status;
pub mod view_state;

pub use status::{StatusIndicator, SubmissionStatus};
pub use view_state::{error_message, SearchTicket, ViewState, ViewStateMachine};

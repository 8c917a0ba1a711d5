//! Order composition and submission control

pub mod composer;
pub mod guard;
pub mod message;

pub use composer::{CustomerDetails, MessageKind, OrderComposer, OrderMessage, TIMESTAMP_FORMAT};
pub use guard::{SubmitGuard, SubmitTicket};
pub use message::{MessageBuilder, escape_html};

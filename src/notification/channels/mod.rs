//! 具体渠道实现

pub mod console;
pub mod twilio;

pub use console::ConsoleChannel;
pub use twilio::{TwilioChannel, TwilioConfig};

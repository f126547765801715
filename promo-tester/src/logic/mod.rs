pub mod fixture;
pub mod reports;
pub mod tester;

pub use fixture::{LogicCtx, ScriptedReply, ScriptedTransport, site_with};
pub use tester::*;

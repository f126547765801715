pub mod page;
pub mod session;

pub use page::SitePage;
pub use session::{BrowserConfig, BrowserKind, new_session};

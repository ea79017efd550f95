mod header;
mod sidebar;

pub use header::MainContent;
pub use sidebar::Sidebar;

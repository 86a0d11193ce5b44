mod controller;
mod progress;
mod summary;

// Public API of the session subsystem.
pub use crate::error::SessionError;
pub use controller::SessionController;
pub use progress::SessionProgress;
pub use summary::SessionSummary;

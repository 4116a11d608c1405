pub mod commands;
pub mod constants;
pub mod notifications;
pub mod render;

pub use commands::{ClassTarget, DomCommand, NotificationMarkup};
pub use notifications::ShownNotifications;
pub use render::render;

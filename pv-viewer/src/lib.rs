pub mod cli;
pub mod pipeline;
pub mod window;

pub use window::ViewerWindow;

pub mod components;
pub mod context;
pub mod renderer;
pub mod renders;

pub use components::*;
pub use context::*;
pub use renderer::*;
pub use renders::*;

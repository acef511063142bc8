pub mod children;
pub mod context;
pub mod emit;
pub mod references;
pub mod syntax;
pub mod toc;
pub mod types;

pub use children::*;
pub use context::*;
pub use emit::*;
pub use references::*;
pub use syntax::*;
pub use toc::*;
pub use types::*;

mod result;
mod serial;
mod server;
mod state;
mod tolerance;

pub use result::*;
pub use serial::*;
pub use server::*;
pub use state::*;
pub use tolerance::*;

mod keygen;
mod session_impl;
mod verify;

pub use session_impl::Session;
pub use verify::AttributeMismatch;

//! Session/auth gate: who is signed in, and how they got there.

pub mod session;

pub use session::SessionGate;

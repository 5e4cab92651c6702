//! Domain types shared by the execution trigger and the orchestration
//! boundary: the incoming request, the start payload, the execution name
//! and the clock the trigger samples once per invocation.

pub mod clock;
pub mod error;
pub mod naming;
pub mod types;

//! Orchestration-engine boundary.
//!
//! [`ExecutionStarter`] is the single capability the trigger needs from
//! the workflow engine. [`SfnStarter`] implements it against AWS Step
//! Functions; tests implement it with in-memory fakes.

pub mod aws;
pub mod starter;

pub use aws::SfnStarter;
pub use starter::{
    ExecutionStarter, StartExecutionError, StartExecutionRequest, StartFailureKind,
    StartedExecution,
};

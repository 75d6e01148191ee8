pub mod execution_observer;
pub mod noop_observer;
pub mod tracing_observer;

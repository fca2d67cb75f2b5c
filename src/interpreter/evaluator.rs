/// Core evaluation logic.
///
/// Walks a syntax tree, dispatching on the node variant, and reads and writes
/// the variable store.
pub mod core;

/// Arithmetic evaluation.
///
/// Applies the four arithmetic operators to two values, with integer/real
/// promotion, overflow checks and the division-by-zero check.
pub mod arithmetic;

/// The variable store.
///
/// Holds the name to value bindings that persist across the lines of one
/// run.
pub mod store;

pub use self::{
    core::{EvalResult, evaluate},
    store::VariableStore,
};

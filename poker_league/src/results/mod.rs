//! Ranked result application.
//!
//! Recording a result sheet finishes the tournament and updates every
//! known participant's statistics, history, and rating in one
//! serialized document mutation. A finished tournament rejects further
//! submissions, so stat deltas can never be applied twice.

pub mod processor;

pub use processor::{ProcessorResult, ResultsError, ResultsProcessor, rating_delta};

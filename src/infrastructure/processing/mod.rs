//! Data processing infrastructure

mod processor;

pub use processor::DataProcessor;

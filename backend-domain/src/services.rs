// Pure domain services: the scan-log aggregation pipeline

pub mod aggregate;
pub mod assembler;
pub mod bucketizer;
pub mod filter;

pub use aggregate::*;
pub use assembler::*;
pub use bucketizer::*;
pub use filter::*;

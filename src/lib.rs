pub mod analyzers;
pub mod chart;
pub mod error;
pub mod fetch;
pub mod output;
pub mod parser;
pub mod query;
pub mod record;
pub mod source;
pub mod stats;

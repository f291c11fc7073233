pub mod pipeline;
pub mod report;
pub mod rules;
pub mod schema;
pub mod spatial;

// Adapters layer: concrete implementations for external systems (E-utilities http, XML, report output).

pub mod parser;
pub mod pubmed;
pub mod report;

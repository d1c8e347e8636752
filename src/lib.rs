pub mod cli;
pub mod folio;

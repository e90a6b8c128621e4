// Pipeline stages, in the order they run: parse -> normalize -> filter -> score -> rank

pub mod filter;
pub mod normalize;
pub mod parser;
pub mod rank;
pub mod schema;
pub mod score;

pub mod code_card;
pub mod complexity;
pub mod explanation;
pub mod handlers;
pub mod header;
pub mod input_section;
pub mod results;
pub mod utils;

pub mod literal;
pub mod table;

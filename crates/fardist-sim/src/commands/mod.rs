pub mod curves;
pub mod generate;

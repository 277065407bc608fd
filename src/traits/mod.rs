mod data_type;
mod driver;
mod parameter;
mod statement;

pub use data_type::DataType;
pub use driver::DatabaseDriver;
pub use parameter::Parameter;
pub use statement::Statement;

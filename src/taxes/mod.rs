pub mod store;
pub mod table;

pub use store::TaxTableStore;
pub use table::{TaxTable, TaxTableError};

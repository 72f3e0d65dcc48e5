pub mod builders;
pub mod expr;
pub mod noun;
pub mod operators;
pub mod statement;
pub mod table;
pub mod token;
pub mod values;

pub use builders::*;
pub use expr::*;
pub use noun::*;
pub use operators::*;
pub use statement::*;
pub use table::*;
pub use token::*;
pub use values::*;

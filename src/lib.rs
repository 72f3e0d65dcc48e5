//! # querychain
//!
//! Build a query as a token tree, render it as SQL or JPQL with numbered
//! bind parameters.
//!
//! ## Quick Example
//!
//! ```
//! use querychain::prelude::*;
//!
//! let order = Table::new("Order").alias("o");
//! let customer = Table::new("Customer").alias("c");
//!
//! let query = Select::new()
//!     .column(order.var("getId"))
//!     .column(customer.var("getName"))
//!     .from([order.clone()])
//!     .join(customer.clone())
//!     .on(order.var("getCustomerId").eq_col(&customer.var("getId")))
//!     .where_(order.var("getTotal").gt(100))
//!     .order_by(OrderBy::new().desc(order.var("getTotal")));
//!
//! let sql = query.to_query().unwrap();
//! assert_eq!(
//!     sql.sql,
//!     "SELECT o.id, c.name FROM Order o JOIN Customer c ON o.customerId = c.id \
//!      WHERE o.total > ?1 ORDER BY o.total DESC"
//! );
//!
//! let jpql = query.to_query_with(Dialect::Jpql, &ConventionSchema).unwrap();
//! assert_eq!(
//!     jpql.sql,
//!     "SELECT o.id, c.name FROM Order o, Customer c \
//!      WHERE (o.customerId = c.id) AND o.total > ?1 ORDER BY o.total DESC"
//! );
//! assert_eq!(jpql.params[&1], Value::Int(100));
//! ```
//!
//! ## Dialects
//!
//! | Dialect | JOIN | Lower-casing | Pattern match |
//! |---------|------|--------------|---------------|
//! | `sql`   | native | `LOWER(x)` | `SIMILAR TO` |
//! | `jpql`  | folded into WHERE | `lower(x)` | `LIKE` |

pub mod ast;
pub mod config;
pub mod error;
pub mod schema;
pub mod transpiler;

pub use transpiler::render;

pub mod prelude {
    pub use crate::ast::*;
    pub use crate::config::RenderConfig;
    pub use crate::error::*;
    pub use crate::schema::{ConventionSchema, Schema, SchemaProvider};
    pub use crate::transpiler::{Dialect, RenderedQuery, ToQuery, render};
}

//! Type vocabulary shared by every crate in the workspace

mod effectiveness;
mod pokemon_type;
mod type_set;

pub use effectiveness::Effectiveness;
pub use pokemon_type::Type;
pub use type_set::TypeSet;

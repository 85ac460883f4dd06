pub mod envs;
pub mod list;
pub mod query;

pub use envs::show_envs;
pub use list::list_all;
pub use query::run_query;

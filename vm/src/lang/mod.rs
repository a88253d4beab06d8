mod value;
pub use value::*;

mod ctrl_flow;
pub use ctrl_flow::*;

mod context;
pub use context::*;

mod fn_table;
pub use fn_table::*;

mod host;
pub use host::*;

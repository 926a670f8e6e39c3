mod ascending;
mod descending;
mod insertion;
mod middle_out;
mod order;
mod reverse;
mod side_cross;
mod traits;

pub use ascending::*;
pub use descending::*;
pub use insertion::*;
pub use middle_out::*;
pub use order::*;
pub use reverse::*;
pub use side_cross::*;
pub use traits::Traversal;

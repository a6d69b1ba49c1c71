pub(crate) mod check;
pub(crate) mod recode;

pub use check::*;
pub use recode::*;

mod content;
mod skew;

pub use content::*;
pub use skew::*;

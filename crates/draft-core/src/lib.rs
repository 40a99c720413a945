mod content;
mod modifier;
mod renderer;
mod serde_value;
mod state;

pub use crate::content::*;
pub use crate::modifier::*;
pub use crate::renderer::*;
pub use crate::serde_value::*;
pub use crate::state::*;

pub use self::{board::*, direction::*, shift::*};

pub(crate) mod board;
pub(crate) mod direction;
pub(crate) mod shift;

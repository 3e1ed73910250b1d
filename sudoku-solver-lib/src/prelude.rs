//! Convenience re-export of the types most commonly needed together.
//!
//! Nearly every module in this crate begins with `use crate::prelude::*;`.

pub use crate::board::*;
pub use crate::candidate_index::*;
pub use crate::candidate_links::*;
pub use crate::cell_index::*;
pub use crate::cell_utility::*;
pub use crate::constraint::*;
pub use crate::elimination_list::*;
pub use crate::error::*;
pub use crate::house::*;
pub use crate::logic_result::*;
pub use crate::logical_step::*;
pub use crate::math::*;
pub use crate::solver::*;
pub use crate::value_mask::*;

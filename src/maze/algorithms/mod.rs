mod depth_first_search;

pub use depth_first_search::DepthFirstSearch;

use thiserror::Error;

use crate::{dims::Dims, render::RenderError};

/// Random number generator used for anything, where determinism is required.
pub type Random = rand_xoshiro::Xoshiro256StarStar;

#[derive(Debug, Error)]
pub enum GenError {
    #[error("invalid maze size: {0:?}")]
    InvalidSize(Dims),
    #[error("renderer error: {0}")]
    Render(#[from] RenderError),
}

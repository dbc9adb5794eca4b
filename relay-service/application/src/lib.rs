pub mod dto;
pub mod error;
pub mod usecase;

pub use dto::*;
pub use error::*;
pub use usecase::{RelayUseCase, RelayUseCaseImpl, DEFAULT_WARM_UP_WAIT_SECS, WARM_UP_MARKER};

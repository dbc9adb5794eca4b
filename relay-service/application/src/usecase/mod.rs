mod relay;

pub use relay::{RelayUseCase, RelayUseCaseImpl, DEFAULT_WARM_UP_WAIT_SECS, WARM_UP_MARKER};

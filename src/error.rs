use thiserror::Error;

/// Errors raised by engine operations.
///
/// None of these reach the user: [`Engine::apply`](crate::Engine::apply)
/// logs them and leaves the state unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    #[error("display value {input:?} is not a number")]
    Parse { input: String },
    #[error("{0} is not a decimal digit")]
    InvalidDigit(u8),
}

use thiserror::Error;

/// Errors that can occur while contracting a region with a derivative.
#[derive(Debug, Error)]
pub enum ContractError<FE, JE> {
    /// The function could not be evaluated.
    #[error("function evaluation failed")]
    Function(#[source] FE),
    /// The Jacobian could not be evaluated.
    #[error("jacobian evaluation failed")]
    Jacobian(#[source] JE),
}

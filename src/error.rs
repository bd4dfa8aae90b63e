use thiserror::Error;

/// A submit-transaction request missing one of its required fields.
///
/// Detected at the HTTP boundary and reported to the caller immediately;
/// the chain and the pool never see the request, so a rejection mutates
/// nothing.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("missing field: {0}")]
    MissingField(&'static str),
}

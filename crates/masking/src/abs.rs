//! Abstract data types.

/// Interface to peek at the secret value without consuming the wrapper.
pub trait PeekInterface<S> {
    /// Only method providing a reference to the secret value.
    fn peek(&self) -> &S;
}

/// Interface that consumes the wrapper and returns the inner secret.
pub trait ExposeInterface<S> {
    /// Consume the wrapper and expose the inner secret value.
    fn expose(self) -> S;
}

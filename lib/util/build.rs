/// Trait for configuration that sets up values of type `T`.
pub trait Build<T> {
    /// The reason why `T` could not be set up.
    type Error;

    /// Consumes this configuration to set up `T`.
    fn build(self) -> Result<T, Self::Error>;
}

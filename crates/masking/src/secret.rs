//!
//! Structure describing secret.
//!

use std::{fmt, marker::PhantomData};

use crate::{strategy::Strategy, ExposeInterface, PeekInterface, WithType};

/// Secret thing.
///
/// To get access to the value use [`PeekInterface::peek`] for a reference, or
/// [`ExposeInterface::expose`] to consume the wrapper. The masking strategy
/// (second type parameter) controls how the value is rendered by `Debug` and
/// `Display`; the default renders `*** <type> ***`.
pub struct Secret<S, I = WithType>
where
    I: Strategy<S>,
{
    pub(crate) inner_secret: S,
    pub(crate) marker: PhantomData<I>,
}

impl<S, I> Secret<S, I>
where
    I: Strategy<S>,
{
    /// Take ownership of a secret value
    pub fn new(secret: S) -> Self {
        Self {
            inner_secret: secret,
            marker: PhantomData,
        }
    }
}

impl<S, I> PeekInterface<S> for Secret<S, I>
where
    I: Strategy<S>,
{
    fn peek(&self) -> &S {
        &self.inner_secret
    }
}

impl<S, I> ExposeInterface<S> for Secret<S, I>
where
    I: Strategy<S>,
{
    fn expose(self) -> S {
        self.inner_secret
    }
}

impl<S, I> From<S> for Secret<S, I>
where
    I: Strategy<S>,
{
    fn from(secret: S) -> Self {
        Self::new(secret)
    }
}

impl<S, I> Clone for Secret<S, I>
where
    S: Clone,
    I: Strategy<S>,
{
    fn clone(&self) -> Self {
        Self {
            inner_secret: self.inner_secret.clone(),
            marker: PhantomData,
        }
    }
}

impl<S, I> PartialEq for Secret<S, I>
where
    S: PartialEq,
    I: Strategy<S>,
{
    fn eq(&self, other: &Self) -> bool {
        self.peek().eq(other.peek())
    }
}

impl<S, I> Eq for Secret<S, I>
where
    S: Eq,
    I: Strategy<S>,
{
}

impl<S, I> fmt::Debug for Secret<S, I>
where
    I: Strategy<S>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        I::fmt(&self.inner_secret, f)
    }
}

impl<S, I> fmt::Display for Secret<S, I>
where
    I: Strategy<S>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        I::fmt(&self.inner_secret, f)
    }
}

impl<S, I> Default for Secret<S, I>
where
    S: Default,
    I: Strategy<S>,
{
    fn default() -> Self {
        S::default().into()
    }
}

impl<S, I> serde::Serialize for Secret<S, I>
where
    S: serde::Serialize,
    I: Strategy<S>,
{
    fn serialize<Sr>(&self, serializer: Sr) -> Result<Sr::Ok, Sr::Error>
    where
        Sr: serde::Serializer,
    {
        self.peek().serialize(serializer)
    }
}

impl<'de, S, I> serde::Deserialize<'de> for Secret<S, I>
where
    S: serde::Deserialize<'de>,
    I: Strategy<S>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        S::deserialize(deserializer).map(Self::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::WithoutType;

    #[test]
    fn debug_output_is_masked() {
        let secret: Secret<String> = Secret::new("sk_live_sensitive".to_string());
        let rendered = format!("{secret:?}");
        assert!(!rendered.contains("sk_live_sensitive"));
        assert!(rendered.contains("alloc::string::String"));

        let anonymous: Secret<String, WithoutType> = Secret::new("hunter2".to_string());
        assert_eq!(format!("{anonymous:?}"), "*** ***");
    }

    #[test]
    fn peek_and_expose_return_inner_value() {
        let secret: Secret<String> = Secret::new("value".to_string());
        assert_eq!(secret.peek(), "value");
        assert_eq!(secret.expose(), "value");
    }

    #[test]
    fn serializes_transparently() {
        let secret: Secret<String> = Secret::new("key".to_string());
        assert_eq!(serde_json::to_string(&secret).unwrap(), r#""key""#);
    }
}

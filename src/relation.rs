//! Projections and equivalence relations over grouping criteria

/// Derives the criterion of an element.
pub trait Projection<T> {
    /// Criterion type. Stored by value so it can outlive a transient element.
    type Output;

    /// Project `element` onto its criterion.
    fn project(&self, element: T) -> Self::Output;
}

impl<T, K, F> Projection<T> for F
where
    F: Fn(T) -> K,
{
    type Output = K;

    #[inline]
    fn project(&self, element: T) -> K {
        self(element)
    }
}

/// Projection that uses each element as its own criterion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Identity;

impl<T> Projection<T> for Identity {
    type Output = T;

    #[inline]
    fn project(&self, element: T) -> T {
        element
    }
}

/// An equivalence relation over criteria.
///
/// Implementations must be reflexive, symmetric and transitive; grouping
/// relies on this to produce the same boundaries in either direction.
pub trait Equivalence<K: ?Sized> {
    /// Whether `lhs` and `rhs` belong to the same class.
    fn equivalent(&self, lhs: &K, rhs: &K) -> bool;
}

impl<K: ?Sized, F> Equivalence<K> for F
where
    F: Fn(&K, &K) -> bool,
{
    #[inline]
    fn equivalent(&self, lhs: &K, rhs: &K) -> bool {
        self(lhs, rhs)
    }
}

/// Structural equality via [`PartialEq`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EqualTo;

impl<K: PartialEq + ?Sized> Equivalence<K> for EqualTo {
    #[inline]
    fn equivalent(&self, lhs: &K, rhs: &K) -> bool {
        lhs == rhs
    }
}

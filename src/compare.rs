//! Ordering capabilities a [`Tree`][crate::Tree] is bound to.
//!
//! Every routing decision the tree makes goes through a [`Compare`]
//! implementation. Any closure of the shape `Fn(&T, &T) -> Ordering` is a
//! comparator, so most callers never name this trait:
//!
//! ```
//! use bintree::Tree;
//!
//! // Longest string first.
//! let mut tree = Tree::with_comparator(|a: &&str, b: &&str| b.len().cmp(&a.len()));
//! tree.insert("a");
//! tree.insert("abc");
//! tree.insert("ab");
//!
//! let values: Vec<_> = tree.values(bintree::Order::InOrder);
//! assert_eq!(values, [&"abc", &"ab", &"a"]);
//! ```

use std::cmp::Ordering;

/// A total order over payloads of type `T`.
///
/// Implementations must be deterministic and define a strict total order. A
/// comparator that does not (see [`Approx`]) keeps the tree memory safe but
/// makes the ordering of its contents unspecified.
pub trait Compare<T: ?Sized> {
    /// Compares `a` against `b`.
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

impl<T, F> Compare<T> for F
where
    T: ?Sized,
    F: Fn(&T, &T) -> Ordering,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

/// Orders payloads by their own [`Ord`] implementation. This is what
/// [`Tree::new`][crate::Tree::new] uses.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Natural;

impl<T: Ord + ?Sized> Compare<T> for Natural {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// Approximate comparator for floating point payloads.
///
/// Two values closer than `epsilon` compare [`Equal`][Ordering::Equal], so
/// inserting one of them rejects the other as a duplicate. Outside that band
/// `total_cmp` decides, which also gives `NaN` a fixed place.
///
/// The result is symmetric (`compare(a, b)` is always the reverse of
/// `compare(b, a)`) but approximate equality is not transitive: with an
/// epsilon of `1.0`, `0.0 == 0.8` and `0.8 == 1.6` yet `0.0 < 1.6`. That is not
/// a strict total order, so which of several close values ends up stored
/// depends on insertion order.
///
/// ```
/// use bintree::{Approx, Tree};
///
/// let mut tree = Tree::with_comparator(Approx::default());
/// assert!(tree.insert(1.0_f32));
/// assert!(!tree.insert(1.00001));
/// assert!(tree.insert(1.1));
/// assert_eq!(tree.len(), 2);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Approx {
    /// Widest gap at which two values are still considered equal.
    pub epsilon: f64,
}

impl Approx {
    /// Epsilon used by [`Approx::default`].
    pub const DEFAULT_EPSILON: f64 = 0.0001;

    /// An approximate comparator with the given `epsilon`.
    pub fn new(epsilon: f64) -> Self {
        Self { epsilon }
    }
}

impl Default for Approx {
    fn default() -> Self {
        Self::new(Self::DEFAULT_EPSILON)
    }
}

macro_rules! impl_approx {
    ($($float:ty),*) => {$(
        impl Compare<$float> for Approx {
            fn compare(&self, a: &$float, b: &$float) -> Ordering {
                if (f64::from(*a) - f64::from(*b)).abs() < self.epsilon {
                    Ordering::Equal
                } else {
                    a.total_cmp(b)
                }
            }
        }
    )*};
}

impl_approx!(f32, f64);

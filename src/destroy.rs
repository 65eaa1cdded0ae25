//! Cleanup hooks run when a [`Tree`][crate::Tree] is torn down.

/// Receives every payload still stored in a tree when that tree is destroyed.
///
/// Teardown hands each remaining payload to [`Destroy::destroy`] exactly once,
/// children before their parents. Payloads removed earlier by
/// [`Tree::delete`][crate::Tree::delete] are never passed here; use
/// [`Tree::take`][crate::Tree::take] to get hold of those.
///
/// Any `FnMut(T)` closure is a destructor:
///
/// ```
/// use bintree::{Natural, Tree};
///
/// let mut released = Vec::new();
/// let mut tree = Tree::with_callbacks(Natural, |value: i32| released.push(value));
/// tree.insert(2);
/// tree.insert(1);
/// tree.insert(3);
/// tree.destroy();
///
/// assert_eq!(released, [1, 3, 2]);
/// ```
pub trait Destroy<T> {
    /// Releases `value`.
    fn destroy(&mut self, value: T);
}

impl<T, F> Destroy<T> for F
where
    F: FnMut(T),
{
    fn destroy(&mut self, value: T) {
        self(value)
    }
}

/// The default destructor: payloads are simply dropped.
///
/// This one type covers both usual teardown policies. For owned payloads
/// (`String`, `Box<T>`, ...) dropping frees them. For borrowed payloads (`&T`)
/// dropping does nothing, so a `Tree<&T>` leaves everything it pointed at to
/// the host:
///
/// ```
/// use bintree::Tree;
///
/// let names = vec![String::from("b"), String::from("a")];
/// let mut tree = Tree::new();
/// for name in &names {
///     tree.insert(name);
/// }
/// tree.destroy();
///
/// assert_eq!(names, ["b", "a"]);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Release;

impl<T> Destroy<T> for Release {
    fn destroy(&mut self, value: T) {
        drop(value);
    }
}

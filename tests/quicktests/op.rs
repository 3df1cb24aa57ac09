use quickcheck::{Arbitrary, Gen};

/// An enum for the various kinds of "things" to do to
/// binary search trees in a quicktest.
#[derive(Copy, Clone, Debug)]
pub enum Op<T> {
    /// Insert the T into the tree
    Insert(T),
    /// Delete one occurrence of the T from the tree
    Delete(T),
}

impl<T> Arbitrary for Op<T>
where
    T: Arbitrary,
{
    fn arbitrary(g: &mut Gen) -> Self {
        if bool::arbitrary(g) {
            Op::Insert(T::arbitrary(g))
        } else {
            Op::Delete(T::arbitrary(g))
        }
    }
}

/// View over the results of a [`ReturnHelper`](super::ReturnHelper)
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Results<'a, T> {
    /// Exactly one result, unwrapped
    Single(&'a T),
    /// Two or more results in insertion order
    Many(&'a [T]),
}

impl<'a, T> Results<'a, T> {
    /// The unwrapped result when exactly one was recorded
    pub fn single(&self) -> Option<&'a T> {
        match *self {
            Results::Single(only) => Some(only),
            Results::Many(_) => None,
        }
    }

    /// All results as a slice regardless of count
    pub fn as_slice(&self) -> &'a [T] {
        match *self {
            Results::Single(only) => std::slice::from_ref(only),
            Results::Many(many) => many,
        }
    }

    /// Number of results; an empty helper yields no `Results` at all
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.as_slice().len()
    }
}

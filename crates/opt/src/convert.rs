use crate::o::O;

impl<T> From<Option<T>> for O<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(val) => O::Occupied(val),
            None => O::Empty,
        }
    }
}

impl<T> From<O<T>> for Option<T> {
    fn from(value: O<T>) -> Self {
        value.into_option()
    }
}

// Transfer: the source is left empty.
impl<T> From<&mut O<T>> for O<T> {
    fn from(src: &mut O<T>) -> Self {
        O::transfer_from(src)
    }
}

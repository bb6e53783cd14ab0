use alloc::borrow::Cow;
use core::mem;

use crate::result::{EmptyValueError, Result};

/// A value that may or may not be present.
///
/// Operations that hand the value out (`unwrap`, `expect`, `match_with`, the
/// `unwrap_or*` family, `map` and `take`) leave the container `Empty` on every
/// branch. The inspection methods and the `if_*` combinators never move the
/// value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum O<T> {
    Occupied(T),
    Empty,
}

impl<T> O<T> {
    /// Constructs an `O::Empty` variant.
    pub fn empty() -> Self {
        O::Empty
    }

    /// Constructs an `O::Occupied(val)` variant, moving `val` in.
    pub fn occupied(val: T) -> Self {
        O::Occupied(val)
    }

    /// Builds a container from the contents of `src`, leaving `src` empty.
    pub fn transfer_from(src: &mut O<T>) -> Self {
        src.take()
    }

    /// Replaces the contents of `self` with the contents of `src`.
    ///
    /// `src` is left empty. Whatever `self` held before is dropped, including
    /// when `src` was already empty.
    pub fn assign_from(&mut self, src: &mut O<T>) -> &mut Self {
        *self = src.take();
        self
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, O::Empty)
    }

    pub fn is_occupied(&self) -> bool {
        matches!(self, O::Occupied(_))
    }

    /// Borrows the value without consuming it.
    pub fn get(&self) -> Option<&T> {
        match self {
            O::Occupied(val) => Some(val),
            O::Empty => None,
        }
    }

    /// Calls `f` with a reference to the value if occupied. The container
    /// keeps the value.
    pub fn if_occupied<F: FnOnce(&T)>(&mut self, f: F) -> &mut Self {
        if let O::Occupied(val) = self {
            f(val);
        }
        self
    }

    /// Like [`O::if_occupied`], but lets `f` edit the value in place.
    pub fn if_occupied_mut<F: FnOnce(&mut T)>(&mut self, f: F) -> &mut Self {
        if let O::Occupied(val) = self {
            f(val);
        }
        self
    }

    /// Calls `f` if empty.
    pub fn if_empty<F: FnOnce()>(&mut self, f: F) -> &mut Self {
        if self.is_empty() {
            f();
        }
        self
    }

    /// Moves the contents out into a new container, leaving `self` empty.
    pub fn take(&mut self) -> O<T> {
        mem::replace(self, O::Empty)
    }

    /// Stores `val` and returns the previous contents.
    pub fn replace(&mut self, val: T) -> O<T> {
        mem::replace(self, O::Occupied(val))
    }

    /// Moves the value out, or fails with the default [`EmptyValueError`].
    #[track_caller]
    pub fn unwrap(&mut self) -> Result<T> {
        match self.take() {
            O::Occupied(val) => Ok(val),
            O::Empty => Err(empty_value(EmptyValueError::new())),
        }
    }

    /// Moves the value out, or fails with a caller-chosen error kind built
    /// from the default [`EmptyValueError`].
    #[track_caller]
    pub fn unwrap_as<E: From<EmptyValueError>>(&mut self) -> Result<T, E> {
        self.unwrap().map_err(E::from)
    }

    /// Moves the value out, or fails with an [`EmptyValueError`] carrying `msg`.
    #[track_caller]
    pub fn expect(&mut self, msg: impl Into<Cow<'static, str>>) -> Result<T> {
        match self.take() {
            O::Occupied(val) => Ok(val),
            O::Empty => Err(empty_value(EmptyValueError::with_message(msg))),
        }
    }

    #[track_caller]
    pub fn expect_as<E: From<EmptyValueError>>(
        &mut self,
        msg: impl Into<Cow<'static, str>>,
    ) -> Result<T, E> {
        self.expect(msg).map_err(E::from)
    }

    /// Moves the value out, or returns the result of `f` if empty.
    ///
    /// `f` only runs when the container was empty.
    pub fn unwrap_or_else<F: FnOnce() -> T>(&mut self, f: F) -> T {
        match self.take() {
            O::Occupied(val) => val,
            O::Empty => f(),
        }
    }

    /// Moves the value out, or returns `default` if empty.
    pub fn unwrap_or(&mut self, default: T) -> T {
        match self.take() {
            O::Occupied(val) => val,
            O::Empty => default,
        }
    }

    /// Runs exactly one of the two branches and returns its result.
    ///
    /// When occupied the value is moved into `on_occupied` and the container
    /// is left empty. When empty, `on_empty` runs and the state is untouched.
    pub fn match_with<R, S, N>(&mut self, on_occupied: S, on_empty: N) -> R
    where
        S: FnOnce(T) -> R,
        N: FnOnce() -> R,
    {
        match self.take() {
            O::Occupied(val) => on_occupied(val),
            O::Empty => on_empty(),
        }
    }

    /// Maps `O<T>` to `O<U>` by applying `f` to the contained value. `self`
    /// is left empty.
    pub fn map<U, F: FnOnce(T) -> U>(&mut self, f: F) -> O<U> {
        match self.take() {
            O::Occupied(val) => O::Occupied(f(val)),
            O::Empty => O::Empty,
        }
    }

    /// Converts from `&O<T>` to `O<&T>`.
    pub fn as_ref(&self) -> O<&T> {
        match self {
            O::Occupied(val) => O::Occupied(val),
            O::Empty => O::Empty,
        }
    }

    /// Converts from `&mut O<T>` to `O<&mut T>`.
    pub fn as_mut(&mut self) -> O<&mut T> {
        match self {
            O::Occupied(val) => O::Occupied(val),
            O::Empty => O::Empty,
        }
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            O::Occupied(val) => Some(val),
            O::Empty => None,
        }
    }
}

impl<T: Clone> O<T> {
    /// Constructs an `O::Occupied` holding a clone of `val`.
    pub fn occupied_from(val: &T) -> Self {
        O::Occupied(val.clone())
    }

    /// Moves the value out, or returns a clone of `default` if empty.
    pub fn unwrap_or_clone(&mut self, default: &T) -> T {
        match self.take() {
            O::Occupied(val) => val,
            O::Empty => default.clone(),
        }
    }
}

impl<T: Default> O<T> {
    pub fn unwrap_or_default(&mut self) -> T {
        self.unwrap_or_else(T::default)
    }
}

impl<T> Default for O<T> {
    fn default() -> Self {
        O::Empty
    }
}

#[track_caller]
fn empty_value(err: EmptyValueError) -> EmptyValueError {
    #[cfg(feature = "log")]
    {
        let at = core::panic::Location::caller();
        log::debug!("unwrap on empty container @ {}:{}: {}", at.file(), at.line(), err);
    }
    err
}

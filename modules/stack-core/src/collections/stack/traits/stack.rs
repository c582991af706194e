use crate::collections::stack::{StackError, stack_diagnostics};

/// Last-in-first-out collection contract.
///
/// Implementations keep every operation free of partial effects: a call that returns an error
/// leaves the stack unchanged.
pub trait Stack<T> {
  /// Places `element` on top of the stack.
  fn push(&mut self, element: T);

  /// Places `element` on top of the stack if it is present.
  ///
  /// # Errors
  ///
  /// Returns [`StackError::InvalidArgument`] when `element` is `None`; the stack is not modified.
  fn try_push(&mut self, element: Option<T>) -> Result<(), StackError> {
    let Some(element) = element else {
      stack_diagnostics::record_rejection("try_push", StackError::InvalidArgument);
      return Err(StackError::InvalidArgument);
    };
    self.push(element);
    Ok(())
  }

  /// Removes and returns the element on top of the stack.
  ///
  /// # Errors
  ///
  /// Returns [`StackError::EmptyCollection`] when the stack holds no elements.
  fn pop(&mut self) -> Result<T, StackError>;

  /// Returns a reference to the element on top of the stack without removing it.
  ///
  /// # Errors
  ///
  /// Returns [`StackError::EmptyCollection`] when the stack holds no elements.
  fn peek(&self) -> Result<&T, StackError>;

  /// Returns the number of stored elements.
  fn len(&self) -> usize;

  /// Indicates whether the stack is empty.
  fn is_empty(&self) -> bool {
    self.len() == 0
  }
}

use core::fmt;

#[cfg(test)]
mod tests;

/// Errors that may arise while operating on a stack.
///
/// Every operation that returns a `StackError` leaves the stack exactly as it was before the call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StackError {
  /// The stack contains no elements, so there is no top to read or remove.
  EmptyCollection,
  /// An absent element was offered to the stack.
  InvalidArgument,
}

impl fmt::Display for StackError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      | StackError::EmptyCollection => write!(f, "stack is empty"),
      | StackError::InvalidArgument => write!(f, "stack element must be present"),
    }
  }
}

impl core::error::Error for StackError {}

use alloc::boxed::Box;


/// Link to the next node in the chain; each node owns its successor.
pub(crate) type Link<T> = Option<Box<Node<T>>>;

/// Single-element holder in the stack chain.
pub(crate) struct Node<T> {
  pub(crate) element: T,
  pub(crate) next:    Link<T>,
}

impl<T> Node<T> {
  /// Creates a detached node holding `element`.
  pub(crate) const fn value_of(element: T) -> Self {
    Self { element, next: None }
  }

  /// Consumes the node, returning its element and its successor.
  pub(crate) fn into_parts(self) -> (T, Link<T>) {
    (self.element, self.next)
  }
}

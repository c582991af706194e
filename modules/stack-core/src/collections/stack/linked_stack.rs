use alloc::boxed::Box;
use core::fmt;


use super::{
  Stack, StackError,
  node::{Link, Node},
  stack_diagnostics,
};

/// Stack that stores its elements in a singly linked chain of heap nodes.
///
/// The stack owns the top node, and every node owns the one below it. All operations work on
/// the head of the chain only and run in constant time.
///
/// ```
/// use linkstack_core_rs::collections::stack::{LinkedStack, StackError};
///
/// let mut stack = LinkedStack::of([1, 2, 3]);
/// assert_eq!(stack.peek(), Ok(&3));
/// assert_eq!(stack.pop(), Ok(3));
/// assert_eq!(stack.len(), 2);
///
/// let mut empty: LinkedStack<i32> = LinkedStack::new();
/// assert_eq!(empty.pop(), Err(StackError::EmptyCollection));
/// ```
pub struct LinkedStack<T> {
  head: Link<T>,
  size: usize,
}

impl<T> LinkedStack<T> {
  /// Creates an empty stack.
  #[must_use]
  pub const fn new() -> Self {
    Self { head: None, size: 0 }
  }

  /// Builds a stack by pushing `elements` in iteration order.
  ///
  /// The last element ends up on top of the stack; an empty sequence yields an empty stack.
  #[must_use]
  pub fn of<I>(elements: I) -> Self
  where
    I: IntoIterator<Item = T>, {
    let mut stack = Self::new();
    stack.extend(elements);
    stack
  }

  /// Places `element` on top of the stack.
  pub fn push(&mut self, element: T) {
    let mut node = Box::new(Node::value_of(element));
    node.next = self.head.take();
    self.head = Some(node);
    self.size += 1;
  }

  /// Places `element` on top of the stack if it is present.
  ///
  /// # Errors
  ///
  /// Returns [`StackError::InvalidArgument`] when `element` is `None`; the stack is not modified.
  pub fn try_push(&mut self, element: Option<T>) -> Result<(), StackError> {
    Stack::try_push(self, element)
  }

  /// Removes and returns the element on top of the stack.
  ///
  /// # Errors
  ///
  /// Returns [`StackError::EmptyCollection`] when the stack holds no elements.
  pub fn pop(&mut self) -> Result<T, StackError> {
    let Some(node) = self.head.take() else {
      stack_diagnostics::record_rejection("pop", StackError::EmptyCollection);
      return Err(StackError::EmptyCollection);
    };
    let (element, next) = (*node).into_parts();
    self.head = next;
    self.size -= 1;
    Ok(element)
  }

  /// Returns a reference to the element on top of the stack.
  ///
  /// # Errors
  ///
  /// Returns [`StackError::EmptyCollection`] when the stack holds no elements.
  pub fn peek(&self) -> Result<&T, StackError> {
    let Some(node) = self.head.as_deref() else {
      stack_diagnostics::record_rejection("peek", StackError::EmptyCollection);
      return Err(StackError::EmptyCollection);
    };
    Ok(&node.element)
  }

  /// Returns a mutable reference to the element on top of the stack.
  ///
  /// # Errors
  ///
  /// Returns [`StackError::EmptyCollection`] when the stack holds no elements.
  pub fn peek_mut(&mut self) -> Result<&mut T, StackError> {
    let Some(node) = self.head.as_deref_mut() else {
      stack_diagnostics::record_rejection("peek_mut", StackError::EmptyCollection);
      return Err(StackError::EmptyCollection);
    };
    Ok(&mut node.element)
  }

  /// Returns the number of stored elements.
  #[must_use]
  pub const fn len(&self) -> usize {
    self.size
  }

  /// Indicates whether the stack is empty.
  #[must_use]
  pub const fn is_empty(&self) -> bool {
    self.head.is_none()
  }

  /// Drops every element, leaving the stack empty and reusable.
  pub fn clear(&mut self) {
    // Unlink node by node so long chains never drop recursively.
    let mut link = self.head.take();
    while let Some(mut node) = link {
      link = node.next.take();
    }
    self.size = 0;
  }
}

impl<T> Stack<T> for LinkedStack<T> {
  fn push(&mut self, element: T) {
    LinkedStack::push(self, element);
  }

  fn pop(&mut self) -> Result<T, StackError> {
    LinkedStack::pop(self)
  }

  fn peek(&self) -> Result<&T, StackError> {
    LinkedStack::peek(self)
  }

  fn len(&self) -> usize {
    LinkedStack::len(self)
  }

  fn is_empty(&self) -> bool {
    LinkedStack::is_empty(self)
  }
}

impl<T> Default for LinkedStack<T> {
  fn default() -> Self {
    Self::new()
  }
}

impl<T> Drop for LinkedStack<T> {
  fn drop(&mut self) {
    self.clear();
  }
}

impl<T> Extend<T> for LinkedStack<T> {
  fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
    for element in iter {
      self.push(element);
    }
  }
}

impl<T> FromIterator<T> for LinkedStack<T> {
  fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
    Self::of(iter)
  }
}

impl<T: fmt::Debug> fmt::Debug for LinkedStack<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("LinkedStack")
      .field("len", &self.size)
      .field("top", &self.head.as_deref().map(|node| &node.element))
      .finish_non_exhaustive()
  }
}

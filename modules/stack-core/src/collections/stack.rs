//! Singly linked LIFO stack.

mod linked_stack;
mod node;
mod stack_diagnostics;
mod stack_error;
mod traits;
#[cfg(test)]
mod tests;

pub use linked_stack::LinkedStack;
pub use stack_error::StackError;
pub use traits::Stack;

use alloc::format;

use super::StackError;

#[test]
fn stack_error_is_debug() {
  let err = StackError::EmptyCollection;
  let debug_str = format!("{:?}", err);
  assert!(debug_str.contains("EmptyCollection"));
}

#[test]
fn stack_error_is_copy() {
  let err1 = StackError::InvalidArgument;
  let err2 = err1;
  assert_eq!(err1, err2);
}

#[test]
fn stack_error_partial_eq() {
  assert_eq!(StackError::EmptyCollection, StackError::EmptyCollection);
  assert_ne!(StackError::EmptyCollection, StackError::InvalidArgument);
}

#[test]
fn stack_error_display_empty_collection() {
  assert_eq!(format!("{}", StackError::EmptyCollection), "stack is empty");
}

#[test]
fn stack_error_display_invalid_argument() {
  assert_eq!(format!("{}", StackError::InvalidArgument), "stack element must be present");
}

#[test]
fn stack_error_is_core_error() {
  fn assert_error<E: core::error::Error>(_: &E) {}
  assert_error(&StackError::EmptyCollection);
}

use super::{LinkedStack, Stack, StackError};

fn fill<S: Stack<u32>>(stack: &mut S, count: u32) {
  for value in 0..count {
    stack.push(value);
  }
}

#[test]
fn trait_object_exposes_lifo_contract() {
  let mut stack = LinkedStack::new();
  let contract: &mut dyn Stack<u32> = &mut stack;

  assert!(contract.is_empty());
  contract.push(1);
  contract.push(2);
  assert_eq!(contract.peek(), Ok(&2));
  assert_eq!(contract.len(), 2);
  assert_eq!(contract.pop(), Ok(2));
  assert_eq!(contract.pop(), Ok(1));
  assert_eq!(contract.pop(), Err(StackError::EmptyCollection));
  assert_eq!(contract.peek(), Err(StackError::EmptyCollection));
}

#[test]
fn generic_callers_see_sizes_change_by_one() {
  let mut stack = LinkedStack::new();
  fill(&mut stack, 3);
  assert_eq!(Stack::len(&stack), 3);

  let before = *Stack::peek(&stack).unwrap();
  let popped = Stack::pop(&mut stack).unwrap();
  assert_eq!(before, popped);
  assert_eq!(Stack::len(&stack), 2);
}

#[test]
fn trait_try_push_keeps_size_on_rejection() {
  let mut stack: LinkedStack<u32> = LinkedStack::new();
  let contract: &mut dyn Stack<u32> = &mut stack;
  assert_eq!(contract.try_push(None), Err(StackError::InvalidArgument));
  assert_eq!(contract.len(), 0);
  assert_eq!(contract.try_push(Some(5)), Ok(()));
  assert_eq!(contract.len(), 1);
}

#[test]
fn trait_size_queries_agree_with_inherent_ones() {
  let mut stack = LinkedStack::of([1_u32, 2]);
  assert_eq!(Stack::len(&stack), stack.len());
  assert_eq!(Stack::is_empty(&stack), stack.is_empty());

  stack.clear();
  assert_eq!(Stack::len(&stack), 0);
  assert!(Stack::is_empty(&stack));
  assert_eq!(Stack::is_empty(&stack), stack.is_empty());
}

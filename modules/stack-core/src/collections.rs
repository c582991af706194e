/// Linked-node stack and its contract.
pub mod stack;

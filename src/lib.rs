//! # Generic Stack
//!
//! A capability-constrained container toolkit built around three pieces:
//!
//! ## Capability Contract
//! - [`Container`]: anything that can be appended to, counted and indexed
//! - [`EquatableContainer`]: the same contract with `Item: PartialEq`,
//!   unlocking `contains` and `index_of`
//!
//! ## Realizations
//! - [`Stack`]: array-backed LIFO, value semantics
//! - [`LinkedStack`]: linked-node LIFO, same contract
//!
//! ## Conditional Capability Extension
//! - [`Duplicate`]: the secondary capability ("can produce an independent copy")
//! - [`CopyStack`]: `copy_stack()` exists only when the element is [`Duplicate`]
//! - bounded inherent impls on [`Stack`] for several capabilities at once
//!
//! Reference semantics are opt-in through [`Shared`].
//!
//! ```
//! use generic_stack::{Container, CopyStack, Stack};
//!
//! let mut stack: Stack<i32> = Stack::new();
//! stack.push(1);
//! stack.push(2);
//! stack.append(3);
//!
//! let copy = stack.copy_stack();
//! assert_eq!(stack.pop(), Some(3));
//! assert_eq!(copy.count(), 3);
//! ```
//!
//! Run the walkthrough with: `cargo run --bin stack_demo [config.toml]`

pub mod config;
pub mod container;
pub mod duplicate;
pub mod error;
pub mod extension;
pub mod linked;
pub mod search;
pub mod shared;
pub mod stack;

pub use config::DemoConfig;
pub use container::{Container, EquatableContainer};
pub use duplicate::Duplicate;
pub use error::{ConfigError, ContainerError};
pub use extension::CopyStack;
pub use linked::LinkedStack;
pub use search::{all_items_match, find_index, find_max, first_item};
pub use shared::Shared;
pub use stack::Stack;

//! Loop Guard
//!
//! Every construction pushes its key on a per-thread construction stack before
//! the binding's construction function runs and pops it on every exit path.
//! A key that is already on the stack means the construction re-entered
//! itself: the guard fails with the full cycle instead of recursing.
//!
//! ```text
//! enter(A)  stack: [A]
//!   enter(B)  stack: [A, B]
//!     enter(A)  → Error::DependencyLoop { cycle: [A, B, A] }
//!   drop      stack: [A]
//! drop      stack: []
//! ```
//!
//! The stack is thread-local, so unrelated retrievals running on other
//! threads never observe each other's entries.

use std::cell::RefCell;
use std::marker::PhantomData;

use tracing::{trace, warn};
use tydi_domain::error::{Error, Result};
use tydi_domain::value_objects::TypeKey;

thread_local! {
    static CONSTRUCTION_STACK: RefCell<Vec<TypeKey>> = const { RefCell::new(Vec::new()) };
}

/// Entry point of the construction stack
pub struct LoopGuard;

impl LoopGuard {
    /// Push `key`, failing if it is already under construction
    pub fn enter(key: &TypeKey) -> Result<ConstructionToken> {
        Self::enter_with_limit(key, usize::MAX)
    }

    /// Push `key`, failing on a loop or when the stack already holds
    /// `max_depth` entries
    pub fn enter_with_limit(key: &TypeKey, max_depth: usize) -> Result<ConstructionToken> {
        CONSTRUCTION_STACK.with(|stack| {
            let mut stack = stack.borrow_mut();

            if let Some(start) = stack.iter().position(|active| active == key) {
                let mut cycle = stack[start..].to_vec();
                cycle.push(key.clone());
                let error = Error::dependency_loop(cycle);
                warn!(key = %key, "{}", error);
                return Err(error);
            }

            if stack.len() >= max_depth {
                return Err(Error::DepthExceeded {
                    key: key.clone(),
                    depth: max_depth,
                });
            }

            let index = stack.len();
            stack.push(key.clone());
            trace!(key = %key, depth = index + 1, "Entered construction");
            Ok(ConstructionToken {
                index,
                _not_send: PhantomData,
            })
        })
    }

    /// Number of constructions active on this thread
    pub fn depth() -> usize {
        CONSTRUCTION_STACK.with(|stack| stack.borrow().len())
    }

    /// Keys under construction on this thread, outermost first
    pub fn snapshot() -> Vec<TypeKey> {
        CONSTRUCTION_STACK.with(|stack| stack.borrow().clone())
    }
}

/// Release token of one construction stack entry
///
/// Dropping the token pops its entry (and anything still above it), which
/// covers successful returns, errors and unwinding alike. Tokens are bound to
/// the thread that created them.
#[must_use = "the construction stack entry is released as soon as the token is dropped"]
pub struct ConstructionToken {
    index: usize,
    _not_send: PhantomData<*const ()>,
}

impl ConstructionToken {
    /// Release the entry now
    pub fn release(self) {}
}

impl Drop for ConstructionToken {
    fn drop(&mut self) {
        // Ignore access errors during thread teardown.
        let _ = CONSTRUCTION_STACK.try_with(|stack| {
            if let Ok(mut stack) = stack.try_borrow_mut() {
                if let Some(key) = stack.get(self.index) {
                    trace!(key = %key, depth = self.index + 1, "Left construction");
                }
                stack.truncate(self.index);
            }
        });
    }
}

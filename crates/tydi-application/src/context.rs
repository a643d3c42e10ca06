//! Resolution Context
//!
//! The `(context, receiver)` pair threaded through a retrieval and every
//! construction it triggers. Selectors carry the explicit "inherit" sentinels
//! used by [`DirectResolver::on`](crate::engine::DirectResolver::on); they are
//! resolved against the enclosing context before a request reaches the engine.

use tydi_domain::value_objects::{ContextValue, Receiver};

/// Context and receiver of a resolution
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolutionContext {
    context: ContextValue,
    receiver: Option<Receiver>,
}

impl ResolutionContext {
    pub fn new(context: ContextValue, receiver: Option<Receiver>) -> Self {
        Self { context, receiver }
    }

    /// Global context, no receiver
    pub fn global() -> Self {
        Self::default()
    }

    pub fn context(&self) -> &ContextValue {
        &self.context
    }

    pub fn receiver(&self) -> Option<&Receiver> {
        self.receiver.as_ref()
    }

    /// Same receiver, different context
    pub fn with_context(&self, context: ContextValue) -> Self {
        Self {
            context,
            receiver: self.receiver.clone(),
        }
    }

    /// Same context, different receiver
    pub fn with_receiver(&self, receiver: Option<Receiver>) -> Self {
        Self {
            context: self.context.clone(),
            receiver,
        }
    }

    /// Resolve selectors against this context
    pub fn select(&self, context: ContextSelector, receiver: ReceiverSelector) -> Self {
        let context = match context {
            ContextSelector::Inherit => self.context.clone(),
            ContextSelector::Set(value) => value,
        };
        let receiver = match receiver {
            ReceiverSelector::Inherit => self.receiver.clone(),
            ReceiverSelector::Set(value) => value,
        };
        Self { context, receiver }
    }
}

/// Context part of an `on(..)` request
#[derive(Debug, Clone, Default)]
pub enum ContextSelector {
    /// Keep the enclosing resolution's context
    #[default]
    Inherit,
    /// Use this context
    Set(ContextValue),
}

impl From<ContextValue> for ContextSelector {
    fn from(value: ContextValue) -> Self {
        Self::Set(value)
    }
}

/// Receiver part of an `on(..)` request
#[derive(Debug, Clone, Default)]
pub enum ReceiverSelector {
    /// Keep the enclosing resolution's receiver
    #[default]
    Inherit,
    /// Use this receiver; `Set(None)` clears it
    Set(Option<Receiver>),
}

impl From<Receiver> for ReceiverSelector {
    fn from(value: Receiver) -> Self {
        Self::Set(Some(value))
    }
}

impl From<Option<Receiver>> for ReceiverSelector {
    fn from(value: Option<Receiver>) -> Self {
        Self::Set(value)
    }
}

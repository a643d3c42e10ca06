use std::fmt;

use super::tag::Tag;
use super::type_identity::{TypeIdentity, TypeToken, generic};

/// Lookup key of a binding: `(return type, argument type, tag)`
///
/// Two keys are equal iff all three components are equal. An argument type of
/// `()` is normalized to "none", so a provider key is exactly a factory key
/// without argument.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TypeKey {
    return_type: TypeIdentity,
    argument_type: Option<TypeIdentity>,
    tag: Option<Tag>,
}

impl TypeKey {
    /// Build a key from explicit identities
    pub fn new(
        return_type: TypeIdentity,
        argument_type: Option<TypeIdentity>,
        tag: Option<Tag>,
    ) -> Self {
        Self {
            return_type,
            argument_type: argument_type.filter(|argument| !argument.is_unit()),
            tag,
        }
    }

    /// Key of a factory taking `A` and returning `T`
    pub fn of<A: 'static, T: 'static>(tag: Option<Tag>) -> Self {
        Self::from_tokens(generic::<A>(), generic::<T>(), tag)
    }

    /// Key of a factory described by an argument token and a return token
    ///
    /// A `()` argument token yields the provider key of `T`.
    pub fn from_tokens<A: ?Sized + 'static, T: ?Sized + 'static>(
        argument: TypeToken<A>,
        returns: TypeToken<T>,
        tag: Option<Tag>,
    ) -> Self {
        Self::new(returns.identity(), Some(argument.identity()), tag)
    }

    /// Key of an argument-free provider of `T`
    pub fn provider<T: 'static>(tag: Option<Tag>) -> Self {
        Self::new(TypeIdentity::of::<T>(), None, tag)
    }

    pub fn return_type(&self) -> TypeIdentity {
        self.return_type
    }

    pub fn argument_type(&self) -> Option<TypeIdentity> {
        self.argument_type
    }

    pub fn tag(&self) -> Option<&Tag> {
        self.tag.as_ref()
    }

    /// Whether the bound construction takes an argument
    pub fn has_argument(&self) -> bool {
        self.argument_type.is_some()
    }
}

impl fmt::Display for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "bind<{}>(", self.return_type)?;
        if let Some(tag) = &self.tag {
            write!(f, "tag = {}", tag)?;
        }
        f.write_str(")")?;
        if let Some(argument) = &self.argument_type {
            write!(f, " with argument {}", argument)?;
        }
        Ok(())
    }
}

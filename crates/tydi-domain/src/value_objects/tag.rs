use std::any::Any;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

trait TagValue: Any + fmt::Debug + Send + Sync {
    fn as_any(&self) -> &dyn Any;
    fn eq_tag(&self, other: &dyn TagValue) -> bool;
    fn hash_tag(&self, state: &mut dyn Hasher);
}

impl<V> TagValue for V
where
    V: Any + fmt::Debug + Eq + Hash + Send + Sync,
{
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn eq_tag(&self, other: &dyn TagValue) -> bool {
        other
            .as_any()
            .downcast_ref::<V>()
            .is_some_and(|other| other == self)
    }

    fn hash_tag(&self, mut state: &mut dyn Hasher) {
        self.hash(&mut state);
    }
}

/// Opaque comparable discriminator between bindings of the same signature
///
/// Two tags are equal when they hold the same concrete type and equal values.
/// String conversions normalize to `String`, so `Tag::from("db")` equals
/// `Tag::from(String::from("db"))`.
#[derive(Clone)]
pub struct Tag(Arc<dyn TagValue>);

impl Tag {
    /// Wrap any comparable value as a tag
    pub fn new<V>(value: V) -> Self
    where
        V: Any + fmt::Debug + Eq + Hash + Send + Sync,
    {
        Self(Arc::new(value))
    }

    /// Borrow the tag value as `V`, if that is its type
    pub fn downcast_ref<V: Any>(&self) -> Option<&V> {
        self.0.as_any().downcast_ref::<V>()
    }

    /// Borrow the tag as a string slice, if it is a string tag
    pub fn as_str(&self) -> Option<&str> {
        self.downcast_ref::<String>().map(String::as_str)
    }
}

impl PartialEq for Tag {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq_tag(&*other.0)
    }
}

impl Eq for Tag {}

impl Hash for Tag {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let value: &dyn TagValue = &*self.0;
        value.as_any().type_id().hash(state);
        value.hash_tag(state);
    }
}

impl fmt::Debug for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tag({:?})", self.0)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

impl From<&'static str> for Tag {
    fn from(value: &'static str) -> Self {
        Self::new(value.to_string())
    }
}

impl From<String> for Tag {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

macro_rules! tag_from {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Tag {
                fn from(value: $ty) -> Self {
                    Self::new(value)
                }
            }
        )*
    };
}

tag_from!(bool, char, i32, i64, u32, u64, usize);

//! Mapping caller-defined record types to remote classes.

use std::borrow::Cow;

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::Result;
use crate::types::ClassName;

/// Server-managed fields every stored object carries.
///
/// Embed with `#[serde(flatten)]`. The fields are filled in from responses
/// and never serialized into request bodies, since the service owns them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectMeta {
    /// Identifier assigned on first save.
    #[serde(default, skip_serializing)]
    pub object_id: Option<String>,

    /// Creation time assigned on first save.
    #[serde(default, skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,

    /// Time of the last successful write.
    #[serde(default, skip_serializing)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl ObjectMeta {
    /// Metadata for an object that already exists remotely.
    pub fn with_id(object_id: impl Into<String>) -> Self {
        Self {
            object_id: Some(object_id.into()),
            ..Self::default()
        }
    }
}

/// A caller-defined record stored in a Parse class.
///
/// The class is derived from the type, not from any value, so an empty
/// `Vec<T>` resolves to the same class as a populated one. By default the
/// class name is the type's own name; override [`Object::class_name`] to
/// map the type elsewhere.
///
/// # Example
///
/// ```
/// use parse_core::{Object, ObjectMeta, class_name_of_slice};
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Debug, Default, Serialize, Deserialize)]
/// #[serde(rename_all = "camelCase")]
/// struct GameScore {
///     #[serde(flatten)]
///     meta: ObjectMeta,
///     score: i64,
///     player_name: String,
/// }
///
/// impl Object for GameScore {
///     fn meta(&self) -> &ObjectMeta { &self.meta }
///     fn meta_mut(&mut self) -> &mut ObjectMeta { &mut self.meta }
/// }
///
/// let scores: Vec<GameScore> = Vec::new();
/// assert_eq!(class_name_of_slice(&scores).unwrap().as_str(), "GameScore");
/// ```
pub trait Object: Serialize + DeserializeOwned + Send + Sync {
    /// The remote class this type is stored in.
    fn class_name() -> Cow<'static, str> {
        Cow::Borrowed(default_class_name::<Self>())
    }

    /// Server-managed fields.
    fn meta(&self) -> &ObjectMeta;

    /// Mutable access to server-managed fields.
    fn meta_mut(&mut self) -> &mut ObjectMeta;

    /// The object's id, if it has been saved.
    fn object_id(&self) -> Option<&str> {
        self.meta().object_id.as_deref()
    }
}

/// The unqualified name of `T` with any generic arguments removed.
///
/// `my_app::models::GameScore` becomes `GameScore`, and
/// `my_app::Tagged<Other>` becomes `Tagged`.
pub fn default_class_name<T: ?Sized>() -> &'static str {
    let full = std::any::type_name::<T>();
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}

/// Resolve the class for `T`.
pub fn class_name_for<T: Object>() -> Result<ClassName> {
    ClassName::new(T::class_name())
}

/// Resolve the class a record is stored in.
pub fn class_name_of<T: Object>(_record: &T) -> Result<ClassName> {
    class_name_for::<T>()
}

/// Resolve the class for a destination container from its element type.
///
/// Never looks at the contents, so it succeeds for an empty slice.
pub fn class_name_of_slice<T: Object>(_records: &[T]) -> Result<ClassName> {
    class_name_for::<T>()
}

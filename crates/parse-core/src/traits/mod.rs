//! Core traits for object mapping and diagnostics.

mod object;
mod trace;

pub use object::{
    Object, ObjectMeta, class_name_for, class_name_of, class_name_of_slice, default_class_name,
};
pub use trace::TraceSink;

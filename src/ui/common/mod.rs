//! Common reusable UI components
//!
//! Form controls, the status message block and the submit button shared by
//! the login and course forms.

pub mod form;
pub mod message;
pub mod spinner;

pub use form::{
    CheckboxField, FieldHandler, FileField, FormField, MultiSelectField, SelectField,
    TextAreaField,
};
pub use message::StatusMessage;
pub use spinner::{InlineSpinner, SubmitButton};

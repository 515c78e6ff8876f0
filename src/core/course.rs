//! Course creation form state and submission
//!
//! The form is generic over the file handle type so the same state machine
//! runs with `web_sys::File` in the browser and plain values in tests.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use super::error::SubmitError;
use super::http::{ApiRequest, COURSES_PATH, HttpTransport, MultipartPart, RequestBody};
use super::status::SubmissionStatus;
use super::submission::{Liveness, SubmissionOutcome, SubmissionView, run_submission};

pub const COURSE_CREATED: &str = "Course created successfully!";
pub const COURSE_FAILED: &str = "Failed to create course";
pub const INVALID_PRICE: &str = "Price must be a non-negative number";

/// Control names, also used as part names on the wire (except the cover image)
pub mod fields {
    pub const TITLE: &str = "title";
    pub const DESCRIPTION: &str = "description";
    pub const PRICE: &str = "price";
    pub const LEVEL: &str = "level";
    pub const TECHNOLOGIES: &str = "technologies";
    pub const COVER_IMAGE: &str = "coverImage";
    pub const IS_PUBLISHED: &str = "isPublished";

    /// Part name the backend expects the cover file under
    pub const COVER_IMAGE_PART: &str = "cover_image";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CourseLevel {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

impl CourseLevel {
    pub const ALL: [CourseLevel; 3] = [Self::Beginner, Self::Intermediate, Self::Advanced];

    /// Wire value
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Beginner => "BEGINNER",
            Self::Intermediate => "INTERMEDIATE",
            Self::Advanced => "ADVANCED",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
        }
    }
}

impl fmt::Display for CourseLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CourseLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|level| level.as_str() == s)
            .ok_or_else(|| format!("Unknown course level: {}", s))
    }
}

/// Technologies a course can be tagged with.
///
/// Ordered so a set of them always iterates the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Technology {
    Python,
    Javascript,
    React,
    Django,
}

impl Technology {
    pub const ALL: [Technology; 4] = [Self::Python, Self::Javascript, Self::React, Self::Django];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Python => "python",
            Self::Javascript => "javascript",
            Self::React => "react",
            Self::Django => "django",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Python => "Python",
            Self::Javascript => "JavaScript",
            Self::React => "React",
            Self::Django => "Django",
        }
    }
}

impl fmt::Display for Technology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Technology {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|tech| tech.as_str() == s)
            .ok_or_else(|| format!("Unknown technology: {}", s))
    }
}

/// Value carried by a change event
#[derive(Debug, Clone, PartialEq)]
pub enum FieldInput {
    /// `value` of a text-like control
    Text(String),
    /// `checked` of a checkbox
    Checked(bool),
}

/// State of the course creation form
#[derive(Debug, Clone, PartialEq)]
pub struct CourseForm<F> {
    pub title: String,
    pub description: String,
    /// Decimal as typed; checked by [`CourseForm::validate`]
    pub price: String,
    pub level: CourseLevel,
    pub technologies: BTreeSet<Technology>,
    pub cover_image: Option<F>,
    pub is_published: bool,
}

impl<F> Default for CourseForm<F> {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            price: "0".to_string(),
            level: CourseLevel::default(),
            technologies: BTreeSet::new(),
            cover_image: None,
            is_published: false,
        }
    }
}

impl<F> CourseForm<F> {
    /// Generic change handler keyed by the control's `name`.
    ///
    /// Returns `false` when the name is unknown or the input does not fit the
    /// field; the state is left untouched in that case.
    pub fn apply_change(&mut self, name: &str, input: FieldInput) -> bool {
        match (name, input) {
            (fields::TITLE, FieldInput::Text(value)) => self.title = value,
            (fields::DESCRIPTION, FieldInput::Text(value)) => self.description = value,
            (fields::PRICE, FieldInput::Text(value)) => self.price = value,
            (fields::LEVEL, FieldInput::Text(value)) => match value.parse() {
                Ok(level) => self.level = level,
                Err(_) => return false,
            },
            (fields::IS_PUBLISHED, FieldInput::Checked(checked)) => self.is_published = checked,
            _ => return false,
        }
        true
    }

    /// Recompute the technology set from every option of the multi-select.
    ///
    /// Takes `(value, selected)` for each option; unknown values are skipped.
    pub fn select_technologies<'a, I>(&mut self, options: I)
    where
        I: IntoIterator<Item = (&'a str, bool)>,
    {
        self.technologies = options
            .into_iter()
            .filter(|(_, selected)| *selected)
            .filter_map(|(value, _)| value.parse().ok())
            .collect();
    }

    pub fn set_cover_image(&mut self, file: Option<F>) {
        self.cover_image = file;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Mirror the numeric constraints of the price input (`min="0"`).
    pub fn validate(&self) -> Result<(), SubmitError> {
        match self.price.trim().parse::<f64>() {
            Ok(price) if price.is_finite() && price >= 0.0 => Ok(()),
            _ => Err(SubmitError::Validation(INVALID_PRICE.to_string())),
        }
    }
}

impl<F: Clone> CourseForm<F> {
    /// Multipart parts in field order.
    ///
    /// `technologies` becomes one part per selected value and the cover image
    /// is sent as `cover_image` only when present.
    pub fn to_parts(&self) -> Vec<MultipartPart<F>> {
        let mut parts = vec![
            MultipartPart::text(fields::TITLE, self.title.as_str()),
            MultipartPart::text(fields::DESCRIPTION, self.description.as_str()),
            MultipartPart::text(fields::PRICE, self.price.as_str()),
            MultipartPart::text(fields::LEVEL, self.level.as_str()),
        ];

        parts.extend(
            self.technologies
                .iter()
                .map(|tech| MultipartPart::text(fields::TECHNOLOGIES, tech.as_str())),
        );

        if let Some(file) = &self.cover_image {
            parts.push(MultipartPart::File {
                name: fields::COVER_IMAGE_PART.to_string(),
                file: file.clone(),
            });
        }

        parts.push(MultipartPart::text(
            fields::IS_PUBLISHED,
            self.is_published.to_string(),
        ));

        parts
    }

    pub fn to_request(&self) -> Result<ApiRequest<F>, SubmitError> {
        self.validate()?;
        Ok(ApiRequest::new(
            COURSES_PATH,
            RequestBody::Multipart(self.to_parts()),
        ))
    }
}

/// A view that can also put the course form back to its defaults
pub trait CourseFormView: SubmissionView {
    fn reset_form(&self);
}

/// Drives the course creation form
pub struct CourseController<T> {
    transport: T,
}

impl<T> CourseController<T>
where
    T: HttpTransport,
    T::File: Clone,
{
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Submit a snapshot of the form; resets the view's form on success.
    pub async fn submit<V>(
        &self,
        view: &V,
        liveness: &Liveness,
        form: CourseForm<T::File>,
    ) -> SubmissionOutcome
    where
        V: CourseFormView + ?Sized,
    {
        let attempt = async {
            let request = form.to_request()?;
            let response = self.transport.post(request).await?;
            if response.ok() {
                Ok(())
            } else {
                Err(SubmitError::Rejected(COURSE_FAILED.to_string()))
            }
        };

        run_submission(view, liveness, attempt, |()| {
            view.set_status(SubmissionStatus::success(COURSE_CREATED));
            view.reset_form();
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::*;
    use crate::core::submission::testing::{FakeTransport, RecordingView};

    /// Stand-in for a browser file handle
    #[derive(Debug, Clone, PartialEq)]
    struct FakeFile(&'static str);

    type Form = CourseForm<FakeFile>;

    impl CourseFormView for RecordingView {
        fn reset_form(&self) {
            *self.resets.borrow_mut() += 1;
        }
    }

    fn text_parts(parts: &[MultipartPart<FakeFile>]) -> Vec<(&str, &str)> {
        parts
            .iter()
            .filter_map(|part| match part {
                MultipartPart::Text { name, value } => Some((name.as_str(), value.as_str())),
                MultipartPart::File { .. } => None,
            })
            .collect()
    }

    #[test]
    fn test_defaults() {
        let form = Form::default();

        assert_eq!(form.title, "");
        assert_eq!(form.description, "");
        assert_eq!(form.price, "0");
        assert_eq!(form.level, CourseLevel::Beginner);
        assert!(form.technologies.is_empty());
        assert_eq!(form.cover_image, None);
        assert!(!form.is_published);
    }

    #[test]
    fn test_apply_change_text_fields() {
        let mut form = Form::default();

        assert!(form.apply_change("title", FieldInput::Text("Intro".into())));
        assert!(form.apply_change("description", FieldInput::Text("Basics".into())));
        assert!(form.apply_change("price", FieldInput::Text("9.99".into())));
        assert!(form.apply_change("level", FieldInput::Text("ADVANCED".into())));

        assert_eq!(form.title, "Intro");
        assert_eq!(form.description, "Basics");
        assert_eq!(form.price, "9.99");
        assert_eq!(form.level, CourseLevel::Advanced);
    }

    #[test]
    fn test_apply_change_checkbox_uses_checked() {
        let mut form = Form::default();

        assert!(form.apply_change("isPublished", FieldInput::Checked(true)));
        assert!(form.is_published);

        // The literal value "on" of a checkbox is not a boolean
        assert!(!form.apply_change("isPublished", FieldInput::Text("on".into())));
        assert!(form.is_published);
    }

    #[test]
    fn test_apply_change_rejects_unknown() {
        let mut form = Form::default();

        assert!(!form.apply_change("instructor", FieldInput::Text("bob".into())));
        assert!(!form.apply_change("level", FieldInput::Text("EXPERT".into())));
        assert_eq!(form, Form::default());
    }

    #[test]
    fn test_select_technologies_rescans_all_options() {
        let mut form = Form::default();

        form.select_technologies([
            ("python", true),
            ("javascript", false),
            ("react", true),
            ("django", false),
        ]);
        assert_eq!(
            form.technologies,
            BTreeSet::from([Technology::Python, Technology::React])
        );

        // A later change replaces the whole set
        form.select_technologies([("python", false), ("django", true)]);
        assert_eq!(form.technologies, BTreeSet::from([Technology::Django]));
    }

    #[test]
    fn test_select_technologies_idempotent() {
        let options = [("react", true), ("python", true), ("rust", true)];
        let mut form = Form::default();

        form.select_technologies(options);
        let first = form.technologies.clone();
        form.select_technologies(options);

        assert_eq!(form.technologies, first);
        assert_eq!(form.technologies.len(), 2);
    }

    #[test]
    fn test_validate_price() {
        let mut form = Form::default();
        for ok in ["0", "9.99", " 12 ", "0.01"] {
            form.price = ok.to_string();
            assert_eq!(form.validate(), Ok(()), "price {:?}", ok);
        }
        for bad in ["-1", "", "abc", "NaN", "inf"] {
            form.price = bad.to_string();
            assert_eq!(
                form.validate(),
                Err(SubmitError::Validation(INVALID_PRICE.into())),
                "price {:?}",
                bad
            );
        }
    }

    #[test]
    fn test_parts_expand_technologies_and_rename_cover() {
        let mut form = Form::default();
        form.title = "Intro".into();
        form.price = "9.99".into();
        form.is_published = true;
        form.select_technologies([("react", true), ("python", true)]);
        form.set_cover_image(Some(FakeFile("cover.png")));

        let parts = form.to_parts();

        assert_eq!(
            text_parts(&parts),
            vec![
                ("title", "Intro"),
                ("description", ""),
                ("price", "9.99"),
                ("level", "BEGINNER"),
                ("technologies", "python"),
                ("technologies", "react"),
                ("isPublished", "true"),
            ]
        );
        assert!(parts.contains(&MultipartPart::File {
            name: "cover_image".into(),
            file: FakeFile("cover.png"),
        }));
        assert!(parts.iter().all(|p| p.name() != "coverImage"));
    }

    #[test]
    fn test_parts_without_cover_image() {
        let parts = Form::default().to_parts();

        assert!(parts.iter().all(|p| p.name() != "cover_image"));
        assert!(parts.iter().all(|p| p.name() != "technologies"));
        assert_eq!(
            text_parts(&parts).last(),
            Some(&("isPublished", "false"))
        );
    }

    #[test]
    fn test_level_and_technology_round_trip_strings() {
        for level in CourseLevel::ALL {
            assert_eq!(level.as_str().parse::<CourseLevel>(), Ok(level));
        }
        for tech in Technology::ALL {
            assert_eq!(tech.to_string().parse::<Technology>(), Ok(tech));
        }
        assert_eq!(Technology::Javascript.label(), "JavaScript");
    }

    #[tokio::test]
    async fn test_submit_created_resets_form() {
        let view = Rc::new(RecordingView::default());
        let controller =
            CourseController::new(FakeTransport::<FakeFile>::responding(201, "{}").watching(view.clone()));

        let mut form = Form::default();
        form.title = "Intro".into();
        form.price = "9.99".into();
        form.select_technologies([("python", true), ("react", true)]);

        let outcome = controller.submit(view.as_ref(), &Liveness::new(), form).await;

        assert_eq!(outcome, SubmissionOutcome::Succeeded);
        assert_eq!(*view.status.borrow(), SubmissionStatus::success(COURSE_CREATED));
        assert_eq!(*view.resets.borrow(), 1);
        assert_eq!(*view.loading_history.borrow(), vec![true, false]);
        assert_eq!(*controller.transport.loading_seen.borrow(), vec![true]);

        let sent = controller.transport.sent.borrow();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].path, "/api/courses/");
        let RequestBody::Multipart(parts) = &sent[0].body else {
            panic!("course must be multipart");
        };
        assert!(parts.iter().all(|p| p.name() != "cover_image"));
        assert_eq!(
            parts.iter().filter(|p| p.name() == "technologies").count(),
            2
        );
    }

    #[tokio::test]
    async fn test_submit_rejected_uses_generic_message() {
        let view = RecordingView::default();
        let controller = CourseController::new(FakeTransport::<FakeFile>::responding(
            400,
            r#"{"error":"title taken"}"#,
        ));

        let outcome = controller.submit(&view, &Liveness::new(), Form::default()).await;

        assert_eq!(
            outcome,
            SubmissionOutcome::Failed(SubmitError::Rejected(COURSE_FAILED.into()))
        );
        assert_eq!(view.status.borrow().message(), Some(COURSE_FAILED));
        assert_eq!(*view.resets.borrow(), 0);
        assert!(!view.is_loading());
    }

    #[tokio::test]
    async fn test_submit_transport_error_clears_loading() {
        let view = RecordingView::default();
        let controller = CourseController::new(FakeTransport::<FakeFile>::failing(
            SubmitError::transport("Failed to fetch"),
        ));

        controller.submit(&view, &Liveness::new(), Form::default()).await;

        assert_eq!(*view.status.borrow(), SubmissionStatus::error("Failed to fetch"));
        assert_eq!(*view.loading_history.borrow(), vec![true, false]);
    }

    #[tokio::test]
    async fn test_submit_negative_price_sends_nothing() {
        let view = RecordingView::default();
        let controller = CourseController::new(FakeTransport::<FakeFile>::responding(201, "{}"));

        let mut form = Form::default();
        form.price = "-5".into();

        let outcome = controller.submit(&view, &Liveness::new(), form).await;

        assert_eq!(
            outcome,
            SubmissionOutcome::Failed(SubmitError::Validation(INVALID_PRICE.into()))
        );
        assert!(controller.transport.sent.borrow().is_empty());
        assert!(!view.is_loading());
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut form = Form::default();
        form.title = "Intro".into();
        form.price = "9.99".into();
        form.level = CourseLevel::Intermediate;
        form.select_technologies([("django", true)]);
        form.set_cover_image(Some(FakeFile("a.jpg")));
        form.is_published = true;

        form.reset();

        assert_eq!(form, Form::default());
    }
}

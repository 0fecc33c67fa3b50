//! Add-resource form state machine.
//!
//! Pure state transitions: the machine interprets form actions and decides
//! on commands, with no IO of its own. The modal component executes the
//! commands (insert, close) and feeds the outcomes back in as actions.
//!
//! Lifecycle: `Select` -> `Form` -> `Submitting` -> (closed | `Form` with
//! error), with close allowed from every step.

use crate::types::{Category, NewResource, ResourceKind};

/// Which step of the modal flow is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalStep {
    #[default]
    Select,
    Form,
    Submitting,
}

/// Editable field values. `category` defaults to Jobs, matching the
/// pre-selected option in the dropdown.
#[derive(Debug, Clone, PartialEq)]
pub struct FormFields {
    pub title: String,
    pub category: Category,
    pub content: String,
    pub last_apply_date: String,
}

impl Default for FormFields {
    fn default() -> Self {
        Self {
            title: String::new(),
            category: Category::Jobs,
            content: String::new(),
            last_apply_date: String::new(),
        }
    }
}

/// Everything that can happen to the form.
#[derive(Debug, Clone, PartialEq)]
pub enum FormAction {
    ChooseKind(ResourceKind),
    Back,
    SetTitle(String),
    SetCategory(Category),
    SetContent(String),
    SetLastApplyDate(String),
    Submit,
    SubmitSucceeded,
    SubmitFailed(String),
    Reset,
}

/// IO the machine asks the modal to perform.
#[derive(Debug, Clone, PartialEq)]
pub enum FormCommand {
    /// Persist the row, then report back with `SubmitSucceeded`/`SubmitFailed`.
    Insert(NewResource),
    /// Submission landed; dismiss the modal.
    Close,
}

/// Client-side validation failures. These block submission, so no network
/// call is ever issued for an invalid form.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("A title is required.")]
    TitleRequired,
    #[error("Content is required.")]
    ContentRequired,
    #[error("Enter a valid http(s) URL.")]
    InvalidUrl,
}

/// Required fields for one kind/category combination.
///
/// Enumerated in a single table so the precedence between kind rules and
/// the Jobs exemption lives in exactly one place: a link needs a URL even
/// under Jobs, a note's body is optional only under Jobs (the entry may
/// exist purely to track the apply date), and an image's URL is optional
/// because the upload flow is not implemented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRequirements {
    pub content_required: bool,
    pub content_must_be_url: bool,
}

impl FieldRequirements {
    pub fn for_entry(kind: ResourceKind, category: Category) -> Self {
        let jobs = category == Category::Jobs;
        match (kind, jobs) {
            (ResourceKind::Link, _) => Self {
                content_required: true,
                content_must_be_url: true,
            },
            (ResourceKind::Note, true) => Self {
                content_required: false,
                content_must_be_url: false,
            },
            (ResourceKind::Note, false) => Self {
                content_required: true,
                content_must_be_url: false,
            },
            (ResourceKind::Image, _) => Self {
                content_required: false,
                content_must_be_url: true,
            },
        }
    }
}

pub fn validate(kind: ResourceKind, fields: &FormFields) -> Result<(), ValidationError> {
    if fields.title.trim().is_empty() {
        return Err(ValidationError::TitleRequired);
    }

    let requirements = FieldRequirements::for_entry(kind, fields.category);
    let content = fields.content.trim();

    if content.is_empty() {
        if requirements.content_required {
            return Err(ValidationError::ContentRequired);
        }
        return Ok(());
    }

    if requirements.content_must_be_url && !is_http_url(content) {
        return Err(ValidationError::InvalidUrl);
    }

    Ok(())
}

fn is_http_url(candidate: &str) -> bool {
    url::Url::parse(candidate)
        .map(|parsed| matches!(parsed.scheme(), "http" | "https"))
        .unwrap_or(false)
}

/// The form state machine itself.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResourceForm {
    step: ModalStep,
    kind: Option<ResourceKind>,
    fields: FormFields,
    error: Option<String>,
}

impl ResourceForm {
    pub fn step(&self) -> ModalStep {
        self.step
    }

    pub fn kind(&self) -> Option<ResourceKind> {
        self.kind
    }

    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_submitting(&self) -> bool {
        self.step == ModalStep::Submitting
    }

    /// Process one action and optionally return a command.
    ///
    /// Actions that do not apply to the current step are ignored, so stray
    /// UI events cannot corrupt the flow.
    pub fn apply(&mut self, action: FormAction) -> Option<FormCommand> {
        match action {
            FormAction::ChooseKind(kind) => {
                if self.step != ModalStep::Select {
                    return None;
                }
                // Title/category/apply-date survive a kind switch; the
                // kind-specific content does not.
                if self.kind != Some(kind) {
                    self.fields.content.clear();
                }
                self.kind = Some(kind);
                self.step = ModalStep::Form;
                None
            }

            FormAction::Back => {
                if self.step == ModalStep::Form {
                    self.step = ModalStep::Select;
                }
                None
            }

            FormAction::SetTitle(title) => {
                if self.step == ModalStep::Form {
                    self.fields.title = title;
                }
                None
            }

            FormAction::SetCategory(category) => {
                if self.step == ModalStep::Form {
                    self.fields.category = category;
                }
                None
            }

            FormAction::SetContent(content) => {
                if self.step == ModalStep::Form {
                    self.fields.content = content;
                }
                None
            }

            FormAction::SetLastApplyDate(date) => {
                if self.step == ModalStep::Form {
                    self.fields.last_apply_date = date;
                }
                None
            }

            FormAction::Submit => {
                if self.step != ModalStep::Form {
                    return None;
                }
                let kind = self.kind?;

                if let Err(invalid) = validate(kind, &self.fields) {
                    self.error = Some(invalid.to_string());
                    return None;
                }

                self.error = None;
                self.step = ModalStep::Submitting;
                Some(FormCommand::Insert(self.new_resource(kind)))
            }

            FormAction::SubmitSucceeded => {
                if self.step != ModalStep::Submitting {
                    return None;
                }
                Some(FormCommand::Close)
            }

            FormAction::SubmitFailed(message) => {
                if self.step == ModalStep::Submitting {
                    // Fields are retained so the user can retry.
                    self.step = ModalStep::Form;
                    self.error = Some(message);
                }
                None
            }

            FormAction::Reset => {
                *self = Self::default();
                None
            }
        }
    }

    fn new_resource(&self, kind: ResourceKind) -> NewResource {
        let apply_date = self.fields.last_apply_date.trim();
        NewResource {
            kind,
            title: self.fields.title.trim().to_string(),
            content: self.fields.content.trim().to_string(),
            category: self.fields.category,
            // Only meaningful for Jobs; never sent otherwise.
            last_apply_date: (self.fields.category == Category::Jobs && !apply_date.is_empty())
                .then(|| apply_date.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form_with(kind: ResourceKind, title: &str, category: Category, content: &str) -> ResourceForm {
        let mut form = ResourceForm::default();
        form.apply(FormAction::ChooseKind(kind));
        form.apply(FormAction::SetTitle(title.to_string()));
        form.apply(FormAction::SetCategory(category));
        form.apply(FormAction::SetContent(content.to_string()));
        form
    }

    #[test]
    fn test_choose_kind_moves_to_form_with_jobs_default() {
        let mut form = ResourceForm::default();
        assert_eq!(form.step(), ModalStep::Select);

        form.apply(FormAction::ChooseKind(ResourceKind::Note));
        assert_eq!(form.step(), ModalStep::Form);
        assert_eq!(form.kind(), Some(ResourceKind::Note));
        assert_eq!(form.fields().category, Category::Jobs);
    }

    #[test]
    fn test_valid_submit_emits_exactly_one_insert() {
        let mut form = form_with(
            ResourceKind::Note,
            "Reading list",
            Category::Ideas,
            "collect essays on type systems",
        );

        let command = form.apply(FormAction::Submit);
        let Some(FormCommand::Insert(row)) = command else {
            panic!("expected an insert command, got {command:?}");
        };
        assert_eq!(row.title, "Reading list");
        assert_eq!(form.step(), ModalStep::Submitting);

        // A duplicate submit while in flight must not emit a second insert.
        assert_eq!(form.apply(FormAction::Submit), None);
    }

    #[test]
    fn test_failed_validation_emits_nothing() {
        let mut form = form_with(ResourceKind::Note, "", Category::Ideas, "body");

        assert_eq!(form.apply(FormAction::Submit), None);
        assert_eq!(form.step(), ModalStep::Form);
        assert_eq!(form.error(), Some(ValidationError::TitleRequired.to_string().as_str()));
    }

    #[test]
    fn test_link_rejects_non_url_before_any_network_call() {
        let mut form = form_with(ResourceKind::Link, "Docs", Category::Education, "not-a-url");

        assert_eq!(form.apply(FormAction::Submit), None);
        assert_eq!(form.error(), Some(ValidationError::InvalidUrl.to_string().as_str()));
    }

    #[test]
    fn test_link_accepts_https_url() {
        let mut form = form_with(
            ResourceKind::Link,
            "Docs",
            Category::Education,
            "https://example.com",
        );

        assert!(matches!(
            form.apply(FormAction::Submit),
            Some(FormCommand::Insert(_))
        ));
    }

    #[test]
    fn test_link_requires_url_even_under_jobs() {
        // Kind rule outranks the Jobs content exemption.
        let mut form = form_with(ResourceKind::Link, "Role posting", Category::Jobs, "");

        assert_eq!(form.apply(FormAction::Submit), None);
        assert_eq!(
            form.error(),
            Some(ValidationError::ContentRequired.to_string().as_str())
        );
    }

    #[test]
    fn test_jobs_note_accepts_empty_content_with_apply_date() {
        let mut form = form_with(ResourceKind::Note, "Senior React Developer", Category::Jobs, "");
        form.apply(FormAction::SetLastApplyDate("2024-12-01".to_string()));

        let command = form.apply(FormAction::Submit);
        let Some(FormCommand::Insert(row)) = command else {
            panic!("expected an insert command, got {command:?}");
        };
        assert_eq!(row.content, "");
        assert_eq!(row.last_apply_date.as_deref(), Some("2024-12-01"));
    }

    #[test]
    fn test_non_jobs_note_requires_content() {
        let mut form = form_with(ResourceKind::Note, "Lyrics", Category::Songs, "");

        assert_eq!(form.apply(FormAction::Submit), None);
        assert_eq!(
            form.error(),
            Some(ValidationError::ContentRequired.to_string().as_str())
        );
    }

    #[test]
    fn test_apply_date_dropped_outside_jobs() {
        let mut form = form_with(ResourceKind::Note, "Tabs", Category::Songs, "chords");
        // A date left over from an earlier Jobs selection must not be sent.
        form.apply(FormAction::SetCategory(Category::Jobs));
        form.apply(FormAction::SetLastApplyDate("2024-12-01".to_string()));
        form.apply(FormAction::SetCategory(Category::Songs));

        let Some(FormCommand::Insert(row)) = form.apply(FormAction::Submit) else {
            panic!("expected an insert command");
        };
        assert_eq!(row.last_apply_date, None);
    }

    #[test]
    fn test_back_retains_title_and_category_but_not_switched_content() {
        let mut form = form_with(
            ResourceKind::Note,
            "Keep me",
            Category::Politics,
            "draft body",
        );

        form.apply(FormAction::Back);
        assert_eq!(form.step(), ModalStep::Select);

        // Re-choosing the same kind keeps the content.
        form.apply(FormAction::ChooseKind(ResourceKind::Note));
        assert_eq!(form.fields().content, "draft body");

        // Switching kinds drops the kind-specific content only.
        form.apply(FormAction::Back);
        form.apply(FormAction::ChooseKind(ResourceKind::Link));
        assert_eq!(form.fields().title, "Keep me");
        assert_eq!(form.fields().category, Category::Politics);
        assert_eq!(form.fields().content, "");
    }

    #[test]
    fn test_insert_failure_returns_to_form_with_fields_retained() {
        let mut form = form_with(
            ResourceKind::Link,
            "Docs",
            Category::Education,
            "https://example.com",
        );
        form.apply(FormAction::Submit);

        form.apply(FormAction::SubmitFailed("row violates policy".to_string()));
        assert_eq!(form.step(), ModalStep::Form);
        assert_eq!(form.error(), Some("row violates policy"));
        assert_eq!(form.fields().content, "https://example.com");

        // Retry works from the retained state.
        assert!(matches!(
            form.apply(FormAction::Submit),
            Some(FormCommand::Insert(_))
        ));
    }

    #[test]
    fn test_success_closes_after_submitting() {
        let mut form = form_with(
            ResourceKind::Link,
            "Docs",
            Category::Education,
            "https://example.com",
        );
        form.apply(FormAction::Submit);

        assert_eq!(form.apply(FormAction::SubmitSucceeded), Some(FormCommand::Close));
        // Success outside of a submit in flight is meaningless.
        let mut idle = ResourceForm::default();
        assert_eq!(idle.apply(FormAction::SubmitSucceeded), None);
    }

    #[test]
    fn test_reset_restores_initial_state_from_any_step() {
        let mut form = form_with(ResourceKind::Note, "Scratch", Category::Ideas, "text");
        form.apply(FormAction::Submit);

        form.apply(FormAction::Reset);
        assert_eq!(form, ResourceForm::default());
        assert_eq!(form.step(), ModalStep::Select);
        assert!(form.fields().title.is_empty());
    }

    #[test]
    fn test_edits_ignored_while_submitting() {
        let mut form = form_with(
            ResourceKind::Note,
            "Original",
            Category::Ideas,
            "body",
        );
        form.apply(FormAction::Submit);

        form.apply(FormAction::SetTitle("Changed".to_string()));
        assert_eq!(form.fields().title, "Original");
    }

    #[test]
    fn test_requirements_table_covers_all_combinations() {
        for kind in ResourceKind::variants() {
            for category in Category::variants() {
                let requirements = FieldRequirements::for_entry(*kind, *category);
                match kind {
                    ResourceKind::Link => {
                        assert!(requirements.content_required);
                        assert!(requirements.content_must_be_url);
                    }
                    ResourceKind::Note => {
                        assert_eq!(
                            requirements.content_required,
                            *category != Category::Jobs
                        );
                        assert!(!requirements.content_must_be_url);
                    }
                    ResourceKind::Image => {
                        assert!(!requirements.content_required);
                        assert!(requirements.content_must_be_url);
                    }
                }
            }
        }
    }

    #[test]
    fn test_image_content_optional_but_checked_when_present() {
        let mut form = form_with(ResourceKind::Image, "Moodboard", Category::Ideas, "");
        assert!(matches!(
            form.apply(FormAction::Submit),
            Some(FormCommand::Insert(_))
        ));

        let mut form = form_with(ResourceKind::Image, "Moodboard", Category::Ideas, "nope");
        assert_eq!(form.apply(FormAction::Submit), None);
        assert_eq!(form.error(), Some(ValidationError::InvalidUrl.to_string().as_str()));
    }
}

use models::{api::preauthkey::CreatePreAuthKeyRequest, ErrorType};
use time::{Duration, OffsetDateTime};

/// Smallest number of days a new key may stay valid.
pub const MIN_EXPIRATION_DAYS: i64 = 1;
/// Largest number of days a new key may stay valid.
pub const MAX_EXPIRATION_DAYS: i64 = 90;

/// The editable draft behind the create-key form. A fresh draft is created
/// every time the modal opens and discarded when it closes; nothing is kept
/// across opens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateKeyForm {
	/// Name of the owner the key will register nodes under
	pub user: String,
	/// Whether the key may authorize more than one registration
	pub reusable: bool,
	/// Whether nodes registered with the key are transient
	pub ephemeral: bool,
	/// Raw text of the expiration field, in days
	pub expiration_days: String,
	/// Tags collected on the form. The create request always carries an
	/// empty list, whatever this holds.
	pub acl_tags: Vec<String>,
}

impl Default for CreateKeyForm {
	fn default() -> Self {
		Self {
			user: String::new(),
			reusable: false,
			ephemeral: false,
			expiration_days: MAX_EXPIRATION_DAYS.to_string(),
			acl_tags: Vec::new(),
		}
	}
}

/// Why a single field fails validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
	/// The field is empty, or not a well-formed value
	Required,
	/// The value is below the given bound
	TooSmall(i64),
	/// The value is above the given bound
	TooLarge(i64),
}

impl FieldError {
	/// The display string for this failure.
	pub fn message(self) -> String {
		match self {
			Self::Required => "This field is required".to_string(),
			Self::TooSmall(min) => format!("Must be at least {min}"),
			Self::TooLarge(max) => format!("Cannot be more than {max}"),
		}
	}
}

/// The per-field validation outcome of a draft.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Validation {
	/// Failure of the owner field, if any
	pub user: Option<FieldError>,
	/// Failure of the expiration field, if any
	pub expiration_days: Option<FieldError>,
}

impl Validation {
	/// Whether every rule passed.
	pub fn is_ok(&self) -> bool {
		self.user.is_none() && self.expiration_days.is_none()
	}
}

impl CreateKeyForm {
	/// Runs every field rule over the draft. Pure; the caller re-runs it on
	/// every field change and on each submit attempt.
	pub fn validate(&self) -> Validation {
		let user = self.user.is_empty().then_some(FieldError::Required);
		let expiration_days = match self.expiration_days.trim().parse::<i64>() {
			Err(_) => Some(FieldError::Required),
			Ok(days) if days < MIN_EXPIRATION_DAYS => Some(FieldError::TooSmall(MIN_EXPIRATION_DAYS)),
			Ok(days) if days > MAX_EXPIRATION_DAYS => Some(FieldError::TooLarge(MAX_EXPIRATION_DAYS)),
			Ok(_) => None,
		};

		Validation {
			user,
			expiration_days,
		}
	}

	/// Builds the wire request for the draft, or `None` while any rule
	/// fails. The relative day count is converted to the absolute instant
	/// `now + days` here; only the absolute instant goes on the wire. The
	/// ACL tags are always submitted empty.
	pub fn to_request(&self, now: OffsetDateTime) -> Option<CreatePreAuthKeyRequest> {
		if !self.validate().is_ok() {
			return None;
		}
		let days = self.expiration_days.trim().parse::<i64>().ok()?;

		Some(CreatePreAuthKeyRequest {
			user: self.user.clone(),
			reusable: self.reusable,
			ephemeral: self.ephemeral,
			expiration: now + Duration::days(days),
			acl_tags: Vec::new(),
		})
	}
}

/// What the submit path of the workflow is currently doing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmitStatus {
	/// The form is shown, nothing in flight, no error
	#[default]
	Idle,
	/// Exactly one create request is in flight; the form does not accept
	/// edits or another submit
	Submitting,
	/// The request went through; the workflow is done and only waits to be
	/// unmounted
	Succeeded,
	/// The request was rejected; the form is editable again and the error
	/// is shown inline
	Failed(ErrorType),
}

/// A side effect the caller must run after a submit resolves. Effects come
/// back as an ordered list; the workflow itself never calls out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SideEffect {
	/// Tell the host a key was created
	NotifyCreated,
	/// Ask the host to close the modal
	Dismiss,
}

/// The whole state of the create-key workflow: the draft plus the submit
/// machine. Updated only through the reducer methods below, so every
/// transition stays testable without a browser.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthKeyCreateFlow {
	/// The editable draft
	pub form: CreateKeyForm,
	/// What the submit path is doing
	pub status: SubmitStatus,
}

impl AuthKeyCreateFlow {
	/// Whether the form currently accepts edits. Everything is locked while
	/// a request is in flight, and stays locked once the workflow succeeded.
	pub fn is_editable(&self) -> bool {
		matches!(self.status, SubmitStatus::Idle | SubmitStatus::Failed(_))
	}

	/// The workflow-level error message to render inline, if any.
	pub fn submit_error(&self) -> Option<String> {
		match &self.status {
			SubmitStatus::Failed(error) => Some(error.message().into()),
			_ => None,
		}
	}

	/// Starts a submit. Returns the wire request to send when the submit is
	/// allowed, `None` while a request is already in flight or any
	/// validation rule fails. Entering the submit moves the machine to
	/// [`SubmitStatus::Submitting`].
	pub fn begin_submit(&mut self, now: OffsetDateTime) -> Option<CreatePreAuthKeyRequest> {
		if !self.is_editable() {
			return None;
		}
		let request = self.form.to_request(now)?;
		self.status = SubmitStatus::Submitting;

		Some(request)
	}

	/// Applies the outcome of the in-flight submit. On success the machine
	/// is done and the caller gets the notify-then-dismiss effects to run in
	/// that order; on failure the form unlocks with the inline error and no
	/// effects.
	pub fn finish_submit(&mut self, result: Result<(), ErrorType>) -> Vec<SideEffect> {
		match result {
			Ok(()) => {
				self.status = SubmitStatus::Succeeded;
				vec![SideEffect::NotifyCreated, SideEffect::Dismiss]
			}
			Err(error) => {
				self.status = SubmitStatus::Failed(error);
				Vec::new()
			}
		}
	}
}

/// Decorative avatar class for an owner option. Numeric server ids keep
/// their own number modulo 10; anything else falls back to a byte-sum hash
/// so the class stays deterministic per id.
pub fn avatar_icon_class(id: &str) -> String {
	let hash = id
		.trim()
		.parse::<u64>()
		.unwrap_or_else(|_| id.bytes().map(u64::from).sum());

	format!("icon icon-avatar-{}", hash % 10)
}

#[cfg(test)]
mod tests {
	use models::ErrorType;
	use time::{macros::datetime, Duration};

	use super::{
		avatar_icon_class,
		AuthKeyCreateFlow,
		CreateKeyForm,
		FieldError,
		SideEffect,
		SubmitStatus,
	};

	fn filled_form() -> CreateKeyForm {
		CreateKeyForm {
			user: "alice".to_string(),
			..Default::default()
		}
	}

	fn filled_flow() -> AuthKeyCreateFlow {
		AuthKeyCreateFlow {
			form: filled_form(),
			..Default::default()
		}
	}

	#[test]
	fn fresh_draft_has_defaults_and_no_owner() {
		let form = CreateKeyForm::default();

		assert!(!form.reusable);
		assert!(!form.ephemeral);
		assert_eq!(form.expiration_days, "90");
		assert!(form.acl_tags.is_empty());
		assert_eq!(form.validate().user, Some(FieldError::Required));
	}

	#[test]
	fn missing_owner_blocks_submission() {
		let form = CreateKeyForm::default();

		assert!(form.to_request(datetime!(2024-04-02 08:30 UTC)).is_none());
	}

	#[test]
	fn non_integer_expiration_is_required_class() {
		for value in ["", "abc", "7.5", "1e3"] {
			let form = CreateKeyForm {
				expiration_days: value.to_string(),
				..filled_form()
			};

			assert_eq!(
				form.validate().expiration_days,
				Some(FieldError::Required),
				"value {value:?} should fail as required",
			);
			assert!(form.to_request(datetime!(2024-04-02 08:30 UTC)).is_none());
		}
	}

	#[test]
	fn expiration_below_minimum_blocks_submission() {
		let mut flow = AuthKeyCreateFlow {
			form: CreateKeyForm {
				expiration_days: "0".to_string(),
				..filled_form()
			},
			..Default::default()
		};

		assert_eq!(
			flow.form.validate().expiration_days,
			Some(FieldError::TooSmall(1))
		);
		assert_eq!(
			flow.form.validate().expiration_days.unwrap().message(),
			"Must be at least 1"
		);
		assert!(flow.begin_submit(datetime!(2024-04-02 08:30 UTC)).is_none());
		assert_eq!(flow.status, SubmitStatus::Idle);
	}

	#[test]
	fn expiration_above_maximum_blocks_submission() {
		let form = CreateKeyForm {
			expiration_days: "91".to_string(),
			..filled_form()
		};

		assert_eq!(form.validate().expiration_days, Some(FieldError::TooLarge(90)));
		assert_eq!(
			form.validate().expiration_days.unwrap().message(),
			"Cannot be more than 90"
		);
		assert!(form.to_request(datetime!(2024-04-02 08:30 UTC)).is_none());
	}

	#[test]
	fn expiration_bounds_are_inclusive() {
		for value in ["1", "90"] {
			let form = CreateKeyForm {
				expiration_days: value.to_string(),
				..filled_form()
			};

			assert!(form.validate().is_ok(), "value {value:?} should pass");
		}
	}

	#[test]
	fn expiration_is_the_absolute_instant() {
		let now = datetime!(2024-04-02 08:30 UTC);
		let request = CreateKeyForm {
			expiration_days: "30".to_string(),
			..filled_form()
		}
		.to_request(now)
		.unwrap();

		assert_eq!(request.expiration - now, Duration::days(30));
		assert_eq!(
			request.expiration - now,
			Duration::milliseconds(30 * 86_400_000)
		);
	}

	#[test]
	fn acl_tags_are_always_submitted_empty() {
		let request = CreateKeyForm {
			acl_tags: vec!["tag:ci".to_string(), "tag:prod".to_string()],
			..filled_form()
		}
		.to_request(datetime!(2024-04-02 08:30 UTC))
		.unwrap();

		assert!(request.acl_tags.is_empty());
	}

	#[test]
	fn second_submit_while_in_flight_is_ignored() {
		let now = datetime!(2024-04-02 08:30 UTC);
		let mut flow = filled_flow();

		assert!(flow.begin_submit(now).is_some());
		assert_eq!(flow.status, SubmitStatus::Submitting);
		assert!(flow.begin_submit(now).is_none());
		assert_eq!(flow.status, SubmitStatus::Submitting);
	}

	#[test]
	fn success_notifies_then_dismisses() {
		let mut flow = filled_flow();

		flow.begin_submit(datetime!(2024-04-02 08:30 UTC)).unwrap();
		let effects = flow.finish_submit(Ok(()));

		assert_eq!(effects, [SideEffect::NotifyCreated, SideEffect::Dismiss]);
		assert_eq!(flow.status, SubmitStatus::Succeeded);
		assert!(!flow.is_editable());
		assert!(flow
			.begin_submit(datetime!(2024-04-02 08:31 UTC))
			.is_none());
	}

	#[test]
	fn failure_keeps_the_form_editable() {
		let mut flow = filled_flow();

		flow.begin_submit(datetime!(2024-04-02 08:30 UTC)).unwrap();
		let effects = flow.finish_submit(Err(ErrorType::Unauthorized));

		assert!(effects.is_empty());
		assert_eq!(
			flow.submit_error().as_deref(),
			Some("You are not authorized to perform that action")
		);
		assert!(flow.is_editable());
		assert!(flow
			.begin_submit(datetime!(2024-04-02 08:31 UTC))
			.is_some());
	}

	#[test]
	fn create_scenario_with_default_expiry() {
		let now = datetime!(2024-04-02 08:30 UTC);
		let mut flow = filled_flow();

		let request = flow.begin_submit(now).unwrap();
		assert_eq!(request.user, "alice");
		assert!(!request.reusable);
		assert!(!request.ephemeral);
		assert_eq!(request.expiration, datetime!(2024-07-01 08:30 UTC));
		assert!(request.acl_tags.is_empty());

		let effects = flow.finish_submit(Ok(()));
		assert_eq!(effects, [SideEffect::NotifyCreated, SideEffect::Dismiss]);
	}

	#[test]
	fn avatar_class_is_deterministic() {
		assert_eq!(avatar_icon_class("7"), "icon icon-avatar-7");
		assert_eq!(avatar_icon_class("12"), "icon icon-avatar-2");
		assert_eq!(avatar_icon_class("alice"), avatar_icon_class("alice"));
		assert!(avatar_icon_class("alice").starts_with("icon icon-avatar-"));
	}
}

//! Form/edit sessions
//!
//! A session holds a transient draft populated from defaults (create) or
//! from a selected entity (edit), tracks per-field validation errors, and
//! carries the submitting flag. Validation always runs before any network
//! call; failures block submission and are reported per field.

use std::collections::BTreeMap;

use console_client::Actor;
use rust_decimal::Decimal;
use validator::ValidateEmail;

use crate::record::Record;

/// Per-field validation errors
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_default().push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, field: &str) -> &[String] {
        self.0.get(field).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Vec<String>)> {
        self.0.iter()
    }
}

/// Whether the session creates a new entity or edits an existing one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit,
}

/// A form draft for some entity type
pub trait Draft: Clone + Send + Sync + 'static {
    type Entity: Record;
    type Create: Send + Sync;
    type Update: Send + Sync;

    /// Fresh draft with screen defaults (create mode)
    fn from_defaults() -> Self;

    /// Draft seeded from an existing entity (edit mode), applying any
    /// display transforms (e.g. joining first/last name into one field)
    fn from_entity(entity: &Self::Entity) -> Self;

    /// The seed entity's id; `None` in create mode
    fn entity_id(&self) -> Option<&str>;

    /// Field-level validation; an empty result means the draft may be
    /// submitted. The actor is available for local permission rules.
    fn validate(&self, actor: &Actor) -> FieldErrors;

    /// Build the create payload (only called after validation passed)
    fn to_create(&self) -> Self::Create;

    /// Build the update payload (only called after validation passed)
    fn to_update(&self) -> Self::Update;
}

/// Live create-or-edit session
#[derive(Debug, Clone)]
pub struct FormSession<D: Draft> {
    mode: FormMode,
    draft: D,
    errors: FieldErrors,
    submitting: bool,
}

impl<D: Draft> FormSession<D> {
    /// Start a create session from defaults
    pub fn create() -> Self {
        Self {
            mode: FormMode::Create,
            draft: D::from_defaults(),
            errors: FieldErrors::new(),
            submitting: false,
        }
    }

    /// Start an edit session seeded from an entity
    pub fn edit(seed: &D::Entity) -> Self {
        Self {
            mode: FormMode::Edit,
            draft: D::from_entity(seed),
            errors: FieldErrors::new(),
            submitting: false,
        }
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn draft(&self) -> &D {
        &self.draft
    }

    /// Mutable access for field edits
    pub fn draft_mut(&mut self) -> &mut D {
        &mut self.draft
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub(crate) fn set_submitting(&mut self, value: bool) {
        self.submitting = value;
    }

    /// Run draft validation, storing the per-field errors. Returns whether
    /// the draft may be submitted.
    pub fn validate(&mut self, actor: &Actor) -> bool {
        self.errors = self.draft.validate(actor);
        self.errors.is_empty()
    }
}

// ==================== Field rule helpers ====================

/// Required-field rule
pub fn require(errors: &mut FieldErrors, field: &str, value: &str) {
    if value.trim().is_empty() {
        errors.add(field, format!("{} is required", field));
    }
}

/// Email format rule (skipped when empty; pair with [`require`])
pub fn check_email(errors: &mut FieldErrors, field: &str, value: &str) {
    if !value.trim().is_empty() && !value.validate_email() {
        errors.add(field, "must be a valid email address");
    }
}

/// Password policy: length ≥ 8, at least one uppercase, lowercase, digit
pub fn check_password_policy(errors: &mut FieldErrors, field: &str, value: &str) {
    if value.len() < 8 {
        errors.add(field, "must be at least 8 characters");
    }
    if !value.chars().any(|c| c.is_ascii_uppercase()) {
        errors.add(field, "must contain an uppercase letter");
    }
    if !value.chars().any(|c| c.is_ascii_lowercase()) {
        errors.add(field, "must contain a lowercase letter");
    }
    if !value.chars().any(|c| c.is_ascii_digit()) {
        errors.add(field, "must contain a digit");
    }
}

/// Numeric-field rule: the raw input must parse as a decimal.
/// Returns the parsed value so callers can reuse it in payloads.
pub fn check_decimal(errors: &mut FieldErrors, field: &str, value: &str) -> Option<Decimal> {
    if value.trim().is_empty() {
        return None;
    }
    match value.trim().parse::<Decimal>() {
        Ok(parsed) => Some(parsed),
        Err(_) => {
            errors.add(field, "must be a number");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn require_flags_blank_values() {
        let mut errors = FieldErrors::new();
        require(&mut errors, "name", "   ");
        require(&mut errors, "email", "a@b.com");
        assert_eq!(errors.get("name").len(), 1);
        assert!(errors.get("email").is_empty());
    }

    #[test]
    fn email_rule_accepts_valid_rejects_invalid() {
        let mut errors = FieldErrors::new();
        check_email(&mut errors, "email", "ada@example.com");
        assert!(errors.is_empty());

        check_email(&mut errors, "email", "not-an-email");
        assert_eq!(errors.get("email").len(), 1);
    }

    #[test]
    fn password_policy_vectors() {
        // "abc" fails every rule but lowercase
        let mut errors = FieldErrors::new();
        check_password_policy(&mut errors, "password", "abc");
        assert_eq!(errors.get("password").len(), 3);
        let mut errors = FieldErrors::new();
        check_password_policy(&mut errors, "password", "Abcdef12");
        assert!(errors.is_empty());
    }

    #[test]
    fn decimal_rule_parses_or_flags() {
        let mut errors = FieldErrors::new();
        assert_eq!(
            check_decimal(&mut errors, "price", "99.50"),
            Some(Decimal::new(9950, 2))
        );
        assert!(errors.is_empty());

        assert!(check_decimal(&mut errors, "price", "ninety").is_none());
        assert_eq!(errors.get("price").len(), 1);
    }
}

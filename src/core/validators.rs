//! Composable validators for interactively collected input.
//!
//! A validator looks at one input value together with a caller-supplied
//! context (a registry, the answers gathered so far, ...) and either accepts
//! it or rejects it, optionally with a reason for the user.

use crate::core::registry::ModuleRegistry;
use crate::domain::ports::ConfigStore;
use std::fmt;

pub const EMPTY_ARTIFACT_ID: &str = "Artifact Id cannot be empty";
pub const DUPLICATE_ARTIFACT_ID: &str = "Duplicate artifact Id specified";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validation {
    Accepted,
    /// `None` is a silent rejection with nothing to show the user.
    Rejected(Option<String>),
}

impl Validation {
    pub fn rejected(reason: impl Into<String>) -> Self {
        Validation::Rejected(Some(reason.into()))
    }

    pub fn is_accepted(&self) -> bool {
        matches!(self, Validation::Accepted)
    }

    pub fn reason(&self) -> Option<&str> {
        match self {
            Validation::Rejected(Some(reason)) => Some(reason),
            _ => None,
        }
    }
}

impl From<bool> for Validation {
    fn from(accepted: bool) -> Self {
        if accepted {
            Validation::Accepted
        } else {
            Validation::Rejected(None)
        }
    }
}

impl fmt::Display for Validation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Validation::Accepted => write!(f, "accepted"),
            Validation::Rejected(Some(reason)) => write!(f, "{}", reason),
            Validation::Rejected(None) => write!(f, "rejected"),
        }
    }
}

pub trait Validator<C: ?Sized> {
    fn validate(&self, input: Option<&str>, context: &C) -> Validation;
}

impl<C: ?Sized, F> Validator<C> for F
where
    F: Fn(Option<&str>, &C) -> Validation,
{
    fn validate(&self, input: Option<&str>, context: &C) -> Validation {
        self(input, context)
    }
}

/// Validators run in order; the first result that is not `Accepted` wins.
pub struct SequentialValidator<'a, C: ?Sized> {
    validators: Vec<Box<dyn Validator<C> + 'a>>,
}

pub fn sequential_validator_factory<'a, C: ?Sized>(
    validators: Vec<Box<dyn Validator<C> + 'a>>,
) -> SequentialValidator<'a, C> {
    SequentialValidator { validators }
}

impl<'a, C: ?Sized> SequentialValidator<'a, C> {
    /// `None` means no decision, which only an empty chain returns. Absent
    /// input is handed to every member like any other value.
    pub fn validate(&self, input: Option<&str>, context: &C) -> Option<Validation> {
        if self.validators.is_empty() {
            return None;
        }

        for validator in &self.validators {
            let result = validator.validate(input, context);
            if !result.is_accepted() {
                return Some(result);
            }
        }
        Some(Validation::Accepted)
    }

    pub fn len(&self) -> usize {
        self.validators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.validators.is_empty()
    }

    /// Attaches a context that every later call forwards to each member.
    pub fn bind<'c>(&'c self, context: &'c C) -> BoundValidator<'c, 'a, C> {
        BoundValidator {
            chain: self,
            context,
        }
    }
}

pub struct BoundValidator<'c, 'a, C: ?Sized> {
    chain: &'c SequentialValidator<'a, C>,
    context: &'c C,
}

impl<C: ?Sized> BoundValidator<'_, '_, C> {
    pub fn validate(&self, input: Option<&str>) -> Option<Validation> {
        self.chain.validate(input, self.context)
    }

    pub fn context(&self) -> &C {
        self.context
    }
}

/// Silently rejects absent or empty input.
#[derive(Debug, Clone, Copy, Default)]
pub struct NotEmpty;

pub fn is_not_empty(input: Option<&str>) -> Validation {
    Validation::from(input.is_some_and(|value| !value.is_empty()))
}

impl<C: ?Sized> Validator<C> for NotEmpty {
    fn validate(&self, input: Option<&str>, _context: &C) -> Validation {
        is_not_empty(input)
    }
}

/// Rejects an artifact id that is empty or already registered.
#[derive(Debug, Clone, Copy, Default)]
pub struct UniqueArtifactId;

pub fn unique_artifact_id<S: ConfigStore>(
    input: Option<&str>,
    registry: &ModuleRegistry<S>,
) -> Validation {
    let artifact_id = match input {
        Some(value) if !value.is_empty() => value,
        _ => return Validation::rejected(EMPTY_ARTIFACT_ID),
    };

    if registry.contains_artifact_id(artifact_id) {
        return Validation::rejected(DUPLICATE_ARTIFACT_ID);
    }
    Validation::Accepted
}

impl<S: ConfigStore> Validator<ModuleRegistry<S>> for UniqueArtifactId {
    fn validate(&self, input: Option<&str>, registry: &ModuleRegistry<S>) -> Validation {
        unique_artifact_id(input, registry)
    }
}

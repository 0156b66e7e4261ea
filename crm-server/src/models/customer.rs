//! Customer record, creation input and partial-update patch

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::validation::require_text;
use super::ValidationError;

/// Customer row as stored in the `customers` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct Customer {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub status: String,
}

/// Validated input for inserting a customer.
///
/// The id is assigned by the store, so it has no place here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCustomer {
    name: String,
    email: String,
    status: String,
}

impl NewCustomer {
    /// Create a new customer draft, rejecting empty fields.
    ///
    /// # Example
    /// ```
    /// use crm_server::models::NewCustomer;
    ///
    /// assert!(NewCustomer::new("Fariha", "fariha.fhf@gmail.com", "active").is_ok());
    /// assert!(NewCustomer::new("", "fariha.fhf@gmail.com", "active").is_err());
    /// ```
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        status: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let draft = Self {
            name: name.into(),
            email: email.into(),
            status: status.into(),
        };

        require_text("name", &draft.name)?;
        require_text("email", &draft.email)?;
        require_text("status", &draft.status)?;

        Ok(draft)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn status(&self) -> &str {
        &self.status
    }
}

/// Partial update: each field is an optional override.
///
/// An absent key and an explicit JSON `null` both deserialize to `None`,
/// which leaves the stored value untouched. There is no way to clear a field.
/// The store folds the supplied fields onto the row with `COALESCE`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CustomerPatch {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

impl CustomerPatch {
    /// True when no field would change.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.status.is_none()
    }

    /// Supplied fields follow the same rules as on creation.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(name) = &self.name {
            require_text("name", name)?;
        }
        if let Some(email) = &self.email {
            require_text("email", email)?;
        }
        if let Some(status) = &self.status {
            require_text("status", status)?;
        }
        Ok(())
    }
}

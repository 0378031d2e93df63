//! Form Input
//!
//! Raw text as typed into the create forms, and its validation into the
//! POST drafts. Validation is limited to presence and numeric checks; the
//! server does the rest.

use crate::domain::{NewProduct, NewSetting, NewTask};
use crate::error::ValidationError;

/// Priority choices offered by the forms
pub const PRIORITIES: [&str; 3] = ["Low", "Medium", "High"];

/// Priority a form starts with and returns to after a submit
pub const DEFAULT_PRIORITY: &str = "Medium";

/// A create form: validated into a POST draft, cleared after a successful
/// submit
pub trait DraftForm: Clone + Default {
    type Draft;

    /// Check presence/numeric fields; no request may be made on `Err`.
    fn validate(&self) -> Result<Self::Draft, ValidationError>;

    /// Clear every field back to its initial value
    fn reset(&mut self);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductForm {
    pub product_name: String,
    pub price: String,
    pub quantity: String,
    pub priority: String,
    /// Value of the date input; empty when no date is picked
    pub due_date: String,
}

impl Default for ProductForm {
    fn default() -> Self {
        Self {
            product_name: String::new(),
            price: String::new(),
            quantity: String::new(),
            priority: DEFAULT_PRIORITY.to_string(),
            due_date: String::new(),
        }
    }
}

impl DraftForm for ProductForm {
    type Draft = NewProduct;

    fn validate(&self) -> Result<NewProduct, ValidationError> {
        if self.product_name.is_empty() {
            return Err(ValidationError::IncompleteProduct);
        }
        let price = parse_number(&self.price).ok_or(ValidationError::IncompleteProduct)?;
        let quantity = parse_leading_int(&self.quantity).ok_or(ValidationError::IncompleteProduct)?;

        Ok(NewProduct {
            product_name: self.product_name.clone(),
            price,
            quantity,
            priority: self.priority.clone(),
            due_date: non_empty(&self.due_date),
        })
    }

    fn reset(&mut self) {
        *self = Self::default();
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskForm {
    pub title: String,
    pub description: String,
    pub priority: String,
}

impl Default for TaskForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            priority: DEFAULT_PRIORITY.to_string(),
        }
    }
}

impl DraftForm for TaskForm {
    type Draft = NewTask;

    fn validate(&self) -> Result<NewTask, ValidationError> {
        if self.title.is_empty() {
            return Err(ValidationError::MissingTaskTitle);
        }
        Ok(NewTask {
            title: self.title.clone(),
            description: self.description.clone(),
            priority: self.priority.clone(),
        })
    }

    fn reset(&mut self) {
        *self = Self::default();
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingForm {
    pub name: String,
    pub value: String,
}

impl DraftForm for SettingForm {
    type Draft = NewSetting;

    fn validate(&self) -> Result<NewSetting, ValidationError> {
        if self.name.is_empty() || self.value.is_empty() {
            return Err(ValidationError::IncompleteSetting);
        }
        Ok(NewSetting {
            name: self.name.clone(),
            value: self.value.clone(),
        })
    }

    fn reset(&mut self) {
        *self = Self::default();
    }
}

fn parse_number(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Leading integer of `raw`, the way a browser's `parseInt` reads it:
/// `"3.5"` is 3, `"12 boxes"` is 12, `"abc"` has none.
fn parse_leading_int(raw: &str) -> Option<i64> {
    let raw = raw.trim_start();
    let sign = usize::from(raw.starts_with(['+', '-']));
    let digits = raw[sign..].bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    raw[..sign + digits].parse().ok()
}

fn non_empty(raw: &str) -> Option<String> {
    if raw.is_empty() {
        None
    } else {
        Some(raw.to_string())
    }
}

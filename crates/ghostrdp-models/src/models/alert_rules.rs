//! # Alert Rules Module
//!
//! Alert rules are stored configuration: a `condition` and an `action`, both opaque
//! strings that this service never parses or evaluates.

use crate::models::{now, required, required_if_present};
use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Represents an alert rule in the system.
#[derive(
    Queryable, Selectable, Identifiable, Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema,
)]
#[diesel(table_name = crate::schema::alert_rules)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct AlertRule {
    pub id: i32,
    pub name: String,
    /// Opaque condition expression, e.g. `cpu > 90`
    pub condition: String,
    /// Opaque action, e.g. `email admin`
    pub action: String,
    pub enabled: bool,
    pub created_at: NaiveDateTime,
}

/// Request body for creating an alert rule.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct CreateAlertRule {
    pub name: Option<String>,
    pub condition: Option<String>,
    pub action: Option<String>,
    pub enabled: Option<bool>,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::alert_rules)]
pub struct NewAlertRule {
    pub name: String,
    pub condition: String,
    pub action: String,
    pub enabled: bool,
    pub created_at: NaiveDateTime,
}

impl NewAlertRule {
    /// Creates a new `NewAlertRule` instance.
    ///
    /// # Returns
    ///
    /// An error naming the first of `name`, `condition` or `action` that is missing or blank.
    pub fn new(
        name: Option<String>,
        condition: Option<String>,
        action: Option<String>,
        enabled: Option<bool>,
    ) -> Result<Self, String> {
        Ok(NewAlertRule {
            name: required("name", name)?,
            condition: required("condition", condition)?,
            action: required("action", action)?,
            enabled: enabled.unwrap_or(true),
            created_at: now(),
        })
    }
}

impl TryFrom<CreateAlertRule> for NewAlertRule {
    type Error = String;

    fn try_from(request: CreateAlertRule) -> Result<Self, Self::Error> {
        NewAlertRule::new(
            request.name,
            request.condition,
            request.action,
            request.enabled,
        )
    }
}

/// Partial update for an alert rule.
#[derive(AsChangeset, Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[diesel(table_name = crate::schema::alert_rules)]
pub struct AlertRuleChanges {
    pub name: Option<String>,
    pub condition: Option<String>,
    pub action: Option<String>,
    pub enabled: Option<bool>,
}

impl AlertRuleChanges {
    pub fn validate(self) -> Result<Self, String> {
        Ok(AlertRuleChanges {
            name: required_if_present("name", self.name)?,
            condition: required_if_present("condition", self.condition)?,
            action: required_if_present("action", self.action)?,
            enabled: self.enabled,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.condition.is_none()
            && self.action.is_none()
            && self.enabled.is_none()
    }
}

//! Data Access Layer for AlertRule operations.

use crate::dal::audit_logs::append;
use crate::dal::{DalError, DAL};
use diesel::prelude::*;
use ghostrdp_models::models::{AlertRule, AlertRuleChanges, AuditLevel, NewAlertRule};
use ghostrdp_models::schema::alert_rules;

/// Data Access Layer for AlertRule operations.
pub struct AlertRulesDAL<'a> {
    /// Reference to the main DAL instance.
    pub dal: &'a DAL,
}

fn find(conn: &mut SqliteConnection, rule_id: i32) -> Result<AlertRule, DalError> {
    alert_rules::table
        .find(rule_id)
        .select(AlertRule::as_select())
        .first(conn)
        .optional()?
        .ok_or_else(|| DalError::NotFound(format!("Alert rule {} not found", rule_id)))
}

impl AlertRulesDAL<'_> {
    pub fn list(&self) -> Result<Vec<AlertRule>, DalError> {
        let conn = &mut self.dal.pool.get()?;
        Ok(alert_rules::table
            .order(alert_rules::id.asc())
            .select(AlertRule::as_select())
            .load(conn)?)
    }

    pub fn create(&self, new_rule: &NewAlertRule) -> Result<AlertRule, DalError> {
        self.dal.write(|conn| {
            let rule = diesel::insert_into(alert_rules::table)
                .values(new_rule)
                .returning(AlertRule::as_returning())
                .get_result(conn)?;

            append(
                conn,
                AuditLevel::Info,
                format!("Alert rule created: {} (id {})", rule.name, rule.id),
            )?;
            Ok(rule)
        })
    }

    pub fn update(&self, rule_id: i32, changes: &AlertRuleChanges) -> Result<AlertRule, DalError> {
        self.dal.write(|conn| {
            let existing = find(conn, rule_id)?;

            let rule = if changes.is_empty() {
                existing
            } else {
                diesel::update(alert_rules::table.find(rule_id))
                    .set(changes)
                    .returning(AlertRule::as_returning())
                    .get_result(conn)?
            };

            append(
                conn,
                AuditLevel::Info,
                format!("Alert rule updated: {} (id {})", rule.name, rule.id),
            )?;
            Ok(rule)
        })
    }

    pub fn delete(&self, rule_id: i32) -> Result<AlertRule, DalError> {
        self.dal.write(|conn| {
            let existing = find(conn, rule_id)?;
            diesel::delete(alert_rules::table.find(rule_id)).execute(conn)?;

            append(
                conn,
                AuditLevel::Warning,
                format!("Alert rule deleted: {} (id {})", existing.name, existing.id),
            )?;
            Ok(existing)
        })
    }
}

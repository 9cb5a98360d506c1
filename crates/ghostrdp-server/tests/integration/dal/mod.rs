mod audit_logs;
mod tasks;
mod tunnel;

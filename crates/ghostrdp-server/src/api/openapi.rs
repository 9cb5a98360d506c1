use crate::api::alerts::{self, AlertList};
use crate::api::dashboard;
use crate::api::error::ErrorBody;
use crate::api::logs::{self, LogList};
use crate::api::rdp_config;
use crate::api::setup_status::{self, DatabaseStatus, SetupStatus};
use crate::api::support::{self, TicketList};
use crate::api::tasks::{self, TaskList};
use crate::api::users::{self, UserList};
use crate::api::windows_users::{self, WindowsUserList};
use crate::api::wireguard::{self, PeerList, ServerList};
use crate::api::{AppState, MessageResponse, ServiceStatus};
use crate::utils::probe::Reachability;
use axum::{response::Json, routing::get, Router};
use ghostrdp_models::models::{
    Account, AccountChanges, AlertRule, AlertRuleChanges, AuditEntry, AuditLevel, CreateAccount,
    CreateAlertRule, CreateRemoteAccount, CreateSupportTicket, CreateTask, CreateTunnelPeer,
    CreateTunnelServer, DashboardStats, PeerWithServer, RemoteAccount, RemoteAccountChanges,
    SupportTicket, SupportTicketChanges, Task, TaskChanges, TaskStatus, TicketStatus, TunnelPeer,
    TunnelServer, TunnelServerSummary,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(title = "ghost-rdp backend", description = "Management API for a ghost-rdp gateway deployment"),
    paths(
        users::list_users,
        users::create_user,
        users::update_user,
        users::delete_user,
        tasks::list_tasks,
        tasks::create_task,
        tasks::update_task,
        tasks::delete_task,
        alerts::list_alerts,
        alerts::create_alert,
        alerts::update_alert,
        alerts::delete_alert,
        support::list_tickets,
        support::create_ticket,
        support::update_ticket,
        support::delete_ticket,
        wireguard::list_servers,
        wireguard::create_server,
        wireguard::delete_server,
        wireguard::list_peers,
        wireguard::create_peer,
        wireguard::delete_peer,
        windows_users::list_windows_users,
        windows_users::create_windows_user,
        windows_users::update_windows_user,
        windows_users::delete_windows_user,
        logs::list_logs,
        rdp_config::download_rdp_config,
        setup_status::setup_status,
        dashboard::dashboard_stats,
        crate::api::api_status,
    ),
    components(
        schemas(
            ErrorBody,
            MessageResponse,
            ServiceStatus,
            Account,
            CreateAccount,
            AccountChanges,
            UserList,
            Task,
            TaskStatus,
            CreateTask,
            TaskChanges,
            TaskList,
            AlertRule,
            CreateAlertRule,
            AlertRuleChanges,
            AlertList,
            SupportTicket,
            TicketStatus,
            CreateSupportTicket,
            SupportTicketChanges,
            TicketList,
            TunnelServer,
            TunnelServerSummary,
            CreateTunnelServer,
            ServerList,
            TunnelPeer,
            PeerWithServer,
            CreateTunnelPeer,
            PeerList,
            RemoteAccount,
            CreateRemoteAccount,
            RemoteAccountChanges,
            WindowsUserList,
            AuditEntry,
            AuditLevel,
            LogList,
            DashboardStats,
            SetupStatus,
            DatabaseStatus,
            Reachability,
        )
    ),
    tags(
        (name = "users", description = "Gateway user accounts"),
        (name = "tasks", description = "Scheduled tasks"),
        (name = "alerts", description = "Alert rules, stored but not evaluated"),
        (name = "support", description = "Support tickets"),
        (name = "wireguard", description = "WireGuard servers and peers"),
        (name = "windows-users", description = "Remote desktop account mirrors"),
        (name = "logs", description = "Audit log"),
        (name = "rdp-config", description = "Connection profile downloads"),
        (name = "dashboard", description = "Aggregate counts"),
        (name = "status", description = "Liveness and setup status")
    )
)]
pub struct ApiDoc;

pub fn configure_openapi() -> Router<AppState> {
    Router::new().route("/openapi.json", get(serve_openapi))
}

async fn serve_openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

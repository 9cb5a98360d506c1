mod dashboard;
mod logs;
mod rdp_config;
mod service;
mod setup_status;
mod users;
mod windows_users;
mod wireguard;

//! WireGuard API module.
//!
//! Servers and peers can be listed, created and deleted; neither is updated in
//! place. Peer listings embed a summary of the server each peer points at.

use crate::api::error::{ApiError, ErrorBody};
use crate::api::extract::{JsonBody, PathParam};
use crate::api::{AppState, MessageResponse};
use crate::dal::DAL;
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{delete, get};
use axum::{Json, Router};
use ghostrdp_models::models::{
    CreateTunnelPeer, CreateTunnelServer, NewTunnelPeer, NewTunnelServer, PeerWithServer,
    TunnelServer,
};
use ghostrdp_utils::logging::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ServerList {
    pub servers: Vec<TunnelServer>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PeerList {
    pub peers: Vec<PeerWithServer>,
}

pub fn routes() -> Router<AppState> {
    info!("Setting up wireguard routes");
    Router::new()
        .route("/wg/servers", get(list_servers).post(create_server))
        .route("/wg/servers/:id", delete(delete_server))
        .route("/wg/peers", get(list_peers).post(create_peer))
        .route("/wg/peers/:id", delete(delete_peer))
}

#[utoipa::path(
    get,
    path = "/api/wg/servers",
    tag = "wireguard",
    responses(
        (status = 200, description = "All servers in id order; private keys are omitted", body = ServerList),
        (status = 500, description = "Internal server error", body = ErrorBody),
    )
)]
pub async fn list_servers(State(dal): State<DAL>) -> Result<Json<ServerList>, ApiError> {
    info!("Handling request to list wireguard servers");
    let servers = dal.tunnel_servers().list()?;
    Ok(Json(ServerList { servers }))
}

#[utoipa::path(
    post,
    path = "/api/wg/servers",
    tag = "wireguard",
    request_body = CreateTunnelServer,
    responses(
        (status = 201, description = "Server created", body = TunnelServer),
        (status = 400, description = "A required field is missing", body = ErrorBody),
    )
)]
pub async fn create_server(
    State(dal): State<DAL>,
    JsonBody(request): JsonBody<CreateTunnelServer>,
) -> Result<(StatusCode, Json<TunnelServer>), ApiError> {
    info!("Handling request to create a wireguard server");
    let new_server = NewTunnelServer::try_from(request).map_err(|e| {
        warn!("Invalid wireguard server payload: {}", e);
        ApiError::Validation(e)
    })?;

    let server = dal.tunnel_servers().create(&new_server)?;
    info!(
        "Successfully created wireguard server {} with ID: {}",
        server.name, server.id
    );
    Ok((StatusCode::CREATED, Json(server)))
}

#[utoipa::path(
    delete,
    path = "/api/wg/servers/{id}",
    tag = "wireguard",
    params(("id" = i32, Path, description = "ID of the server")),
    responses(
        (status = 200, description = "Server deleted, with its peers under the cascade policy", body = MessageResponse),
        (status = 404, description = "Server not found", body = ErrorBody),
    )
)]
pub async fn delete_server(
    State(dal): State<DAL>,
    PathParam(id): PathParam<i32>,
) -> Result<Json<MessageResponse>, ApiError> {
    info!("Handling request to delete wireguard server with ID: {}", id);
    let deletion = dal.tunnel_servers().delete(id)?;

    let message = if deletion.removed_peers > 0 {
        format!(
            "WireGuard server {} deleted along with {} peer(s)",
            deletion.server.name, deletion.removed_peers
        )
    } else {
        format!("WireGuard server {} deleted", deletion.server.name)
    };
    info!("{}", message);
    Ok(Json(MessageResponse::new(message)))
}

#[utoipa::path(
    get,
    path = "/api/wg/peers",
    tag = "wireguard",
    responses(
        (status = 200, description = "All peers in id order with their server summary", body = PeerList),
        (status = 500, description = "Internal server error", body = ErrorBody),
    )
)]
pub async fn list_peers(State(dal): State<DAL>) -> Result<Json<PeerList>, ApiError> {
    info!("Handling request to list wireguard peers");
    let peers = dal.tunnel_peers().list()?;
    let orphaned = peers.iter().filter(|p| p.server.is_none()).count();
    if orphaned > 0 {
        debug!("{} wireguard peer(s) reference a deleted server", orphaned);
    }
    Ok(Json(PeerList { peers }))
}

#[utoipa::path(
    post,
    path = "/api/wg/peers",
    tag = "wireguard",
    request_body = CreateTunnelPeer,
    responses(
        (status = 201, description = "Peer created", body = PeerWithServer),
        (status = 400, description = "A required field is missing or the server does not exist", body = ErrorBody),
    )
)]
pub async fn create_peer(
    State(dal): State<DAL>,
    JsonBody(request): JsonBody<CreateTunnelPeer>,
) -> Result<(StatusCode, Json<PeerWithServer>), ApiError> {
    info!("Handling request to create a wireguard peer");
    let new_peer = NewTunnelPeer::try_from(request).map_err(|e| {
        warn!("Invalid wireguard peer payload: {}", e);
        ApiError::Validation(e)
    })?;

    let peer = dal.tunnel_peers().create(&new_peer)?;
    info!(
        "Successfully created wireguard peer with ID: {} on server {}",
        peer.peer.id, peer.peer.server_id
    );
    Ok((StatusCode::CREATED, Json(peer)))
}

#[utoipa::path(
    delete,
    path = "/api/wg/peers/{id}",
    tag = "wireguard",
    params(("id" = i32, Path, description = "ID of the peer")),
    responses(
        (status = 200, description = "Peer deleted", body = MessageResponse),
        (status = 404, description = "Peer not found", body = ErrorBody),
    )
)]
pub async fn delete_peer(
    State(dal): State<DAL>,
    PathParam(id): PathParam<i32>,
) -> Result<Json<MessageResponse>, ApiError> {
    info!("Handling request to delete wireguard peer with ID: {}", id);
    let peer = dal.tunnel_peers().delete(id)?;
    Ok(Json(MessageResponse::new(format!(
        "WireGuard peer {} deleted",
        peer.id
    ))))
}

//! Remote desktop connection profiles.
//!
//! Profiles are rendered in memory and streamed to the client; nothing is
//! written to disk.

use uuid::Uuid;

/// MIME type of a `.rdp` profile.
pub const CONTENT_TYPE: &str = "application/x-rdp";

/// Renders the profile that points `username` at the gateway.
pub fn render(gateway_address: &str, username: &str) -> String {
    format!(
        "full address:s:{}\nprompt for credentials:i:1\nusername:s:{}\n",
        gateway_address, username
    )
}

/// Download name for a profile: `<username>_<random>.rdp`.
///
/// Characters that are unsafe in a file name or a quoted header value are
/// replaced with `_`.
pub fn file_name(username: &str) -> String {
    let safe: String = username
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.') {
                c
            } else {
                '_'
            }
        })
        .collect();
    let safe = if safe.trim_matches('.').is_empty() {
        "user".to_string()
    } else {
        safe
    };
    let token = Uuid::new_v4().simple().to_string();
    format!("{}_{}.rdp", safe, &token[..8])
}

/// `Content-Disposition` value for downloading `file_name`.
pub fn content_disposition(file_name: &str) -> String {
    format!("attachment; filename=\"{}\"", file_name)
}

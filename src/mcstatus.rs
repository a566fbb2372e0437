//! Client for the mcstatus.io server-status API.
//!
//! One `GET /v2/status/java/{address}` per `/status` command. The API
//! answers 200 even for unreachable servers, with `online: false` and
//! most other fields absent, so everything past `online` is optional.

use serde::Deserialize;

use crate::SloorError;

/// Base endpoint for Java edition status lookups.
const STATUS_ENDPOINT: &str = "https://api.mcstatus.io/v2/status/java";

/// The slice of the status response this bot renders.
#[derive(Debug, Deserialize)]
pub struct ServerStatus {
    /// Whether the server answered the probe.
    pub online: bool,
    #[serde(default)]
    pub players: Option<Players>,
    #[serde(default)]
    pub version: Option<Version>,
    #[serde(default)]
    pub motd: Option<Motd>,
}

#[derive(Debug, Deserialize)]
pub struct Players {
    pub online: u32,
    pub max: u32,
}

#[derive(Debug, Deserialize)]
pub struct Version {
    /// Version with formatting codes stripped, e.g. `1.21.1`.
    #[serde(default)]
    pub name_clean: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Motd {
    /// MOTD with formatting codes stripped.
    #[serde(default)]
    pub clean: Option<String>,
}

/// Probe the status of the server at `address`.
pub async fn fetch_status(http: &reqwest::Client, address: &str) -> Result<ServerStatus, SloorError> {
    let url = format!("{STATUS_ENDPOINT}/{address}");
    let body = http
        .get(&url)
        .send()
        .await?
        .error_for_status()?
        .text()
        .await?;
    decode(&body)
}

/// Decode a status response body.
fn decode(body: &str) -> Result<ServerStatus, SloorError> {
    let mut deserializer = serde_json::Deserializer::from_str(body);
    serde_path_to_error::deserialize(&mut deserializer)
        .map_err(|error| SloorError::StatusDecode {
            reason: error.to_string(),
        })
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn decodes_an_online_response() {
        let body = r#"{
            "online": true,
            "host": "mc.sloorjuice.com",
            "port": 25565,
            "players": { "online": 3, "max": 20 },
            "version": { "name_raw": "§aFabric 1.21.1", "name_clean": "Fabric 1.21.1" },
            "motd": { "raw": "§6Welcome!", "clean": "Welcome!" }
        }"#;

        let status = decode(body).unwrap();
        assert!(status.online);
        assert_eq!(status.players.as_ref().unwrap().online, 3);
        assert_eq!(status.players.as_ref().unwrap().max, 20);
        assert_eq!(
            status.version.unwrap().name_clean.as_deref(),
            Some("Fabric 1.21.1")
        );
        assert_eq!(status.motd.unwrap().clean.as_deref(), Some("Welcome!"));
    }

    #[test]
    fn decodes_an_offline_response_without_detail_fields() {
        let body = r#"{ "online": false, "host": "mc.sloorjuice.com", "port": 25565 }"#;

        let status = decode(body).unwrap();
        assert!(!status.online);
        assert!(status.players.is_none());
        assert!(status.version.is_none());
        assert!(status.motd.is_none());
    }

    #[test]
    fn garbage_reports_the_failing_path() {
        let body = r#"{ "online": true, "players": { "online": "three" } }"#;

        let result = decode(body);
        assert!(matches!(
            result,
            Err(SloorError::StatusDecode { ref reason }) if reason.contains("players")
        ));
    }
}

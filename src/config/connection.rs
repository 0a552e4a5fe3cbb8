//! Push-connection configuration constants and types.

/// Names of the two inbound event channels
pub struct EventNames {
    pub snapshot: &'static str,
    pub timestamp: &'static str,
}

/// Socket.IO / Engine.IO handshake details
pub struct SocketIoConfig {
    /// Path the server mounts Socket.IO on
    pub path: &'static str,
    /// Engine.IO protocol revision requested in the query string
    pub engine_io_version: u8,
    /// Frame sent to join the default namespace after `open`
    pub namespace_connect_frame: &'static str,
    /// Reply to an Engine.IO ping
    pub pong_frame: &'static str,
}

/// Defaults used by the native viewer when no flags are given
pub struct NativeDefaults {
    pub scheme: &'static str,
    pub host: &'static str,
    pub port: u16,
    pub out_path: &'static str,
}

/// The Master Connection Configuration
pub struct ConnectionConfig {
    pub events: EventNames,
    pub socket_io: SocketIoConfig,
    pub native: NativeDefaults,
}

pub const CONNECTION: ConnectionConfig = ConnectionConfig {
    events: EventNames {
        snapshot: "update_records",
        timestamp: "last_update",
    },
    socket_io: SocketIoConfig {
        path: "/socket.io/",
        engine_io_version: 4,
        namespace_connect_frame: "40",
        pong_frame: "3",
    },
    native: NativeDefaults {
        scheme: "ws",
        host: "127.0.0.1",
        // The producer's Flask-SocketIO server listens here
        port: 5001,
        out_path: "dashboard.html",
    },
};

/// Where the push channel connects: `{scheme}://{host}[:{port}]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionTarget {
    pub scheme: String,
    pub host: String,
    pub port: Option<u16>,
}

impl ConnectionTarget {
    pub fn new(scheme: impl Into<String>, host: impl Into<String>, port: Option<u16>) -> Self {
        Self {
            scheme: scheme.into(),
            host: host.into(),
            port,
        }
    }

    /// Build a target from the pieces a browser page exposes.
    /// `location.port` is an empty string when the page uses the scheme's default port.
    pub fn from_page(scheme: &str, host: &str, port: &str) -> Self {
        Self::new(scheme, host, port.trim().parse::<u16>().ok())
    }

    /// WebSocket scheme matching the page's `location.protocol`
    pub fn scheme_for_page(protocol: &str) -> &'static str {
        if protocol.eq_ignore_ascii_case("https:") {
            "wss"
        } else {
            CONNECTION.native.scheme
        }
    }

    pub fn origin(&self) -> String {
        match self.port {
            Some(port) => format!("{}://{}:{}", self.scheme, self.host, port),
            None => format!("{}://{}", self.scheme, self.host),
        }
    }

    /// Full WebSocket URL of the Socket.IO endpoint
    pub fn socket_url(&self) -> String {
        format!(
            "{}{}?EIO={}&transport=websocket",
            self.origin(),
            CONNECTION.socket_io.path,
            CONNECTION.socket_io.engine_io_version
        )
    }
}

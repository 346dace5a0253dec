use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Service settings asked by the demo form.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ServiceConfig {
    /// Name of the service as it appears in logs.
    #[schemars(extend("x-prompt" = true))]
    pub name: String,
    /// Hostname or address to bind.
    #[schemars(extend("x-prompt" = true))]
    pub host: String,
    /// TCP port to listen on.
    #[schemars(extend("x-prompt" = true))]
    pub port: u16,
    /// Worker threads, 0 picks one per CPU.
    #[schemars(extend("x-prompt" = true))]
    pub workers: u32,
    /// Serve over TLS.
    #[schemars(extend("x-prompt" = true))]
    pub tls: bool,
    /// Verbosity offset applied to the default log level.
    #[schemars(extend("x-prompt" = true))]
    pub log_offset: i8,
    /// Deployment region, filled in by deploy tooling.
    pub region: String,
    /// Stamped by deploy tooling.
    #[serde(skip_deserializing)]
    pub revision: String,
    #[serde(skip)]
    pub loaded_from: Option<String>,
}

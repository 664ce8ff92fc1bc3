use service_core::config::{GatewayConfig, GatewayDefaults};
use service_core::error::AppError;

pub const DEFAULTS: GatewayDefaults = GatewayDefaults {
    database: "marketplace",
    collection: "profiles",
};

pub fn load() -> Result<GatewayConfig, AppError> {
    GatewayConfig::load(DEFAULTS)
}

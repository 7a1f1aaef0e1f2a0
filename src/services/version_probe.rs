//! 前端版本探测
//!
//! 尽力而为：任何失败都只记日志，返回 None

use std::sync::Arc;

use tracing::{debug, warn};

use crate::infrastructure::BackendTransport;
use crate::models::VersionInfo;

pub struct VersionProbe {
    transport: Arc<dyn BackendTransport>,
    version_path: String,
}

impl VersionProbe {
    pub fn new(transport: Arc<dyn BackendTransport>, version_path: impl Into<String>) -> Self {
        Self {
            transport,
            version_path: version_path.into(),
        }
    }

    pub async fn fetch(&self) -> Option<String> {
        let raw = match self.transport.get(&self.version_path).await {
            Ok(raw) => raw,
            Err(e) => {
                warn!("无法获取前端版本: {}", e);
                return None;
            }
        };

        if !raw.is_success() {
            debug!("{} 返回 HTTP {}", self.version_path, raw.status);
            return None;
        }

        match raw.json::<VersionInfo>(&self.version_path) {
            Ok(info) => info.frontend_version,
            Err(e) => {
                warn!("无法获取前端版本: {}", e);
                None
            }
        }
    }
}

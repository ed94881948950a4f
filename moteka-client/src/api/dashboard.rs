//! Dashboard endpoints

use shared::models::dashboard::ResumenDashboard;

use crate::error::ClientResult;
use crate::http::ApiClient;

impl ApiClient {
    /// Home dashboard summary
    pub async fn resumen_dashboard(&self) -> ClientResult<ResumenDashboard> {
        self.get("/api/dashboard/resumen").await
    }
}

use shared::models::{DashboardPeriod, DashboardResponse};

use super::AdminApi;
use crate::http::HttpClient;
use crate::ClientResult;

impl<C: HttpClient> AdminApi<C> {
    pub async fn fetch_dashboard(&self, period: DashboardPeriod) -> ClientResult<DashboardResponse> {
        self.http
            .get_with_query("dashboard", &[("period", period.as_str().to_string())])
            .await
    }
}

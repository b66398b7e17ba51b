use super::OrderQueryService;
use crate::{
    application::{
        dto::OrderTrackingDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::order::TrackingCode,
};

impl OrderQueryService {
    /// Anonymous lookup by the code mailed to the recipient.
    pub async fn track_order(&self, code: TrackingCode) -> ApplicationResult<OrderTrackingDto> {
        self.order_repo
            .find_by_tracking_code(code)
            .await?
            .map(OrderTrackingDto::from)
            .ok_or_else(|| ApplicationError::not_found("order not found"))
    }
}

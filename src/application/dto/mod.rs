pub mod auth;
pub mod orders;
pub mod pagination;
pub mod recipients;
pub mod users;

pub use auth::{AuthTokenDto, AuthenticatedUser, TokenSubject};
pub use orders::{OrderDetailsDto, OrderDto, OrderRecipientDto, OrderTrackingDto};
pub use pagination::Page;
pub use recipients::{RecipientDto, RecipientSummaryDto};
pub use users::UserDto;

use super::RecipientQueryService;
use crate::{
    application::{
        authorization::authorize,
        dto::{AuthenticatedUser, Page, RecipientDto, RecipientSummaryDto},
        error::ApplicationResult,
    },
    domain::{
        authorization::{Action, Resource},
        shared::PageRequest,
    },
};

#[derive(Debug, Clone, Copy, Default)]
pub struct ListRecipientsQuery {
    pub page: PageRequest,
}

#[derive(Debug, Clone, Default)]
pub struct ListRecipientSummariesQuery {
    pub q: Option<String>,
    pub page: PageRequest,
}

impl RecipientQueryService {
    pub async fn list_recipients(
        &self,
        actor: &AuthenticatedUser,
        query: ListRecipientsQuery,
    ) -> ApplicationResult<Page<RecipientDto>> {
        authorize(
            self.user_repo.as_ref(),
            actor,
            Action::Read,
            Resource::Recipients,
        )
        .await?;

        let paged = self.recipient_repo.list_page(query.page).await?;
        Ok(Page::from_paged(paged, query.page))
    }

    pub async fn list_recipient_summaries(
        &self,
        actor: &AuthenticatedUser,
        query: ListRecipientSummariesQuery,
    ) -> ApplicationResult<Page<RecipientSummaryDto>> {
        authorize(
            self.user_repo.as_ref(),
            actor,
            Action::Read,
            Resource::Recipients,
        )
        .await?;

        let search = query
            .q
            .as_deref()
            .map(str::trim)
            .filter(|term| !term.is_empty());
        let paged = self
            .recipient_repo
            .list_summaries(search, query.page)
            .await?;
        Ok(Page::from_paged(paged, query.page))
    }
}

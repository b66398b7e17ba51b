use crate::domain::shared::{PageRequest, Paged};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(
    rename_all = "camelCase",
    bound(
        serialize = "T: Serialize",
        deserialize = "T: serde::de::DeserializeOwned"
    )
)]
pub struct Page<T> {
    pub data: Vec<T>,
    pub total: u64,
    pub total_pages: u64,
    pub page_index: u32,
    pub limit: u32,
}

impl<T> Page<T> {
    pub fn from_paged<U>(paged: Paged<U>, request: PageRequest) -> Self
    where
        T: From<U>,
    {
        let total = paged.total;
        Self {
            data: paged.items.into_iter().map(T::from).collect(),
            total,
            total_pages: request.total_pages(total),
            page_index: request.page_index(),
            limit: request.limit(),
        }
    }
}

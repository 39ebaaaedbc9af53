//! Paged response DTO

use serde::Serialize;

use crate::domain::Page;

/// JSON shape of a paged listing.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResponse<T> {
    pub content: Vec<T>,
    pub number: u32,
    pub size: u32,
    pub total_elements: u64,
    pub total_pages: u64,
    pub number_of_elements: usize,
    pub first: bool,
    pub last: bool,
    pub empty: bool,
}

impl<T> From<Page<T>> for PageResponse<T> {
    fn from(page: Page<T>) -> Self {
        let total_pages = page.total_pages();
        let number_of_elements = page.number_of_elements();
        let first = page.is_first();
        let last = page.is_last();
        let empty = page.is_empty();

        Self {
            content: page.content,
            number: page.number,
            size: page.size,
            total_elements: page.total_elements,
            total_pages,
            number_of_elements,
            first,
            last,
            empty,
        }
    }
}

use serde::Serialize;

/// Paging metadata returned alongside a page of records.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PageMeta {
    pub total: usize,
    pub per_page: usize,
    pub current_page: usize,
    pub last_page: usize,
    pub first_page: usize,
}

#[derive(Debug, Serialize)]
pub struct Paginated<T> {
    pub meta: PageMeta,
    pub data: Vec<T>,
}

impl<T> Paginated<T> {
    pub fn new(items: Vec<T>, total: usize, current_page: usize, per_page: usize) -> Self {
        let current_page = if current_page == 0 { 1 } else { current_page };
        let per_page = per_page.max(1);
        let last_page = total.div_ceil(per_page).max(1);

        Self {
            meta: PageMeta {
                total,
                per_page,
                current_page,
                last_page,
                first_page: 1,
            },
            data: items,
        }
    }
}

use crate::entities::PagedResult;

pub fn total_pages(total_elements: usize, page_size: usize) -> usize {
    let page_size = page_size.max(1);
    total_elements.div_ceil(page_size)
}

/// Clamps a possibly stale page index into `[0, total_pages - 1]`.
pub fn clamp_page(page: usize, total_elements: usize, page_size: usize) -> usize {
    let pages = total_pages(total_elements, page_size);
    if pages == 0 {
        0
    } else {
        page.min(pages - 1)
    }
}

pub fn paginate<T: Clone>(items: &[T], page: usize, page_size: usize) -> PagedResult<T> {
    let page_size = page_size.max(1);
    let total_elements = items.len();
    let total_pages = total_pages(total_elements, page_size);
    let current_page = clamp_page(page, total_elements, page_size);
    let start = current_page * page_size;
    let end = (start + page_size).min(total_elements);
    let items = if start < end {
        items[start..end].to_vec()
    } else {
        Vec::new()
    };
    PagedResult {
        items,
        current_page,
        total_pages,
        total_elements,
    }
}

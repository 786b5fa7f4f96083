use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Asc,
    Desc,
}

impl Direction {
    /// Case-insensitive `asc` / `desc`; anything else sorts ascending.
    pub fn from_optional_str(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some(v) if v.eq_ignore_ascii_case("desc") => Direction::Desc,
            _ => Direction::Asc,
        }
    }

    pub fn as_sql(&self) -> &'static str {
        match self {
            Direction::Asc => "ASC",
            Direction::Desc => "DESC",
        }
    }
}

/// Zero-based page index and page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub size: u32,
}

impl PageRequest {
    pub fn new(page: u32, size: u32) -> Self {
        Self { page, size: size.max(1) }
    }

    pub fn limit(&self) -> i64 {
        i64::from(self.size)
    }

    /// Saturates instead of overflowing for page indexes far past the end.
    pub fn offset(&self) -> i64 {
        i64::from(self.page).saturating_mul(i64::from(self.size))
    }
}

/// One page of results plus navigation metadata.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    #[schema(example = 0)]
    pub page: u32,
    #[schema(example = 10)]
    pub size: u32,
    #[schema(example = 42)]
    pub total_elements: u64,
    #[schema(example = 5)]
    pub total_pages: u32,
    pub first: bool,
    pub last: bool,
}

impl<T> Page<T> {
    pub fn new(content: Vec<T>, request: PageRequest, total_elements: u64) -> Self {
        let size = u64::from(request.size);
        let total_pages = u32::try_from(total_elements.div_ceil(size)).unwrap_or(u32::MAX);

        Self {
            content,
            page: request.page,
            size: request.size,
            total_elements,
            total_pages,
            first: request.page == 0,
            last: u64::from(request.page) + 1 >= u64::from(total_pages),
        }
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            content: self.content.into_iter().map(f).collect(),
            page: self.page,
            size: self.size,
            total_elements: self.total_elements,
            total_pages: self.total_pages,
            first: self.first,
            last: self.last,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_defaults_to_ascending() {
        assert_eq!(Direction::from_optional_str(Some("DESC")), Direction::Desc);
        assert_eq!(Direction::from_optional_str(Some("desc")), Direction::Desc);
        assert_eq!(Direction::from_optional_str(Some("asc")), Direction::Asc);
        assert_eq!(Direction::from_optional_str(Some("sideways")), Direction::Asc);
        assert_eq!(Direction::from_optional_str(None), Direction::Asc);
    }

    #[test]
    fn page_metadata_in_the_middle() {
        let page = Page::new(vec![1, 2], PageRequest::new(1, 2), 5);

        assert_eq!(page.total_pages, 3);
        assert!(!page.first);
        assert!(!page.last);
    }

    #[test]
    fn last_page_is_flagged() {
        let page = Page::new(vec![5], PageRequest::new(2, 2), 5);

        assert_eq!(page.total_pages, 3);
        assert!(page.last);
    }

    #[test]
    fn empty_result_is_first_and_last() {
        let page: Page<i32> = Page::new(vec![], PageRequest::new(0, 10), 0);

        assert_eq!(page.total_pages, 0);
        assert!(page.first);
        assert!(page.last);
    }

    #[test]
    fn offset_follows_page_and_size() {
        let request = PageRequest::new(3, 20);
        assert_eq!(request.offset(), 60);
        assert_eq!(request.limit(), 20);
    }

    #[test]
    fn offset_saturates_at_the_extremes() {
        let request = PageRequest::new(u32::MAX, u32::MAX);
        assert_eq!(request.offset(), i64::MAX);

        let page: Page<i32> = Page::new(vec![], request, 3);
        assert_eq!(page.total_pages, 1);
        assert!(page.last);
    }
}

use serde::{Deserialize, Serialize};

/// Largest page size a caller may request.
pub const MAX_PAGE_SIZE: u32 = 100;
/// Largest page index a caller may request.
pub const MAX_PAGE: u32 = u32::MAX;

/// Errors raised while validating a page request.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PaginationError {
    #[error("pagination.invalid_page")]
    InvalidPage,
    #[error("pagination.invalid_size")]
    InvalidPageSize,
    #[error("pagination.invalid_sort_field")]
    InvalidSortField(String),
    #[error("pagination.invalid_sort_direction")]
    InvalidSortDirection(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl std::fmt::Display for SortDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortDirection::Asc => write!(f, "asc"),
            SortDirection::Desc => write!(f, "desc"),
        }
    }
}

impl std::str::FromStr for SortDirection {
    type Err = PaginationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            _ => Err(PaginationError::InvalidSortDirection(s.to_string())),
        }
    }
}

/// A single sort criterion: which field, which direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortOrder<F> {
    pub field: F,
    pub direction: SortDirection,
}

impl<F> SortOrder<F>
where
    F: std::str::FromStr,
{
    pub fn asc(field: F) -> Self {
        Self {
            field,
            direction: SortDirection::Asc,
        }
    }

    pub fn desc(field: F) -> Self {
        Self {
            field,
            direction: SortDirection::Desc,
        }
    }

    /// Parses `field` or `field,direction`. Direction defaults to ascending.
    pub fn parse(raw: &str) -> Result<Self, PaginationError> {
        let mut parts = raw.split(',');
        let field_part = parts.next().unwrap_or_default().trim();
        let field = field_part
            .parse::<F>()
            .map_err(|_| PaginationError::InvalidSortField(field_part.to_string()))?;

        let direction = match parts.next() {
            Some(direction) => direction.parse::<SortDirection>()?,
            None => SortDirection::Asc,
        };

        if parts.next().is_some() {
            return Err(PaginationError::InvalidSortDirection(raw.to_string()));
        }

        Ok(Self { field, direction })
    }
}

/// Validated page coordinates plus ordering.
///
/// Sort orders apply left to right; later orders only break ties left by
/// earlier ones.
#[derive(Debug, Clone, PartialEq)]
pub struct PageRequest<F> {
    page: u32,
    size: u32,
    sort: Vec<SortOrder<F>>,
}

impl<F> PageRequest<F>
where
    F: std::str::FromStr,
{
    /// Accepts `0..=MAX_PAGE` as page index and `1..=MAX_PAGE_SIZE` as size.
    /// Anything outside those ranges is rejected, not clamped.
    pub fn new(page: i64, size: i64, sort: Vec<SortOrder<F>>) -> Result<Self, PaginationError> {
        let page = u32::try_from(page).map_err(|_| PaginationError::InvalidPage)?;
        let size = u32::try_from(size)
            .ok()
            .filter(|size| (1..=MAX_PAGE_SIZE).contains(size))
            .ok_or(PaginationError::InvalidPageSize)?;

        Ok(Self { page, size, sort })
    }

    /// Builds a request from raw `field[,direction]` sort expressions.
    /// Blank expressions are ignored.
    pub fn parse(page: i64, size: i64, raw_sort: &[String]) -> Result<Self, PaginationError> {
        let sort = raw_sort
            .iter()
            .filter(|raw| !raw.trim().is_empty())
            .map(|raw| SortOrder::parse(raw))
            .collect::<Result<Vec<_>, _>>()?;

        Self::new(page, size, sort)
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn sort(&self) -> &[SortOrder<F>] {
        &self.sort
    }

    /// Number of elements to skip before this page starts.
    pub fn offset(&self) -> u64 {
        u64::from(self.page) * u64::from(self.size)
    }
}

/// A page of results carrying the total element count.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub content: Vec<T>,
    pub number: u32,
    pub size: u32,
    pub total_elements: u64,
}

impl<T> Page<T> {
    pub fn new<F>(content: Vec<T>, request: &PageRequest<F>, total_elements: u64) -> Self {
        Self {
            content,
            number: request.page,
            size: request.size,
            total_elements,
        }
    }

    pub fn total_pages(&self) -> u64 {
        if self.size == 0 {
            return 0;
        }
        self.total_elements.div_ceil(u64::from(self.size))
    }

    pub fn is_first(&self) -> bool {
        self.number == 0
    }

    pub fn has_next(&self) -> bool {
        u64::from(self.number) + 1 < self.total_pages()
    }

    pub fn is_last(&self) -> bool {
        !self.has_next()
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            content: self.content.into_iter().map(f).collect(),
            number: self.number,
            size: self.size,
            total_elements: self.total_elements,
        }
    }
}

/// A page of results that only knows whether another page follows.
#[derive(Debug, Clone, PartialEq)]
pub struct Slice<T> {
    pub content: Vec<T>,
    pub number: u32,
    pub size: u32,
    pub has_next: bool,
}

impl<T> Slice<T> {
    /// Builds a slice from a query that fetched up to `size + 1` rows.
    /// The extra row only signals that a next slice exists and is dropped.
    pub fn from_overfetch<F>(mut rows: Vec<T>, request: &PageRequest<F>) -> Self {
        let size = request.size as usize;
        let has_next = rows.len() > size;
        rows.truncate(size);

        Self {
            content: rows,
            number: request.page,
            size: request.size,
            has_next,
        }
    }

    pub fn is_first(&self) -> bool {
        self.number == 0
    }

    pub fn is_last(&self) -> bool {
        !self.has_next
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Slice<U> {
        Slice {
            content: self.content.into_iter().map(f).collect(),
            number: self.number,
            size: self.size,
            has_next: self.has_next,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Field {
        Name,
        Price,
    }

    impl std::str::FromStr for Field {
        type Err = String;

        fn from_str(s: &str) -> Result<Self, Self::Err> {
            match s {
                "name" => Ok(Field::Name),
                "price" => Ok(Field::Price),
                _ => Err(format!("Invalid field: {}", s)),
            }
        }
    }

    #[test]
    fn should_parse_field_with_default_ascending_direction() {
        let order = SortOrder::<Field>::parse("name").unwrap();
        assert_eq!(order, SortOrder::asc(Field::Name));
    }

    #[test]
    fn should_parse_field_with_explicit_direction_ignoring_case() {
        let order = SortOrder::<Field>::parse("price,DESC").unwrap();
        assert_eq!(order, SortOrder::desc(Field::Price));
    }

    #[test]
    fn should_reject_unknown_sort_field() {
        let result = SortOrder::<Field>::parse("password,desc");
        assert_eq!(
            result.unwrap_err(),
            PaginationError::InvalidSortField("password".to_string())
        );
    }

    #[test]
    fn should_reject_unknown_sort_direction() {
        let result = SortOrder::<Field>::parse("price,sideways");
        assert!(matches!(
            result.unwrap_err(),
            PaginationError::InvalidSortDirection(_)
        ));
    }

    #[test]
    fn should_reject_negative_page() {
        let result = PageRequest::<Field>::new(-1, 10, vec![]);
        assert_eq!(result.unwrap_err(), PaginationError::InvalidPage);
    }

    #[test]
    fn should_accept_page_up_to_upper_bound() {
        let request = PageRequest::<Field>::new(i64::from(MAX_PAGE), 10, vec![]).unwrap();
        assert_eq!(request.page(), MAX_PAGE);

        let result = PageRequest::<Field>::new(i64::from(MAX_PAGE) + 1, 10, vec![]);
        assert_eq!(result.unwrap_err(), PaginationError::InvalidPage);
    }

    #[test]
    fn should_reject_zero_and_oversized_page_size() {
        assert_eq!(
            PageRequest::<Field>::new(0, 0, vec![]).unwrap_err(),
            PaginationError::InvalidPageSize
        );
        assert_eq!(
            PageRequest::<Field>::new(0, i64::from(MAX_PAGE_SIZE) + 1, vec![]).unwrap_err(),
            PaginationError::InvalidPageSize
        );
    }

    #[test]
    fn should_skip_blank_sort_expressions() {
        let request =
            PageRequest::<Field>::parse(0, 5, &["".to_string(), "name".to_string()]).unwrap();
        assert_eq!(request.sort(), &[SortOrder::asc(Field::Name)]);
    }

    #[test]
    fn should_compute_offset_from_page_and_size() {
        let request = PageRequest::<Field>::new(3, 20, vec![]).unwrap();
        assert_eq!(request.offset(), 60);
    }

    #[test]
    fn should_compute_page_metadata() {
        let request = PageRequest::<Field>::new(1, 5, vec![]).unwrap();
        let page = Page::new(vec![6, 7, 8, 9, 10], &request, 12);

        assert_eq!(page.total_pages(), 3);
        assert!(!page.is_first());
        assert!(page.has_next());
        assert!(!page.is_last());
    }

    #[test]
    fn should_mark_empty_page_as_last() {
        let request = PageRequest::<Field>::new(0, 5, vec![]).unwrap();
        let page: Page<i32> = Page::new(vec![], &request, 0);

        assert_eq!(page.total_pages(), 0);
        assert!(page.is_first());
        assert!(page.is_last());
    }

    #[test]
    fn should_detect_next_slice_from_extra_row() {
        let request = PageRequest::<Field>::new(0, 2, vec![]).unwrap();
        let slice = Slice::from_overfetch(vec![1, 2, 3], &request);

        assert_eq!(slice.content, vec![1, 2]);
        assert!(slice.has_next);
        assert!(!slice.is_last());
    }

    #[test]
    fn should_mark_short_slice_as_last() {
        let request = PageRequest::<Field>::new(4, 2, vec![]).unwrap();
        let slice = Slice::from_overfetch(vec![9], &request);

        assert_eq!(slice.content, vec![9]);
        assert!(slice.is_last());
        assert!(!slice.is_first());
    }

    proptest! {
        #[test]
        fn slice_never_exceeds_requested_size(size in 1i64..=100, rows in 0usize..250) {
            let request = PageRequest::<Field>::new(0, size, vec![]).unwrap();
            let slice = Slice::from_overfetch((0..rows).collect::<Vec<_>>(), &request);
            prop_assert!((slice.content.len() as i64) <= size);
            prop_assert_eq!(slice.has_next, (rows as i64) > size);
        }

        #[test]
        fn total_pages_cover_all_elements(size in 1i64..=100, total in 0u64..10_000) {
            let request = PageRequest::<Field>::new(0, size, vec![]).unwrap();
            let page: Page<()> = Page::new(vec![], &request, total);
            let pages = page.total_pages();
            prop_assert!(pages * (size as u64) >= total);
            prop_assert!(pages == 0 || (pages - 1) * (size as u64) < total);
        }
    }
}

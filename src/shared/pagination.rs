//! Pagination and sorting for post listings.
//!
//! `sort` follows the `field` / `-field` convention: a leading dash means
//! descending. Every ordering carries a stable tie-breaker in the stores so
//! consecutive pages never share a post.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::shared::error::SharedError;

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_LIMIT: u32 = 10;
pub const MAX_LIMIT: u32 = 100;

/// Column a listing can be ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    CreatedAt,
    UpdatedAt,
    Title,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// Parsed `sort` query parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PostSort {
    pub field: SortField,
    pub direction: SortDirection,
}

impl Default for PostSort {
    /// Newest first
    fn default() -> Self {
        Self {
            field: SortField::CreatedAt,
            direction: SortDirection::Descending,
        }
    }
}

impl FromStr for PostSort {
    type Err = SharedError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let raw = raw.trim();
        let (direction, name) = match raw.strip_prefix('-') {
            Some(name) => (SortDirection::Descending, name),
            None => (SortDirection::Ascending, raw.strip_prefix('+').unwrap_or(raw)),
        };
        let field = match name {
            "createdAt" => SortField::CreatedAt,
            "updatedAt" => SortField::UpdatedAt,
            "title" => SortField::Title,
            _ => {
                return Err(SharedError::validation(
                    "sort",
                    "Sort must be one of createdAt, updatedAt, title (prefix with - for descending)",
                ))
            }
        };
        Ok(Self { field, direction })
    }
}

impl fmt::Display for PostSort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.direction == SortDirection::Descending {
            f.write_str("-")?;
        }
        f.write_str(match self.field {
            SortField::CreatedAt => "createdAt",
            SortField::UpdatedAt => "updatedAt",
            SortField::Title => "title",
        })
    }
}

/// Raw query string of `GET /api/post`
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ListPostsQuery {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub sort: Option<String>,
}

/// A validated page request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub limit: u32,
    pub sort: PostSort,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
            sort: PostSort::default(),
        }
    }
}

impl PageRequest {
    /// Build a page request, rejecting page 0 and limits outside 1-100
    pub fn new(page: u32, limit: u32, sort: PostSort) -> Result<Self, SharedError> {
        if page == 0 {
            return Err(SharedError::validation("page", "Page must be at least 1"));
        }
        if limit == 0 || limit > MAX_LIMIT {
            return Err(SharedError::validation(
                "limit",
                format!("Limit must be between 1 and {MAX_LIMIT}"),
            ));
        }
        Ok(Self { page, limit, sort })
    }

    /// Number of posts skipped before this page
    pub fn offset(&self) -> u64 {
        u64::from(self.page - 1) * u64::from(self.limit)
    }
}

impl TryFrom<ListPostsQuery> for PageRequest {
    type Error = SharedError;

    fn try_from(query: ListPostsQuery) -> Result<Self, Self::Error> {
        let sort = match query.sort.as_deref() {
            Some(raw) if !raw.trim().is_empty() => raw.parse()?,
            _ => PostSort::default(),
        };
        Self::new(
            query.page.unwrap_or(DEFAULT_PAGE),
            query.limit.unwrap_or(DEFAULT_LIMIT),
            sort,
        )
    }
}

/// Pagination metadata returned next to a page of posts
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub page: u32,
    pub limit: u32,
    pub total: u64,
    pub total_pages: u64,
}

impl PageInfo {
    pub fn new(request: &PageRequest, total: u64) -> Self {
        Self {
            page: request.page,
            limit: request.limit,
            total,
            total_pages: total.div_ceil(u64::from(request.limit)),
        }
    }
}

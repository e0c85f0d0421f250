pub const DEFAULT_LIMIT: u64 = 20;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListTimeEntriesByUser {
    pub user_id: String,
    pub offset: u64,
    pub limit: u64,
    pub sort_desc: bool,
}

impl ListTimeEntriesByUser {
    /// First page, newest start first.
    pub fn first_page(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            offset: 0,
            limit: DEFAULT_LIMIT,
            sort_desc: true,
        }
    }
}

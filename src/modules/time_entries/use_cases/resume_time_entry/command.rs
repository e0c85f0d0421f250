#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResumeTimeEntry {
    pub time_entry_id: String,
    pub occurred_at: i64,
}

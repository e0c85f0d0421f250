#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PauseTimeEntry {
    pub time_entry_id: String,
    pub occurred_at: i64,
}

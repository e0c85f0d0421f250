#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartTimeEntry {
    pub time_entry_id: String,
    pub user_id: String,
    pub task_id: String,
    pub occurred_at: i64,
}

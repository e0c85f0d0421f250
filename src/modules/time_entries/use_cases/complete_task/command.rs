#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompleteTask {
    pub task_id: String,
    pub user_id: String,
    pub occurred_at: i64,
}

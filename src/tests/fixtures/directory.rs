// Seeded users and tasks shared by handler and e2e tests.

use crate::modules::time_entries::adapters::outbound::directory_in_memory::InMemoryDirectory;
use crate::modules::time_entries::core::ports::{TaskRef, UserRef};

pub const USER_ID: &str = "user-fixed-0001";
pub const OTHER_USER_ID: &str = "user-fixed-0002";
pub const TASK_ID: &str = "task-fixed-0001";
pub const OTHER_TASK_ID: &str = "task-fixed-0002";
pub const COMPLETED_TASK_ID: &str = "task-fixed-done";

pub fn seeded_directory() -> InMemoryDirectory {
    InMemoryDirectory::seeded(
        vec![
            UserRef {
                user_id: USER_ID.into(),
            },
            UserRef {
                user_id: OTHER_USER_ID.into(),
            },
        ],
        vec![
            TaskRef {
                task_id: TASK_ID.into(),
                is_completed: false,
            },
            TaskRef {
                task_id: OTHER_TASK_ID.into(),
                is_completed: false,
            },
            TaskRef {
                task_id: COMPLETED_TASK_ID.into(),
                is_completed: true,
            },
        ],
    )
}

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use crate::shared::models::Task;
use crate::shared::utils::DbPool;
use crate::tasks::error::TaskError;
use crate::tasks::types::CreateTaskRequest;

/// Store operations for task records. Every query runs on the blocking pool
/// against a pooled Postgres connection.
#[derive(Clone)]
pub struct TaskEngine {
    conn: DbPool,
}

impl TaskEngine {
    pub fn new(conn: DbPool) -> Self {
        Self { conn }
    }

    /// Validates the payload, runs the duplicate guard, and persists a new
    /// incomplete task.
    ///
    /// The guard and the insert are separate round-trips, so two concurrent
    /// creates with the same title can both pass the check.
    pub async fn create_task(&self, request: CreateTaskRequest) -> Result<(), TaskError> {
        let now = Utc::now();
        let (title, description) = request.trimmed_fields().ok_or(TaskError::Validation)?;

        if self.find_active_duplicate(&title, now).await?.is_some() {
            return Err(TaskError::Duplicate);
        }

        let task = Task {
            id: Uuid::new_v4(),
            title,
            description,
            completed: false,
            priority: request.priority.unwrap_or_default().as_str().to_string(),
            due_date: request.due_date,
            created_at: now,
        };
        self.insert(task).await?;
        Ok(())
    }

    pub async fn insert(&self, task: Task) -> Result<Task, TaskError> {
        use crate::shared::schema::tasks::dsl;

        self.with_conn(move |conn| {
            diesel::insert_into(dsl::tasks)
                .values(&task)
                .get_result(conn)
                .map_err(TaskError::from)
        })
        .await
    }

    /// First incomplete task whose title matches `title` case-insensitively
    /// (full match) and whose due date is still at or ahead of `now`. A task
    /// without a due date never counts as a duplicate.
    pub async fn find_active_duplicate(
        &self,
        title: &str,
        now: DateTime<Utc>,
    ) -> Result<Option<Task>, TaskError> {
        use crate::shared::schema::tasks::dsl;

        let pattern = escape_like_pattern(title);
        self.with_conn(move |conn| {
            dsl::tasks
                .filter(dsl::title.ilike(pattern))
                .filter(dsl::completed.eq(false))
                .filter(dsl::due_date.is_not_null())
                .filter(dsl::due_date.ge(now))
                .first::<Task>(conn)
                .optional()
                .map_err(TaskError::from)
        })
        .await
    }

    pub async fn find_all(&self) -> Result<Vec<Task>, TaskError> {
        use crate::shared::schema::tasks::dsl;

        self.with_conn(move |conn| {
            dsl::tasks
                .order(dsl::created_at.desc())
                .load::<Task>(conn)
                .map_err(TaskError::from)
        })
        .await
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Task>, TaskError> {
        use crate::shared::schema::tasks::dsl;

        self.with_conn(move |conn| {
            dsl::tasks
                .find(id)
                .first::<Task>(conn)
                .optional()
                .map_err(TaskError::from)
        })
        .await
    }

    /// Marks the task completed, regardless of its current state. Returns
    /// the updated record, or None when the id is unknown.
    pub async fn complete(&self, id: Uuid) -> Result<Option<Task>, TaskError> {
        use crate::shared::schema::tasks::dsl;

        self.with_conn(move |conn| {
            diesel::update(dsl::tasks.find(id))
                .set(dsl::completed.eq(true))
                .get_result::<Task>(conn)
                .optional()
                .map_err(TaskError::from)
        })
        .await
    }

    /// Removes the task and returns the deleted record, or None when the id
    /// is unknown.
    pub async fn delete(&self, id: Uuid) -> Result<Option<Task>, TaskError> {
        use crate::shared::schema::tasks::dsl;

        self.with_conn(move |conn| {
            diesel::delete(dsl::tasks.find(id))
                .get_result::<Task>(conn)
                .optional()
                .map_err(TaskError::from)
        })
        .await
    }

    async fn with_conn<T, F>(&self, f: F) -> Result<T, TaskError>
    where
        F: FnOnce(&mut PgConnection) -> Result<T, TaskError> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.conn.clone();
        tokio::task::spawn_blocking(move || {
            let mut conn = pool.get()?;
            f(&mut conn)
        })
        .await?
    }
}

/// Neutralizes LIKE wildcards so the duplicate guard compares the whole
/// title instead of treating user text as a pattern.
fn escape_like_pattern(raw: &str) -> String {
    let mut pattern = String::with_capacity(raw.len());
    for ch in raw.chars() {
        if matches!(ch, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern
}

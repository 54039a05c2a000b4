//! JSON wire types and their conversions to service requests.

use crate::tasks::{
    domain::{
        Task, TaskId, TaskListId, TaskListOverview, TaskPriority, TaskStatus, to_stored_precision,
    },
    services::{CreateTaskListRequest, CreateTaskRequest, UpdateTaskListRequest, UpdateTaskRequest},
};
use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, de};

const ZONELESS_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// Task list as exchanged over HTTP.
///
/// `count`, `progress` and `tasks` are derived on output and ignored on
/// input.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskListDto {
    /// Identifier; must be absent on create and match the path on update.
    #[serde(default)]
    pub id: Option<TaskListId>,
    /// Display title.
    #[serde(default)]
    pub title: Option<String>,
    /// Free-form description.
    #[serde(default)]
    pub description: Option<String>,
    /// Number of tasks in the list.
    #[serde(default, skip_deserializing)]
    pub count: usize,
    /// Fraction of closed tasks.
    #[serde(default, skip_deserializing)]
    pub progress: f64,
    /// Tasks owned by the list.
    #[serde(default, skip_deserializing)]
    pub tasks: Vec<TaskDto>,
}

/// Task as exchanged over HTTP.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskDto {
    /// Identifier; must be absent on create and match the path on update.
    #[serde(default)]
    pub id: Option<TaskId>,
    /// Display title.
    #[serde(default)]
    pub title: Option<String>,
    /// Free-form description.
    #[serde(default)]
    pub description: Option<String>,
    /// Due date; RFC 3339 or a zone-less local timestamp read as UTC.
    #[serde(default, deserialize_with = "deserialize_due_date")]
    pub due_date: Option<DateTime<Utc>>,
    /// Priority; defaults to `MEDIUM` on create.
    #[serde(default)]
    pub priority: Option<TaskPriority>,
    /// Status; ignored on create, mandatory on update.
    #[serde(default)]
    pub status: Option<TaskStatus>,
}

fn deserialize_due_date<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(raw) = Option::<String>::deserialize(deserializer)? else {
        return Ok(None);
    };
    parse_due_date(&raw).map(Some).map_err(de::Error::custom)
}

/// Parses an RFC 3339 timestamp, falling back to a zone-less
/// `YYYY-MM-DDTHH:MM:SS[.fff]` value interpreted as UTC.
///
/// Sub-microsecond digits are dropped.
///
/// # Errors
///
/// Returns the parse error of the zone-less attempt when neither form
/// matches.
pub fn parse_due_date(raw: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    DateTime::parse_from_rfc3339(raw)
        .map(|parsed| parsed.with_timezone(&Utc))
        .or_else(|_| NaiveDateTime::parse_from_str(raw, ZONELESS_FORMAT).map(|naive| naive.and_utc()))
        .map(to_stored_precision)
}

impl From<TaskListOverview> for TaskListDto {
    fn from(overview: TaskListOverview) -> Self {
        let count = overview.task_count();
        let progress = overview.progress();
        let (task_list, tasks) = overview.into_parts();
        Self {
            id: Some(task_list.id()),
            title: Some(task_list.title().as_str().to_owned()),
            description: task_list.description().map(str::to_owned),
            count,
            progress,
            tasks: tasks.iter().map(TaskDto::from).collect(),
        }
    }
}

impl From<&Task> for TaskDto {
    fn from(task: &Task) -> Self {
        Self {
            id: Some(task.id()),
            title: Some(task.title().as_str().to_owned()),
            description: task.description().map(str::to_owned),
            due_date: task.due_date(),
            priority: Some(task.priority()),
            status: Some(task.status()),
        }
    }
}

impl From<Task> for TaskDto {
    fn from(task: Task) -> Self {
        Self::from(&task)
    }
}

impl From<TaskListDto> for CreateTaskListRequest {
    fn from(dto: TaskListDto) -> Self {
        let mut request = Self::new(dto.title.unwrap_or_default());
        if let Some(description) = dto.description {
            request = request.with_description(description);
        }
        if let Some(id) = dto.id {
            request = request.with_id(id);
        }
        request
    }
}

impl From<TaskListDto> for UpdateTaskListRequest {
    fn from(dto: TaskListDto) -> Self {
        let mut request = Self::new(dto.title.unwrap_or_default());
        if let Some(description) = dto.description {
            request = request.with_description(description);
        }
        if let Some(id) = dto.id {
            request = request.with_id(id);
        }
        request
    }
}

impl From<TaskDto> for CreateTaskRequest {
    fn from(dto: TaskDto) -> Self {
        let mut request = Self::new(dto.title.unwrap_or_default());
        if let Some(description) = dto.description {
            request = request.with_description(description);
        }
        if let Some(due_date) = dto.due_date {
            request = request.with_due_date(due_date);
        }
        if let Some(priority) = dto.priority {
            request = request.with_priority(priority);
        }
        if let Some(id) = dto.id {
            request = request.with_id(id);
        }
        request
    }
}

impl From<TaskDto> for UpdateTaskRequest {
    fn from(dto: TaskDto) -> Self {
        let mut request = Self::new(dto.title.unwrap_or_default());
        if let Some(description) = dto.description {
            request = request.with_description(description);
        }
        if let Some(due_date) = dto.due_date {
            request = request.with_due_date(due_date);
        }
        if let Some(status) = dto.status {
            request = request.with_status(status);
        }
        if let Some(priority) = dto.priority {
            request = request.with_priority(priority);
        }
        if let Some(id) = dto.id {
            request = request.with_id(id);
        }
        request
    }
}

//! Per-screen state for a task list.
//!
//! A [`TaskBoard`] owns everything one list screen shows: the loaded tasks,
//! loading and error flags, which row is expanded, the task awaiting
//! confirmation and the one-shot notice raised after an action. It changes
//! only through its own methods and the results of lifecycle operations.

use super::lifecycle::{TaskLifecycleResult, TaskLifecycleService};
use crate::task::{
    domain::{Task, TaskId, TaskStatus},
    ports::{DocumentStore, IdentityProvider},
};
use std::fmt;
use tracing::debug;

/// Transition offered by a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardAction {
    /// Claim an active task.
    Engage,
    /// Mark an ongoing task as done.
    Complete,
}

impl BoardAction {
    /// Returns the action offered for tasks in `stage`, if any.
    #[must_use]
    pub const fn for_stage(stage: TaskStatus) -> Option<Self> {
        match stage {
            TaskStatus::Active => Some(Self::Engage),
            TaskStatus::Ongoing => Some(Self::Complete),
            TaskStatus::Completed => None,
        }
    }

    /// Returns the message shown after the action succeeds.
    #[must_use]
    pub const fn success_message(self) -> &'static str {
        match self {
            Self::Engage => "Task engaged successfully!",
            Self::Complete => "Task marked as done successfully!",
        }
    }
}

/// One-shot message raised after an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// The action succeeded.
    Success(String),
    /// The action failed with the given reason.
    Error(String),
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success(message) => f.write_str(message),
            Self::Error(reason) => write!(f, "Error: {reason}"),
        }
    }
}

/// State of one task list screen.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskBoard {
    stage: TaskStatus,
    tasks: Vec<Task>,
    loading: bool,
    error: Option<String>,
    expanded: Option<TaskId>,
    pending: Option<Task>,
    in_flight: bool,
    notice: Option<Notice>,
}

impl TaskBoard {
    /// Creates a board for the `stage` list. The board starts loading.
    #[must_use]
    pub const fn new(stage: TaskStatus) -> Self {
        Self {
            stage,
            tasks: Vec::new(),
            loading: true,
            error: None,
            expanded: None,
            pending: None,
            in_flight: false,
            notice: None,
        }
    }

    /// Returns the stage listed by this board.
    #[must_use]
    pub const fn stage(&self) -> TaskStatus {
        self.stage
    }

    /// Returns the action offered on this board, if any.
    #[must_use]
    pub const fn action(&self) -> Option<BoardAction> {
        BoardAction::for_stage(self.stage)
    }

    /// Returns the loaded tasks.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Returns `true` while a reload is running.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    /// Returns the last load failure, if any.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Returns the expanded task, if any.
    #[must_use]
    pub const fn expanded(&self) -> Option<&TaskId> {
        self.expanded.as_ref()
    }

    /// Returns the task awaiting confirmation, if any.
    #[must_use]
    pub const fn pending(&self) -> Option<&Task> {
        self.pending.as_ref()
    }

    /// Returns `true` while a confirmed action is running.
    #[must_use]
    pub const fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    /// Returns the unread notice without consuming it.
    #[must_use]
    pub const fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// Consumes the unread notice.
    pub fn take_notice(&mut self) -> Option<Notice> {
        self.notice.take()
    }

    /// Expands `id`, or collapses it when it is already expanded.
    pub fn toggle_expanded(&mut self, id: &TaskId) {
        if self.expanded.as_ref() == Some(id) {
            self.expanded = None;
        } else {
            self.expanded = Some(id.clone());
        }
    }

    /// Opens the confirmation for `task`.
    ///
    /// Returns `false` without changing state when the board offers no
    /// action or an action is already running.
    pub fn request_action(&mut self, task: &Task) -> bool {
        if self.action().is_none() || self.in_flight {
            return false;
        }
        self.pending = Some(task.clone());
        true
    }

    /// Cancels the pending confirmation unless an action is running.
    pub fn dismiss(&mut self) {
        if !self.in_flight {
            self.pending = None;
        }
    }

    /// Marks the board as loading and clears the previous error.
    pub fn begin_refresh(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Applies the result of a reload. Tasks from the previous load are
    /// kept when the reload fails.
    pub fn finish_refresh(&mut self, result: TaskLifecycleResult<Vec<Task>>) {
        match result {
            Ok(tasks) => self.tasks = tasks,
            Err(err) => self.error = Some(err.to_string()),
        }
        self.loading = false;
    }

    /// Starts the pending action and returns the task it applies to.
    ///
    /// Returns `None` when nothing is pending or an action is already
    /// running.
    pub fn begin_confirm(&mut self) -> Option<Task> {
        if self.in_flight {
            return None;
        }
        let task = self.pending.clone()?;
        self.in_flight = true;
        Some(task)
    }

    /// Applies the result of the confirmed action and closes the
    /// confirmation.
    ///
    /// Returns `true` when the action succeeded and the list should be
    /// reloaded.
    pub fn finish_confirm(&mut self, result: &TaskLifecycleResult<Task>) -> bool {
        self.in_flight = false;
        self.pending = None;
        match (result, self.action()) {
            (Ok(_), Some(action)) => {
                self.notice = Some(Notice::Success(action.success_message().to_owned()));
                true
            }
            (Ok(_), None) => false,
            (Err(err), _) => {
                self.notice = Some(Notice::Error(err.to_string()));
                false
            }
        }
    }

    /// Reloads the list through `service`.
    pub async fn refresh<S, I>(&mut self, service: &TaskLifecycleService<S, I>)
    where
        S: DocumentStore,
        I: IdentityProvider,
    {
        self.begin_refresh();
        let result = service.list(self.stage).await;
        self.finish_refresh(result);
        debug!(stage = %self.stage, count = self.tasks.len(), "board refreshed");
    }

    /// Runs the pending action through `service` and reloads the list on
    /// success.
    pub async fn confirm<S, I>(&mut self, service: &TaskLifecycleService<S, I>)
    where
        S: DocumentStore,
        I: IdentityProvider,
    {
        let Some(action) = self.action() else {
            return;
        };
        let Some(task) = self.begin_confirm() else {
            return;
        };

        let result = match action {
            BoardAction::Engage => service.engage(&task).await,
            BoardAction::Complete => service.complete(&task).await,
        };
        if self.finish_confirm(&result) {
            self.refresh(service).await;
        }
    }
}

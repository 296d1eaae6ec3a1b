//! In-memory project store with snapshot listeners.
//!
//! The store is the only writer of the project list. Every mutation hands each
//! registered listener its own copy of the full list, synchronously and in
//! registration order.

use thiserror::Error;
use tracing::{debug, info};

use crate::core::project::{NewProject, Project, ProjectId, ProjectStatus};

pub type Listener<T> = Box<dyn FnMut(Vec<T>) + Send>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StateError {
    #[error("no project with id {0}")]
    UnknownProject(ProjectId),
}

/// Listener registry shared by stores of any cloneable item type.
pub struct State<T> {
    listeners: Vec<Listener<T>>,
}

impl<T> Default for State<T> {
    fn default() -> Self {
        Self {
            listeners: Vec::new(),
        }
    }
}

impl<T: Clone> State<T> {
    pub fn add_listener<F>(&mut self, listener: F)
    where
        F: FnMut(Vec<T>) + Send + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    fn notify(&mut self, items: &[T]) {
        for listener in &mut self.listeners {
            listener(items.to_vec());
        }
    }
}

impl<T> std::fmt::Debug for State<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("State")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

#[derive(Debug, Default)]
pub struct ProjectState {
    state: State<Project>,
    projects: Vec<Project>,
}

impl ProjectState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_listener<F>(&mut self, listener: F)
    where
        F: FnMut(Vec<Project>) + Send + 'static,
    {
        self.state.add_listener(listener);
    }

    pub fn listener_count(&self) -> usize {
        self.state.listener_count()
    }

    /// Appends a new active project and notifies every listener.
    pub fn add_project(&mut self, new: NewProject) -> ProjectId {
        let id = ProjectId::generate();
        let project = Project::from_new(id.clone(), new);
        info!(
            project_id = %project.id,
            title = %project.title,
            people = project.people,
            "project added"
        );
        self.projects.push(project);
        self.update_listeners();
        id
    }

    /// Reassigns the status of a project.
    ///
    /// Returns `Ok(false)` without notifying when the project already has
    /// `status`.
    pub fn move_project(
        &mut self,
        id: &ProjectId,
        status: ProjectStatus,
    ) -> Result<bool, StateError> {
        let project = self
            .projects
            .iter_mut()
            .find(|project| &project.id == id)
            .ok_or_else(|| StateError::UnknownProject(id.clone()))?;

        if project.status == status {
            debug!(project_id = %id, %status, "project already in target list");
            return Ok(false);
        }

        info!(project_id = %id, from = %project.status, to = %status, "project moved");
        project.status = status;
        self.update_listeners();
        Ok(true)
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn get(&self, id: &ProjectId) -> Option<&Project> {
        self.projects.iter().find(|project| &project.id == id)
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    fn update_listeners(&mut self) {
        self.state.notify(&self.projects);
    }
}

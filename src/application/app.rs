//! Screen state and the controller that owns it
//!
//! All visible state lives in one [`Screen`] value held by [`App`]. Views read
//! it through [`App::screen`]; input only changes it through
//! [`App::dispatch`]. Every change to the entry list is applied to the screen
//! first and then handed to the background writer, so the caller never waits
//! on storage.

use crate::application::EntryStore;
use crate::domain::{Collection, Draft, EntryId};
use crate::error::Result;
use crate::infrastructure::{KeyValueStore, SnapshotWriter};
use tracing::debug;

/// Add-entry form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Form {
    pub visible: bool,
    pub draft: Draft,
}

/// Everything a view needs to render
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Screen {
    pub entries: Collection,
    pub form: Form,
}

/// User input understood by [`App::dispatch`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    OpenForm,
    EditTitle(String),
    EditDescription(String),
    Submit,
    DismissForm,
    Delete(EntryId),
}

/// What a dispatched action did to the entry list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Only form state changed (or nothing did)
    Unchanged,
    Added(EntryId),
    Removed(EntryId),
    /// Delete of an id that is not in the list
    NotFound(EntryId),
}

pub struct App {
    screen: Screen,
    writer: SnapshotWriter,
}

impl App {
    /// Load the initial list and start the background writer
    pub fn start<S>(store: EntryStore<S>) -> Result<Self>
    where
        S: KeyValueStore + 'static,
    {
        let entries = store.load();
        let writer = SnapshotWriter::spawn(store.into_gateway())?;

        Ok(App {
            screen: Screen {
                entries,
                form: Form::default(),
            },
            writer,
        })
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn entries(&self) -> &Collection {
        &self.screen.entries
    }

    pub fn dispatch(&mut self, action: Action) -> Outcome {
        match action {
            Action::OpenForm => {
                self.screen.form.visible = true;
                Outcome::Unchanged
            }
            Action::EditTitle(title) => {
                self.screen.form.draft.title = title;
                Outcome::Unchanged
            }
            Action::EditDescription(description) => {
                self.screen.form.draft.description = description;
                Outcome::Unchanged
            }
            Action::Submit => self.submit(),
            Action::DismissForm => {
                self.screen.form.draft.clear();
                self.screen.form.visible = false;
                Outcome::Unchanged
            }
            Action::Delete(id) => self.delete(id),
        }
    }

    /// Wait for every write queued so far
    pub fn flush(&self) -> Result<()> {
        self.writer.flush()
    }

    fn submit(&mut self) -> Outcome {
        if !self.screen.form.visible {
            debug!("submit ignored, form is not open");
            return Outcome::Unchanged;
        }

        let draft = &self.screen.form.draft;
        let entries = self.screen.entries.add(&draft.title, &draft.description);
        let Some(id) = entries.last().map(|e| e.id.clone()) else {
            return Outcome::Unchanged;
        };

        self.commit(entries);
        self.screen.form.draft.clear();
        self.screen.form.visible = false;
        debug!(%id, "entry added");
        Outcome::Added(id)
    }

    fn delete(&mut self, id: EntryId) -> Outcome {
        let found = self.screen.entries.contains(&id);
        let entries = self.screen.entries.remove(&id);
        self.commit(entries);

        if found {
            debug!(%id, "entry removed");
            Outcome::Removed(id)
        } else {
            debug!(%id, "delete of unknown entry");
            Outcome::NotFound(id)
        }
    }

    fn commit(&mut self, entries: Collection) {
        self.screen.entries = entries;
        self.writer.submit(self.screen.entries.clone());
    }
}

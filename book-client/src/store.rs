//! Shared book selection for UI code.
//!
//! [`BookStore`] is a handle: build one, hand clones to whatever needs to read
//! or change the selection, and subscribe to be told when it changes.

use crate::models::book::Book;
use std::sync::Arc;
use tokio::sync::watch;
use tracing::debug;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    pub book_id: String,
    pub selected_book: Option<Book>,
}

/// Every way the selection can change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionAction {
    SetBookId(String),
    SetSelectedBook(Option<Book>),
}

#[derive(Debug, Clone)]
pub struct BookStore {
    state: Arc<watch::Sender<SelectionState>>,
}

impl BookStore {
    pub fn new() -> Self {
        let (state, _) = watch::channel(SelectionState::default());
        Self {
            state: Arc::new(state),
        }
    }

    pub fn dispatch(&self, action: SelectionAction) {
        debug!("Selection action: {}", action_name(&action));
        self.state.send_modify(|state| match action {
            SelectionAction::SetBookId(book_id) => state.book_id = book_id,
            SelectionAction::SetSelectedBook(book) => state.selected_book = book,
        });
    }

    pub fn set_book_id(&self, book_id: impl Into<String>) {
        self.dispatch(SelectionAction::SetBookId(book_id.into()));
    }

    pub fn set_selected_book(&self, book: Option<Book>) {
        self.dispatch(SelectionAction::SetSelectedBook(book));
    }

    pub fn snapshot(&self) -> SelectionState {
        self.state.borrow().clone()
    }

    pub fn book_id(&self) -> String {
        self.state.borrow().book_id.clone()
    }

    pub fn selected_book(&self) -> Option<Book> {
        self.state.borrow().selected_book.clone()
    }

    /// Receiver that is marked changed after every dispatched action.
    pub fn subscribe(&self) -> watch::Receiver<SelectionState> {
        self.state.subscribe()
    }
}

impl Default for BookStore {
    fn default() -> Self {
        Self::new()
    }
}

// Book content can be large, keep it out of the logs.
fn action_name(action: &SelectionAction) -> String {
    match action {
        SelectionAction::SetBookId(id) => format!("SetBookId({})", id),
        SelectionAction::SetSelectedBook(Some(book)) => format!("SetSelectedBook({})", book.id),
        SelectionAction::SetSelectedBook(None) => "SetSelectedBook(None)".to_string(),
    }
}

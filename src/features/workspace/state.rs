use super::model::{Document, DocumentKind};

/// Workspace state: the ordered list of open documents.
#[derive(Debug, Default)]
pub(crate) struct WorkspaceState {
    pub(crate) documents: Vec<Document>,
    next_document_id: u64,
}

impl WorkspaceState {
    pub(crate) fn open(&mut self, kind: DocumentKind, title: String) -> u64 {
        let id = self.next_document_id;
        self.next_document_id = self.next_document_id.wrapping_add(1);

        self.documents.push(Document { id, title, kind });
        id
    }

    /// Closing an id that is no longer present is a no-op.
    pub(crate) fn close(&mut self, id: u64) {
        self.documents.retain(|document| document.id != id);
    }
}

#[cfg(test)]
mod tests {
    use super::WorkspaceState;
    use crate::features::workspace::DocumentKind;

    #[test]
    fn opened_documents_keep_insertion_order_and_distinct_ids() {
        let mut state = WorkspaceState::default();

        let first =
            state.open(DocumentKind::Notebook, String::from("Untitled.ipynb"));
        let second =
            state.open(DocumentKind::Terminal, String::from("Terminal"));

        assert_ne!(first, second);
        assert_eq!(state.documents[0].title, "Untitled.ipynb");
        assert_eq!(state.documents[1].title, "Terminal");
    }

    #[test]
    fn closing_removes_exactly_the_requested_document() {
        let mut state = WorkspaceState::default();
        let first =
            state.open(DocumentKind::Notebook, String::from("Untitled.ipynb"));
        let _second =
            state.open(DocumentKind::Console, String::from("Console"));

        state.close(first);

        assert_eq!(state.documents.len(), 1);
        assert_eq!(state.documents[0].kind, DocumentKind::Console);
    }

    #[test]
    fn closing_a_missing_id_is_a_no_op() {
        let mut state = WorkspaceState::default();
        state.open(DocumentKind::Terminal, String::from("Terminal"));

        state.close(42);

        assert_eq!(state.documents.len(), 1);
    }
}

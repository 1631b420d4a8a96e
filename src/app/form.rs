// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use log::debug;

use crate::{
    alignment::SeqId,
    errors::SeqPairError,
    seq::validate::validate_sequence,
    ui::line_editor::LineEditor,
};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormField {
    pub editor: LineEditor,
    pub error: Option<String>,
}

// The two-field input form. Field errors are set by validate() and cleared as soon as the field is
// edited again.
#[derive(Clone, Debug, PartialEq)]
pub struct SequenceForm {
    fields: [FormField; 2],
    focus: SeqId,
}

impl SequenceForm {
    pub fn new() -> Self {
        SequenceForm {
            fields: [FormField::default(), FormField::default()],
            focus: SeqId::First,
        }
    }

    pub fn with_values(seq1: &str, seq2: &str) -> Self {
        let mut form = Self::new();
        form.set_value(SeqId::First, seq1);
        form.set_value(SeqId::Second, seq2);
        form
    }

    pub fn field(&self, id: SeqId) -> &FormField {
        &self.fields[id.index()]
    }

    pub fn value(&self, id: SeqId) -> String {
        self.field(id).editor.text()
    }

    pub fn set_value(&mut self, id: SeqId, value: &str) {
        let field = &mut self.fields[id.index()];
        field.editor = LineEditor::from_text(value);
        field.error = None;
    }

    pub fn focus(&self) -> SeqId {
        self.focus
    }

    pub fn set_focus(&mut self, id: SeqId) {
        self.focus = id;
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.other();
    }

    // Applies an edit to the focused field.
    pub fn edit(&mut self, f: impl FnOnce(&mut LineEditor)) {
        let field = &mut self.fields[self.focus.index()];
        f(&mut field.editor);
        field.error = None;
    }

    // Cursor motion in the focused field; errors stay.
    pub fn move_cursor(&mut self, f: impl FnOnce(&mut LineEditor)) {
        f(&mut self.fields[self.focus.index()].editor);
    }

    // Both values if both fields pass; otherwise sets the field errors and returns None.
    pub fn validate(&mut self) -> Option<(String, String)> {
        let mut ok = true;
        for id in SeqId::ALL {
            let field = &mut self.fields[id.index()];
            match validate_sequence(id, &field.editor.text()) {
                Ok(()) => field.error = None,
                Err(SeqPairError::Validation { message, .. }) => {
                    debug!("{}: {}", id, message);
                    field.error = Some(message);
                    ok = false;
                }
                Err(e) => {
                    field.error = Some(e.to_string());
                    ok = false;
                }
            }
        }
        if ok {
            Some((self.value(SeqId::First), self.value(SeqId::Second)))
        } else {
            None
        }
    }
}

impl Default for SequenceForm {
    fn default() -> Self {
        Self::new()
    }
}

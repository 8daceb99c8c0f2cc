//! Fixed editing scripts run by the binary.

use crate::config::ConfigFlags;
use crate::document::Document;
use crate::editor::{Editor, NaiveEditor};
use crate::storage::{Storage, StorageError};

/// Expected rendering of [`populate_sample`] on a fresh editor.
pub const SAMPLE_RENDERING: &str = "Hello, world!\n\
This is a real-world document editor example.\n\
\tIndented text after a tab space.\n\
[Image: picture.jpg]";

/// Expected rendering of [`populate_naive_sample`] on a fresh editor.
pub const NAIVE_SAMPLE_RENDERING: &str = "[Image: harsh.jpg]\nyadav\n";

/// Fill `editor` with the sample document.
pub fn populate_sample<S: Storage>(editor: &mut Editor<S>) {
    editor.add_text("Hello, world!");
    editor.add_new_line();
    editor.add_text("This is a real-world document editor example.");
    editor.add_new_line();
    editor.add_tab_space();
    editor.add_text("Indented text after a tab space.");
    editor.add_new_line();
    editor.add_image("picture.jpg");
}

pub fn populate_naive_sample(editor: &mut NaiveEditor) {
    editor.add_image("harsh.jpg");
    editor.add_text("yadav");
}

/// Run the sample script selected by `flags` and save the result.
///
/// `emit` receives the rendering before the save is attempted, so it is
/// shown even when saving fails. Returns a description of the sink the
/// document was saved to.
///
/// # Errors
///
/// Returns the [`StorageError`] reported by the selected backend.
pub fn run(flags: &ConfigFlags, emit: impl FnOnce(&str)) -> Result<String, StorageError> {
    let output = flags.output_path();
    if flags.naive {
        let mut editor = NaiveEditor::with_output(output);
        populate_naive_sample(&mut editor);
        emit(editor.render_document());
        editor.save_to_file()?;
        return Ok(editor.output().display().to_string());
    }

    let storage = flags.storage_kind().build(&output);
    let mut editor: Editor =
        Editor::new(Document::new(), storage).with_cache_policy(flags.cache_policy());
    populate_sample(&mut editor);
    emit(editor.render_document());
    editor.save_document()?;
    Ok(editor.storage().describe())
}

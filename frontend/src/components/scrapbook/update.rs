//! Update function for the scrapbook component.
//!
//! Elm-style: receives the component state, the `Context`, and a `Msg`,
//! mutates the state and returns whether the view should re-render.
//!
//! Key behaviors
//! - Every store mutation is persisted before the view re-renders. A failed
//!   write leaves the store as it was and is reported with a toast.
//! - Destructive actions ask for confirmation first; declining changes nothing.
//! - Picked files are read asynchronously and come back as a follow-up message.
//! - Note edits are autosaved after a quiet period; each edit restarts the timer.

use common::autosave::SaveIndicator;
use common::model::backup::Backup;
use common::model::photo::DataUrl;
use common::stores::StoreError;
use gloo_file::futures::{read_as_bytes, read_as_text};
use gloo_file::File;
use gloo_timers::callback::Timeout;
use yew::platform::spawn_local;
use yew::prelude::*;

use super::helpers::{
    compute_md5, confirm, download_text, local_time, now_millis, report_error,
    set_window_dirty_flag, show_toast, today,
};
use super::messages::Msg;
use super::state::{reset_file_input, ScrapbookComponent};

/// Central update function for the component.
pub fn update(
    component: &mut ScrapbookComponent,
    ctx: &Context<ScrapbookComponent>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::PhotoSelected(file) => {
            let file = File::from(file);
            let link = ctx.link().clone();
            spawn_local(async move {
                match read_as_bytes(&file).await {
                    Ok(bytes) => {
                        let url = DataUrl::from_bytes(&file.raw_mime_type(), &bytes);
                        link.send_message(Msg::PhotoEncoded(url.to_string()));
                    }
                    Err(err) => link.send_message(Msg::FileReadFailed(err.to_string())),
                }
            });
            false
        }
        Msg::PhotoEncoded(data_url) => {
            reset_file_input(&component.photo_input_ref);
            match component.photos.add(data_url) {
                Ok(()) => true,
                Err(err) => {
                    report_error("Could not save photo", &err);
                    false
                }
            }
        }
        Msg::OpenViewer(index) => component.viewer.open(index, component.photos.len()),
        Msg::CloseViewer => {
            component.viewer.close();
            true
        }
        Msg::DeleteViewedPhoto => {
            if !component.viewer.is_open() || !confirm("Delete this photo?") {
                return false;
            }
            match component.viewer.delete_current(&mut component.photos) {
                Ok(_) => true,
                Err(err) => {
                    report_error("Could not delete photo", &err);
                    false
                }
            }
        }
        Msg::ClearPhotos => {
            if !confirm("Clear all saved photos?") {
                return false;
            }
            component.viewer.close();
            if let Err(err) = component.photos.clear() {
                report_error("Could not clear photos", &err);
            }
            true
        }
        Msg::SetLetterTitle(title) => {
            component.letter_title = title;
            true
        }
        Msg::SetLetterBody(body) => {
            component.letter_body = body;
            true
        }
        Msg::SubmitLetter => {
            let created = now_millis();
            match component
                .letters
                .add(&component.letter_title, &component.letter_body, created)
            {
                Ok(true) => {
                    component.letter_title.clear();
                    component.letter_body.clear();
                    true
                }
                // blank title or body
                Ok(false) => false,
                Err(err) => {
                    report_error("Could not save letter", &err);
                    false
                }
            }
        }
        Msg::DeleteLetter(display_index) => {
            if !confirm("Delete this letter?") {
                return false;
            }
            match component.letters.remove_at_display(display_index) {
                Ok(removed) => removed.is_some(),
                Err(err) => {
                    report_error("Could not delete letter", &err);
                    false
                }
            }
        }
        Msg::ClearLetters => {
            if !confirm("Clear all letters?") {
                return false;
            }
            if let Err(err) = component.letters.clear() {
                report_error("Could not clear letters", &err);
            }
            true
        }
        Msg::NoteEdited => {
            component.indicator = SaveIndicator::Saving;
            let ticket = component.autosave.edit();
            let link = ctx.link().clone();
            component.autosave_timer = Some(Timeout::new(component.config.autosave_delay_ms, move || {
                link.send_message(Msg::AutosaveElapsed(ticket));
            }));
            set_window_dirty_flag(component.note_is_dirty());
            true
        }
        Msg::AutosaveElapsed(ticket) => {
            if !component.autosave.elapsed(ticket) {
                return false;
            }
            component.autosave_timer = None;
            save_note(component)
        }
        Msg::SaveNote => {
            component.cancel_autosave();
            save_note(component)
        }
        Msg::ClearNote => {
            if !confirm("Clear appreciation note?") {
                return false;
            }
            component.cancel_autosave();
            component.set_surface_markup("");
            match component.note.clear() {
                Ok(()) => {
                    component.saved_note_md5 = compute_md5("");
                    component.indicator = SaveIndicator::Cleared;
                    set_window_dirty_flag(false);
                }
                Err(err) => report_error("Could not clear the note", &err),
            }
            true
        }
        Msg::SetIndicator(indicator) => {
            component.indicator = indicator;
            true
        }
        Msg::ExportBackup => {
            let backup = Backup::new(
                component.photos.photos(),
                component.letters.letters(),
                component.note.markup(),
                Some(now_millis()),
            );
            match backup.to_json() {
                Ok(json) => match download_text(&Backup::file_name(&today()), &json) {
                    Ok(()) => show_toast("Backup exported."),
                    Err(err) => report_error("Could not export backup", &format!("{:?}", err)),
                },
                Err(err) => report_error("Could not export backup", &err),
            }
            false
        }
        Msg::OpenBackupDialog => {
            if let Some(input) = component.backup_input_ref.cast::<web_sys::HtmlInputElement>() {
                input.click();
            }
            false
        }
        Msg::BackupSelected(file) => {
            let file = File::from(file);
            let link = ctx.link().clone();
            spawn_local(async move {
                match read_as_text(&file).await {
                    Ok(text) => link.send_message(Msg::BackupRead(text)),
                    Err(err) => link.send_message(Msg::FileReadFailed(err.to_string())),
                }
            });
            false
        }
        Msg::BackupRead(text) => {
            reset_file_input(&component.backup_input_ref);
            let backup = match Backup::parse(&text) {
                Ok(backup) => backup,
                Err(err) => {
                    report_error("Could not read backup", &err);
                    return false;
                }
            };
            if backup.is_empty() {
                show_toast("This backup holds no photos, letters or note.");
                return false;
            }
            if !confirm("Replace all photos, letters and the note with this backup?") {
                return false;
            }
            match restore_backup(component, backup) {
                Ok(()) => show_toast("Backup imported."),
                Err(err) => report_error("Could not import backup", &err),
            }
            true
        }
        Msg::FileReadFailed(reason) => {
            reset_file_input(&component.photo_input_ref);
            reset_file_input(&component.backup_input_ref);
            report_error("Could not read file", &reason);
            false
        }
    }
}

/// Persists the note surface verbatim and updates the indicator.
fn save_note(component: &mut ScrapbookComponent) -> bool {
    let markup = component.surface_markup();
    match component.note.save(markup) {
        Ok(()) => {
            component.saved_note_md5 = compute_md5(component.note.markup());
            component.indicator = SaveIndicator::Saved(local_time());
            set_window_dirty_flag(false);
        }
        Err(err) => report_error("Could not save the note", &err),
    }
    true
}

/// Replaces every store with the backup's content, stopping at the first
/// failed write.
fn restore_backup(component: &mut ScrapbookComponent, backup: Backup) -> Result<(), StoreError> {
    component.viewer.close();
    component.cancel_autosave();
    component.photos.replace_all(backup.photos)?;
    component.letters.replace_all(backup.letters)?;
    if backup.appreciation.is_empty() {
        component.note.clear()?;
    } else {
        component.note.save(backup.appreciation)?;
    }
    component.set_surface_markup(component.note.markup());
    component.saved_note_md5 = compute_md5(component.note.markup());
    set_window_dirty_flag(false);
    Ok(())
}

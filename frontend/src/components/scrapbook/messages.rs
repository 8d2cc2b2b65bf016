use common::autosave::{SaveIndicator, Ticket};

#[derive(Clone)]
pub enum Msg {
    PhotoSelected(web_sys::File),
    PhotoEncoded(String),
    OpenViewer(usize),
    CloseViewer,
    DeleteViewedPhoto,
    ClearPhotos,
    SetLetterTitle(String),
    SetLetterBody(String),
    SubmitLetter,
    DeleteLetter(usize),
    ClearLetters,
    NoteEdited,
    AutosaveElapsed(Ticket),
    SaveNote,
    ClearNote,
    SetIndicator(SaveIndicator),
    ExportBackup,
    OpenBackupDialog,
    BackupSelected(web_sys::File),
    BackupRead(String),
    FileReadFailed(String),
}

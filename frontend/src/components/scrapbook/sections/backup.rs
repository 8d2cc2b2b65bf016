use web_sys::HtmlInputElement;
use yew::html::Scope;
use yew::prelude::*;

use crate::components::scrapbook::{Msg, ScrapbookComponent};

pub fn backup_section(component: &ScrapbookComponent, link: &Scope<ScrapbookComponent>) -> Html {
    html! {
        <section class="backup section-actions">
            <button class="btn ghost" onclick={link.callback(|_| Msg::ExportBackup)}>
                {"Export all"}
            </button>
            <button class="btn ghost" onclick={link.callback(|_| Msg::OpenBackupDialog)}>
                {"Import backup"}
            </button>
            <input
                type="file"
                accept=".txt,.json,text/plain,application/json"
                style="display:none"
                ref={component.backup_input_ref.clone()}
                onchange={link.batch_callback(|e: Event| {
                    let input: HtmlInputElement = e.target_unchecked_into();
                    input.files().and_then(|files| files.get(0)).map(Msg::BackupSelected)
                })}
            />
        </section>
    }
}

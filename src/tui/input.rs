//! Key handling
//!
//! Key presses are first translated into an [`Action`] against the current
//! state (which modal, if any, owns the keyboard), then dispatched to the
//! controller. Translation is pure so it can be tested without a terminal.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::handlers::Controller;
use crate::services::{Authenticator, DirectoryApi};
use crate::state::{EditableForm, FormEditor, Tab, ViewState};

/// Editing keystrokes for whichever form is open
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKey {
    Char(char),
    Backspace,
    NextField,
    PreviousField,
    CycleForward,
    CycleBack,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    DismissNotice,

    ConfirmDelete,
    CancelDelete,

    SubmitLogin,
    CancelLogin,
    SubmitCollege,
    CancelCollege,
    SubmitEnquiry,
    CancelEnquiry,
    Edit(FormKey),

    OpenLogin,
    Logout,
    SelectTab(Tab),
    Up,
    Down,
    Enquire,
    AddCollege,
    EditCollege,
    DeleteCollege,
    NextFilter,
    PreviousFilter,
    Refresh,

    None,
}

/// Whether the event loop keeps going after an action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Translate a key press given what is on screen
pub fn map_key(key: KeyEvent, state: &ViewState) -> Action {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Action::Quit;
    }

    if state.notices.blocking().is_some() {
        return match key.code {
            KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') => Action::DismissNotice,
            _ => Action::None,
        };
    }

    if state.pending_delete.is_some() {
        return match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => Action::ConfirmDelete,
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => Action::CancelDelete,
            _ => Action::None,
        };
    }

    if state.login_prompt.is_some() {
        return map_form_key(key, Action::SubmitLogin, Action::CancelLogin);
    }

    if state.show_college_form {
        return map_form_key(key, Action::SubmitCollege, Action::CancelCollege);
    }

    if state.show_enquiry_form {
        return map_form_key(key, Action::SubmitEnquiry, Action::CancelEnquiry);
    }

    map_main_key(key, state)
}

fn map_form_key(key: KeyEvent, submit: Action, cancel: Action) -> Action {
    match key.code {
        KeyCode::Enter => submit,
        KeyCode::Esc => cancel,
        KeyCode::Tab | KeyCode::Down => Action::Edit(FormKey::NextField),
        KeyCode::BackTab | KeyCode::Up => Action::Edit(FormKey::PreviousField),
        KeyCode::Right => Action::Edit(FormKey::CycleForward),
        KeyCode::Left => Action::Edit(FormKey::CycleBack),
        KeyCode::Backspace => Action::Edit(FormKey::Backspace),
        KeyCode::Char(ch) => Action::Edit(FormKey::Char(ch)),
        _ => Action::None,
    }
}

fn map_main_key(key: KeyEvent, state: &ViewState) -> Action {
    let tab = state.visible_tab();
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        KeyCode::Up | KeyCode::Char('k') => Action::Up,
        KeyCode::Down | KeyCode::Char('j') => Action::Down,
        KeyCode::Char('r') => Action::Refresh,
        KeyCode::Char('l') if !state.is_admin => Action::OpenLogin,
        KeyCode::Char('o') if state.is_admin => Action::Logout,
        KeyCode::Char('1') if state.is_admin => Action::SelectTab(Tab::Colleges),
        KeyCode::Char('2') if state.is_admin => Action::SelectTab(Tab::Manage),
        KeyCode::Char('3') if state.is_admin => Action::SelectTab(Tab::Enquiries),
        KeyCode::Enter | KeyCode::Char('i') if tab == Tab::Colleges => Action::Enquire,
        KeyCode::Char('a') if state.is_admin && tab != Tab::Enquiries => Action::AddCollege,
        KeyCode::Char('e') if state.is_admin && tab != Tab::Enquiries => Action::EditCollege,
        KeyCode::Char('d') if state.is_admin && tab != Tab::Enquiries => Action::DeleteCollege,
        KeyCode::Char('f') | KeyCode::Right if tab == Tab::Enquiries => Action::NextFilter,
        KeyCode::Char('F') | KeyCode::Left if tab == Tab::Enquiries => Action::PreviousFilter,
        _ => Action::None,
    }
}

fn apply_form_key<F: EditableForm>(editor: &mut FormEditor<F>, key: FormKey) {
    match key {
        FormKey::Char(ch) => editor.insert_char(ch),
        FormKey::Backspace => editor.backspace(),
        FormKey::NextField => editor.next_field(),
        FormKey::PreviousField => editor.previous_field(),
        FormKey::CycleForward => editor.cycle(true),
        FormKey::CycleBack => editor.cycle(false),
    }
}

/// Route an editing keystroke to the form that currently owns the keyboard
pub fn edit_active_form(state: &mut ViewState, key: FormKey) {
    if let Some(editor) = state.login_prompt.as_mut() {
        apply_form_key(editor, key);
    } else if state.show_college_form {
        apply_form_key(&mut state.college_form, key);
    } else if state.show_enquiry_form {
        apply_form_key(&mut state.enquiry_form, key);
    }
}

/// Run one action against the controller
pub async fn dispatch<A, Au>(controller: &mut Controller<A, Au>, action: Action) -> Flow
where
    A: DirectoryApi,
    Au: Authenticator,
{
    if action != Action::None {
        controller.state_mut().notices.clear_passive();
    }

    match action {
        Action::Quit => return Flow::Exit,
        Action::DismissNotice => controller.dismiss_notice(),

        Action::ConfirmDelete => {
            controller.confirm_delete().await;
        }
        Action::CancelDelete => controller.cancel_delete(),

        Action::SubmitLogin => {
            controller.submit_login().await;
        }
        Action::CancelLogin => controller.cancel_login(),
        Action::SubmitCollege => {
            controller.submit_college().await;
        }
        Action::CancelCollege => controller.cancel_college_form(),
        Action::SubmitEnquiry => {
            controller.submit_enquiry().await;
        }
        Action::CancelEnquiry => controller.cancel_enquiry(),
        Action::Edit(key) => edit_active_form(controller.state_mut(), key),

        Action::OpenLogin => controller.open_login_prompt(),
        Action::Logout => controller.logout(),
        Action::SelectTab(tab) => controller.select_tab(tab),
        Action::Up => controller.state_mut().cursor_up(),
        Action::Down => controller.state_mut().cursor_down(),
        Action::Enquire => controller.enquire_highlighted(),
        Action::AddCollege => controller.add_college(),
        Action::EditCollege => controller.edit_highlighted(),
        Action::DeleteCollege => controller.request_delete_highlighted(),
        Action::NextFilter => controller.next_filter(),
        Action::PreviousFilter => controller.previous_filter(),
        Action::Refresh => {
            controller.fetch_colleges().await;
            if controller.state().is_admin && controller.state().visible_tab() == Tab::Enquiries {
                controller.fetch_enquiries().await;
            }
        }

        Action::None => {}
    }

    Flow::Continue
}

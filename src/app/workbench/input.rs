use super::Workbench;
use crate::core::event::{InputEvent, Key};
use crate::core::view::EventResult;
use crate::core::Command;
use crate::kernel::services::adapters::{text_input_char, KeybindingContext};
use crate::kernel::Action as KernelAction;
use crate::views::{hit_test_editor, hit_test_tab, prompt_area, TabHit};
use crossterm::event::{KeyCode, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

pub(super) fn handle_input(workbench: &mut Workbench, event: &InputEvent) -> EventResult {
    match event {
        InputEvent::Key(_) => match event.key_press() {
            Some(key) => handle_key(workbench, &key),
            None => EventResult::Ignored,
        },
        InputEvent::Mouse(mouse_event) => handle_mouse(workbench, mouse_event),
        InputEvent::Paste(text) => handle_paste(workbench, text),
        InputEvent::Resize(..) => EventResult::Consumed,
        InputEvent::FocusGained | InputEvent::FocusLost => EventResult::Ignored,
    }
}

fn handle_key(workbench: &mut Workbench, key: &Key) -> EventResult {
    let _ = workbench.dispatch_kernel(KernelAction::ClearStatus);

    if workbench.store.state().ui.open_prompt.is_some() {
        return handle_prompt_key(workbench, key);
    }

    let command = workbench
        .keybindings
        .resolve(KeybindingContext::Editor, key)
        .cloned()
        .or_else(|| text_input_char(key).map(Command::InsertChar));
    let Some(command) = command else {
        return EventResult::Ignored;
    };

    if command == Command::Quit {
        return EventResult::Quit;
    }

    let _ = workbench.dispatch_kernel(KernelAction::RunCommand(command));
    EventResult::Consumed
}

fn handle_prompt_key(workbench: &mut Workbench, key: &Key) -> EventResult {
    let action = match key.code {
        KeyCode::Enter => KernelAction::OpenPromptSubmit,
        KeyCode::Esc => KernelAction::OpenPromptCancel,
        KeyCode::Backspace => KernelAction::OpenPromptBackspace,
        _ => {
            let global = workbench.keybindings.resolve(KeybindingContext::Global, key);
            if global == Some(&Command::Quit) {
                return EventResult::Quit;
            }
            match text_input_char(key) {
                Some(ch) => KernelAction::OpenPromptAppend(ch),
                None => return EventResult::Consumed,
            }
        }
    };

    let _ = workbench.dispatch_kernel(action);
    EventResult::Consumed
}

fn handle_paste(workbench: &mut Workbench, text: &str) -> EventResult {
    if workbench.store.state().ui.open_prompt.is_some() {
        for ch in text.chars().filter(|ch| !ch.is_control()) {
            let _ = workbench.dispatch_kernel(KernelAction::OpenPromptAppend(ch));
        }
        return EventResult::Consumed;
    }

    if workbench.store.state().files.is_empty() {
        return EventResult::Ignored;
    }

    let text = text.replace("\r\n", "\n").replace('\r', "\n");
    let _ = workbench.dispatch_kernel(KernelAction::EditorInsertText(text));
    EventResult::Consumed
}

fn rect_contains(area: Rect, x: u16, y: u16) -> bool {
    x >= area.x && x < area.right() && y >= area.y && y < area.bottom()
}

fn handle_mouse(workbench: &mut Workbench, event: &MouseEvent) -> EventResult {
    let (x, y) = (event.column, event.row);
    match event.kind {
        MouseEventKind::Moved => {
            let hovered = match hit_test_tab(&workbench.last_tab_layout, x, y) {
                Some(TabHit::Activate(index) | TabHit::Close(index)) => Some(index),
                None => None,
            };
            let changed = workbench.dispatch_kernel(KernelAction::SetHoveredTab(hovered));
            EventResult::from_changed(changed)
        }
        MouseEventKind::Down(MouseButton::Left) => handle_left_click(workbench, x, y),
        MouseEventKind::ScrollUp => scroll_editor(workbench, -1),
        MouseEventKind::ScrollDown => scroll_editor(workbench, 1),
        _ => EventResult::Ignored,
    }
}

fn handle_left_click(workbench: &mut Workbench, x: u16, y: u16) -> EventResult {
    if workbench.store.state().ui.open_prompt.is_some() {
        let inside = workbench
            .last_render_area
            .is_some_and(|area| rect_contains(prompt_area(area), x, y));
        if !inside {
            let _ = workbench.dispatch_kernel(KernelAction::OpenPromptCancel);
        }
        return EventResult::Consumed;
    }

    if let Some(hit) = hit_test_tab(&workbench.last_tab_layout, x, y) {
        let index = match hit {
            TabHit::Activate(index) | TabHit::Close(index) => index,
        };
        let Some(path) = workbench
            .store
            .state()
            .files
            .files()
            .get(index)
            .map(|f| f.file_path.clone())
        else {
            return EventResult::Ignored;
        };
        let action = match hit {
            TabHit::Activate(_) => KernelAction::ActivateTab { path },
            TabHit::Close(_) => KernelAction::CloseTab { path },
        };
        let _ = workbench.dispatch_kernel(action);
        return EventResult::Consumed;
    }

    if workbench
        .last_welcome
        .is_some_and(|welcome| rect_contains(welcome.button, x, y))
    {
        let _ = workbench.dispatch_kernel(KernelAction::RunCommand(Command::OpenFile));
        return EventResult::Consumed;
    }

    let target = {
        let state = workbench.store.state();
        match (workbench.last_editor_layout.as_ref(), state.files.active()) {
            (Some(layout), Some(file)) => {
                hit_test_editor(layout, file, state.config.tab_width(), x, y)
            }
            _ => None,
        }
    };
    match target {
        Some((row, col)) => {
            let _ = workbench.dispatch_kernel(KernelAction::EditorPlaceCursor { row, col });
            EventResult::Consumed
        }
        None => EventResult::Ignored,
    }
}

fn scroll_editor(workbench: &mut Workbench, direction: isize) -> EventResult {
    if workbench.store.state().ui.open_prompt.is_some() {
        return EventResult::Consumed;
    }

    let step = workbench.store.state().config.scroll_step().max(1) as isize;
    let changed = workbench.dispatch_kernel(KernelAction::EditorScroll {
        delta: direction * step,
    });
    EventResult::from_changed(changed)
}

//! Tab row for the open files: layout, hit-testing and rendering.

use crate::app::theme::UiTheme;
use crate::core::text_width::{display_width, ellipsize};
use crate::kernel::OpenedFile;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Widget;
use std::ops::Range;

const PADDING_LEFT: u16 = 1;
const PADDING_RIGHT: u16 = 1;
const DIRTY_WIDTH: u16 = 2;
const CLOSE_BUTTON_WIDTH: u16 = 2;
const DIVIDER_WIDTH: u16 = 1;

const DIRTY_MARKER: &str = "●";
const CLOSE_GLYPH: &str = "×";
const DIVIDER_GLYPH: &str = "│";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabSlot {
    pub index: usize,
    pub start: u16,
    pub end: u16,
    pub dirty_x: Option<u16>,
    pub title_x: u16,
    pub title_width: u16,
    pub close_start: Option<u16>,
    pub close_end: u16,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TabBarLayout {
    pub area: Rect,
    pub slots: Vec<TabSlot>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabHit {
    Activate(usize),
    Close(usize),
}

fn shows_close(file: &OpenedFile, index: usize, hovered: Option<usize>) -> bool {
    file.active || hovered == Some(index)
}

pub fn compute_tab_bar_layout(
    area: Rect,
    files: &[OpenedFile],
    hovered: Option<usize>,
) -> TabBarLayout {
    if area.width == 0 || area.height == 0 || files.is_empty() {
        return TabBarLayout {
            area,
            slots: Vec::new(),
        };
    }

    let window = visible_window(files, hovered, area.width as usize);
    let preferred: Vec<usize> = files[window.clone()]
        .iter()
        .map(|f| display_width(&f.name))
        .collect();
    let fixed = total_fixed_width(files, hovered, window.clone());
    let budget = (area.width as usize).saturating_sub(fixed);
    let allocated = allocate_title_widths(&preferred, budget);

    let right = area.right();
    let mut x = area.x;
    let mut slots = Vec::with_capacity(window.len());

    for (offset, index) in window.clone().enumerate() {
        if x >= right {
            break;
        }
        let file = &files[index];

        let start = x;
        x = x.saturating_add(PADDING_LEFT).min(right);

        let dirty_x = if file.dirty && x < right {
            let pos = x;
            x = x.saturating_add(DIRTY_WIDTH).min(right);
            Some(pos)
        } else {
            None
        };

        let title_x = x;
        let requested = allocated.get(offset).copied().unwrap_or(0).min(u16::MAX as usize) as u16;
        let title_width = requested.min(right.saturating_sub(title_x));
        x = x.saturating_add(title_width).min(right);
        x = x.saturating_add(PADDING_RIGHT).min(right);

        let mut close_start = None;
        let mut close_end = x;
        if shows_close(file, index, hovered) && x < right {
            close_start = Some(x);
            close_end = x.saturating_add(CLOSE_BUTTON_WIDTH).min(right);
            x = close_end;
        }

        slots.push(TabSlot {
            index,
            start,
            end: x,
            dirty_x,
            title_x,
            title_width,
            close_start,
            close_end,
        });

        if index + 1 < window.end {
            x = x.saturating_add(DIVIDER_WIDTH).min(right);
        }
    }

    TabBarLayout { area, slots }
}

/// Tabs that fit in `width` at one title cell each, always including the active tab.
fn visible_window(files: &[OpenedFile], hovered: Option<usize>, width: usize) -> Range<usize> {
    let min_width = |index: usize| {
        let file = &files[index];
        fixed_width(file, index, hovered) + usize::from(!file.name.is_empty())
    };
    let active = files.iter().position(|f| f.active).unwrap_or(0);

    let mut first = 0;
    let mut used: usize = (first..=active).map(min_width).sum::<usize>()
        + (active - first) * DIVIDER_WIDTH as usize;
    while used > width && first < active {
        used -= min_width(first) + DIVIDER_WIDTH as usize;
        first += 1;
    }

    let mut end = active + 1;
    while end < files.len() {
        let next = used + DIVIDER_WIDTH as usize + min_width(end);
        if next > width {
            break;
        }
        used = next;
        end += 1;
    }

    first..end
}

/// A click on the close control closes without activating.
pub fn hit_test(layout: &TabBarLayout, x: u16, y: u16) -> Option<TabHit> {
    let area = layout.area;
    if y < area.y || y >= area.bottom() {
        return None;
    }

    let slot = layout.slots.iter().find(|s| x >= s.start && x < s.end)?;
    match slot.close_start {
        Some(close) if x >= close && x < slot.close_end => Some(TabHit::Close(slot.index)),
        _ => Some(TabHit::Activate(slot.index)),
    }
}

fn fixed_width(file: &OpenedFile, index: usize, hovered: Option<usize>) -> usize {
    let mut width = (PADDING_LEFT + PADDING_RIGHT) as usize;
    if file.dirty {
        width += DIRTY_WIDTH as usize;
    }
    if shows_close(file, index, hovered) {
        width += CLOSE_BUTTON_WIDTH as usize;
    }
    width
}

fn total_fixed_width(files: &[OpenedFile], hovered: Option<usize>, window: Range<usize>) -> usize {
    let dividers = window.len().saturating_sub(1) * (DIVIDER_WIDTH as usize);
    dividers
        + window
            .map(|index| fixed_width(&files[index], index, hovered))
            .sum::<usize>()
}

/// Every title gets one cell first, then the rest is dealt out round-robin.
pub fn allocate_title_widths(preferred: &[usize], budget: usize) -> Vec<usize> {
    let mut widths = vec![0; preferred.len()];
    let mut remaining = budget;

    for (width, pref) in widths.iter_mut().zip(preferred) {
        if remaining == 0 {
            return widths;
        }
        if *pref > 0 {
            *width = 1;
            remaining -= 1;
        }
    }

    let mut needs: Vec<usize> = preferred
        .iter()
        .zip(&widths)
        .map(|(pref, assigned)| pref.saturating_sub(*assigned))
        .collect();

    while remaining > 0 {
        let mut progressed = false;
        for (width, need) in widths.iter_mut().zip(needs.iter_mut()) {
            if *need == 0 {
                continue;
            }
            *width += 1;
            *need -= 1;
            remaining -= 1;
            progressed = true;
            if remaining == 0 {
                break;
            }
        }
        if !progressed {
            break;
        }
    }

    widths
}

pub struct TabBar<'a> {
    pub files: &'a [OpenedFile],
    pub layout: &'a TabBarLayout,
    pub theme: &'a UiTheme,
}

impl Widget for TabBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let theme = self.theme;
        let base = Style::default()
            .bg(theme.tab_bar_bg)
            .fg(theme.tab_inactive_fg);
        buf.set_style(area, base);

        let y = area.y;
        for (i, slot) in self.layout.slots.iter().enumerate() {
            let Some(file) = self.files.get(slot.index) else {
                continue;
            };

            let style = if file.active {
                Style::default()
                    .bg(theme.tab_active_bg)
                    .fg(theme.tab_active_fg)
                    .add_modifier(Modifier::BOLD)
            } else {
                base
            };
            let width = slot.end.saturating_sub(slot.start);
            buf.set_style(Rect::new(slot.start, y, width, 1), style);

            if let Some(dx) = slot.dirty_x {
                buf.set_stringn(dx, y, DIRTY_MARKER, 1, style.fg(theme.tab_accent));
            }

            let title = ellipsize(&file.name, slot.title_width as usize);
            buf.set_stringn(slot.title_x, y, &title, slot.title_width as usize, style);

            if let Some(cx) = slot.close_start {
                let width = slot.close_end.saturating_sub(cx) as usize;
                buf.set_stringn(cx, y, CLOSE_GLYPH, width, style.fg(theme.tab_accent));
            }

            let divider_x = slot.end;
            if i + 1 < self.layout.slots.len() && divider_x < area.right() {
                buf.set_stringn(divider_x, y, DIVIDER_GLYPH, 1, base);
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/views/tab_bar.rs"]
mod tests;

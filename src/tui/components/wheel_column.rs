//! Single-value wheel column.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

use crate::binding::Binding;
use crate::picker::Picker;
use crate::tui::theme::*;

/// Default shared height in rows.
pub const DEFAULT_HEIGHT: u16 = 7;

/// Default rows kept free around the wheel, split above and below it.
pub const DEFAULT_LABEL_INSET: u16 = 2;

/// One scrollable, snap-to-row list bound to a shared selection index.
///
/// Values are stringified once on construction; the column keeps only the
/// display strings.
#[derive(Debug, Clone)]
pub struct WheelColumn {
    labels: Vec<String>,
    selection: Binding,
    prefix: String,
    suffix: String,
    height: u16,
    label_inset: u16,
    cyclic: bool,
}

impl WheelColumn {
    pub fn new<T, I>(selection: Binding, values: I) -> Self
    where
        T: ToString,
        I: IntoIterator<Item = T>,
    {
        Self {
            labels: values.into_iter().map(|v| v.to_string()).collect(),
            selection,
            prefix: String::new(),
            suffix: String::new(),
            height: DEFAULT_HEIGHT,
            label_inset: DEFAULT_LABEL_INSET,
            cyclic: false,
        }
    }

    /// Text shown before every value. Empty means none.
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Text shown after every value. Empty means none.
    pub fn suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    pub fn height(mut self, height: u16) -> Self {
        self.height = height;
        self
    }

    pub fn label_inset(mut self, label_inset: u16) -> Self {
        self.label_inset = label_inset;
        self
    }

    pub fn cyclic(mut self, cyclic: bool) -> Self {
        self.cyclic = cyclic;
        self
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn selection(&self) -> &Binding {
        &self.selection
    }

    pub fn prefix_text(&self) -> &str {
        &self.prefix
    }

    pub fn suffix_text(&self) -> &str {
        &self.suffix
    }

    pub fn frame_height(&self) -> u16 {
        self.height
    }

    pub fn inset(&self) -> u16 {
        self.label_inset
    }

    /// Rows available to the wheel itself.
    pub fn visible_rows(&self) -> u16 {
        self.height.saturating_sub(self.label_inset)
    }

    /// User snapped to row `index`.
    pub fn select(&self, index: usize) -> bool {
        let changed = self.select_index(index);
        if changed {
            crate::log::log_event(&format!("wheel select {} ({})", index, self.labels[index]));
        }
        changed
    }

    /// Full display text of row `index`.
    pub fn row_text(&self, index: usize) -> Option<String> {
        self.labels
            .get(index)
            .map(|label| format!("{}{}{}", self.prefix, label, self.suffix))
    }

    /// Item shown in the first wheel row. Negative near the top of the
    /// list, so the selection always sits on the centre row.
    pub fn scroll_offset(&self, visible_rows: usize) -> isize {
        match self.display_index() {
            Some(selected) => selected as isize - (visible_rows / 2) as isize,
            None => 0,
        }
    }

    /// The wheel area inside a column frame.
    pub fn wheel_area(&self, area: Rect) -> Rect {
        let frame = Rect {
            height: area.height.min(self.height),
            ..area
        };
        let inset = self.label_inset.min(frame.height);
        Rect {
            y: frame.y + inset / 2,
            height: frame.height - inset,
            ..frame
        }
    }

    fn row_line(&self, index: usize, style: Style) -> Line<'_> {
        let mut spans = Vec::with_capacity(3);
        if !self.prefix.is_empty() {
            spans.push(Span::styled(self.prefix.as_str(), style));
        }
        spans.push(Span::styled(self.labels[index].as_str(), style));
        if !self.suffix.is_empty() {
            spans.push(Span::styled(self.suffix.as_str(), style));
        }
        Line::from(spans).alignment(Alignment::Center)
    }

    /// Screen row of the selection band inside `wheel`.
    pub fn centre_row(wheel: Rect) -> u16 {
        wheel.y + wheel.height / 2
    }

    /// Render into `area`. Returns the wheel area and its scroll offset.
    pub(crate) fn render_column(&self, area: Rect, buf: &mut Buffer, focused: bool) -> (Rect, isize) {
        let wheel = self.wheel_area(area);
        let Some(selected) = self.display_index() else {
            return (wheel, 0);
        };
        if wheel.is_empty() {
            return (wheel, 0);
        }

        let visible = wheel.height as usize;
        let offset = self.scroll_offset(visible);

        for row in 0..visible {
            let Ok(index) = usize::try_from(offset + row as isize) else {
                continue;
            };
            if index >= self.len() {
                break;
            }
            let row_area = Rect {
                y: wheel.y + row as u16,
                height: 1,
                ..wheel
            };
            let style = if index == selected {
                buf.set_style(row_area, Style::new().bg(HIGHLIGHT_BG));
                let fg = if focused { ACCENT_MINT } else { TEXT_WHITE };
                Style::new().fg(fg).add_modifier(Modifier::BOLD)
            } else if index.abs_diff(selected) == 1 {
                Style::new().fg(TEXT_DIM)
            } else {
                Style::new().fg(TEXT_FAINT)
            };
            self.row_line(index, style).render(row_area, buf);
        }

        (wheel, offset)
    }
}

impl Picker for WheelColumn {
    type Item = String;

    fn items(&self) -> &[Self::Item] {
        &self.labels
    }

    fn selected_index(&self) -> usize {
        self.selection.get()
    }

    fn set_selected_index(&self, index: usize) -> bool {
        self.selection.set(index)
    }

    fn wraps(&self) -> bool {
        self.cyclic
    }
}

impl Widget for &WheelColumn {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.render_column(area, buf, false);
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn row_string(buf: &Buffer, y: u16) -> String {
        let area = buf.area;
        (area.x..area.right())
            .map(|x| buf[(x, y)].symbol())
            .collect::<String>()
    }

    pub(crate) fn highlighted_rows(buf: &Buffer) -> Vec<u16> {
        highlighted_rows_in(buf, buf.area)
    }

    /// Rows whose whole width inside `area` carries the selection band.
    pub(crate) fn highlighted_rows_in(buf: &Buffer, area: Rect) -> Vec<u16> {
        (area.y..area.bottom())
            .filter(|&y| (area.x..area.right()).all(|x| buf[(x, y)].bg == HIGHLIGHT_BG))
            .collect()
    }

    fn render(column: &WheelColumn, width: u16) -> Buffer {
        let area = Rect::new(0, 0, width, column.frame_height());
        let mut buf = Buffer::empty(area);
        column.render(area, &mut buf);
        buf
    }

    #[test]
    fn test_values_are_stringified_once() {
        let column = WheelColumn::new(Binding::new(0), [1.5f32, 2.0, 10.25]);
        assert_eq!(column.labels(), &["1.5", "2", "10.25"]);
    }

    #[test]
    fn test_highlights_selected_row() {
        let selection = Binding::new(1);
        let column = WheelColumn::new(selection.clone(), ["A", "B", "C"]);
        let buf = render(&column, 9);

        let rows = highlighted_rows(&buf);
        assert_eq!(rows.len(), 1);
        assert_eq!(row_string(&buf, rows[0]).trim(), "B");
    }

    #[test]
    fn test_external_write_is_reflected() {
        let selection = Binding::new(1);
        let column = WheelColumn::new(selection.clone(), ["A", "B", "C"]);

        selection.set(0);
        let buf = render(&column, 9);

        let rows = highlighted_rows(&buf);
        assert_eq!(rows.len(), 1);
        assert_eq!(row_string(&buf, rows[0]).trim(), "A");
    }

    #[test]
    fn test_prefix_and_suffix_adjacent_to_value() {
        let column = WheelColumn::new(Binding::new(2), 0..24)
            .prefix("@")
            .suffix("h");
        assert_eq!(column.row_text(2).as_deref(), Some("@2h"));

        let buf = render(&column, 11);
        let rows = highlighted_rows(&buf);
        assert_eq!(row_string(&buf, rows[0]).trim(), "@2h");
    }

    #[test]
    fn test_empty_decorations_leave_no_artifacts() {
        let column = WheelColumn::new(Binding::new(0), ["x"]).prefix("").suffix("");
        assert_eq!(column.row_text(0).as_deref(), Some("x"));

        let buf = render(&column, 3);
        let rows = highlighted_rows(&buf);
        assert_eq!(row_string(&buf, rows[0]), " x ");
    }

    #[test]
    fn test_user_select_writes_binding() {
        let selection = Binding::new(0);
        let other = Binding::new(5);
        let column = WheelColumn::new(selection.clone(), ["A", "B", "C"]);

        assert!(column.select(2));
        assert_eq!(selection.get(), 2);
        assert_eq!(other.get(), 5);

        assert!(!column.select(7));
        assert_eq!(selection.get(), 2);
    }

    #[test]
    fn test_empty_column_renders_nothing() {
        let selection = Binding::new(0);
        let column = WheelColumn::new(selection.clone(), Vec::<u8>::new());
        let buf = render(&column, 5);

        assert!(highlighted_rows(&buf).is_empty());
        assert!((0..buf.area.height).all(|y| row_string(&buf, y).trim().is_empty()));
        assert!(!column.select(0));
        assert!(!column.select_next());
        assert_eq!(selection.get(), 0);
    }

    #[test]
    fn test_out_of_range_selection_is_clamped_for_display() {
        let selection = Binding::new(42);
        let column = WheelColumn::new(selection.clone(), ["A", "B", "C"]);
        let buf = render(&column, 5);

        let rows = highlighted_rows(&buf);
        assert_eq!(rows.len(), 1);
        assert_eq!(row_string(&buf, rows[0]).trim(), "C");
        assert_eq!(selection.get(), 42);
    }

    #[test]
    fn test_wheel_area_respects_inset_and_clips() {
        let column = WheelColumn::new(Binding::new(30), 0..60)
            .height(7)
            .label_inset(2);
        let area = Rect::new(0, 0, 6, 20);
        let wheel = column.wheel_area(area);
        assert_eq!(wheel, Rect::new(0, 1, 6, 5));

        let mut buf = Buffer::empty(area);
        column.render(area, &mut buf);

        // Rows 28..=32 visible, nothing below the frame.
        assert_eq!(row_string(&buf, 1).trim(), "28");
        assert_eq!(row_string(&buf, 3).trim(), "30");
        assert_eq!(row_string(&buf, 5).trim(), "32");
        assert!((6..20).all(|y| row_string(&buf, y).trim().is_empty()));
        assert_eq!(row_string(&buf, 0).trim(), "");
    }

    #[test]
    fn test_scroll_offset_keeps_selection_centred() {
        let column = WheelColumn::new(Binding::new(0), 0..10);
        assert_eq!(column.scroll_offset(5), -2);

        column.selection().set(9);
        assert_eq!(column.scroll_offset(5), 7);

        column.selection().set(4);
        assert_eq!(column.scroll_offset(5), 2);

        let short = WheelColumn::new(Binding::new(2), 0..3);
        assert_eq!(short.scroll_offset(5), 0);
    }

    #[test]
    fn test_list_ends_pad_with_blank_rows() {
        let selection = Binding::new(0);
        let column = WheelColumn::new(selection.clone(), 0..10);

        let buf = render(&column, 4);
        assert_eq!(highlighted_rows(&buf), vec![3]);
        assert_eq!(row_string(&buf, 1).trim(), "");
        assert_eq!(row_string(&buf, 2).trim(), "");
        assert_eq!(row_string(&buf, 3).trim(), "0");
        assert_eq!(row_string(&buf, 5).trim(), "2");

        selection.set(9);
        let buf = render(&column, 4);
        assert_eq!(highlighted_rows(&buf), vec![3]);
        assert_eq!(row_string(&buf, 2).trim(), "8");
        assert_eq!(row_string(&buf, 3).trim(), "9");
        assert_eq!(row_string(&buf, 4).trim(), "");
    }

    #[test]
    fn test_rerender_is_idempotent() {
        let selection = Binding::new(1);
        let column = WheelColumn::new(selection.clone(), ["A", "B", "C"]).suffix("!");

        let first = render(&column, 8);
        let second = render(&column, 8);
        assert_eq!(first, second);
        assert_eq!(selection.get(), 1);
    }
}

use ratatui::{prelude::*, widgets::*};

use crate::view::VolumeLevel;

/// Renderable artifact for the volume view: a bordered gauge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VolumeWidget {
    level: VolumeLevel,
    focused: bool,
}

impl VolumeWidget {
    pub fn new(level: VolumeLevel) -> Self {
        Self {
            level,
            focused: false,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn level(&self) -> VolumeLevel {
        self.level
    }
}

impl Widget for VolumeWidget {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let border_style = if self.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let block = Block::bordered().title("Volume").border_style(border_style);
        let inner = block.inner(area);
        block.render(area, buf);

        let layout = Layout::new(
            Direction::Vertical,
            [
                Constraint::Length(1), // gauge
                Constraint::Length(1), // hints
                Constraint::Min(0),
            ],
        )
        .split(inner);

        Gauge::default()
            .gauge_style(Style::default().fg(Color::Cyan).bg(Color::Black))
            .ratio(f64::from(self.level.get()) / 100.0)
            .label(self.level.to_string())
            .render(layout[0], buf);

        Paragraph::new("←/→ step · ↑ full · ↓ mute")
            .style(Style::default().fg(Color::DarkGray))
            .render(layout[1], buf);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn buffer_text(buf: &Buffer) -> String {
        let mut out = String::new();
        for y in 0..buf.area.height {
            for x in 0..buf.area.width {
                out.push_str(buf[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn test_widget_carries_level() {
        let widget = VolumeWidget::new(VolumeLevel::new(70));
        assert_eq!(widget.level().get(), 70);
    }

    #[test]
    fn test_render_shows_title_and_label() {
        let area = Rect::new(0, 0, 30, 5);
        let mut buf = Buffer::empty(area);
        VolumeWidget::new(VolumeLevel::new(40)).render(area, &mut buf);

        let text = buffer_text(&buf);
        assert!(text.contains("Volume"));
        assert!(text.contains("40%"));
    }

    #[test]
    fn test_render_is_stable_for_same_level() {
        let area = Rect::new(0, 0, 30, 5);
        let mut first = Buffer::empty(area);
        let mut second = Buffer::empty(area);
        VolumeWidget::new(VolumeLevel::default()).render(area, &mut first);
        VolumeWidget::new(VolumeLevel::default()).render(area, &mut second);

        assert_eq!(buffer_text(&first), buffer_text(&second));
    }
}

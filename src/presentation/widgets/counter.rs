use ratatui::{prelude::*, widgets::*};

/// Renderable artifact for the counter view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterWidget {
    count: u32,
    focused: bool,
}

impl CounterWidget {
    pub fn new(count: u32) -> Self {
        Self {
            count,
            focused: false,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    /// Colour thresholds: quiet at zero, warning up to nine, alert above.
    fn count_style(&self) -> Style {
        match self.count {
            0 => Style::default().fg(Color::DarkGray),
            1..=9 => Style::default().fg(Color::Yellow),
            _ => Style::default().fg(Color::Red),
        }
    }
}

impl Widget for CounterWidget {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let border_style = if self.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let block = Block::bordered().title("Counter").border_style(border_style);
        let inner = block.inner(area);
        block.render(area, buf);

        let layout = Layout::new(
            Direction::Vertical,
            [
                Constraint::Length(1), // count
                Constraint::Length(1), // hints
                Constraint::Min(0),
            ],
        )
        .split(inner);

        Paragraph::new(self.count.to_string())
            .style(self.count_style().bold())
            .render(layout[0], buf);

        Paragraph::new("+ / - adjust")
            .style(Style::default().fg(Color::DarkGray))
            .render(layout[1], buf);
    }
}

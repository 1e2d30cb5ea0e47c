use chatmark_engine::{Block, Document, InlineNode};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block as Panel, Borders, Paragraph, Wrap},
};

const ACCENT: Color = Color::Cyan;

/// Converts a document into styled terminal text.
///
/// Headers and paragraphs are followed by an empty line; bullets stack.
pub fn document_text(doc: &Document) -> Text<'static> {
    let mut lines = Vec::new();

    for block in &doc.blocks {
        match block {
            Block::Header { level, content } => {
                let mut style = Style::default().fg(ACCENT).add_modifier(Modifier::BOLD);
                if *level == 1 {
                    style = style.add_modifier(Modifier::UNDERLINED);
                }
                lines.push(Line::from(inline_spans(content)).style(style));
                lines.push(Line::default());
            }
            Block::BulletItem { content } => {
                let mut spans = vec![Span::styled("• ", Style::default().fg(ACCENT))];
                spans.extend(inline_spans(content));
                lines.push(Line::from(spans));
            }
            Block::Paragraph { lines: paragraph } => {
                lines.extend(paragraph.iter().map(|line| Line::from(inline_spans(line))));
                lines.push(Line::default());
            }
            Block::Blank => lines.push(Line::default()),
        }
    }

    Text::from(lines)
}

fn inline_spans(nodes: &[InlineNode]) -> Vec<Span<'static>> {
    let mut spans = Vec::with_capacity(nodes.len());
    for node in nodes {
        match node {
            InlineNode::PlainText(text) => spans.push(Span::raw(text.clone())),
            InlineNode::Bold(text) => spans.push(Span::styled(
                text.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            InlineNode::Link { text, url } => {
                spans.push(Span::styled(
                    node.display_text().to_string(),
                    Style::default().fg(ACCENT).add_modifier(Modifier::UNDERLINED),
                ));
                // Terminals cannot follow the link, so show where it goes.
                if !text.is_empty() {
                    spans.push(Span::styled(
                        format!(" ({url})"),
                        Style::default().fg(Color::DarkGray),
                    ));
                }
            }
        }
    }
    spans
}

/// Scroll state for the interactive viewer.
pub struct Viewer {
    pub title: String,
    pub text: Text<'static>,
    pub scroll: u16,
}

impl Viewer {
    pub fn new(title: String, doc: &Document) -> Self {
        Self {
            title,
            text: document_text(doc),
            scroll: 0,
        }
    }

    fn max_scroll(&self) -> u16 {
        u16::try_from(self.text.lines.len().saturating_sub(1)).unwrap_or(u16::MAX)
    }

    pub fn scroll_down(&mut self) {
        self.scroll = self.scroll.saturating_add(1).min(self.max_scroll());
    }

    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }

    pub fn top(&mut self) {
        self.scroll = 0;
    }

    pub fn bottom(&mut self) {
        self.scroll = self.max_scroll();
    }
}

pub fn ui(f: &mut Frame, viewer: &Viewer) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([Constraint::Min(0), Constraint::Length(1)].as_ref())
        .split(f.area());

    let content = Paragraph::new(viewer.text.clone())
        .block(
            Panel::default()
                .borders(Borders::ALL)
                .title(viewer.title.as_str()),
        )
        .wrap(Wrap { trim: false })
        .scroll((viewer.scroll, 0));
    f.render_widget(content, chunks[0]);

    let help = Line::from(vec![
        Span::raw("q: Quit | "),
        Span::raw("↑/k: Up | "),
        Span::raw("↓/j: Down | "),
        Span::raw("g/G: Top/Bottom"),
    ]);
    f.render_widget(Paragraph::new(help), chunks[1]);
}

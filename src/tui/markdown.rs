//! Markdown → ratatui `Text` renderer for slide bodies.
//!
//! Thin wrapper around `pulldown_cmark` that converts markdown events into
//! styled `Line`/`Span` values. Headings, bold, italic, inline code, fenced
//! code blocks (with syntect highlighting), lists, task lists, blockquotes,
//! links and tables.
//!
//! Headings are drawn without their `#` markers: on a slide the title is
//! set apart by color and weight, not by syntax.

use std::sync::LazyLock;

use pulldown_cmark::{CodeBlockKind, CowStr, Event, HeadingLevel, Options, Parser, Tag, TagEnd};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use syntect::easy::HighlightLines;
use syntect::highlighting::ThemeSet;
use syntect::parsing::SyntaxSet;
use syntect::util::LinesWithEndings;
use unicode_width::UnicodeWidthStr;

use crate::tui::theme::Palette;

static SYNTAX_SET: LazyLock<SyntaxSet> = LazyLock::new(SyntaxSet::load_defaults_newlines);
static THEME_SET: LazyLock<ThemeSet> = LazyLock::new(ThemeSet::load_defaults);

/// Parse markdown content into styled `Text` using the given palette.
///
/// Returns owned text (`'static`) so callers aren't constrained by input lifetime.
pub fn render(content: &str, palette: &Palette) -> Text<'static> {
    let mut opts = Options::empty();
    opts.insert(Options::ENABLE_STRIKETHROUGH);
    opts.insert(Options::ENABLE_TASKLISTS);
    opts.insert(Options::ENABLE_TABLES);

    let mut w = Writer::new(*palette);
    for event in Parser::new_ext(content, opts) {
        w.handle(event);
    }
    w.text
}

// ── Writer ──────────────────────────────────────────────────────────────────

/// Rows of cells of spans, plus whether the row is the header.
struct Table {
    rows: Vec<(bool, Vec<Vec<Span<'static>>>)>,
    in_head: bool,
}

struct Writer {
    text: Text<'static>,
    palette: Palette,
    /// Inline style stack (bold, italic, heading text, etc.). Styles compose
    /// via `patch` so nested bold+italic works.
    styles: Vec<Style>,
    /// Per-line prefix spans (blockquote `│`).
    line_prefixes: Vec<Span<'static>>,
    /// List nesting: None = unordered, Some(n) = ordered at index n.
    list_indices: Vec<Option<u64>>,
    /// Active syntax highlighter for fenced code blocks.
    highlighter: Option<HighlightLines<'static>>,
    /// True when inside a fenced code block without syntax highlighting.
    in_plain_code: bool,
    /// Stored link URL, appended after the link text closes.
    link_url: Option<String>,
    /// Table being collected; emitted as aligned lines when it closes.
    table: Option<Table>,
    /// Whether the next block element should be preceded by a blank line.
    needs_newline: bool,
}

impl Writer {
    fn new(palette: Palette) -> Self {
        Self {
            text: Text::default(),
            palette,
            styles: vec![],
            line_prefixes: vec![],
            list_indices: vec![],
            highlighter: None,
            in_plain_code: false,
            link_url: None,
            table: None,
            needs_newline: false,
        }
    }

    // ── Style helpers ───────────────────────────────────────────────────

    /// Current effective style: top of stack, or base text color.
    fn style(&self) -> Style {
        self.styles
            .last()
            .copied()
            .unwrap_or_else(|| Style::default().fg(self.palette.text))
    }

    /// Push a style that composes with the current one (inherits parent modifiers).
    fn push_style(&mut self, overlay: Style) {
        self.styles.push(self.style().patch(overlay));
    }

    fn pop_style(&mut self) {
        self.styles.pop();
    }

    fn muted(&self) -> Style {
        Style::default().fg(self.palette.muted)
    }

    // ── Line/span helpers ───────────────────────────────────────────────

    fn push_line(&mut self, line: Line<'static>) {
        let mut out = line;
        for pfx in self.line_prefixes.iter().rev().cloned() {
            out.spans.insert(0, pfx);
        }
        self.text.lines.push(out);
    }

    fn push_span(&mut self, span: Span<'static>) {
        if let Some(table) = self.table.as_mut() {
            if let Some(cell) = table.rows.last_mut().and_then(|(_, cells)| cells.last_mut()) {
                cell.push(span);
            }
            return;
        }
        if let Some(line) = self.text.lines.last_mut() {
            line.push_span(span);
        } else {
            self.push_line(Line::from(vec![span]));
        }
    }

    fn blank_line_if_needed(&mut self) {
        if self.needs_newline {
            self.push_line(Line::default());
            self.needs_newline = false;
        }
    }

    // ── Event dispatch ──────────────────────────────────────────────────

    fn handle(&mut self, event: Event<'_>) {
        match event {
            Event::Start(tag) => self.open(tag),
            Event::End(tag) => self.close(tag),
            Event::Text(t) => self.text(t),
            Event::Code(c) => self.inline_code(c),
            Event::SoftBreak => {
                // Slides keep the author's line breaks
                if self.table.is_some() {
                    self.push_span(Span::raw(" "));
                } else {
                    self.push_line(Line::default());
                }
            }
            Event::HardBreak => self.push_line(Line::default()),
            Event::Rule => {
                self.blank_line_if_needed();
                self.push_line(Line::from(Span::styled("─".repeat(40), self.muted())));
                self.needs_newline = true;
            }
            Event::TaskListMarker(checked) => {
                let (marker, style) = if checked {
                    ("✔ ", Style::default().fg(self.palette.accent))
                } else {
                    ("○ ", self.muted())
                };
                self.push_span(Span::styled(marker, style));
            }
            _ => {} // HTML, footnotes, math: skip
        }
    }

    fn open(&mut self, tag: Tag<'_>) {
        match tag {
            // ── Block elements ──────────────────────────────────────────
            Tag::Paragraph => {
                self.blank_line_if_needed();
                self.push_line(Line::default());
            }
            Tag::Heading { level, .. } => {
                self.blank_line_if_needed();
                self.push_line(Line::default());
                let hs = heading_style(&self.palette, level);
                self.push_style(hs);
            }
            Tag::BlockQuote(_) => {
                self.blank_line_if_needed();
                self.line_prefixes
                    .push(Span::styled("┃ ", Style::default().fg(self.palette.accent)));
                self.push_style(Style::default().add_modifier(Modifier::ITALIC));
            }
            Tag::CodeBlock(kind) => {
                if !self.text.lines.is_empty() {
                    self.push_line(Line::default());
                }
                let lang = match &kind {
                    CodeBlockKind::Fenced(l) => l.as_ref(),
                    CodeBlockKind::Indented => "",
                };

                // Top border: ╭── lang  or just ╭──
                let bs = self.muted();
                let top = if lang.is_empty() {
                    Line::from(Span::styled("╭──", bs))
                } else {
                    Line::from(vec![
                        Span::styled("╭── ", bs),
                        Span::styled(lang.to_owned(), bs.add_modifier(Modifier::BOLD)),
                        Span::styled(" ──", bs),
                    ])
                };
                self.push_line(top);
                self.line_prefixes.push(Span::styled("│ ", bs));

                if !lang.is_empty()
                    && let Some(syn) = SYNTAX_SET.find_syntax_by_token(lang)
                {
                    let theme = &THEME_SET.themes["base16-ocean.dark"];
                    self.highlighter = Some(HighlightLines::new(syn, theme));
                }
                if self.highlighter.is_none() {
                    self.in_plain_code = true;
                }
            }
            Tag::List(start) => {
                if self.list_indices.is_empty() {
                    self.blank_line_if_needed();
                }
                self.list_indices.push(start);
            }
            Tag::Item => {
                self.push_line(Line::default());
                let depth = self.list_indices.len().saturating_sub(1);
                let indent = "  ".repeat(depth);
                let accent = Style::default().fg(self.palette.accent);
                if let Some(idx) = self.list_indices.last_mut() {
                    let marker = match idx {
                        None => format!("{indent}• "),
                        Some(n) => {
                            let s = format!("{indent}{:02}  ", n);
                            *n += 1;
                            s
                        }
                    };
                    self.push_span(Span::styled(marker, accent));
                }
            }
            Tag::Table(_) => {
                self.blank_line_if_needed();
                self.table = Some(Table {
                    rows: Vec::new(),
                    in_head: false,
                });
            }
            Tag::TableHead => {
                if let Some(table) = self.table.as_mut() {
                    table.in_head = true;
                    table.rows.push((true, Vec::new()));
                }
                self.push_style(
                    Style::default()
                        .fg(self.palette.accent)
                        .add_modifier(Modifier::BOLD),
                );
            }
            Tag::TableRow => {
                if let Some(table) = self.table.as_mut() {
                    table.rows.push((false, Vec::new()));
                }
            }
            Tag::TableCell => {
                if let Some((_, cells)) = self.table.as_mut().and_then(|t| t.rows.last_mut()) {
                    cells.push(Vec::new());
                }
            }

            // ── Inline elements ─────────────────────────────────────────
            Tag::Emphasis => self.push_style(Style::default().add_modifier(Modifier::ITALIC)),
            Tag::Strong => self.push_style(Style::default().add_modifier(Modifier::BOLD)),
            Tag::Strikethrough => {
                self.push_style(Style::default().add_modifier(Modifier::CROSSED_OUT))
            }
            Tag::Link { dest_url, .. } => {
                self.link_url = Some(dest_url.to_string());
                self.push_style(
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::UNDERLINED),
                );
            }
            _ => {} // Images, definitions: skip
        }
    }

    fn close(&mut self, tag: TagEnd) {
        match tag {
            TagEnd::Paragraph => self.needs_newline = true,
            TagEnd::Heading(_) => {
                self.pop_style();
                self.needs_newline = true;
            }
            TagEnd::BlockQuote(_) => {
                self.line_prefixes.pop();
                self.pop_style();
                self.needs_newline = true;
            }
            TagEnd::CodeBlock => {
                self.highlighter = None;
                self.in_plain_code = false;
                self.line_prefixes.pop(); // remove │ prefix before bottom border
                self.push_line(Line::from(Span::styled("╰──", self.muted())));
                self.needs_newline = true;
            }
            TagEnd::List(_) => {
                self.list_indices.pop();
                self.needs_newline = true;
            }
            TagEnd::Item => {}
            TagEnd::TableHead => {
                if let Some(table) = self.table.as_mut() {
                    table.in_head = false;
                }
                self.pop_style();
            }
            TagEnd::Table => {
                if let Some(table) = self.table.take() {
                    self.emit_table(table);
                }
                self.needs_newline = true;
            }
            TagEnd::Emphasis | TagEnd::Strong | TagEnd::Strikethrough => self.pop_style(),
            TagEnd::Link => {
                self.pop_style();
                if let Some(url) = self.link_url.take() {
                    let style = Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::UNDERLINED);
                    self.push_span(Span::raw(" ("));
                    self.push_span(Span::styled(url, style));
                    self.push_span(Span::raw(")"));
                }
            }
            _ => {}
        }
    }

    /// Lay out collected cells in padded columns separated by `│`.
    fn emit_table(&mut self, table: Table) {
        let columns = table.rows.iter().map(|(_, cells)| cells.len()).max().unwrap_or(0);
        let mut widths = vec![0usize; columns];
        for (_, cells) in &table.rows {
            for (col, cell) in cells.iter().enumerate() {
                widths[col] = widths[col].max(cell_width(cell));
            }
        }

        let sep = self.muted();
        for (is_header, cells) in table.rows {
            let mut spans = Vec::new();
            for (col, cell) in cells.into_iter().enumerate() {
                if col > 0 {
                    spans.push(Span::styled(" │ ", sep));
                }
                let pad = widths[col].saturating_sub(cell_width(&cell));
                spans.extend(cell);
                if col + 1 < columns {
                    spans.push(Span::raw(" ".repeat(pad)));
                }
            }
            self.push_line(Line::from(spans));

            if is_header {
                let rule = widths
                    .iter()
                    .map(|w| "─".repeat(*w))
                    .collect::<Vec<_>>()
                    .join("─┼─");
                self.push_line(Line::from(Span::styled(rule, sep)));
            }
        }
    }

    // ── Content handlers ────────────────────────────────────────────────

    fn text(&mut self, cow: CowStr<'_>) {
        // Expand tabs → 4 spaces (ratatui renders \t as zero-width)
        let raw = cow.to_string();
        let text = if raw.contains('\t') {
            raw.replace('\t', "    ")
        } else {
            raw
        };

        // Syntax-highlighted code block: take highlighter out to avoid
        // double-mutable-borrow (highlight_line borrows it, push_line borrows self)
        if let Some(mut hl) = self.highlighter.take() {
            for line in LinesWithEndings::from(text.as_str()) {
                if let Ok(ranges) = hl.highlight_line(line, &SYNTAX_SET) {
                    let spans: Vec<Span<'static>> = ranges
                        .into_iter()
                        .filter_map(|(hl_style, frag)| {
                            let content = frag.trim_end_matches('\n').replace('\t', "    ");
                            if content.is_empty() {
                                return None;
                            }
                            let fg = Color::Rgb(
                                hl_style.foreground.r,
                                hl_style.foreground.g,
                                hl_style.foreground.b,
                            );
                            Some(Span::styled(content, Style::default().fg(fg)))
                        })
                        .collect();
                    if !spans.is_empty() {
                        self.push_line(Line::from(spans));
                    }
                }
            }
            self.highlighter = Some(hl);
            return;
        }

        // Plain code block (no highlighting available)
        if self.in_plain_code {
            let code_style = Style::default().fg(self.palette.text);
            for line in text.lines() {
                self.push_line(Line::from(Span::styled(line.to_owned(), code_style)));
            }
            return;
        }

        // Normal text inherits current style (heading, bold, etc.)
        let style = self.style();
        self.push_span(Span::styled(text, style));
    }

    fn inline_code(&mut self, cow: CowStr<'_>) {
        let style = Style::default()
            .fg(self.palette.accent)
            .bg(self.palette.surface);
        self.push_span(Span::styled(format!(" {} ", cow), style));
    }
}

// ── Helpers ─────────────────────────────────────────────────────────────────

fn cell_width(cell: &[Span<'_>]) -> usize {
    cell.iter().map(|s| s.content.width()).sum()
}

fn heading_style(palette: &Palette, level: HeadingLevel) -> Style {
    match level {
        HeadingLevel::H1 => Style::default()
            .fg(palette.accent)
            .add_modifier(Modifier::BOLD),
        HeadingLevel::H2 => Style::default()
            .fg(palette.text)
            .add_modifier(Modifier::BOLD),
        _ => Style::default()
            .fg(palette.text)
            .add_modifier(Modifier::BOLD | Modifier::ITALIC),
    }
}

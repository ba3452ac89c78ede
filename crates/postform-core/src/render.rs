//! Markdown preview rendering.
//!
//! Parsing is delegated to `markdown-weaver`; this module only walks the
//! event stream and writes HTML. Raw HTML in the source is escaped rather
//! than passed through, and links with a script-capable scheme lose their
//! destination.

use markdown_weaver::{Alignment, CodeBlockKind, CowStr, Event, Options, Parser, Tag, TagEnd};
use markdown_weaver_escape::{
    FmtWriter, StrWrite, escape_href, escape_html, escape_html_body_text,
};

/// Parser options for draft previews.
pub fn preview_md_options() -> Options {
    Options::ENABLE_TABLES
        | Options::ENABLE_GFM
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS
}

/// Render markdown `content` to an HTML fragment.
pub fn render_markdown(content: &str) -> String {
    let mut html = String::with_capacity(content.len() * 3 / 2);
    let parser = Parser::new_ext(content, preview_md_options());
    if let Err(e) = PreviewWriter::new(parser, FmtWriter(&mut html)).run() {
        tracing::error!("markdown preview render failed: {}", e);
    }
    html
}

enum TableState {
    Head,
    Body,
}

struct PreviewWriter<'a, I, W> {
    iter: I,
    writer: W,
    /// Whether or not the last write wrote a newline.
    end_newline: bool,
    /// Inside a metadata or weaver block, whose text is not shown.
    table_state: TableState,
    table_alignments: Vec<Alignment>,
    table_cell_index: usize,
    _marker: std::marker::PhantomData<&'a ()>,
}

impl<'a, I, W> PreviewWriter<'a, I, W>
where
    I: Iterator<Item = Event<'a>>,
    W: StrWrite,
{
    fn new(iter: I, writer: W) -> Self {
        Self {
            iter,
            writer,
            end_newline: true,
            table_state: TableState::Head,
            table_alignments: vec![],
            table_cell_index: 0,
            _marker: std::marker::PhantomData,
        }
    }

    fn write(&mut self, s: &str) -> Result<(), W::Error> {
        self.writer.write_str(s)?;
        if !s.is_empty() {
            self.end_newline = s.ends_with('\n');
        }
        Ok(())
    }

    /// Writes `s` on a fresh line.
    fn write_block(&mut self, s: &str) -> Result<(), W::Error> {
        if !self.end_newline {
            self.write("\n")?;
        }
        self.write(s)
    }

    fn run(mut self) -> Result<(), W::Error> {
        while let Some(event) = self.iter.next() {
            match event {
                Event::Start(tag) => self.start_tag(tag)?,
                Event::End(tag) => self.end_tag(tag)?,
                Event::Text(text) => {
                    escape_html_body_text(&mut self.writer, &text)?;
                    self.end_newline = text.ends_with('\n');
                }
                Event::Code(text) => {
                    self.write("<code>")?;
                    escape_html_body_text(&mut self.writer, &text)?;
                    self.write("</code>")?;
                }
                Event::Html(html) | Event::InlineHtml(html) => {
                    escape_html_body_text(&mut self.writer, &html)?;
                    self.end_newline = html.ends_with('\n');
                }
                Event::SoftBreak => self.write("\n")?,
                Event::HardBreak => self.write("<br />\n")?,
                Event::Rule => self.write_block("<hr />\n")?,
                Event::TaskListMarker(true) => {
                    self.write("<input disabled=\"\" type=\"checkbox\" checked=\"\"/>\n")?;
                }
                Event::TaskListMarker(false) => {
                    self.write("<input disabled=\"\" type=\"checkbox\"/>\n")?;
                }
                _ => {}
            }
        }
        Ok(())
    }

    fn start_tag(&mut self, tag: Tag<'a>) -> Result<(), W::Error> {
        match tag {
            Tag::Paragraph => self.write_block("<p>"),
            Tag::Heading { level, .. } => {
                self.write_block("<")?;
                self.write(&level.to_string())?;
                self.write(">")
            }
            Tag::BlockQuote(_) => self.write_block("<blockquote>\n"),
            Tag::CodeBlock(kind) => {
                let lang = match &kind {
                    CodeBlockKind::Fenced(info) => info.split(' ').next().unwrap_or(""),
                    CodeBlockKind::Indented => "",
                };
                if lang.is_empty() {
                    self.write_block("<pre><code>")
                } else {
                    self.write_block("<pre><code class=\"language-")?;
                    escape_html(&mut self.writer, lang)?;
                    self.write("\">")
                }
            }
            Tag::List(Some(1)) => self.write_block("<ol>\n"),
            Tag::List(Some(start)) => {
                self.write_block("<ol start=\"")?;
                self.write(&start.to_string())?;
                self.write("\">\n")
            }
            Tag::List(None) => self.write_block("<ul>\n"),
            Tag::Item => self.write_block("<li>"),
            Tag::Emphasis => self.write("<em>"),
            Tag::Strong => self.write("<strong>"),
            Tag::Strikethrough => self.write("<del>"),
            Tag::Link {
                dest_url, title, ..
            } => {
                self.write("<a href=\"")?;
                if is_safe_href(&dest_url) {
                    escape_href(&mut self.writer, &dest_url)?;
                }
                self.write_title(&title)?;
                self.write("\">")
            }
            Tag::Image {
                dest_url, title, ..
            } => {
                self.write("<img src=\"")?;
                if is_safe_href(&dest_url) {
                    escape_href(&mut self.writer, &dest_url)?;
                }
                self.write("\" alt=\"")?;
                self.raw_text()?;
                self.write_title(&title)?;
                self.write("\" />")
            }
            Tag::Table(alignments) => {
                self.table_alignments = alignments;
                self.write_block("<table>")
            }
            Tag::TableHead => {
                self.table_state = TableState::Head;
                self.table_cell_index = 0;
                self.write("<thead><tr>")
            }
            Tag::TableRow => {
                self.table_cell_index = 0;
                self.write("<tr>")
            }
            Tag::TableCell => {
                match self.table_state {
                    TableState::Head => self.write("<th")?,
                    TableState::Body => self.write("<td")?,
                }
                match self.table_alignments.get(self.table_cell_index) {
                    Some(&Alignment::Left) => self.write(" style=\"text-align: left\">"),
                    Some(&Alignment::Center) => self.write(" style=\"text-align: center\">"),
                    Some(&Alignment::Right) => self.write(" style=\"text-align: right\">"),
                    _ => self.write(">"),
                }
            }
            _ => Ok(()),
        }
    }

    fn end_tag(&mut self, tag: TagEnd) -> Result<(), W::Error> {
        match tag {
            TagEnd::Paragraph => self.write("</p>\n"),
            TagEnd::Heading(level) => {
                self.write("</")?;
                self.write(&level.to_string())?;
                self.write(">\n")
            }
            TagEnd::BlockQuote(_) => self.write("</blockquote>\n"),
            TagEnd::CodeBlock => self.write("</code></pre>\n"),
            TagEnd::List(true) => self.write("</ol>\n"),
            TagEnd::List(false) => self.write("</ul>\n"),
            TagEnd::Item => self.write("</li>\n"),
            TagEnd::Emphasis => self.write("</em>"),
            TagEnd::Strong => self.write("</strong>"),
            TagEnd::Strikethrough => self.write("</del>"),
            TagEnd::Link => self.write("</a>"),
            TagEnd::Table => self.write("</tbody></table>\n"),
            TagEnd::TableHead => {
                self.table_state = TableState::Body;
                self.write("</tr></thead><tbody>\n")
            }
            TagEnd::TableRow => self.write("</tr>\n"),
            TagEnd::TableCell => {
                match self.table_state {
                    TableState::Head => self.write("</th>")?,
                    TableState::Body => self.write("</td>")?,
                }
                self.table_cell_index += 1;
                Ok(())
            }
            _ => Ok(()),
        }
    }

    fn write_title(&mut self, title: &CowStr<'a>) -> Result<(), W::Error> {
        if !title.is_empty() {
            self.write("\" title=\"")?;
            escape_html(&mut self.writer, title)?;
        }
        Ok(())
    }

    /// Write the plain text of the current element, consuming its end tag.
    fn raw_text(&mut self) -> Result<(), W::Error> {
        let mut nest = 0;
        while let Some(event) = self.iter.next() {
            match event {
                Event::Start(_) => nest += 1,
                Event::End(_) => {
                    if nest == 0 {
                        break;
                    }
                    nest -= 1;
                }
                Event::Text(text) | Event::Code(text) | Event::InlineHtml(text) => {
                    escape_html(&mut self.writer, &text)?;
                    self.end_newline = text.ends_with('\n');
                }
                Event::SoftBreak | Event::HardBreak | Event::Rule => self.write(" ")?,
                _ => {}
            }
        }
        Ok(())
    }
}

/// Relative links and http(s)/mailto destinations are kept, anything with
/// another scheme is dropped.
fn is_safe_href(dest: &str) -> bool {
    let scheme_end = dest.find(':');
    let path_start = dest.find(['/', '?', '#']);
    match (scheme_end, path_start) {
        (None, _) => true,
        (Some(colon), Some(path)) if path < colon => true,
        (Some(colon), _) => {
            let scheme = dest[..colon].to_ascii_lowercase();
            matches!(scheme.as_str(), "http" | "https" | "mailto")
        }
    }
}
